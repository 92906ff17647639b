use dioxus::prelude::*;
use services::{SessionError, WordBankServiceError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    WordsUnavailable,
    NoDays,
    UnknownDay,
    NotEnoughWords { required: usize },
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> String {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.".to_string(),
            ViewError::WordsUnavailable => {
                "Could not load the word data. Please check the file.".to_string()
            }
            ViewError::NoDays => "There are no words to study. Please check the JSON file.".to_string(),
            ViewError::UnknownDay => "The selected day is not in the word list.".to_string(),
            ViewError::NotEnoughWords { required } => format!(
                "The selected day does not have enough words (at least {required} required)."
            ),
        }
    }

    /// Whether picking a different day can clear this error.
    #[must_use]
    pub fn is_day_selection(self) -> bool {
        matches!(self, ViewError::UnknownDay | ViewError::NotEnoughWords { .. })
    }
}

impl From<&WordBankServiceError> for ViewError {
    fn from(err: &WordBankServiceError) -> Self {
        if err.is_empty_bank() {
            ViewError::NoDays
        } else {
            ViewError::WordsUnavailable
        }
    }
}

impl From<&SessionError> for ViewError {
    fn from(err: &SessionError) -> Self {
        match err {
            SessionError::UnknownDay { .. } | SessionError::NoDayAtIndex { .. } => {
                ViewError::UnknownDay
            }
            SessionError::InsufficientWords { required, .. } => ViewError::NotEnoughWords {
                required: *required,
            },
            _ => ViewError::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
