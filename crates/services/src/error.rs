//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::LoadError;
use vocab_core::model::DayLabel;

/// Errors emitted by quiz sessions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("day {day} is not in the word bank")]
    UnknownDay { day: DayLabel },

    #[error("there is no day at position {index} in the word bank")]
    NoDayAtIndex { index: usize },

    #[error("day {day} has {available} words; at least {required} are required")]
    InsufficientWords {
        day: DayLabel,
        available: usize,
        required: usize,
    },

    #[error("cannot {operation}: {reason}")]
    InvalidState {
        operation: &'static str,
        reason: &'static str,
    },
}

impl SessionError {
    /// True for errors a user can fix by picking another day.
    #[must_use]
    pub fn is_day_selection(&self) -> bool {
        matches!(
            self,
            SessionError::UnknownDay { .. }
                | SessionError::NoDayAtIndex { .. }
                | SessionError::InsufficientWords { .. }
        )
    }
}

/// Errors emitted by `WordBankService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WordBankServiceError {
    #[error(transparent)]
    Load(#[from] LoadError),
}

impl WordBankServiceError {
    /// True when the source listed no days at all.
    #[must_use]
    pub fn is_empty_bank(&self) -> bool {
        matches!(self, WordBankServiceError::Load(LoadError::EmptyBank))
    }
}
