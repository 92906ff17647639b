use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use vocab_core::Randomness;
use vocab_core::model::{DayLabel, QuizSettings, WordBank, WordEntry};

use super::service::QuizSession;
use crate::error::SessionError;

/// A day as offered on the start screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayOverview {
    pub index: usize,
    pub label: DayLabel,
    pub word_count: usize,
    pub playable: bool,
}

/// Starts quiz sessions from a loaded word bank.
///
/// Every session gets its own random stream; with a seeded source the streams
/// are numbered so a run is reproducible end to end.
#[derive(Clone)]
pub struct QuizLoopService {
    settings: QuizSettings,
    randomness: Randomness,
    started: Arc<AtomicU64>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(settings: QuizSettings, randomness: Randomness) -> Self {
        Self {
            settings,
            randomness,
            started: Arc::new(AtomicU64::new(0)),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    /// Start a new session for `day`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownDay` if the bank has no such day and
    /// `SessionError::InsufficientWords` if it is too small to quiz on.
    pub fn start(&self, bank: &WordBank, day: &DayLabel) -> Result<QuizSession, SessionError> {
        let Some(words) = bank.words(day) else {
            tracing::warn!(day = %day, "requested day is not in the word bank");
            return Err(SessionError::UnknownDay { day: day.clone() });
        };
        self.start_words(day, words)
    }

    /// Start a new session for the day at `index` in bank order.
    ///
    /// Positions address days whose labels cannot travel in a URL segment, and
    /// tell apart days that repeat a label.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoDayAtIndex` if `index` is past the last day and
    /// `SessionError::InsufficientWords` if the day is too small to quiz on.
    pub fn start_at(&self, bank: &WordBank, index: usize) -> Result<QuizSession, SessionError> {
        let Some(day) = bank.days().get(index) else {
            tracing::warn!(index, days = bank.len(), "requested day position is out of range");
            return Err(SessionError::NoDayAtIndex { index });
        };
        self.start_words(day.label(), day.words())
    }

    fn start_words(
        &self,
        day: &DayLabel,
        words: &[WordEntry],
    ) -> Result<QuizSession, SessionError> {
        let stream = self.started.fetch_add(1, Ordering::Relaxed);
        QuizSession::start(
            day.clone(),
            words,
            self.settings,
            self.randomness.rng_for(stream),
        )
        .inspect_err(|err| tracing::warn!(day = %day, %err, "quiz session not started"))
    }

    /// List every day with its size and whether it can be played.
    #[must_use]
    pub fn day_overviews(&self, bank: &WordBank) -> Vec<DayOverview> {
        let required = self.settings.min_words_per_day();
        bank.days()
            .iter()
            .enumerate()
            .map(|(index, day)| DayOverview {
                index,
                label: day.label().clone(),
                word_count: day.len(),
                playable: day.len() >= required,
            })
            .collect()
    }
}
