use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("questions per game must be > 0")]
    InvalidQuestionsPerGame,

    #[error("minimum words per day must be at least 2")]
    InvalidMinWordsPerDay,

    #[error("a question needs at least 2 choices")]
    InvalidMaxChoices,
}

/// Quiz tuning knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    questions_per_game: usize,
    min_words_per_day: usize,
    max_choices: usize,
}

impl QuizSettings {
    pub const DEFAULT_QUESTIONS_PER_GAME: usize = 10;
    pub const DEFAULT_MIN_WORDS_PER_DAY: usize = 4;
    pub const DEFAULT_MAX_CHOICES: usize = 5;

    /// Creates custom quiz settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if a value is out of range.
    pub fn new(
        questions_per_game: usize,
        min_words_per_day: usize,
        max_choices: usize,
    ) -> Result<Self, SettingsError> {
        if questions_per_game == 0 {
            return Err(SettingsError::InvalidQuestionsPerGame);
        }
        if min_words_per_day < 2 {
            return Err(SettingsError::InvalidMinWordsPerDay);
        }
        if max_choices < 2 {
            return Err(SettingsError::InvalidMaxChoices);
        }
        Ok(Self {
            questions_per_game,
            min_words_per_day,
            max_choices,
        })
    }

    /// Ten questions, at least four words per day, up to five choices.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            questions_per_game: Self::DEFAULT_QUESTIONS_PER_GAME,
            min_words_per_day: Self::DEFAULT_MIN_WORDS_PER_DAY,
            max_choices: Self::DEFAULT_MAX_CHOICES,
        }
    }

    /// Same settings with a different session length.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidQuestionsPerGame` for zero.
    pub fn with_questions_per_game(self, questions_per_game: usize) -> Result<Self, SettingsError> {
        Self::new(questions_per_game, self.min_words_per_day, self.max_choices)
    }

    #[must_use]
    pub fn questions_per_game(&self) -> usize {
        self.questions_per_game
    }

    #[must_use]
    pub fn min_words_per_day(&self) -> usize {
        self.min_words_per_day
    }

    #[must_use]
    pub fn max_choices(&self) -> usize {
        self.max_choices
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self::standard()
    }
}
