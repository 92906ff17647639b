use std::fmt;

use crate::model::WordEntry;

/// Outcome of answering one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerResult {
    Correct,
    Incorrect { correct_entry: WordEntry },
}

impl AnswerResult {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerResult::Correct)
    }

    /// The entry that should have been picked, when the answer was wrong.
    #[must_use]
    pub fn correct_entry(&self) -> Option<&WordEntry> {
        match self {
            AnswerResult::Correct => None,
            AnswerResult::Incorrect { correct_entry } => Some(correct_entry),
        }
    }
}

/// Final tally of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    pub score: u32,
    pub total: u32,
}

impl fmt::Display for FinalScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.score, self.total)
    }
}
