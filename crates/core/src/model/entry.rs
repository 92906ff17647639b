use serde::{Deserialize, Serialize};

/// A vocabulary word paired with the meaning shown as the prompt.
///
/// Two entries refer to the same word when their `word` strings are equal;
/// the meaning does not take part in identity checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordEntry {
    word: String,
    english_meaning: String,
}

impl WordEntry {
    #[must_use]
    pub fn new(word: impl Into<String>, english_meaning: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            english_meaning: english_meaning.into(),
        }
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn english_meaning(&self) -> &str {
        &self.english_meaning
    }

    /// Returns true when both entries carry the same `word`.
    #[must_use]
    pub fn same_word(&self, other: &WordEntry) -> bool {
        self.word == other.word
    }
}
