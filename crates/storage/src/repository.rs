use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use vocab_core::model::{WordBank, WordBankError};

use crate::http::HttpSource;
use crate::json::JsonFileSource;

/// Errors surfaced while loading a word bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("word data is unreachable: {0}")]
    Unreachable(String),

    #[error("word data request failed with status {0}")]
    HttpStatus(u16),

    #[error("word data is malformed: {0}")]
    Malformed(String),

    #[error("word data contains no days")]
    EmptyBank,
}

impl From<WordBankError> for LoadError {
    fn from(err: WordBankError) -> Self {
        match err {
            WordBankError::Empty => LoadError::EmptyBank,
            other => LoadError::Malformed(other.to_string()),
        }
    }
}

/// Contract for anything that can produce a word bank.
///
/// A load is a single read with no retries; callers decide what to do with a
/// failure.
#[async_trait]
pub trait WordBankSource: Send + Sync {
    /// Read and validate the whole bank.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the source cannot be read, is not shaped like a
    /// day → words mapping, or lists no days.
    async fn load(&self) -> Result<WordBank, LoadError>;

    /// Human-readable location, used in logs and messages.
    fn describe(&self) -> String;
}

/// Source that hands out a bank that is already in memory.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    bank: WordBank,
}

impl InMemorySource {
    #[must_use]
    pub fn new(bank: WordBank) -> Self {
        Self { bank }
    }
}

#[async_trait]
impl WordBankSource for InMemorySource {
    async fn load(&self) -> Result<WordBank, LoadError> {
        Ok(self.bank.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} days)", self.bank.len())
    }
}

/// Bundles the word bank source behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub word_bank: Arc<dyn WordBankSource>,
}

impl Storage {
    #[must_use]
    pub fn in_memory(bank: WordBank) -> Self {
        Self {
            word_bank: Arc::new(InMemorySource::new(bank)),
        }
    }

    #[must_use]
    pub fn json_file(path: impl Into<PathBuf>) -> Self {
        Self {
            word_bank: Arc::new(JsonFileSource::new(path)),
        }
    }

    #[must_use]
    pub fn http(url: impl Into<String>) -> Self {
        Self {
            word_bank: Arc::new(HttpSource::new(url)),
        }
    }

    /// Pick a backend from a user-supplied location: `http(s)://` URLs are
    /// fetched, anything else is read as a file path.
    #[must_use]
    pub fn from_location(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::http(trimmed)
        } else {
            Self::json_file(trimmed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocab_core::model::{DayLabel, DayWords, WordEntry};

    fn build_bank() -> WordBank {
        WordBank::new(vec![DayWords::new(
            DayLabel::new("Day1"),
            vec![WordEntry::new("apple", "a fruit")],
        )])
        .unwrap()
    }

    #[tokio::test]
    async fn in_memory_source_returns_bank() {
        let storage = Storage::in_memory(build_bank());
        let bank = storage.word_bank.load().await.unwrap();
        assert_eq!(bank.len(), 1);
        assert_eq!(storage.word_bank.describe(), "in-memory (1 days)");
    }

    #[test]
    fn location_picks_backend() {
        let web = Storage::from_location("https://example.com/words.json");
        assert_eq!(web.word_bank.describe(), "https://example.com/words.json");

        let file = Storage::from_location("booster_vocab_day29_31.json");
        assert_eq!(file.word_bank.describe(), "booster_vocab_day29_31.json");
    }

    #[test]
    fn empty_bank_error_maps_to_empty_bank() {
        let err = LoadError::from(WordBankError::Empty);
        assert!(matches!(err, LoadError::EmptyBank));
    }
}
