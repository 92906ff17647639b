use async_trait::async_trait;
use std::path::PathBuf;
use vocab_core::model::WordBank;

use crate::repository::{LoadError, WordBankSource};

mod mapping;

pub use mapping::parse_word_bank;

/// Reads the word bank from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl WordBankSource for JsonFileSource {
    async fn load(&self) -> Result<WordBank, LoadError> {
        tracing::debug!(path = %self.path.display(), "reading word bank file");
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| LoadError::Unreachable(format!("{}: {e}", self.path.display())))?;
        parse_word_bank(&raw)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
