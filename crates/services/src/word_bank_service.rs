use std::sync::Arc;

use storage::repository::WordBankSource;
use tokio::sync::OnceCell;
use vocab_core::model::WordBank;

use crate::error::WordBankServiceError;

/// Loads the word bank once and hands out shared references to it.
///
/// Only a successful load is cached. A failure is reported to the caller and
/// nothing is retried on its own.
pub struct WordBankService {
    source: Arc<dyn WordBankSource>,
    bank: OnceCell<Arc<WordBank>>,
}

impl WordBankService {
    #[must_use]
    pub fn new(source: Arc<dyn WordBankSource>) -> Self {
        Self {
            source,
            bank: OnceCell::new(),
        }
    }

    /// Where the words come from, for logs and messages.
    #[must_use]
    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Return the loaded bank, reading the source on first use.
    ///
    /// # Errors
    ///
    /// Returns `WordBankServiceError::Load` if the source is unreachable,
    /// malformed, or lists no days.
    pub async fn word_bank(&self) -> Result<Arc<WordBank>, WordBankServiceError> {
        let bank = self
            .bank
            .get_or_try_init(|| async {
                let source = self.source.describe();
                tracing::info!(%source, "loading word bank");
                match self.source.load().await {
                    Ok(bank) => {
                        tracing::info!(%source, days = bank.len(), "word bank loaded");
                        Ok(Arc::new(bank))
                    }
                    Err(err) => {
                        tracing::error!(%source, %err, "could not load word data");
                        Err(WordBankServiceError::Load(err))
                    }
                }
            })
            .await?;
        Ok(Arc::clone(bank))
    }
}
