use async_trait::async_trait;
use reqwest::Client;
use vocab_core::model::WordBank;

use crate::json::parse_word_bank;
use crate::repository::{LoadError, WordBankSource};

/// Fetches the word bank as a static JSON document over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl WordBankSource for HttpSource {
    async fn load(&self) -> Result<WordBank, LoadError> {
        tracing::debug!(url = %self.url, "fetching word bank");
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Unreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LoadError::HttpStatus(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LoadError::Unreachable(e.to_string()))?;
        parse_word_bank(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
