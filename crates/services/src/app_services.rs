use std::sync::Arc;

use storage::repository::Storage;
use vocab_core::Randomness;
use vocab_core::model::QuizSettings;

use crate::sessions::QuizLoopService;
use crate::word_bank_service::WordBankService;

/// Assembles app-facing services from a storage backend.
#[derive(Clone)]
pub struct AppServices {
    word_banks: Arc<WordBankService>,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, settings: QuizSettings, randomness: Randomness) -> Self {
        Self {
            word_banks: Arc::new(WordBankService::new(Arc::clone(&storage.word_bank))),
            quiz_loop: Arc::new(QuizLoopService::new(settings, randomness)),
        }
    }

    #[must_use]
    pub fn word_banks(&self) -> Arc<WordBankService> {
        Arc::clone(&self.word_banks)
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}
