use std::sync::Arc;

use services::{QuizLoopService, WordBankService};

/// Services the views need, supplied by the composition root.
pub trait UiApp: Send + Sync {
    fn word_banks(&self) -> Arc<WordBankService>;
    fn quiz_loop(&self) -> Arc<QuizLoopService>;
}

#[derive(Clone)]
pub struct AppContext {
    word_banks: Arc<WordBankService>,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            word_banks: app.word_banks(),
            quiz_loop: app.quiz_loop(),
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
