#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod sessions;
pub mod word_bank_service;

pub use vocab_core::Randomness;

pub use app_services::AppServices;
pub use error::{SessionError, WordBankServiceError};
pub use word_bank_service::WordBankService;

pub use sessions::{DayOverview, QuizLoopService, QuizPlan, QuizProgress, QuizSession, SessionState};
