mod answer;
mod bank;
mod day;
mod entry;
mod settings;

pub use answer::{AnswerResult, FinalScore};
pub use bank::{DayWords, WordBank, WordBankError};
pub use day::DayLabel;
pub use entry::WordEntry;
pub use settings::{QuizSettings, SettingsError};
