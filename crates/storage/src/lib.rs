#![forbid(unsafe_code)]

pub mod http;
pub mod json;
pub mod repository;

pub use repository::{InMemorySource, LoadError, Storage, WordBankSource};
