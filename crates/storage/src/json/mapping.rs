use serde_json::{Map, Value};
use vocab_core::model::{DayLabel, DayWords, WordBank, WordEntry};

use crate::repository::LoadError;

/// Parse the `{ "<day>": [ {"word", "english_meaning"}, ... ] }` format.
///
/// Day order follows the document. Fields other than `word` and
/// `english_meaning` are ignored.
///
/// # Errors
///
/// Returns `LoadError::Malformed` if the text is not JSON or not shaped like
/// the mapping above, and `LoadError::EmptyBank` if it has no days.
pub fn parse_word_bank(raw: &str) -> Result<WordBank, LoadError> {
    let root: Value =
        serde_json::from_str(raw).map_err(|e| LoadError::Malformed(e.to_string()))?;
    let days = match root {
        Value::Object(days) => days,
        other => {
            return Err(LoadError::Malformed(format!(
                "expected an object of days, found {}",
                kind_of(&other)
            )));
        }
    };

    let days = map_days(days)?;
    Ok(WordBank::new(days)?)
}

fn map_days(days: Map<String, Value>) -> Result<Vec<DayWords>, LoadError> {
    days.into_iter()
        .map(|(label, words)| {
            let words: Vec<WordEntry> = serde_json::from_value(words)
                .map_err(|e| LoadError::Malformed(format!("day {label:?}: {e}")))?;
            Ok(DayWords::new(DayLabel::new(label), words))
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
