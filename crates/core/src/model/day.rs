use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a group of words studied together, e.g. `"Day29"`.
///
/// Labels come straight from the word bank keys and are compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayLabel(String);

impl DayLabel {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DayLabel {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DayLabel {
    fn from(value: String) -> Self {
        Self(value)
    }
}
