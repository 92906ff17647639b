use thiserror::Error;

use crate::model::{DayLabel, WordEntry};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WordBankError {
    #[error("word bank contains no days")]
    Empty,
}

/// Words for a single day, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayWords {
    label: DayLabel,
    words: Vec<WordEntry>,
}

impl DayWords {
    #[must_use]
    pub fn new(label: DayLabel, words: Vec<WordEntry>) -> Self {
        Self { label, words }
    }

    #[must_use]
    pub fn label(&self) -> &DayLabel {
        &self.label
    }

    #[must_use]
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// All loaded vocabulary, grouped by day.
///
/// Days keep the order of the source. The bank is immutable once built and is
/// shared behind an `Arc` by the services layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    days: Vec<DayWords>,
}

impl WordBank {
    /// Build a bank from per-day word lists.
    ///
    /// # Errors
    ///
    /// Returns `WordBankError::Empty` if no days are provided.
    pub fn new(days: Vec<DayWords>) -> Result<Self, WordBankError> {
        if days.is_empty() {
            return Err(WordBankError::Empty);
        }
        Ok(Self { days })
    }

    #[must_use]
    pub fn days(&self) -> &[DayWords] {
        &self.days
    }

    pub fn day_labels(&self) -> impl Iterator<Item = &DayLabel> {
        self.days.iter().map(DayWords::label)
    }

    /// Look up a day's words. With repeated labels the first one wins.
    #[must_use]
    pub fn words(&self, day: &DayLabel) -> Option<&[WordEntry]> {
        self.days
            .iter()
            .find(|d| d.label() == day)
            .map(DayWords::words)
    }

    /// Number of days in the bank.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(label: &str, words: &[(&str, &str)]) -> DayWords {
        DayWords::new(
            DayLabel::new(label),
            words
                .iter()
                .map(|(w, m)| WordEntry::new(*w, *m))
                .collect(),
        )
    }

    #[test]
    fn empty_bank_is_rejected() {
        let err = WordBank::new(Vec::new()).unwrap_err();
        assert_eq!(err, WordBankError::Empty);
    }

    #[test]
    fn lookup_preserves_source_order() {
        let bank = WordBank::new(vec![
            day("Day31", &[("cat", "an animal")]),
            day("Day29", &[("apple", "a fruit"), ("bus", "a vehicle")]),
        ])
        .unwrap();

        let labels: Vec<_> = bank.day_labels().map(DayLabel::as_str).collect();
        assert_eq!(labels, vec!["Day31", "Day29"]);
        assert_eq!(bank.words(&DayLabel::new("Day29")).map(<[_]>::len), Some(2));
        assert!(bank.words(&DayLabel::new("Day30")).is_none());
    }

    #[test]
    fn day_with_no_words_still_counts_as_a_day() {
        let bank = WordBank::new(vec![day("Day1", &[])]).unwrap();
        assert_eq!(bank.len(), 1);
        assert!(bank.days()[0].is_empty());
    }
}
