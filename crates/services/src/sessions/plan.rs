use rand::Rng;

use vocab_core::model::{QuizSettings, WordEntry};
use vocab_core::random::sample_without_replacement;

/// Question selection for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizPlan {
    pub questions: Vec<WordEntry>,
    pub available: usize,
    pub requested: usize,
}

impl QuizPlan {
    /// Total number of questions in this plan.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// True when the day had fewer words than a full game asks for.
    #[must_use]
    pub fn is_short(&self) -> bool {
        self.questions.len() < self.requested
    }

    /// How many questions are missing from a full game.
    #[must_use]
    pub fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.questions.len())
    }
}

/// Draws the question sequence for a session from a day's words.
pub struct QuizPlanner<'a> {
    settings: &'a QuizSettings,
}

impl<'a> QuizPlanner<'a> {
    #[must_use]
    pub fn new(settings: &'a QuizSettings) -> Self {
        Self { settings }
    }

    /// Sample up to `questions_per_game` words without replacement, in random
    /// order. Days with fewer words yield a shorter plan rather than an error.
    pub fn build<R: Rng + ?Sized>(self, words: &[WordEntry], rng: &mut R) -> QuizPlan {
        let requested = self.settings.questions_per_game();
        let questions = sample_without_replacement(words, requested, rng);
        QuizPlan {
            questions,
            available: words.len(),
            requested,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use vocab_core::random::fixed_randomness;

    fn build_words(count: usize) -> Vec<WordEntry> {
        (0..count)
            .map(|i| WordEntry::new(format!("word{i}"), format!("meaning {i}")))
            .collect()
    }

    #[test]
    fn plan_caps_at_questions_per_game() {
        let settings = QuizSettings::standard();
        let words = build_words(25);
        let plan = QuizPlanner::new(&settings).build(&words, &mut fixed_randomness().rng());

        assert_eq!(plan.total(), 10);
        assert!(!plan.is_short());
        let unique: HashSet<_> = plan.questions.iter().map(WordEntry::word).collect();
        assert_eq!(unique.len(), 10, "questions are drawn without replacement");
        assert!(plan.questions.iter().all(|q| words.contains(q)));
    }

    #[test]
    fn short_day_shrinks_the_plan() {
        let settings = QuizSettings::standard();
        let words = build_words(6);
        let plan = QuizPlanner::new(&settings).build(&words, &mut fixed_randomness().rng());

        assert_eq!(plan.total(), 6);
        assert!(plan.is_short());
        assert_eq!(plan.shortfall(), 4);
        assert_eq!(plan.available, 6);
    }

    #[test]
    fn plan_order_is_randomized() {
        let settings = QuizSettings::standard();
        let words = build_words(10);
        let orders: HashSet<Vec<WordEntry>> = (0..8)
            .map(|stream| {
                QuizPlanner::new(&settings)
                    .build(&words, &mut fixed_randomness().rng_for(stream))
                    .questions
            })
            .collect();
        assert!(orders.len() > 1, "different streams should give different orders");
    }
}
