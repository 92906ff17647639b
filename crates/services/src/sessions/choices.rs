use rand::Rng;
use std::collections::HashSet;

use vocab_core::model::WordEntry;
use vocab_core::random::shuffle;

/// Build the answer choices for one question.
///
/// Distractors come from the whole day's vocabulary, never only from the
/// sampled questions. Entries sharing the correct `word`, or repeating a word
/// already chosen, are skipped. The result holds the correct entry exactly
/// once, at most `max_choices` entries overall, in random order.
pub fn build_choices<R: Rng + ?Sized>(
    correct: &WordEntry,
    day_words: &[WordEntry],
    max_choices: usize,
    rng: &mut R,
) -> Vec<WordEntry> {
    let mut others: Vec<&WordEntry> = day_words
        .iter()
        .filter(|entry| !entry.same_word(correct))
        .collect();
    shuffle(&mut others, rng);

    let mut seen: HashSet<&str> = HashSet::from([correct.word()]);
    let mut choices = Vec::with_capacity(max_choices);
    choices.push(correct.clone());

    for entry in others {
        if choices.len() >= max_choices {
            break;
        }
        if seen.insert(entry.word()) {
            choices.push(entry.clone());
        }
    }

    shuffle(&mut choices, rng);
    choices
}
