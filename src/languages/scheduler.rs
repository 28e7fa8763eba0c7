//! Recall scheduling for word chains
//!
//! One guess mutates the chain exactly once: the head word's memory value
//! doubles on a correct answer or resets to 1 on a miss, and the word is
//! then buried that many positions into the chain. Confidence and review
//! interval are the same number: a missed word comes straight back, a
//! known word drifts further out each time it is answered.

use serde::{Deserialize, Serialize};

use super::chain::WordChain;

/// Result of answering the word at the head of the chain
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessOutcome {
    /// The expected translation of the word that was answered
    pub answer: String,
    pub is_correct: bool,
    /// Prompt of the word now at the head of the chain
    pub next_word: String,
    pub language_score: i32,
    /// Updated counters of the word that was answered
    pub correct_count: i32,
    pub incorrect_count: i32,
}

/// Evaluate `guess` against the chain's head word and relocate it.
///
/// Comparison is exact and case-sensitive. Returns `None` when the chain is
/// empty; callers branch on that before ever getting here. Words other than
/// the head keep their relative order.
pub fn apply_guess(chain: &mut WordChain, guess: &str) -> Option<GuessOutcome> {
    let (answer, is_correct, distance, correct_count, incorrect_count) = {
        let head = chain.head_mut()?;
        let answer = head.translation.clone();
        let is_correct = guess == answer;

        if is_correct {
            head.memory_value = head.memory_value.max(1).saturating_mul(2);
            head.correct_count += 1;
        } else {
            head.memory_value = 1;
            head.incorrect_count += 1;
        }

        (
            answer,
            is_correct,
            head.memory_value as usize,
            head.correct_count,
            head.incorrect_count,
        )
    };

    if is_correct {
        chain.add_score(1);
    }
    chain.shift_head_by(distance);

    let next_word = chain
        .head()
        .map(|word| word.original.clone())
        .unwrap_or_default();

    Some(GuessOutcome {
        answer,
        is_correct,
        next_word,
        language_score: chain.score(),
        correct_count,
        incorrect_count,
    })
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::languages::models::{Language, Word};

    /// A language with linked rows for the given pairs, all at memory value 1
    fn test_chain(pairs: &[(&str, &str)]) -> WordChain {
        let mut language = Language::new(Uuid::new_v4(), "French".to_string());
        let mut words: Vec<Word> = pairs
            .iter()
            .map(|(original, translation)| {
                Word::new(language.id, original.to_string(), translation.to_string())
            })
            .collect();

        for i in 0..words.len() {
            words[i].next = words.get(i + 1).map(|w| w.id);
        }
        language.head = words.first().map(|w| w.id);

        WordChain::from_rows(&language, words).unwrap()
    }

    fn originals(chain: &WordChain) -> Vec<String> {
        chain.iter().map(|w| w.original.clone()).collect()
    }

    #[test]
    fn test_correct_guess_doubles_memory_value() {
        let mut chain = test_chain(&[("un", "one"), ("deux", "two"), ("trois", "three")]);

        let outcome = apply_guess(&mut chain, "one").unwrap();

        assert!(outcome.is_correct);
        assert_eq!(outcome.answer, "one");
        assert_eq!(outcome.language_score, 1);
        assert_eq!(outcome.correct_count, 1);
        assert_eq!(outcome.incorrect_count, 0);

        // Doubled from 1 to 2, so the word is buried two positions deep
        assert_eq!(originals(&chain), vec!["deux", "trois", "un"]);
        let moved = chain.iter().find(|w| w.original == "un").unwrap();
        assert_eq!(moved.memory_value, 2);
    }

    #[test]
    fn test_incorrect_guess_resets_memory_value() {
        let mut chain = test_chain(&[("un", "one"), ("deux", "two"), ("trois", "three")]);
        chain.head_mut().unwrap().memory_value = 8;

        let outcome = apply_guess(&mut chain, "wrong").unwrap();

        assert!(!outcome.is_correct);
        assert_eq!(outcome.answer, "one");
        assert_eq!(outcome.language_score, 0);
        assert_eq!(outcome.correct_count, 0);
        assert_eq!(outcome.incorrect_count, 1);

        // Reset to 1: the word comes back as the second question
        assert_eq!(originals(&chain), vec!["deux", "un", "trois"]);
        let moved = chain.iter().find(|w| w.original == "un").unwrap();
        assert_eq!(moved.memory_value, 1);
    }

    #[test]
    fn test_guess_is_case_sensitive() {
        let mut chain = test_chain(&[("un", "one"), ("deux", "two")]);

        let outcome = apply_guess(&mut chain, "One").unwrap();
        assert!(!outcome.is_correct);
    }

    #[test]
    fn test_repeated_correct_guesses_keep_doubling() {
        let mut chain = test_chain(&[
            ("un", "one"),
            ("deux", "two"),
            ("trois", "three"),
            ("quatre", "four"),
            ("cinq", "five"),
        ]);

        apply_guess(&mut chain, "one").unwrap();
        // "un" now sits at index 2 with memory value 2
        assert_eq!(originals(&chain)[2], "un");

        apply_guess(&mut chain, "two").unwrap();
        apply_guess(&mut chain, "three").unwrap();
        // "un" is the head again
        assert_eq!(chain.head().map(|w| w.original.as_str()), Some("un"));

        let outcome = apply_guess(&mut chain, "one").unwrap();
        assert_eq!(outcome.correct_count, 2);
        let moved = chain.iter().find(|w| w.original == "un").unwrap();
        assert_eq!(moved.memory_value, 4);
    }

    #[test]
    fn test_relocation_distance_capped_at_tail() {
        let mut chain = test_chain(&[("un", "one"), ("deux", "two")]);
        chain.head_mut().unwrap().memory_value = 16;

        apply_guess(&mut chain, "one").unwrap();

        // Distance 32 overshoots a two-word chain; the word lands on the tail
        assert_eq!(originals(&chain), vec!["deux", "un"]);
    }

    #[test]
    fn test_single_word_chain_keeps_its_word() {
        let mut chain = test_chain(&[("un", "one")]);

        let outcome = apply_guess(&mut chain, "one").unwrap();
        assert!(outcome.is_correct);
        assert_eq!(outcome.next_word, "un");
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_empty_chain_yields_nothing() {
        let language = Language::new(Uuid::new_v4(), "Empty".to_string());
        let mut chain = WordChain::from_rows(&language, Vec::new()).unwrap();

        assert!(apply_guess(&mut chain, "anything").is_none());
    }

    #[test]
    fn test_drill_scenario() {
        // Three words at memory value 1, head "a"
        let mut chain = test_chain(&[("a", "1"), ("b", "2"), ("c", "3")]);

        // Correct on "a": doubles to 2, relocates to index 2
        let outcome = apply_guess(&mut chain, "1").unwrap();
        assert!(outcome.is_correct);
        assert_eq!(outcome.next_word, "b");
        assert_eq!(outcome.language_score, 1);
        assert_eq!(originals(&chain), vec!["b", "c", "a"]);

        // Incorrect on "b": resets to 1, relocates to index 1
        let outcome = apply_guess(&mut chain, "wrong").unwrap();
        assert!(!outcome.is_correct);
        assert_eq!(outcome.answer, "2");
        assert_eq!(outcome.next_word, "c");
        assert_eq!(outcome.language_score, 1);
        assert_eq!(originals(&chain), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_zero_memory_value_row_still_relocates() {
        let mut chain = test_chain(&[("un", "one"), ("deux", "two")]);
        // A corrupt stored row; the floor keeps the distance positive
        chain.head_mut().unwrap().memory_value = 0;

        apply_guess(&mut chain, "one").unwrap();

        let moved = chain.iter().find(|w| w.original == "un").unwrap();
        assert_eq!(moved.memory_value, 2);
        assert_eq!(originals(&chain), vec!["deux", "un"]);
    }
}
