//! Constraint matching
//!
//! Decides whether a candidate word is still consistent with the feedback of one or
//! more past guesses, and filters word lists accordingly. Matching never fails.

mod constraint;

pub use constraint::{ConstraintSet, GuessConstraint};

use crate::core::Guess;

/// Whether `word` is consistent with a single `guess` (case-insensitive)
///
/// # Examples
/// ```
/// use wordle_advisor::core::Guess;
/// use wordle_advisor::matcher::matches;
///
/// let guess = Guess::from_feedback("crane", "WGWYY").unwrap();
/// assert!(matches("green", &guess));
/// assert!(!matches("brake", &guess));
/// ```
#[must_use]
pub fn matches(word: &str, guess: &Guess) -> bool {
    GuessConstraint::new(guess).is_satisfied_by(word)
}

/// Whether `word` is consistent with every guess; short-circuits on the first failure
#[must_use]
pub fn matches_all(word: &str, guesses: &[Guess]) -> bool {
    guesses.iter().all(|guess| matches(word, guess))
}

/// The words consistent with all `guesses`, sorted lexicographically ascending
///
/// Guesses are compiled once, so this is cheaper than calling [`matches_all`] per word.
#[must_use]
pub fn filter<I>(words: I, guesses: &[Guess]) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: AsRef<str> + Ord,
{
    let constraints = ConstraintSet::new(guesses);
    let mut matching: Vec<I::Item> = words
        .into_iter()
        .filter(|word| constraints.is_satisfied_by(word.as_ref()))
        .collect();
    matching.sort();
    matching
}
