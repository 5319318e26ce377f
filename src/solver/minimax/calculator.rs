//! Minimax worst-case calculation for feedback patterns
//!
//! Given a guess and the possible answers, computes the largest group of answers
//! that could remain after the guess.

use crate::core::Word;
use crate::solver::partition::group_by_pattern;

/// Calculate the maximum remaining answers for a guess
///
/// # Strategy
/// For each pattern that could result from this guess:
/// - Count how many answers would produce that pattern
/// - Return the maximum count (worst case)
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::minimax::calculate_max_remaining;
///
/// let guess = Word::new("crane").unwrap();
/// let answers = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
/// let answer_refs: Vec<&Word> = answers.iter().collect();
///
/// let max_remaining = calculate_max_remaining(&guess, &answer_refs);
/// assert!(max_remaining <= 2);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Word, answers: &[&Word]) -> usize {
    group_by_pattern(guess, answers)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Minimax score: total answers minus the worst-case group size, higher is better
#[must_use]
pub fn minimax_score(guess: &Word, answers: &[&Word]) -> f64 {
    if answers.is_empty() {
        return 0.0;
    }
    (answers.len() - calculate_max_remaining(guess, answers)) as f64
}
