//! Shannon entropy calculation for feedback patterns
//!
//! Given a guess and the possible answers, computes the expected information gain.

use crate::core::{Pattern, Word};
use crate::solver::partition::group_by_pattern;

/// Calculate Shannon entropy for a guess against the possible answers
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = Σ p(x) * log₂(1 / p(x))
///
/// where p(x) is the share of answers producing pattern x.
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let answers = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
/// let answer_refs: Vec<&Word> = answers.iter().collect();
///
/// let entropy = calculate_entropy(&guess, &answer_refs);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, answers: &[&Word]) -> f64 {
    if answers.is_empty() {
        return 0.0;
    }

    shannon_entropy(&group_by_pattern(guess, answers))
}

/// Calculate Shannon entropy from a pattern distribution
///
/// Empty buckets contribute nothing, and an empty map scores 0. The result lies in
/// `[0, log₂(n)]` for `n` non-empty buckets.
///
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            p * (1.0 / p).log2()
        })
        .sum()
}
