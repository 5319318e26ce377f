//! Partitioning answers by simulated feedback

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Group `answers` by the pattern `guess` would produce against each of them
///
/// The groups are disjoint and their sizes always sum to `answers.len()`.
#[must_use]
pub fn group_by_pattern(guess: &Word, answers: &[&Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for &answer in answers {
        let pattern = Pattern::simulate(guess, answer);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn group_by_pattern_works() {
        let guess = Word::new("crane").unwrap();
        let answers = [
            Word::new("slate").unwrap(),
            Word::new("crate").unwrap(),
            Word::new("grate").unwrap(),
        ];
        let answer_refs: Vec<&Word> = answers.iter().collect();

        let groups = group_by_pattern(&guess, &answer_refs);

        // CRATE and GRATE differ only in the first letter, which CRANE separates
        assert_eq!(groups.len(), 3);
        assert_eq!(groups.values().sum::<usize>(), 3);
    }

    #[test]
    fn group_by_pattern_empty() {
        let guess = Word::new("crane").unwrap();
        assert!(group_by_pattern(&guess, &[]).is_empty());
    }

    proptest! {
        #[test]
        fn partition_is_total(guess in "[a-z]{5}", answers in prop::collection::vec("[a-f]{5}", 0..60)) {
            let guess = Word::new(&guess).unwrap();
            let answers: Vec<Word> = answers.iter().map(|a| Word::new(a).unwrap()).collect();
            let answer_refs: Vec<&Word> = answers.iter().collect();

            let groups = group_by_pattern(&guess, &answer_refs);

            prop_assert_eq!(groups.values().sum::<usize>(), answers.len());
            prop_assert!(groups.values().all(|&size| size > 0));
        }
    }
}
