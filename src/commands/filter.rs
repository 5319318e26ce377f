//! Filter command
//!
//! Lists the possible answers still consistent with the guesses so far.

use crate::core::{Guess, Word};
use crate::solver::{CandidatePolicy, RecommendationEngine};

/// Result of filtering the possible answers
pub struct FilterResult {
    pub guesses: Vec<Guess>,
    /// Sorted ascending
    pub answers: Vec<String>,
}

#[must_use]
pub fn run_filter<P: CandidatePolicy>(engine: &RecommendationEngine<P>, guesses: Vec<Guess>) -> FilterResult {
    let answers = engine
        .possible_answers(&guesses)
        .into_iter()
        .map(Word::to_string)
        .collect();

    FilterResult { guesses, answers }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Vocabulary;

    #[test]
    fn run_filter_applies_guesses() {
        let mut engine = RecommendationEngine::new();
        engine
            .load_vocabulary(Vocabulary::from_lists(
                ["track", "crane", "green", "shine", "brake"],
                ["gruel"],
            ))
            .unwrap();

        let result = run_filter(&engine, vec!["crane:WGWYY".parse().unwrap()]);

        assert_eq!(result.answers, ["green"]);
    }

    #[test]
    fn run_filter_without_guesses_lists_all_answers() {
        let mut engine = RecommendationEngine::new();
        engine
            .load_vocabulary(Vocabulary::from_lists(["track", "brake"], ["gruel"]))
            .unwrap();

        let result = run_filter(&engine, Vec::new());

        assert_eq!(result.answers, ["brake", "track"]);
    }
}
