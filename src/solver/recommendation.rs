//! Ranked next-guess suggestions

/// A scored candidate guess
///
/// Produced fresh for each query or taken from a precomputed cache; never mutated
/// after it is handed out.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub word: String,
    /// Higher is better under the scoring that produced it
    pub score: f64,
    /// Possible answers remaining when the score was computed
    pub remaining: usize,
    pub is_possible_answer: bool,
}

impl Recommendation {
    #[must_use]
    pub fn new(word: impl Into<String>, score: f64, remaining: usize, is_possible_answer: bool) -> Self {
        Self {
            word: word.into(),
            score,
            remaining,
            is_possible_answer,
        }
    }
}
