//! Guess scoring strategies
//!
//! Defines the Scorer trait and the two interchangeable scorings.

use crate::core::Word;

/// Scores a candidate guess against the possible answers; higher is better
pub trait Scorer {
    fn score(&self, guess: &Word, answers: &[&Word]) -> f64;
}

/// Expected information gain in bits
pub struct EntropyScorer;

impl Scorer for EntropyScorer {
    fn score(&self, guess: &Word, answers: &[&Word]) -> f64 {
        super::entropy::calculate_entropy(guess, answers)
    }
}

/// Total answers minus the largest group the guess could leave
pub struct MinimaxScorer;

impl Scorer for MinimaxScorer {
    fn score(&self, guess: &Word, answers: &[&Word]) -> f64 {
        super::minimax::minimax_score(guess, answers)
    }
}

/// Runtime choice of scorer with static dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scoring {
    /// Shannon entropy of the induced partition
    Entropy,
    /// Worst-case group size
    #[default]
    Minimax,
}

impl Scoring {
    /// Map the `use_entropy` flag onto a scoring
    #[must_use]
    pub const fn from_flag(use_entropy: bool) -> Self {
        if use_entropy {
            Self::Entropy
        } else {
            Self::Minimax
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Entropy => "entropy",
            Self::Minimax => "minimax",
        }
    }
}

impl Scorer for Scoring {
    fn score(&self, guess: &Word, answers: &[&Word]) -> f64 {
        match self {
            Self::Entropy => EntropyScorer.score(guess, answers),
            Self::Minimax => MinimaxScorer.score(guess, answers),
        }
    }
}
