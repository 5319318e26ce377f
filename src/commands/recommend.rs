//! Recommendation command
//!
//! Ranks next guesses for the position described by the guesses so far.

use crate::core::Guess;
use crate::solver::{CandidatePolicy, PlayMode, Recommendation, RecommendationEngine, Scoring};

/// Configuration for a recommendation query
pub struct RecommendConfig {
    pub guesses: Vec<Guess>,
    pub mode: PlayMode,
    pub top_n: usize,
    pub scoring: Scoring,
}

impl RecommendConfig {
    #[must_use]
    pub fn new(guesses: Vec<Guess>) -> Self {
        Self {
            guesses,
            mode: PlayMode::Normal,
            top_n: 5,
            scoring: Scoring::default(),
        }
    }
}

/// Result of a recommendation query
pub struct RecommendResult {
    pub guesses: Vec<Guess>,
    pub mode: PlayMode,
    pub scoring: Scoring,
    /// Possible answers consistent with the guesses
    pub remaining: usize,
    pub recommendations: Vec<Recommendation>,
}

/// Rank next guesses for the configured position
#[must_use]
pub fn recommend<P: CandidatePolicy>(
    engine: &RecommendationEngine<P>,
    config: RecommendConfig,
) -> RecommendResult {
    let remaining = engine.possible_answers(&config.guesses).len();
    let recommendations =
        engine.get_recommendations(&config.guesses, config.mode, config.top_n, config.scoring);

    RecommendResult {
        guesses: config.guesses,
        mode: config.mode,
        scoring: config.scoring,
        remaining,
        recommendations,
    }
}
