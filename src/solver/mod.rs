//! Next-guess recommendation
//!
//! Scoring strategies, guess-pool policies and the engine that ties them to a
//! loaded vocabulary.

mod engine;
pub mod entropy;
pub mod minimax;
mod partition;
mod policy;
mod recommendation;
mod strategy;
mod vocabulary;

pub use engine::{EngineError, PlayMode, RecommendationEngine};
pub use partition::group_by_pattern;
pub use policy::{CandidatePolicy, PoolTier, TieredPolicy};
pub use recommendation::Recommendation;
pub use strategy::{EntropyScorer, MinimaxScorer, Scorer, Scoring};
pub use vocabulary::{CandidateWord, UsedWord, UsedWords, Vocabulary};
