//! Wordle Advisor
//!
//! Constraint filtering and next-guess recommendations for the daily five-letter word
//! game. Guesses are scored by how well they split the remaining possible answers,
//! either by Shannon entropy or by worst-case (minimax) bucket size.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_advisor::core::Guess;
//! use wordle_advisor::solver::{PlayMode, RecommendationEngine, Scoring, Vocabulary};
//!
//! let mut engine = RecommendationEngine::new();
//! engine
//!     .load_vocabulary(Vocabulary::from_lists(["crane", "grate", "irate"], ["blimp"]))
//!     .unwrap();
//!
//! let guesses: Vec<Guess> = vec!["crane:WGGWG".parse().unwrap()];
//! let recommendations = engine.get_recommendations(&guesses, PlayMode::Normal, 3, Scoring::Minimax);
//! assert_eq!(recommendations[0].remaining, 2);
//! ```

// Core domain types
pub mod core;

// Feedback constraint matching
pub mod matcher;

// Recommendation engine and scorers
pub mod solver;

// Precomputed recommendation caches
pub mod cache;

// Word lists and play history
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use matcher::{filter, matches, matches_all};
pub use solver::RecommendationEngine;
