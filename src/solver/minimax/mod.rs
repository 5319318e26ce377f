//! Minimax scoring
//!
//! Ranks guesses by how small they keep the worst-case remaining answer set.

mod calculator;

pub use calculator::{calculate_max_remaining, minimax_score};
