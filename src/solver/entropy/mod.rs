//! Entropy scoring
//!
//! Ranks guesses by the Shannon entropy of the partition they induce on the
//! possible answers.

mod calculator;

pub use calculator::{calculate_entropy, shannon_entropy};
