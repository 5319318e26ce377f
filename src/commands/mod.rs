//! Command implementations

pub mod filter;
pub mod openers;
pub mod pattern;
pub mod play;
pub mod recommend;

pub use filter::{FilterResult, run_filter};
pub use openers::generate_opening_book;
pub use pattern::{PatternResult, simulate_pattern};
pub use play::{PlayConfig, PlayError, PlayResult, PlayStep, play_game, random_answer};
pub use recommend::{RecommendConfig, RecommendResult, recommend};
