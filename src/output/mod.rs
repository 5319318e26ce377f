//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_filter_result, print_pattern_result, print_play_result, print_recommendations};
