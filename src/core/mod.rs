//! Core domain types for the word game
//!
//! Words, feedback patterns and annotated guesses. Everything here is pure and
//! has no knowledge of word lists or caches.

mod feedback;
mod pattern;
mod word;

pub use feedback::{BLANK, Guess, GuessError, LetterState};
pub use pattern::{Pattern, PatternError};
pub use word::{WORD_LENGTH, Word, WordError};
