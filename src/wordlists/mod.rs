//! Word lists and play history
//!
//! Loaders that turn the external text files into the vocabulary and used-word
//! history the engine consumes.

pub mod loader;

pub use loader::{LoadError, load_used_words, load_word_list, parse_used_words, parse_word_list};
