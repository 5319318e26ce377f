//! Precomputed recommendation caches
//!
//! Three optional JSON documents speed up the engine: the opening book, the
//! second-guess table and the tier subsets. Each is parsed once into typed records.
//! A malformed entry is logged and skipped; a document that cannot be read at all
//! degrades to an empty cache through `from_json`.

mod entry;
mod openers;
mod second_guess;
mod tiers;

pub use openers::OpeningBook;
pub use second_guess::SecondGuessTable;
pub use tiers::TierSubsets;

use thiserror::Error;

/// Errors raised while reading or writing a cache document
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("malformed cache JSON: {0}")]
    Json(#[from] serde_json::Error),
}
