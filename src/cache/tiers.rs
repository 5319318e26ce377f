//! Candidate subsets for large answer pools
//!
//! Document shape: `{"highQuality": ["salet", ...], "topGuessOnly": ["tares", ...]}`

use super::CacheError;
use super::entry::section;
use crate::core::Word;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TierSubsetsFile {
    high_quality: Option<Value>,
    top_guess_only: Option<Value>,
}

/// Precomputed guess subsets used to bound scoring cost
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TierSubsets {
    high_quality: Vec<Word>,
    top_guess_only: Vec<Word>,
}

impl TierSubsets {
    #[must_use]
    pub const fn new(high_quality: Vec<Word>, top_guess_only: Vec<Word>) -> Self {
        Self {
            high_quality,
            top_guess_only,
        }
    }

    /// Parse a tier-subset document; each list is read independently
    ///
    /// # Errors
    /// Returns `CacheError::Json` if the document is not a JSON object.
    pub fn parse(json: &str) -> Result<Self, CacheError> {
        let file: TierSubsetsFile = serde_json::from_str(json)?;
        Ok(Self {
            high_quality: section(file.high_quality, "highQuality"),
            top_guess_only: section(file.top_guess_only, "topGuessOnly"),
        })
    }

    /// Parse a tier-subset document, falling back to empty subsets
    #[must_use]
    pub fn from_json(json: &str) -> Self {
        Self::parse(json).unwrap_or_else(|e| {
            log::warn!("ignoring tier subsets: {e}");
            Self::default()
        })
    }

    /// Strong openers scored when many answers remain
    #[must_use]
    pub fn high_quality(&self) -> &[Word] {
        &self.high_quality
    }

    /// Best guess-only words, added to the pool in the middle game
    #[must_use]
    pub fn top_guess_only(&self) -> &[Word] {
        &self.top_guess_only
    }
}
