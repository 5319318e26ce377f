//! Opening book: best first guesses per play mode
//!
//! Document shape:
//! ```json
//! {"normal": [{"word": "salet", "score": 5.83, "isPossibleAnswer": false}], "hard": [...]}
//! ```

use super::CacheError;
use super::entry::{CachedEntry, CachedEntryRef, section};
use crate::solver::{PlayMode, Recommendation};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Deserialize)]
struct OpeningBookFile {
    normal: Option<Value>,
    hard: Option<Value>,
}

#[derive(Serialize)]
struct OpeningBookOut<'a> {
    normal: Vec<CachedEntryRef<'a>>,
    hard: Vec<CachedEntryRef<'a>>,
}

/// Ranked opening guesses for both play modes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpeningBook {
    normal: Vec<Recommendation>,
    hard: Vec<Recommendation>,
}

impl OpeningBook {
    #[must_use]
    pub const fn new(normal: Vec<Recommendation>, hard: Vec<Recommendation>) -> Self {
        Self { normal, hard }
    }

    /// Parse an opening-book document
    ///
    /// The two modes are read independently: a missing or malformed mode is empty
    /// while the other survives, and malformed entries are skipped.
    ///
    /// # Errors
    /// Returns `CacheError::Json` if the document is not a JSON object.
    pub fn parse(json: &str) -> Result<Self, CacheError> {
        let file: OpeningBookFile = serde_json::from_str(json)?;
        let mode = |value: Option<Value>, name: &str| -> Vec<Recommendation> {
            section::<CachedEntry>(value, name)
                .into_iter()
                .map(Recommendation::from)
                .collect()
        };
        Ok(Self {
            normal: mode(file.normal, "normal"),
            hard: mode(file.hard, "hard"),
        })
    }

    /// Parse an opening-book document, falling back to an empty book
    #[must_use]
    pub fn from_json(json: &str) -> Self {
        Self::parse(json).unwrap_or_else(|e| {
            log::warn!("ignoring opening book: {e}");
            Self::default()
        })
    }

    /// Serialise in the same document shape `parse` reads
    ///
    /// # Errors
    /// Returns `CacheError::Json` if serialisation fails.
    pub fn to_json(&self) -> Result<String, CacheError> {
        let out = OpeningBookOut {
            normal: self.normal.iter().map(CachedEntryRef::from).collect(),
            hard: self.hard.iter().map(CachedEntryRef::from).collect(),
        };
        Ok(serde_json::to_string_pretty(&out)?)
    }

    /// The ranked openers for `mode`; empty when that mode was not supplied
    #[must_use]
    pub fn for_mode(&self, mode: PlayMode) -> &[Recommendation] {
        match mode {
            PlayMode::Normal => &self.normal,
            PlayMode::Hard => &self.hard,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normal.is_empty() && self.hard.is_empty()
    }
}
