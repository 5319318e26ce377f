//! Record types shared by the cache documents

use crate::core::Word;
use crate::solver::Recommendation;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A recommendation as stored in a cache document
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CachedEntry {
    word: Word,
    score: f64,
    #[serde(default)]
    is_possible_answer: bool,
}

impl From<CachedEntry> for Recommendation {
    /// The remaining count is filled in by the engine at query time
    fn from(entry: CachedEntry) -> Self {
        Self::new(entry.word.text(), entry.score, 0, entry.is_possible_answer)
    }
}

/// Borrowed form written back out by the opening-book generator
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CachedEntryRef<'a> {
    word: &'a str,
    score: f64,
    is_possible_answer: bool,
}

impl<'a> From<&'a Recommendation> for CachedEntryRef<'a> {
    fn from(recommendation: &'a Recommendation) -> Self {
        Self {
            word: &recommendation.word,
            score: recommendation.score,
            is_possible_answer: recommendation.is_possible_answer,
        }
    }
}

/// A JSON array whose malformed elements are dropped instead of failing the parse
pub(super) struct Lenient<T>(pub Vec<T>);

impl<'de, T: DeserializeOwned> Deserialize<'de> for Lenient<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<Value>::deserialize(deserializer)?;
        let items = values
            .into_iter()
            .filter_map(|value| match serde_json::from_value(value) {
                Ok(item) => Some(item),
                Err(e) => {
                    log::warn!("skipping malformed cache entry: {e}");
                    None
                }
            })
            .collect();
        Ok(Self(items))
    }
}

/// Parse one optional section of a document, degrading to empty if it is unusable
pub(super) fn section<T: DeserializeOwned>(value: Option<Value>, name: &str) -> Vec<T> {
    let Some(value) = value else {
        return Vec::new();
    };
    match serde_json::from_value::<Lenient<T>>(value) {
        Ok(Lenient(items)) => items,
        Err(e) => {
            log::warn!("ignoring cache section {name:?}: {e}");
            Vec::new()
        }
    }
}
