//! Second-guess table for the relaxed play mode
//!
//! Keyed by the first guess and the feedback it received:
//! ```json
//! {"salet": {"WWWWW": [{"word": "courd", "score": 4.9, "isPossibleAnswer": false}]}}
//! ```

use super::CacheError;
use super::entry::{CachedEntry, section};
use crate::core::Pattern;
use crate::solver::Recommendation;
use rustc_hash::FxHashMap;
use serde_json::Value;

/// Cached recommendations per (first word, pattern)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecondGuessTable {
    entries: FxHashMap<String, FxHashMap<String, Vec<Recommendation>>>,
}

impl SecondGuessTable {
    /// Parse a second-guess document
    ///
    /// First words are lowercased and pattern keys normalised to `G`/`Y`/`W`.
    /// A first word whose value is not an object, or a key that is not a pattern,
    /// is skipped along with its entries.
    ///
    /// # Errors
    /// Returns `CacheError::Json` if the document is not a JSON object.
    pub fn parse(json: &str) -> Result<Self, CacheError> {
        let raw: FxHashMap<String, Value> = serde_json::from_str(json)?;
        let mut table = Self::default();

        for (first_word, patterns) in raw {
            let Value::Object(patterns) = patterns else {
                log::warn!("skipping second-guess entry {first_word:?}: not an object");
                continue;
            };
            let first_word = first_word.to_ascii_lowercase();
            for (key, value) in patterns {
                let pattern = match key.parse::<Pattern>() {
                    Ok(pattern) => pattern,
                    Err(e) => {
                        log::warn!("skipping second-guess key {first_word}/{key}: {e}");
                        continue;
                    }
                };
                let recommendations = section::<CachedEntry>(Some(value), &key)
                    .into_iter()
                    .map(Recommendation::from)
                    .collect();
                table.insert(&first_word, pattern, recommendations);
            }
        }

        Ok(table)
    }

    /// Parse a second-guess document, falling back to an empty table
    #[must_use]
    pub fn from_json(json: &str) -> Self {
        Self::parse(json).unwrap_or_else(|e| {
            log::warn!("ignoring second-guess table: {e}");
            Self::default()
        })
    }

    pub fn insert(&mut self, first_word: &str, pattern: Pattern, recommendations: Vec<Recommendation>) {
        self.entries
            .entry(first_word.to_ascii_lowercase())
            .or_default()
            .insert(pattern.to_string(), recommendations);
    }

    /// Cached recommendations after `first_word` received `pattern_key`
    #[must_use]
    pub fn lookup(&self, first_word: &str, pattern_key: &str) -> Option<&[Recommendation]> {
        self.entries
            .get(&first_word.to_ascii_lowercase())?
            .get(pattern_key)
            .map(Vec::as_slice)
    }

    /// Number of cached (first word, pattern) keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(std::collections::HashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_nested_document() {
        let table = SecondGuessTable::parse(
            r#"{"SALET": {
                "wwwww": [{"word": "courd", "score": 4.9}],
                "GGGGG": []
            }}"#,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        let hits = table.lookup("salet", "WWWWW").unwrap();
        assert_eq!(hits[0].word, "courd");
        assert!(table.lookup("salet", "GGGGG").unwrap().is_empty());
        assert!(table.lookup("salet", "YWWWW").is_none());
        assert!(table.lookup("crane", "WWWWW").is_none());
    }

    #[test]
    fn bad_keys_and_values_are_skipped() {
        let table = SecondGuessTable::from_json(
            r#"{
                "salet": {"WWX": [{"word": "courd", "score": 1.0}], "WWWWY": [{"word": "bad"}, {"word": "moody", "score": 2.0}]},
                "crane": ["not", "an", "object"]
            }"#,
        );

        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("salet", "WWWWY").unwrap().len(), 1);
    }

    #[test]
    fn invalid_document_degrades_to_empty() {
        assert!(SecondGuessTable::from_json("{").is_empty());
        assert!(SecondGuessTable::from_json("[]").is_empty());
    }
}
