//! Relaxed-mode guess pool selection
//!
//! Scoring every vocabulary word against thousands of answers is slow, so the pool
//! is narrowed while many answers remain.

use super::vocabulary::{CandidateWord, Vocabulary};
use crate::cache::TierSubsets;
use crate::core::Word;
use rustc_hash::FxHashSet;

/// Chooses which vocabulary words are scored in relaxed mode
pub trait CandidatePolicy {
    /// The deduplicated guess pool for a position with `remaining_answers` left
    fn candidate_pool<'v>(
        &self,
        vocabulary: &'v Vocabulary,
        remaining_answers: usize,
        tiers: &TierSubsets,
    ) -> Vec<&'v CandidateWord>;
}

/// Size-tiered pool selection with configurable thresholds
///
/// Thresholds use cascading `>` comparisons:
/// ```text
/// if answers > high_quality_above               → HighQuality
/// else if answers > full_vocabulary_at_or_below → AnswersPlusTopGuesses
/// else                                          → FullVocabulary
/// ```
///
/// With default thresholds (200, 20):
/// - **201+ answers**: the precomputed high-quality subset
/// - **21-200 answers**: every possible solution plus the top guess-only subset
/// - **1-20 answers**: the whole vocabulary
#[derive(Debug, Clone)]
pub struct TieredPolicy {
    /// Answers > this use `HighQuality` (default: 200)
    pub high_quality_above: usize,

    /// Answers <= this use `FullVocabulary` (default: 20)
    pub full_vocabulary_at_or_below: usize,
}

impl TieredPolicy {
    #[must_use]
    pub const fn new(high_quality_above: usize, full_vocabulary_at_or_below: usize) -> Self {
        Self {
            high_quality_above,
            full_vocabulary_at_or_below,
        }
    }

    /// Get the tier for a given number of remaining answers
    #[must_use]
    pub const fn get_tier(&self, remaining_answers: usize) -> PoolTier {
        if remaining_answers > self.high_quality_above {
            PoolTier::HighQuality
        } else if remaining_answers > self.full_vocabulary_at_or_below {
            PoolTier::AnswersPlusTopGuesses
        } else {
            PoolTier::FullVocabulary
        }
    }
}

impl Default for TieredPolicy {
    fn default() -> Self {
        Self::new(200, 20)
    }
}

/// Pool tier chosen by [`TieredPolicy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolTier {
    HighQuality,
    AnswersPlusTopGuesses,
    FullVocabulary,
}

impl CandidatePolicy for TieredPolicy {
    fn candidate_pool<'v>(
        &self,
        vocabulary: &'v Vocabulary,
        remaining_answers: usize,
        tiers: &TierSubsets,
    ) -> Vec<&'v CandidateWord> {
        let tier = self.get_tier(remaining_answers);
        log::debug!("{remaining_answers} answers remain, using {tier:?} pool");

        if tier == PoolTier::HighQuality {
            let pool = dedup(known(vocabulary, tiers.high_quality()));
            if !pool.is_empty() {
                return pool;
            }
            log::debug!("no high-quality subset loaded, falling back to answers plus top guesses");
        }

        if tier == PoolTier::FullVocabulary {
            return vocabulary.iter().collect();
        }

        let answers = vocabulary.iter().filter(|entry| entry.is_possible_answer);
        dedup(answers.chain(known(vocabulary, tiers.top_guess_only())))
    }
}

/// Subset words that are in the vocabulary, as vocabulary entries
fn known<'v, 'w>(
    vocabulary: &'v Vocabulary,
    subset: &'w [Word],
) -> impl Iterator<Item = &'v CandidateWord> {
    subset.iter().filter_map(|word| vocabulary.get(word.text()))
}

fn dedup<'v>(entries: impl Iterator<Item = &'v CandidateWord>) -> Vec<&'v CandidateWord> {
    let mut seen = FxHashSet::default();
    entries.filter(|&entry| seen.insert(entry.text())).collect()
}
