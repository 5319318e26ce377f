//! The loaded candidate set
//!
//! Every valid guess, each tagged as a possible solution or guess-only. The set is
//! fixed after loading apart from used-word reclassification.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// A solution that has already been played on a given day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsedWord {
    /// Sequential game number
    pub game_index: u32,
    /// Calendar date as recorded in the history, kept for display only
    pub date: String,
}

/// Used solutions keyed by lowercase word
pub type UsedWords = FxHashMap<String, UsedWord>;

/// A vocabulary entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateWord {
    pub word: Word,
    pub is_possible_answer: bool,
}

impl CandidateWord {
    #[must_use]
    pub fn text(&self) -> &str {
        self.word.text()
    }
}

/// Owned candidate set with a by-word index
///
/// Entries keep insertion order and are unique by word; the first classification of
/// a word wins.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    entries: Vec<CandidateWord>,
    index: FxHashMap<String, usize>,
}

impl Vocabulary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vocabulary from a possible-solution list and a guess-only list
    ///
    /// Tokens that are not valid 5-letter words are skipped. Answers are inserted
    /// first, so a word present in both lists stays a possible solution.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::solver::Vocabulary;
    ///
    /// let vocabulary = Vocabulary::from_lists(["cigar", "rebut"], ["aahed", "cigar", "toolong"]);
    /// assert_eq!(vocabulary.len(), 3);
    /// assert!(vocabulary.is_possible_answer("cigar"));
    /// assert!(!vocabulary.is_possible_answer("aahed"));
    /// ```
    #[must_use]
    pub fn from_lists<A, G>(answers: A, guess_only: G) -> Self
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        G: IntoIterator,
        G::Item: AsRef<str>,
    {
        let mut vocabulary = Self::new();
        let tagged = answers
            .into_iter()
            .map(|text| (text.as_ref().to_string(), true))
            .chain(
                guess_only
                    .into_iter()
                    .map(|text| (text.as_ref().to_string(), false)),
            );

        for (text, is_possible_answer) in tagged {
            match Word::new(&text) {
                Ok(word) => {
                    vocabulary.insert(word, is_possible_answer);
                }
                Err(e) => log::debug!("skipping vocabulary token {text:?}: {e}"),
            }
        }

        vocabulary
    }

    /// Add a word; returns `false` if it was already present (classification unchanged)
    pub fn insert(&mut self, word: Word, is_possible_answer: bool) -> bool {
        if self.index.contains_key(word.text()) {
            return false;
        }
        self.index.insert(word.text().to_string(), self.entries.len());
        self.entries.push(CandidateWord {
            word,
            is_possible_answer,
        });
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<&CandidateWord> {
        self.index
            .get(&word.to_ascii_lowercase())
            .map(|&i| &self.entries[i])
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Whether `word` is in the vocabulary and currently a possible solution
    #[must_use]
    pub fn is_possible_answer(&self, word: &str) -> bool {
        self.get(word).is_some_and(|entry| entry.is_possible_answer)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CandidateWord> {
        self.entries.iter()
    }

    /// All words currently classified as possible solutions, in insertion order
    pub fn possible_answers(&self) -> impl Iterator<Item = &Word> {
        self.entries
            .iter()
            .filter(|entry| entry.is_possible_answer)
            .map(|entry| &entry.word)
    }

    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.possible_answers().count()
    }

    /// Reclassify used solutions as guess-only
    ///
    /// With a `cutoff`, only records whose game index is strictly below it apply.
    /// Returns the number of entries reclassified; a second call with the same
    /// arguments reclassifies nothing.
    pub fn apply_used_words(&mut self, used: &UsedWords, cutoff: Option<u32>) -> usize {
        let mut reclassified = 0;
        for entry in self.entries.iter_mut().filter(|e| e.is_possible_answer) {
            let Some(record) = used.get(entry.word.text()) else {
                continue;
            };
            if cutoff.is_none_or(|cutoff| record.game_index < cutoff) {
                entry.is_possible_answer = false;
                reclassified += 1;
            }
        }
        reclassified
    }
}
