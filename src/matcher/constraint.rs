//! Compiled per-guess constraints
//!
//! A guess is summarised once into positional checks plus letter tallies, and the
//! summary is then tested against as many words as needed.

use crate::core::{Guess, LetterState, WORD_LENGTH};
use rustc_hash::{FxHashMap, FxHashSet};

/// The constraints a single annotated guess imposes on the answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessConstraint {
    /// Letters that must sit at exactly this index
    greens: Vec<(usize, char)>,
    /// Letters that must appear, but not at this index
    yellows: Vec<(usize, char)>,
    /// Number of positions asserting each letter present (Green or Yellow)
    required: FxHashMap<char, usize>,
    /// Letters marked White anywhere in the guess
    excluded: FxHashSet<char>,
}

impl GuessConstraint {
    /// Summarise a guess, ignoring blank letters and `None` signals
    #[must_use]
    pub fn new(guess: &Guess) -> Self {
        let mut constraint = Self {
            greens: Vec::new(),
            yellows: Vec::new(),
            required: FxHashMap::default(),
            excluded: FxHashSet::default(),
        };

        for (index, letter, state) in guess.constrained() {
            match state {
                LetterState::Green => constraint.greens.push((index, letter)),
                LetterState::Yellow => constraint.yellows.push((index, letter)),
                LetterState::White => {
                    constraint.excluded.insert(letter);
                }
                LetterState::None => {}
            }
            if state.asserts_presence() {
                *constraint.required.entry(letter).or_insert(0) += 1;
            }
        }

        constraint
    }

    /// Returns `true` iff `word` is consistent with the guess's feedback
    ///
    /// A White mark on a letter that also has Green/Yellow marks means "exactly N",
    /// White alone means "none", and Green/Yellow without White means "at least N".
    #[must_use]
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        let Some(letters) = lowercase_letters(word) else {
            return false;
        };
        let count = |letter: char| letters.iter().filter(|&&ch| ch == letter).count();

        if self.greens.iter().any(|&(i, letter)| letters[i] != letter) {
            return false;
        }

        if self
            .yellows
            .iter()
            .any(|&(i, letter)| letters[i] == letter || !letters.contains(&letter))
        {
            return false;
        }

        let excluded_ok = self.excluded.iter().all(|&letter| {
            let expected = self.required.get(&letter).copied().unwrap_or(0);
            count(letter) == expected
        });
        if !excluded_ok {
            return false;
        }

        self.required
            .iter()
            .filter(|(letter, _)| !self.excluded.contains(letter))
            .all(|(&letter, &min)| count(letter) >= min)
    }
}

/// Constraints for a whole sequence of guesses, compiled once
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    constraints: Vec<GuessConstraint>,
}

impl ConstraintSet {
    #[must_use]
    pub fn new(guesses: &[Guess]) -> Self {
        Self {
            constraints: guesses.iter().map(GuessConstraint::new).collect(),
        }
    }

    /// Returns `true` iff every guess accepts `word`; stops at the first rejection
    #[must_use]
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        self.constraints
            .iter()
            .all(|constraint| constraint.is_satisfied_by(word))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

fn lowercase_letters(word: &str) -> Option<[char; WORD_LENGTH]> {
    let mut letters = [' '; WORD_LENGTH];
    let mut chars = word.chars();
    for slot in &mut letters {
        *slot = chars.next()?.to_ascii_lowercase();
    }
    if chars.next().is_some() {
        return None;
    }
    Some(letters)
}
