//! Letter feedback and annotated guesses
//!
//! A `Guess` is the player's word with a feedback signal attached to every letter.
//! Guesses are what the constraint matcher consumes.

use super::pattern::Pattern;
use super::word::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Placeholder letter meaning "this position carries no constraint"
pub const BLANK: char = ' ';

/// Feedback signal for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterState {
    /// No feedback given; the slot is unconstrained
    #[default]
    None,
    /// Letter absent (subject to multiplicity rules)
    White,
    /// Letter present, but not at this position
    Yellow,
    /// Letter present exactly at this position
    Green,
}

impl LetterState {
    /// Single-character symbol used in pattern strings
    ///
    /// `None` is rendered as `W` because cache keys only know three states.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::White | Self::None => 'W',
        }
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts G/Y/W (any case), `-` for white and `.` for an unconstrained slot.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' => Some(Self::Green),
            'Y' | 'y' => Some(Self::Yellow),
            'W' | 'w' | '-' => Some(Self::White),
            '.' => Some(Self::None),
            _ => None,
        }
    }

    /// Whether this signal asserts the letter is present in the word
    #[must_use]
    pub const fn asserts_presence(self) -> bool {
        matches!(self, Self::Green | Self::Yellow)
    }
}

/// Errors raised while building a `Guess`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("a guess needs exactly 5 letters and 5 states, got {letters} letters and {states} states")]
    WrongArity { letters: usize, states: usize },
    #[error("unknown feedback symbol '{0}', expected G, Y, W, - or .")]
    InvalidSymbol(char),
    #[error("expected WORD:PATTERN, got \"{0}\"")]
    MissingPattern(String),
}

/// A past guess annotated letter-by-letter with feedback
///
/// Immutable once constructed. Letters are stored lowercase; a [`BLANK`] letter
/// makes its position unconstrained whatever its nominal signal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess {
    letters: [char; WORD_LENGTH],
    states: [LetterState; WORD_LENGTH],
}

impl Guess {
    /// Build a guess from parallel letter and state sequences
    ///
    /// # Errors
    /// Returns `GuessError::WrongArity` unless both sequences have exactly 5 elements.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Guess, LetterState};
    ///
    /// let guess = Guess::new(
    ///     &['c', 'r', 'a', 'n', 'e'],
    ///     &[LetterState::White, LetterState::Green, LetterState::White,
    ///       LetterState::Yellow, LetterState::Yellow],
    /// ).unwrap();
    /// assert_eq!(guess.word(), "crane");
    ///
    /// assert!(Guess::new(&['c', 'r'], &[LetterState::Green; 2]).is_err());
    /// ```
    pub fn new(letters: &[char], states: &[LetterState]) -> Result<Self, GuessError> {
        let (Ok(letters), Ok(states)) = (
            <[char; WORD_LENGTH]>::try_from(letters),
            <[LetterState; WORD_LENGTH]>::try_from(states),
        ) else {
            return Err(GuessError::WrongArity {
                letters: letters.len(),
                states: states.len(),
            });
        };

        Ok(Self {
            letters: letters.map(|letter| letter.to_ascii_lowercase()),
            states,
        })
    }

    /// Build a guess from a word and its textual feedback, e.g. `("crane", "WGWYY")`
    ///
    /// # Errors
    /// Returns an error on a wrong number of letters or symbols, or an unknown symbol.
    pub fn from_feedback(word: &str, feedback: &str) -> Result<Self, GuessError> {
        let letters: Vec<char> = word.trim().chars().collect();
        let states = feedback
            .trim()
            .chars()
            .map(|symbol| LetterState::from_symbol(symbol).ok_or(GuessError::InvalidSymbol(symbol)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&letters, &states)
    }

    /// Build the guess the game would annotate for `word` yielding `pattern`
    #[must_use]
    pub fn from_pattern(word: &Word, pattern: Pattern) -> Self {
        let chars = *word.chars();
        Self {
            letters: chars.map(char::from),
            states: pattern.states(),
        }
    }

    /// The lowercase letters, blanks included
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// The per-letter feedback
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.states
    }

    /// The guessed word as a string
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().collect()
    }

    /// Feedback rendered as a `G`/`Y`/`W` key, `None` counting as `W`
    #[must_use]
    pub fn pattern_key(&self) -> String {
        self.states.iter().map(|state| state.symbol()).collect()
    }

    /// Positions that carry a constraint: non-blank letter with a real signal
    pub(crate) fn constrained(&self) -> impl Iterator<Item = (usize, char, LetterState)> + '_ {
        self.letters
            .iter()
            .zip(self.states)
            .enumerate()
            .filter(|&(_, (&letter, state))| letter != BLANK && state != LetterState::None)
            .map(|(i, (&letter, state))| (i, letter, state))
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.word(), self.pattern_key())
    }
}

impl FromStr for Guess {
    type Err = GuessError;

    /// Parse `WORD:PATTERN` notation, e.g. `crane:WGWYY`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (word, feedback) = s
            .split_once(':')
            .ok_or_else(|| GuessError::MissingPattern(s.to_string()))?;
        Self::from_feedback(word, feedback)
    }
}
