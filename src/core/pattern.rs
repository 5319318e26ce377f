//! Feedback pattern simulation and representation
//!
//! A pattern encodes the feedback the game would give for a guess using base-3 encoding:
//! - 0 = White (letter absent, or no unconsumed copy left)
//! - 1 = Yellow (letter in word, wrong position)
//! - 2 = Green (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total. Its textual form is the
//! 5-character `G`/`Y`/`W` string that cached lookups are keyed on.

use super::feedback::LetterState;
use super::word::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const WHITE: u8 = 0;
const YELLOW: u8 = 1;
const GREEN: u8 = 2;

/// Feedback pattern for a guess against a specific answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

/// Error returned when parsing a pattern string fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern must have exactly 5 symbols, got {0}")]
    InvalidLength(usize),
    #[error("unknown pattern symbol '{0}', expected G, Y or W")]
    InvalidSymbol(char),
}

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Simulate the feedback the game gives when `guess` is played against `answer`
    ///
    /// Two passes are needed because of duplicate letters:
    /// 1. Every exact positional match is Green and consumes that answer letter.
    /// 2. Every other guess position, left to right, takes the leftmost unconsumed
    ///    answer letter equal to it (Yellow), or is White when none is left.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Pattern, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let answer = Word::new("erase").unwrap();
    ///
    /// assert_eq!(Pattern::simulate(&guess, &answer).to_string(), "YWYYW");
    /// ```
    #[must_use]
    pub fn simulate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.chars();
        let answer = answer.chars();
        let mut digits = [WHITE; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        for (i, (g, a)) in guess.iter().zip(answer).enumerate() {
            if g == a {
                digits[i] = GREEN;
                consumed[i] = true;
            }
        }

        for (digit, &letter) in digits.iter_mut().zip(guess) {
            if *digit == GREEN {
                continue;
            }
            let unconsumed = (0..WORD_LENGTH).find(|&j| !consumed[j] && answer[j] == letter);
            if let Some(j) = unconsumed {
                *digit = YELLOW;
                consumed[j] = true;
            }
        }

        Self::from_digits(&digits)
    }

    /// Feedback at a single position (0-4)
    #[must_use]
    pub const fn state_at(self, position: usize) -> LetterState {
        let mut val = self.0;
        let mut i = 0;
        while i < position {
            val /= 3;
            i += 1;
        }
        match val % 3 {
            GREEN => LetterState::Green,
            YELLOW => LetterState::Yellow,
            _ => LetterState::White,
        }
    }

    /// Per-position feedback, in guess order
    #[must_use]
    pub fn states(self) -> [LetterState; WORD_LENGTH] {
        std::array::from_fn(|i| self.state_at(i))
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(self) -> usize {
        self.states()
            .iter()
            .filter(|&&state| state == LetterState::Green)
            .count()
    }

    /// Convert pattern to emoji string, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.states()
            .iter()
            .map(|state| match state {
                LetterState::Green => '🟩',
                LetterState::Yellow => '🟨',
                _ => '⬜',
            })
            .collect()
    }

    fn from_digits(digits: &[u8; WORD_LENGTH]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for &digit in digits {
            pattern += digit * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(pattern)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in self.states() {
            write!(f, "{}", state.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    /// Parse a pattern from a string like "GYWWG" or "🟩🟨⬜⬜🟩"
    ///
    /// Accepts G/g/🟩 for green, Y/y/🟨 for yellow and W/w/-/_/⬜ for white.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.trim().chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(PatternError::InvalidLength(symbols.len()));
        }

        let mut digits = [WHITE; WORD_LENGTH];
        for (digit, symbol) in digits.iter_mut().zip(symbols) {
            *digit = match symbol {
                'G' | 'g' | '🟩' => GREEN,
                'Y' | 'y' | '🟨' => YELLOW,
                'W' | 'w' | '-' | '_' | '⬜' => WHITE,
                other => return Err(PatternError::InvalidSymbol(other)),
            };
        }
        Ok(Self::from_digits(&digits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn simulate(guess: &str, answer: &str) -> String {
        Pattern::simulate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap()).to_string()
    }

    #[test]
    fn pattern_all_green() {
        assert_eq!(simulate("hello", "hello"), "GGGGG");
        let word = Word::new("crane").unwrap();
        assert_eq!(Pattern::simulate(&word, &word), Pattern::PERFECT);
    }

    #[test]
    fn pattern_no_matches() {
        assert_eq!(simulate("hello", "track"), "WWWWW");
    }

    #[test]
    fn pattern_yellow_letters() {
        // O takes the leftmost O of OZONE, the second L finds nothing
        assert_eq!(simulate("hello", "ozone"), "WYWWY");
    }

    #[test]
    fn pattern_mixed_green_yellow() {
        assert_eq!(simulate("crane", "trace"), "YGGWG");
    }

    #[test]
    fn pattern_duplicate_letters_both_credited() {
        // ERASE has two E's, so both E's of SPEED are yellow
        assert_eq!(simulate("speed", "erase"), "YWYYW");
    }

    #[test]
    fn pattern_duplicate_letters_green_takes_priority() {
        // The second O is green and consumes its letter before the first O is scanned
        assert_eq!(simulate("robot", "floor"), "YYWGW");
    }

    #[test]
    fn pattern_duplicate_letters_exhausted() {
        // CRANE's only E is consumed by the green, so the leading E's get nothing
        assert_eq!(simulate("eerie", "crane"), "WWYWG");
    }

    #[test]
    fn pattern_positions_line_up_with_guess_letters() {
        let guess = Word::new("abbey").unwrap();
        let answer = Word::new("babes").unwrap();

        assert_eq!(Pattern::simulate(&guess, &answer).to_string(), "YYGGW");
    }

    #[test]
    fn pattern_string_round_trip() {
        let pattern: Pattern = "GYWWG".parse().unwrap();
        assert_eq!(pattern.to_string(), "GYWWG");
        assert_eq!(pattern.to_emoji(), "🟩🟨⬜⬜🟩");
        assert_eq!(pattern.count_greens(), 2);
    }

    #[test]
    fn pattern_from_str_accepts_aliases() {
        let p1: Pattern = "GY-_W".parse().unwrap();
        let p2: Pattern = "🟩🟨⬜⬜⬜".parse().unwrap();
        let p3: Pattern = "gywww".parse().unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        // G=2, Y=1 → 2 + 1×3 = 5
        assert_eq!(p1.value(), 5);
    }

    #[test]
    fn pattern_from_str_invalid() {
        assert_eq!(
            "GYGGYX".parse::<Pattern>(),
            Err(PatternError::InvalidLength(6))
        );
        assert_eq!("GYG".parse::<Pattern>(), Err(PatternError::InvalidLength(3)));
        assert_eq!(
            "GXGGY".parse::<Pattern>(),
            Err(PatternError::InvalidSymbol('X'))
        );
    }

    #[test]
    fn pattern_state_at() {
        let pattern: Pattern = "WYGWY".parse().unwrap();
        assert_eq!(pattern.state_at(0), LetterState::White);
        assert_eq!(pattern.state_at(1), LetterState::Yellow);
        assert_eq!(pattern.state_at(2), LetterState::Green);
        assert_eq!(pattern.state_at(4), LetterState::Yellow);
    }

    proptest! {
        #[test]
        fn simulate_self_is_perfect(answer in "[a-z]{5}") {
            let word = Word::new(&answer).unwrap();
            prop_assert_eq!(Pattern::simulate(&word, &word).to_string(), "GGGGG");
        }

        #[test]
        fn simulate_credits_no_more_than_answer_holds(guess in "[a-z]{5}", answer in "[a-z]{5}") {
            let guess = Word::new(&guess).unwrap();
            let answer = Word::new(&answer).unwrap();
            let states = Pattern::simulate(&guess, &answer).states();

            for letter in b'a'..=b'z' {
                let credited = (0..WORD_LENGTH)
                    .filter(|&i| guess.char_at(i) == letter && states[i] != LetterState::White)
                    .count();
                let expected = guess.count_of(letter).min(answer.count_of(letter));
                prop_assert_eq!(credited, expected);
            }
        }
    }
}
