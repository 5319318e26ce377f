//! Formatting utilities for terminal output

use crate::core::{Guess, LetterState};
use colored::{ColoredString, Colorize};

/// Render one letter as a coloured tile
#[must_use]
pub fn letter_tile(letter: char, state: LetterState) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match state {
        LetterState::Green => tile.black().on_green().bold(),
        LetterState::Yellow => tile.black().on_yellow().bold(),
        LetterState::White => tile.white().on_bright_black(),
        LetterState::None => tile.normal(),
    }
}

/// Render a guess as a row of coloured tiles
#[must_use]
pub fn colored_guess(guess: &Guess) -> String {
    guess
        .letters()
        .iter()
        .zip(guess.states())
        .map(|(&letter, &state)| letter_tile(letter, state).to_string())
        .collect()
}

/// Horizontal bar for a score relative to `max`
#[must_use]
pub fn score_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
