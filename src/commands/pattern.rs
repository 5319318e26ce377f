//! Pattern command
//!
//! Shows the feedback the game would give for a guess against a known answer.

use crate::core::{Pattern, Word, WordError};

/// Result of a pattern simulation
pub struct PatternResult {
    pub guess: Word,
    pub answer: Word,
    pub pattern: Pattern,
}

/// Simulate the feedback for `guess` against `answer`
///
/// # Errors
///
/// Returns `WordError` if either word is not 5 ASCII letters.
pub fn simulate_pattern(guess: &str, answer: &str) -> Result<PatternResult, WordError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    let pattern = Pattern::simulate(&guess, &answer);

    Ok(PatternResult {
        guess,
        answer,
        pattern,
    })
}
