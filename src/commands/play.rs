//! Self-play command
//!
//! Plays a full game against a known answer by always taking the top
//! recommendation, which is handy for checking a vocabulary and cache setup.

use crate::core::{Guess, Pattern, Word, WordError};
use crate::solver::{CandidatePolicy, PlayMode, RecommendationEngine, Scoring};
use rand::prelude::IndexedRandom;
use thiserror::Error;

/// Configuration for a self-played game
#[derive(Debug, Clone, Copy)]
pub struct PlayConfig {
    pub mode: PlayMode,
    pub scoring: Scoring,
    pub max_guesses: usize,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            mode: PlayMode::Normal,
            scoring: Scoring::default(),
            max_guesses: 6,
        }
    }
}

/// One turn of a self-played game
pub struct PlayStep {
    pub guess: Word,
    pub pattern: Pattern,
    /// Possible answers before this guess was made
    pub candidates_before: usize,
    pub score: f64,
}

/// Result of a self-played game
pub struct PlayResult {
    pub answer: Word,
    pub mode: PlayMode,
    pub steps: Vec<PlayStep>,
    pub solved: bool,
}

impl PlayResult {
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.steps.len()
    }
}

#[derive(Debug, Error)]
pub enum PlayError {
    #[error(transparent)]
    InvalidWord(#[from] WordError),
    #[error("no recommendation available after {0} guesses")]
    NoRecommendation(usize),
}

/// Play against `answer` using the engine's top pick each turn
///
/// The game ends when the answer is found or after `max_guesses` turns.
///
/// # Errors
///
/// Returns `PlayError::NoRecommendation` if the engine has nothing to suggest,
/// which happens when `answer` is not among the possible answers.
pub fn play_game<P: CandidatePolicy>(
    engine: &RecommendationEngine<P>,
    answer: &Word,
    config: PlayConfig,
) -> Result<PlayResult, PlayError> {
    let mut guesses: Vec<Guess> = Vec::with_capacity(config.max_guesses);
    let mut steps = Vec::with_capacity(config.max_guesses);
    let mut solved = false;

    while steps.len() < config.max_guesses {
        let candidates_before = engine.possible_answers(&guesses).len();
        let Some(top) = engine
            .get_recommendations(&guesses, config.mode, 1, config.scoring)
            .into_iter()
            .next()
        else {
            return Err(PlayError::NoRecommendation(steps.len()));
        };

        let guess = Word::new(&top.word)?;
        let pattern = Pattern::simulate(&guess, answer);
        log::debug!("guess {}: {guess} -> {pattern}", steps.len() + 1);

        guesses.push(Guess::from_pattern(&guess, pattern));
        steps.push(PlayStep {
            guess,
            pattern,
            candidates_before,
            score: top.score,
        });

        if pattern.is_perfect() {
            solved = true;
            break;
        }
    }

    Ok(PlayResult {
        answer: answer.clone(),
        mode: config.mode,
        steps,
        solved,
    })
}

/// Pick a random possible answer from the engine's vocabulary
#[must_use]
pub fn random_answer<P: CandidatePolicy>(engine: &RecommendationEngine<P>) -> Option<Word> {
    let answers = engine.possible_answers(&[]);
    answers.choose(&mut rand::rng()).map(|word| (*word).clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Vocabulary;

    fn setup_engine() -> RecommendationEngine {
        let mut engine = RecommendationEngine::new();
        engine
            .load_vocabulary(Vocabulary::from_lists(
                ["crane", "crate", "grate", "irate", "slate", "house", "mouse"],
                ["blimp", "zonal"],
            ))
            .unwrap();
        engine
    }

    #[test]
    fn play_game_finds_every_answer() {
        let engine = setup_engine();

        for answer in engine.possible_answers(&[]) {
            let result = play_game(&engine, answer, PlayConfig::default()).unwrap();

            assert!(result.solved, "failed to solve {answer}");
            assert!(result.guess_count() <= 6);
            let last = result.steps.last().unwrap();
            assert_eq!(&last.guess, answer);
            assert!(last.pattern.is_perfect());
        }
    }

    #[test]
    fn play_game_in_hard_mode_keeps_guesses_consistent() {
        let engine = setup_engine();
        let answer = Word::new("irate").unwrap();
        let config = PlayConfig {
            mode: PlayMode::Hard,
            ..PlayConfig::default()
        };

        let result = play_game(&engine, &answer, config).unwrap();

        assert!(result.solved);
        for (i, step) in result.steps.iter().enumerate() {
            let earlier: Vec<Guess> = result.steps[..i]
                .iter()
                .map(|s| Guess::from_pattern(&s.guess, s.pattern))
                .collect();
            assert!(crate::matcher::matches_all(step.guess.text(), &earlier));
        }
    }

    #[test]
    fn play_game_reports_unknown_answer() {
        let engine = setup_engine();
        let answer = Word::new("fjord").unwrap();

        let result = play_game(&engine, &answer, PlayConfig::default());

        assert!(matches!(result, Err(PlayError::NoRecommendation(_))));
    }

    #[test]
    fn random_answer_is_a_possible_answer() {
        let engine = setup_engine();

        let answer = random_answer(&engine).unwrap();

        assert!(engine.vocabulary().unwrap().is_possible_answer(answer.text()));
        assert!(random_answer(&RecommendationEngine::new()).is_none());
    }
}
