//! Recommendation engine
//!
//! Owns the candidate vocabulary and the optional caches, and answers ranked
//! next-guess queries. The engine starts out uninitialised and becomes ready once,
//! when a vocabulary is loaded.

use super::policy::{CandidatePolicy, TieredPolicy};
use super::recommendation::Recommendation;
use super::strategy::{Scorer, Scoring};
use super::vocabulary::{CandidateWord, UsedWords, Vocabulary};
use crate::cache::{OpeningBook, SecondGuessTable, TierSubsets};
use crate::core::{Guess, Word};
use crate::matcher::{ConstraintSet, filter};
use thiserror::Error;

/// Game variant the recommendations are for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayMode {
    #[default]
    Normal,
    /// Every guess must stay consistent with all feedback so far
    Hard,
}

impl PlayMode {
    /// Map the `hard_mode` flag onto a play mode
    #[must_use]
    pub const fn from_flag(hard_mode: bool) -> Self {
        if hard_mode { Self::Hard } else { Self::Normal }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }
}

/// Errors raised by engine lifecycle operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("a vocabulary is already loaded")]
    AlreadyReady,
    #[error("the vocabulary contains no words")]
    EmptyVocabulary,
}

#[derive(Debug)]
enum EngineState {
    Uninitialized,
    Ready(Vocabulary),
}

/// Ranks next guesses against the answers still consistent with the feedback
///
/// Generic over the relaxed-mode pool policy; [`TieredPolicy`] by default.
#[derive(Debug)]
pub struct RecommendationEngine<P = TieredPolicy> {
    state: EngineState,
    policy: P,
    openers: OpeningBook,
    second_guesses: SecondGuessTable,
    tiers: TierSubsets,
}

impl RecommendationEngine {
    /// Create an uninitialised engine with the default tiered policy
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(TieredPolicy::default())
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: CandidatePolicy> RecommendationEngine<P> {
    /// Create an uninitialised engine with a custom relaxed-mode pool policy
    #[must_use]
    pub fn with_policy(policy: P) -> Self {
        Self {
            state: EngineState::Uninitialized,
            policy,
            openers: OpeningBook::default(),
            second_guesses: SecondGuessTable::default(),
            tiers: TierSubsets::default(),
        }
    }

    /// Load the candidate vocabulary, making the engine ready
    ///
    /// # Errors
    /// Returns `EngineError::AlreadyReady` on a second load, and
    /// `EngineError::EmptyVocabulary` if `vocabulary` has no words (the engine then
    /// stays uninitialised).
    pub fn load_vocabulary(&mut self, vocabulary: Vocabulary) -> Result<(), EngineError> {
        if self.is_ready() {
            return Err(EngineError::AlreadyReady);
        }
        if vocabulary.is_empty() {
            return Err(EngineError::EmptyVocabulary);
        }
        log::info!(
            "loaded vocabulary: {} words, {} possible answers",
            vocabulary.len(),
            vocabulary.answer_count()
        );
        self.state = EngineState::Ready(vocabulary);
        Ok(())
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.state, EngineState::Ready(_))
    }

    /// The loaded vocabulary, if any
    #[must_use]
    pub const fn vocabulary(&self) -> Option<&Vocabulary> {
        match &self.state {
            EngineState::Ready(vocabulary) => Some(vocabulary),
            EngineState::Uninitialized => None,
        }
    }

    /// Reclassify used solutions as guess-only; see [`Vocabulary::apply_used_words`]
    ///
    /// Returns the number of words reclassified, which is 0 before a vocabulary is loaded.
    pub fn apply_used_words(&mut self, used: &UsedWords, cutoff: Option<u32>) -> usize {
        let EngineState::Ready(vocabulary) = &mut self.state else {
            log::warn!("used words applied before a vocabulary was loaded; ignoring");
            return 0;
        };
        let reclassified = vocabulary.apply_used_words(used, cutoff);
        log::info!(
            "{reclassified} used words excluded ({} possible answers left)",
            vocabulary.answer_count()
        );
        reclassified
    }

    pub fn set_opening_book(&mut self, book: OpeningBook) {
        self.openers = book;
    }

    pub fn set_second_guess_table(&mut self, table: SecondGuessTable) {
        self.second_guesses = table;
    }

    pub fn set_tier_subsets(&mut self, tiers: TierSubsets) {
        self.tiers = tiers;
    }

    /// Possible solutions consistent with every guess, sorted ascending
    #[must_use]
    pub fn possible_answers(&self, guesses: &[Guess]) -> Vec<&Word> {
        self.vocabulary()
            .map(|vocabulary| filter(vocabulary.possible_answers(), guesses))
            .unwrap_or_default()
    }

    /// Ranked next guesses, at most `top_n` of them
    ///
    /// Precomputed openers answer the first move and the second-guess table answers
    /// the second move in normal mode; everything else is computed. An
    /// uninitialised engine returns an empty list.
    #[must_use]
    pub fn get_recommendations(
        &self,
        guesses: &[Guess],
        mode: PlayMode,
        top_n: usize,
        scoring: Scoring,
    ) -> Vec<Recommendation> {
        let Some(vocabulary) = self.vocabulary() else {
            log::debug!("recommendations requested before a vocabulary was loaded");
            return Vec::new();
        };

        if guesses.is_empty() {
            let openers = self.openers.for_mode(mode);
            if !openers.is_empty() {
                log::debug!("using cached {} openers", mode.name());
                return cached(openers, top_n, vocabulary.answer_count());
            }
        }

        if let ([first], PlayMode::Normal) = (guesses, mode) {
            if let Some(entries) = self.second_guesses.lookup(&first.word(), &first.pattern_key()) {
                log::debug!("using cached second guesses for {first}");
                return cached(entries, top_n, self.possible_answers(guesses).len());
            }
        }

        self.compute_recommendations(guesses, mode, top_n, scoring)
    }

    /// Ranked next guesses computed from scratch, ignoring opener and second-guess caches
    #[must_use]
    pub fn compute_recommendations(
        &self,
        guesses: &[Guess],
        mode: PlayMode,
        top_n: usize,
        scoring: Scoring,
    ) -> Vec<Recommendation> {
        self.compute_recommendations_with_progress(guesses, mode, top_n, scoring, |_, _| {})
    }

    /// As [`compute_recommendations`](Self::compute_recommendations), reporting
    /// `(scored, pool size)` after each candidate
    pub fn compute_recommendations_with_progress(
        &self,
        guesses: &[Guess],
        mode: PlayMode,
        top_n: usize,
        scoring: Scoring,
        mut on_scored: impl FnMut(usize, usize),
    ) -> Vec<Recommendation> {
        let Some(vocabulary) = self.vocabulary() else {
            return Vec::new();
        };

        let answers = self.possible_answers(guesses);
        if answers.is_empty() {
            log::debug!("no possible answers remain");
            return Vec::new();
        }

        if let [answer] = answers.as_slice() {
            let score = scoring.score(answer, &answers);
            let mut only = vec![Recommendation::new(answer.text(), score, 1, true)];
            only.truncate(top_n);
            return only;
        }

        let pool = self.candidate_pool(vocabulary, guesses, mode, answers.len());
        let total = pool.len();
        log::debug!(
            "scoring {total} candidates against {} answers ({})",
            answers.len(),
            scoring.name()
        );

        let mut recommendations: Vec<Recommendation> = pool
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let score = scoring.score(&entry.word, &answers);
                on_scored(i + 1, total);
                Recommendation::new(entry.text(), score, answers.len(), entry.is_possible_answer)
            })
            .collect();

        rank(&mut recommendations, top_n);
        recommendations
    }

    fn candidate_pool<'v>(
        &self,
        vocabulary: &'v Vocabulary,
        guesses: &[Guess],
        mode: PlayMode,
        remaining_answers: usize,
    ) -> Vec<&'v CandidateWord> {
        match mode {
            PlayMode::Hard => {
                let constraints = ConstraintSet::new(guesses);
                vocabulary
                    .iter()
                    .filter(|entry| constraints.is_satisfied_by(entry.text()))
                    .collect()
            }
            PlayMode::Normal => self
                .policy
                .candidate_pool(vocabulary, remaining_answers, &self.tiers),
        }
    }
}

/// First `top_n` cached entries, stamped with the live answer count
fn cached(entries: &[Recommendation], top_n: usize, remaining: usize) -> Vec<Recommendation> {
    entries
        .iter()
        .take(top_n)
        .map(|entry| Recommendation {
            remaining,
            ..entry.clone()
        })
        .collect()
}

/// Sort by score descending, possible solutions first among equal scores, and keep `top_n`
fn rank(recommendations: &mut Vec<Recommendation>, top_n: usize) {
    recommendations.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| b.is_possible_answer.cmp(&a.is_possible_answer))
    });
    recommendations.truncate(top_n);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;
    use crate::matcher::matches_all;
    use crate::solver::UsedWord;

    fn setup_engine() -> RecommendationEngine {
        let mut engine = RecommendationEngine::new();
        engine
            .load_vocabulary(Vocabulary::from_lists(
                ["crane", "crate", "grate", "irate", "slate"],
                ["trace", "zonal", "blimp"],
            ))
            .unwrap();
        engine
    }

    fn guess(notation: &str) -> Guess {
        notation.parse().unwrap()
    }

    fn words(recommendations: &[Recommendation]) -> Vec<&str> {
        recommendations.iter().map(|r| r.word.as_str()).collect()
    }

    #[test]
    fn uninitialized_engine_returns_nothing() {
        let mut engine = RecommendationEngine::new();

        assert!(!engine.is_ready());
        assert!(engine.get_recommendations(&[], PlayMode::Normal, 5, Scoring::Minimax).is_empty());
        assert!(engine.possible_answers(&[]).is_empty());
        assert_eq!(engine.apply_used_words(&UsedWords::default(), None), 0);
    }

    #[test]
    fn vocabulary_loads_once() {
        let mut engine = RecommendationEngine::new();

        assert_eq!(engine.load_vocabulary(Vocabulary::new()), Err(EngineError::EmptyVocabulary));
        assert!(!engine.is_ready());

        engine.load_vocabulary(Vocabulary::from_lists(["crane"], ["slate"])).unwrap();
        assert!(engine.is_ready());
        assert_eq!(
            engine.load_vocabulary(Vocabulary::from_lists(["trace"], Vec::<&str>::new())),
            Err(EngineError::AlreadyReady)
        );
        assert!(engine.vocabulary().unwrap().contains("crane"));
    }

    #[test]
    fn solved_position_recommends_only_the_answer() {
        let engine = setup_engine();
        let guesses = [guess("crane:GGGGG")];

        for top_n in [1, 5, 50] {
            let recommendations = engine.get_recommendations(&guesses, PlayMode::Normal, top_n, Scoring::Minimax);
            assert_eq!(words(&recommendations), ["crane"]);
            assert_eq!(recommendations[0].remaining, 1);
            assert!(recommendations[0].is_possible_answer);
        }
    }

    #[test]
    fn contradictory_feedback_yields_nothing() {
        let engine = setup_engine();

        let recommendations = engine.get_recommendations(&[guess("zonal:GGGGG")], PlayMode::Normal, 5, Scoring::Minimax);

        assert!(recommendations.is_empty());
    }

    #[test]
    fn used_word_cutoff_is_exclusive() {
        let mut engine = RecommendationEngine::new();
        engine
            .load_vocabulary(Vocabulary::from_lists(["cigar", "knoll", "rebut"], Vec::<&str>::new()))
            .unwrap();
        let used: UsedWords = [("cigar", 0), ("knoll", 100)]
            .into_iter()
            .map(|(word, game_index)| {
                let record = UsedWord {
                    game_index,
                    date: String::from("2021-06-19"),
                };
                (word.to_string(), record)
            })
            .collect();

        assert_eq!(engine.apply_used_words(&used, Some(100)), 1);
        assert_eq!(engine.apply_used_words(&used, Some(100)), 0);

        let answers: Vec<&str> = engine.possible_answers(&[]).into_iter().map(Word::text).collect();
        assert_eq!(answers, ["knoll", "rebut"]);
        assert!(engine.vocabulary().unwrap().contains("cigar"));
    }

    #[test]
    fn ranking_prefers_splitting_guesses_then_possible_answers() {
        let engine = setup_engine();
        // GRATE and IRATE remain; only GRATE, IRATE and BLIMP tell them apart
        let guesses = [guess("crane:WGGWG")];

        let recommendations = engine.get_recommendations(&guesses, PlayMode::Normal, 10, Scoring::Minimax);

        assert_eq!(recommendations.len(), 8);
        assert_eq!(words(&recommendations[..3]), ["grate", "irate", "blimp"]);
        assert!((recommendations[0].score - 1.0).abs() < f64::EPSILON);
        assert!(!recommendations[2].is_possible_answer);
        assert!(recommendations.iter().all(|r| r.remaining == 2));
        assert!(recommendations[3].score.abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_scoring_ranks_by_information() {
        let engine = setup_engine();
        let guesses = [guess("crane:WGGWG")];

        let recommendations = engine.get_recommendations(&guesses, PlayMode::Normal, 3, Scoring::Entropy);

        assert_eq!(words(&recommendations), ["grate", "irate", "blimp"]);
        assert!((recommendations[0].score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn hard_mode_only_suggests_consistent_words() {
        let engine = setup_engine();
        let guesses = [guess("crane:WGGWG")];

        let recommendations = engine.get_recommendations(&guesses, PlayMode::Hard, 10, Scoring::Minimax);

        assert_eq!(words(&recommendations), ["grate", "irate"]);
        assert!(recommendations.iter().all(|r| matches_all(&r.word, &guesses)));
    }

    #[test]
    fn opening_book_answers_first_move() {
        let mut engine = setup_engine();
        engine.set_opening_book(OpeningBook::new(
            vec![
                Recommendation::new("slate", 3.0, 0, true),
                Recommendation::new("crate", 2.0, 0, true),
            ],
            Vec::new(),
        ));

        let normal = engine.get_recommendations(&[], PlayMode::Normal, 1, Scoring::Minimax);
        assert_eq!(words(&normal), ["slate"]);
        assert_eq!(normal[0].remaining, 5);

        // No hard-mode openers, so the first hard move is computed
        let hard = engine.get_recommendations(&[], PlayMode::Hard, 8, Scoring::Minimax);
        assert_eq!(hard.len(), 8);
    }

    #[test]
    fn opening_book_answers_first_hard_move() {
        let mut engine = setup_engine();
        engine.set_opening_book(OpeningBook::new(
            Vec::new(),
            vec![Recommendation::new("trace", 4.0, 0, false)],
        ));

        let hard = engine.get_recommendations(&[], PlayMode::Hard, 5, Scoring::Minimax);
        assert_eq!(words(&hard), ["trace"]);
        assert_eq!(hard[0].remaining, 5);

        // No normal-mode openers, so the first normal move is computed
        let normal = engine.get_recommendations(&[], PlayMode::Normal, 8, Scoring::Minimax);
        assert_eq!(normal.len(), 8);
    }

    #[test]
    fn caches_are_ignored_until_vocabulary_loads() {
        let mut engine = RecommendationEngine::new();
        engine.set_opening_book(OpeningBook::new(
            vec![Recommendation::new("slate", 3.0, 0, true)],
            vec![Recommendation::new("slate", 3.0, 0, true)],
        ));

        assert!(engine.get_recommendations(&[], PlayMode::Normal, 5, Scoring::Minimax).is_empty());
        assert!(engine.get_recommendations(&[], PlayMode::Hard, 5, Scoring::Minimax).is_empty());
    }

    #[test]
    fn second_guess_table_answers_normal_mode_only() {
        let mut engine = setup_engine();
        let mut table = SecondGuessTable::default();
        let pattern: Pattern = "WGGWG".parse().unwrap();
        table.insert("crane", pattern, vec![Recommendation::new("zonal", 9.0, 0, false)]);
        engine.set_second_guess_table(table);
        let guesses = [guess("CRANE:WGGWG")];

        let normal = engine.get_recommendations(&guesses, PlayMode::Normal, 5, Scoring::Minimax);
        assert_eq!(words(&normal), ["zonal"]);
        assert_eq!(normal[0].remaining, 2);

        let hard = engine.get_recommendations(&guesses, PlayMode::Hard, 5, Scoring::Minimax);
        assert_eq!(words(&hard), ["grate", "irate"]);

        let missed = engine.get_recommendations(&[guess("crane:WGGWW")], PlayMode::Normal, 1, Scoring::Minimax);
        assert_ne!(words(&missed), ["zonal"]);
    }

    #[test]
    fn second_guess_table_only_serves_the_second_move() {
        let mut engine = setup_engine();
        let mut table = SecondGuessTable::default();
        table.insert("crane", "WGGWG".parse().unwrap(), vec![Recommendation::new("zonal", 9.0, 0, false)]);
        engine.set_second_guess_table(table);
        // IRATE is the only answer left after both guesses
        let guesses = [guess("crane:WGGWG"), guess("grate:WGGGG")];

        let recommendations = engine.get_recommendations(&guesses, PlayMode::Normal, 5, Scoring::Minimax);

        assert_eq!(words(&recommendations), ["irate"]);
        assert_eq!(recommendations[0].remaining, 1);
    }

    #[test]
    fn unconstrained_slots_key_as_white() {
        let mut engine = setup_engine();
        let mut table = SecondGuessTable::default();
        table.insert("crane", "WGGWG".parse().unwrap(), vec![Recommendation::new("zonal", 9.0, 0, false)]);
        engine.set_second_guess_table(table);

        let recommendations = engine.get_recommendations(&[guess("crane:.GG.G")], PlayMode::Normal, 5, Scoring::Minimax);

        assert_eq!(words(&recommendations), ["zonal"]);
    }

    #[test]
    fn custom_policy_shapes_relaxed_pool() {
        let mut engine = RecommendationEngine::with_policy(TieredPolicy::new(1, 0));
        engine
            .load_vocabulary(Vocabulary::from_lists(["crane", "crate", "grate"], ["blimp"]))
            .unwrap();
        engine.set_tier_subsets(TierSubsets::new(vec![Word::new("blimp").unwrap()], Vec::new()));

        let recommendations = engine.compute_recommendations(&[], PlayMode::Normal, 5, Scoring::Minimax);

        assert_eq!(words(&recommendations), ["blimp"]);
        assert_eq!(recommendations[0].remaining, 3);
    }

    #[test]
    fn progress_reports_every_candidate() {
        let engine = setup_engine();
        let mut reported = Vec::new();

        let recommendations = engine.compute_recommendations_with_progress(
            &[guess("crane:WGGWG")],
            PlayMode::Hard,
            5,
            Scoring::Minimax,
            |done, total| reported.push((done, total)),
        );

        assert_eq!(recommendations.len(), 2);
        assert_eq!(reported, [(1, 2), (2, 2)]);
    }
}
