//! Opening book generation
//!
//! Scores every candidate first guess for both play modes. This is the slow path
//! the opening book exists to skip, so it shows a progress bar per mode.

use crate::cache::OpeningBook;
use crate::solver::{CandidatePolicy, PlayMode, Recommendation, RecommendationEngine, Scoring};
use indicatif::style::TemplateError;
use indicatif::{ProgressBar, ProgressStyle};

/// Compute fresh openers for normal and hard mode
///
/// # Errors
///
/// Returns `TemplateError` if the progress bar template is invalid.
pub fn generate_opening_book<P: CandidatePolicy>(
    engine: &RecommendationEngine<P>,
    top_n: usize,
    scoring: Scoring,
    show_progress: bool,
) -> Result<OpeningBook, TemplateError> {
    let normal = openers_for_mode(engine, PlayMode::Normal, top_n, scoring, show_progress)?;
    let hard = openers_for_mode(engine, PlayMode::Hard, top_n, scoring, show_progress)?;
    Ok(OpeningBook::new(normal, hard))
}

fn openers_for_mode<P: CandidatePolicy>(
    engine: &RecommendationEngine<P>,
    mode: PlayMode,
    top_n: usize,
    scoring: Scoring,
    show_progress: bool,
) -> Result<Vec<Recommendation>, TemplateError> {
    let pb = if show_progress {
        ProgressBar::new(0)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );
    pb.set_message(format!("{} mode ({})", mode.name(), scoring.name()));

    let openers = engine.compute_recommendations_with_progress(&[], mode, top_n, scoring, |done, total| {
        pb.set_length(total as u64);
        pb.set_position(done as u64);
    });

    pb.finish_with_message(format!("{} mode complete", mode.name()));
    Ok(openers)
}
