//! Display functions for command results

use super::formatters::{colored_guess, letter_tile, score_bar};
use crate::commands::{FilterResult, PatternResult, PlayResult, RecommendResult};
use crate::core::Guess;
use colored::Colorize;

const ANSWER_COLUMNS: usize = 10;

fn print_header(title: &str) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {}", title.bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());
}

fn print_guesses(guesses: &[Guess]) {
    for (i, guess) in guesses.iter().enumerate() {
        println!("  {}. {}", i + 1, colored_guess(guess));
    }
}

/// Print ranked recommendations
pub fn print_recommendations(result: &RecommendResult) {
    print_header(&format!(
        "RECOMMENDATIONS ({} mode, {})",
        result.mode.name(),
        result.scoring.name()
    ));

    if !result.guesses.is_empty() {
        println!();
        print_guesses(&result.guesses);
    }
    println!("\n{} possible answers remain", result.remaining.to_string().bright_yellow().bold());

    if result.recommendations.is_empty() {
        println!("\n{}", "No recommendations: the feedback rules out every answer".red().bold());
        return;
    }

    let best = result
        .recommendations
        .iter()
        .map(|r| r.score)
        .fold(0.0_f64, f64::max);

    println!();
    for (i, rec) in result.recommendations.iter().enumerate() {
        let marker = if rec.is_possible_answer {
            "answer".green()
        } else {
            "probe".bright_black()
        };
        println!(
            "  {:>2}. {}  [{}] {:>8.3}  {}",
            i + 1,
            rec.word.to_uppercase().bright_yellow().bold(),
            score_bar(rec.score, best, 20).green(),
            rec.score,
            marker
        );
    }
}

/// Print the possible answers left after filtering
pub fn print_filter_result(result: &FilterResult) {
    print_header("POSSIBLE ANSWERS");

    if !result.guesses.is_empty() {
        println!();
        print_guesses(&result.guesses);
    }
    println!("\n{} possible answers", result.answers.len().to_string().bright_yellow().bold());

    for row in result.answers.chunks(ANSWER_COLUMNS) {
        println!("  {}", row.join(" "));
    }
}

/// Print the simulated feedback for a guess
pub fn print_pattern_result(result: &PatternResult) {
    let tiles: String = result
        .guess
        .text()
        .chars()
        .zip(result.pattern.states())
        .map(|(letter, state)| letter_tile(letter, state).to_string())
        .collect();

    println!(
        "\n{} against {}",
        result.guess.text().to_uppercase().bright_yellow().bold(),
        result.answer.text().to_uppercase().bright_yellow().bold()
    );
    println!("  {tiles}");
    println!("  {} {}", result.pattern, result.pattern.to_emoji());
}

/// Print a self-played game turn by turn
pub fn print_play_result(result: &PlayResult, verbose: bool) {
    print_header(&format!(
        "PLAYING: {} ({} mode)",
        result.answer.text().to_uppercase(),
        result.mode.name()
    ));

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.guess.text().to_uppercase(),
            step.pattern.to_emoji()
        );
        if verbose {
            println!("  Candidates: {}", step.candidates_before);
            println!("  Score:      {:.3}", step.score);
        }
    }

    println!();
    if result.solved {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guess_count()).green().bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guess_count()).red().bold()
        );
    }
}
