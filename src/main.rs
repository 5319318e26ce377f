//! Wordle Advisor - CLI
//!
//! Line-oriented front-end over the recommendation engine: rank next guesses,
//! filter possible answers, simulate feedback and self-play games.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use wordle_advisor::{
    cache::{OpeningBook, SecondGuessTable, TierSubsets},
    commands::{
        PlayConfig, RecommendConfig, generate_opening_book, play_game, random_answer, recommend,
        run_filter, simulate_pattern,
    },
    core::{Guess, Word},
    output::{print_filter_result, print_pattern_result, print_play_result, print_recommendations},
    solver::{PlayMode, RecommendationEngine, Scoring, Vocabulary},
    wordlists::{load_used_words, load_word_list},
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Next-guess recommendations for the daily five-letter word game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    sources: Sources,

    /// Debug logging (`RUST_LOG` overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Word lists, history and caches the engine is built from
#[derive(Args)]
struct Sources {
    /// Possible answers, one word per line
    #[arg(short, long, global = true, default_value = "words.txt")]
    answers: PathBuf,

    /// Words accepted as guesses but never the answer, one per line
    #[arg(long, global = true, default_value = "guess-only-words.txt")]
    guess_only: PathBuf,

    /// Used-word history CSV (word,game,date); used answers become guess-only
    #[arg(short, long, global = true)]
    used: Option<PathBuf>,

    /// Only exclude used words from games before this index
    #[arg(long, global = true, requires = "used")]
    cutoff: Option<u32>,

    /// Opening book JSON
    #[arg(long, global = true)]
    openers: Option<PathBuf>,

    /// Second-guess table JSON
    #[arg(long, global = true)]
    second_guess: Option<PathBuf>,

    /// Tier subsets JSON
    #[arg(long, global = true)]
    tiers: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the best next guesses
    Recommend {
        /// A guess so far, as word:PATTERN (G green, Y yellow, W white, . unknown)
        #[arg(short, long = "guess")]
        guesses: Vec<Guess>,

        /// Hard mode: suggest only words consistent with all feedback
        #[arg(long)]
        hard: bool,

        /// Number of recommendations to show
        #[arg(short = 'n', long, default_value = "5")]
        top: usize,

        /// Score by entropy instead of minimax
        #[arg(short, long)]
        entropy: bool,
    },

    /// List the possible answers consistent with the guesses so far
    Filter {
        /// A guess so far, as word:PATTERN
        #[arg(short, long = "guess")]
        guesses: Vec<Guess>,
    },

    /// Show the feedback a guess would get against an answer
    Pattern {
        guess: String,
        answer: String,
    },

    /// Play a game by always taking the top recommendation
    Play {
        /// Answer to play against (random possible answer if omitted)
        answer: Option<String>,

        #[arg(long)]
        hard: bool,

        #[arg(short, long)]
        entropy: bool,
    },

    /// Compute a fresh opening book for both play modes
    Openers {
        /// Openers kept per mode
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,

        #[arg(short, long)]
        entropy: bool,

        /// Write the JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    match cli.command {
        Commands::Recommend {
            guesses,
            hard,
            top,
            entropy,
        } => {
            let engine = build_engine(&cli.sources)?;
            run_recommend_command(&engine, guesses, hard, top, entropy);
            Ok(())
        }
        Commands::Filter { guesses } => {
            let engine = build_engine(&cli.sources)?;
            print_filter_result(&run_filter(&engine, guesses));
            Ok(())
        }
        Commands::Pattern { guess, answer } => {
            print_pattern_result(&simulate_pattern(&guess, &answer)?);
            Ok(())
        }
        Commands::Play {
            answer,
            hard,
            entropy,
        } => {
            let engine = build_engine(&cli.sources)?;
            run_play_command(&engine, answer.as_deref(), hard, entropy, cli.verbose)
        }
        Commands::Openers {
            top,
            entropy,
            output,
        } => {
            let engine = build_engine(&cli.sources)?;
            run_openers_command(&engine, top, entropy, output.as_deref())
        }
    }
}

fn build_engine(sources: &Sources) -> Result<RecommendationEngine> {
    let answers = load_word_list(&sources.answers).context("failed to load answer list")?;
    let guess_only = load_word_list(&sources.guess_only).context("failed to load guess-only list")?;

    let mut engine = RecommendationEngine::new();
    engine
        .load_vocabulary(Vocabulary::from_lists(answers, guess_only))
        .context("failed to initialise the engine")?;

    if let Some(path) = &sources.used {
        let used = load_used_words(path).context("failed to load used-word history")?;
        engine.apply_used_words(&used, sources.cutoff);
    }

    if let Some(json) = read_optional(sources.openers.as_deref()) {
        engine.set_opening_book(OpeningBook::from_json(&json));
    }
    if let Some(json) = read_optional(sources.second_guess.as_deref()) {
        engine.set_second_guess_table(SecondGuessTable::from_json(&json));
    }
    if let Some(json) = read_optional(sources.tiers.as_deref()) {
        engine.set_tier_subsets(TierSubsets::from_json(&json));
    }

    Ok(engine)
}

/// Read an optional cache file; an unreadable file is treated as absent
fn read_optional(path: Option<&Path>) -> Option<String> {
    let path = path?;
    match fs::read_to_string(path) {
        Ok(json) => Some(json),
        Err(e) => {
            log::warn!("ignoring cache {}: {e}", path.display());
            None
        }
    }
}

fn run_recommend_command(
    engine: &RecommendationEngine,
    guesses: Vec<Guess>,
    hard: bool,
    top: usize,
    entropy: bool,
) {
    let config = RecommendConfig {
        mode: PlayMode::from_flag(hard),
        top_n: top,
        scoring: Scoring::from_flag(entropy),
        ..RecommendConfig::new(guesses)
    };
    print_recommendations(&recommend(engine, config));
}

fn run_play_command(
    engine: &RecommendationEngine,
    answer: Option<&str>,
    hard: bool,
    entropy: bool,
    verbose: bool,
) -> Result<()> {
    let answer = match answer {
        Some(text) => Word::new(text)?,
        None => match random_answer(engine) {
            Some(word) => word,
            None => bail!("no possible answers to play against"),
        },
    };

    let config = PlayConfig {
        mode: PlayMode::from_flag(hard),
        scoring: Scoring::from_flag(entropy),
        ..PlayConfig::default()
    };
    let result = play_game(engine, &answer, config)?;

    print_play_result(&result, verbose);
    Ok(())
}

fn run_openers_command(
    engine: &RecommendationEngine,
    top: usize,
    entropy: bool,
    output: Option<&Path>,
) -> Result<()> {
    let book = generate_opening_book(engine, top, Scoring::from_flag(entropy), true)?;
    let json = book.to_json()?;

    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
            println!("Opening book written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
