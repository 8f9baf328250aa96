mod config;
mod items;
mod logging;
mod progress;
mod prompt;

use clap::Parser;
use std::path::PathBuf;

use bellrank_core::{
    bucketize, estimate_comparisons, rank, Comparator, RankOutcome, RatingMap, QUIT_TEXT,
    RATING_WEIGHTS,
};
use tracing::info;

use crate::items::ItemTable;
use crate::progress::ProgressStore;
use crate::prompt::InteractivePrompt;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

const DEFAULT_PROGRESS_FILE: &str = "bellrank_progress.json";
const DEFAULT_LOG_OUTPUT: &str = "bellrank.log";

#[derive(Parser)]
#[command(
    name = "bellrank",
    version,
    about = "Rank items into bell-curve rating buckets via pairwise choices"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Rank the items in a CSV file and write the rated output
    Rank(RankArgs),
    /// Create a default config file at ~/.config/bellrank/config.toml
    Init,
}

#[derive(Parser)]
struct RankArgs {
    /// Path to the input file, must end in .csv and have a "name" column
    input: PathBuf,

    /// Path to the output file, must end in .csv
    output: PathBuf,

    /// Where partial progress is saved when quitting mid-ranking
    #[arg(long)]
    progress_file: Option<PathBuf>,

    /// Token that quits the session at any comparison prompt
    #[arg(long)]
    quit_token: Option<String>,

    /// Path to save the log file
    #[arg(short = 'l', long)]
    log_output: Option<PathBuf>,

    /// Increase console logging verbosity
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (default: ~/.config/bellrank/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank(args) => run_rank(args),
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set your default progress file, weights, etc.");
        }
    }
}

fn run_rank(args: RankArgs) {
    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let log_output = args
        .log_output
        .clone()
        .or(cfg.log_output.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_OUTPUT));
    logging::init(&log_output, args.verbose).unwrap_or_else(|e| bail(e));

    let progress_file = args
        .progress_file
        .clone()
        .or(cfg.progress_file.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PROGRESS_FILE));
    let quit_token = args
        .quit_token
        .clone()
        .or(cfg.quit_token)
        .unwrap_or_else(|| QUIT_TEXT.to_string());

    let weights = cfg.weights.unwrap_or_else(|| RATING_WEIGHTS.to_vec());
    if weights.is_empty() {
        bail("Config weights must not be empty");
    }
    if weights.iter().any(|w| !w.is_finite() || *w <= 0.0) {
        bail("Config weights must all be positive numbers");
    }

    let table = ItemTable::from_csv(&args.input).unwrap_or_else(|e| bail(e));
    let names = table.names();
    info!(items = names.len(), input = %args.input.display(), "loaded items");

    // Every item starts in bucket 0; saved progress overlays on top.
    let store = ProgressStore::new(progress_file);
    let mut initial_ratings: RatingMap = names.iter().map(|n| (n.clone(), 0)).collect();
    let saved = store.load().unwrap_or_else(|e| bail(e));
    initial_ratings.extend(saved);

    println!(
        "Estimated comparisons required: {}.",
        estimate_comparisons(names.len())
    );

    let mut comparator = InteractivePrompt::new(quit_token);
    match run_session(&names, initial_ratings, &mut comparator, &weights, &store) {
        Ok(Some(ratings)) => {
            table
                .write_ranked_csv(&args.output, &ratings)
                .unwrap_or_else(|e| bail(e));
            info!(rated = ratings.len(), output = %args.output.display(), "wrote rated output");
        }
        Ok(None) => {
            println!("Progress saved. Exiting...");
        }
        Err(e) => bail(e),
    }
}

/// Run ranking to completion and bucketize the result.
///
/// Returns None when the comparator quit mid-run; the initial ratings are
/// persisted to the store first so the exit is clean, not lossy.
fn run_session(
    names: &[String],
    initial_ratings: RatingMap,
    comparator: &mut dyn Comparator,
    weights: &[f64],
    store: &ProgressStore,
) -> Result<Option<RatingMap>, String> {
    match rank(names, comparator) {
        RankOutcome::Ranked(order) => Ok(Some(bucketize(&order, weights))),
        RankOutcome::Aborted => {
            store.save(&initial_ratings)?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bellrank_core::Choice;

    /// Comparator that replays a fixed script of choices.
    struct Scripted {
        choices: Vec<Choice>,
        calls: usize,
    }

    impl Comparator for Scripted {
        fn compare(&mut self, _first: &str, _second: &str) -> Choice {
            let choice = self.choices[self.calls];
            self.calls += 1;
            choice
        }
    }

    fn temp_store(tag: &str) -> ProgressStore {
        ProgressStore::new(std::env::temp_dir().join(format!(
            "bellrank-session-{}-{tag}.json",
            std::process::id()
        )))
    }

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_session_quit_persists_initial_ratings() {
        let items = names(&["A", "B", "C", "D"]);
        let initial: RatingMap = items.iter().map(|n| (n.clone(), 0)).collect();
        let store = temp_store("quit");
        let mut comparator = Scripted {
            choices: vec![Choice::Quit],
            calls: 0,
        };

        let result =
            run_session(&items, initial.clone(), &mut comparator, &[1.0; 10], &store).unwrap();
        assert!(result.is_none());

        // The store got the untouched all-zero map.
        assert_eq!(store.load().unwrap(), initial);
        std::fs::remove_file(store.path()).unwrap();
    }

    #[test]
    fn test_session_completes_and_buckets() {
        // First always wins: final order is A, B, C, D. Uniform weights
        // over 4 buckets put one item in each.
        let items = names(&["A", "B", "C", "D"]);
        let initial: RatingMap = items.iter().map(|n| (n.clone(), 0)).collect();
        let store = temp_store("complete");
        let mut comparator = Scripted {
            choices: vec![Choice::First; 3],
            calls: 0,
        };

        let ratings = run_session(&items, initial, &mut comparator, &[1.0; 4], &store)
            .unwrap()
            .expect("session should complete");
        assert_eq!(ratings["A"], 0);
        assert_eq!(ratings["B"], 1);
        assert_eq!(ratings["C"], 2);
        assert_eq!(ratings["D"], 3);

        // No save happens on the completion path.
        assert!(store.load().unwrap().is_empty());
    }
}
