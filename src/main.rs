//! Wordle Lab - CLI
//!
//! Simulates Wordle matches and compares guessing strategies.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use wordle_lab::{
    commands::{BenchmarkConfig, build_table, play_interactive, run_benchmarks, solve_word},
    core::Word,
    game::{DrawPolicy, Game},
    output::{print_benchmark_results, print_solve_result},
    solver::{PatternTable, StrategyType},
    wordlists::{Dictionary, loader::load_dictionary},
};

#[derive(Parser)]
#[command(
    name = "wordle_lab",
    about = "Wordle simulator and strategy benchmark",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list of acceptable guesses, one per line
    #[arg(long, global = true, default_value = "data/allowed.txt")]
    allowed: PathBuf,

    /// Word list of possible secrets, one per line
    #[arg(long, global = true, default_value = "data/answers.txt")]
    answers: PathBuf,

    /// Precomputed pattern table; built and written here if missing
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare strategies over many simulated matches
    Benchmark {
        /// Matches per strategy
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Seed for the secret sequence
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Strategy to run (repeatable, default: all).
        /// One of: random, random-all, distance-hamming, distance-frequency, entropy
        #[arg(short, long = "strategy", value_parser = parse_strategy)]
        strategies: Vec<StrategyType>,

        /// Allow guesses that ignore revealed hints
        #[arg(long)]
        easy: bool,

        /// Secret draw policy: uniform or cycle
        #[arg(long, default_value = "cycle")]
        draw: DrawPolicy,
    },

    /// Solve a specific secret and show each step
    Solve {
        /// The secret word
        word: String,

        /// Strategy to solve with
        #[arg(short, long, default_value = "entropy", value_parser = parse_strategy)]
        strategy: StrategyType,

        /// Allow guesses that ignore revealed hints
        #[arg(long)]
        easy: bool,

        /// Only show the rows
        #[arg(long)]
        brief: bool,
    },

    /// Play a match yourself
    Play {
        /// Allow guesses that ignore revealed hints
        #[arg(long)]
        easy: bool,

        /// Seed for the secret
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Precompute the pattern table and write it to a file
    Table {
        /// Output path
        #[arg(short, long)]
        out: PathBuf,
    },
}

fn parse_strategy(name: &str) -> Result<StrategyType, String> {
    StrategyType::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = StrategyType::ALL.iter().map(|s| s.cli_name()).collect();
        format!("unknown strategy {name:?} (expected one of {})", known.join(", "))
    })
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Load the pattern table only when one of `kinds` reads it
fn table_for(
    kinds: &[StrategyType],
    path: Option<&Path>,
    dictionary: &Dictionary,
) -> Result<Option<PatternTable>> {
    if !kinds.iter().any(|k| k.needs_table()) {
        return Ok(None);
    }
    let table = PatternTable::load_or_build(path, dictionary)
        .context("failed to prepare the pattern table")?;
    Ok(Some(table))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(&cli.allowed, &cli.answers).with_context(|| {
        format!(
            "failed to load word lists {} and {}",
            cli.allowed.display(),
            cli.answers.display()
        )
    })?;

    match cli.command {
        Commands::Benchmark {
            games,
            seed,
            strategies,
            easy,
            draw,
        } => {
            let kinds = if strategies.is_empty() {
                StrategyType::ALL.to_vec()
            } else {
                strategies
            };
            let table = table_for(&kinds, cli.table.as_deref(), &dictionary)?;
            let config = BenchmarkConfig {
                games,
                seed,
                hard_mode: !easy,
                draw,
            };
            let cards = run_benchmarks(&kinds, table.as_ref(), &dictionary, &config)?;
            print_benchmark_results(&cards);
        }
        Commands::Solve {
            word,
            strategy,
            easy,
            brief,
        } => {
            let secret = Word::new(&word).with_context(|| format!("invalid secret {word:?}"))?;
            let table = table_for(&[strategy], cli.table.as_deref(), &dictionary)?;
            let mut solver = strategy.build(table.as_ref(), 0)?;
            let result = solve_word(&mut solver, &dictionary, secret, !easy)?;
            print_solve_result(&result, !brief);
        }
        Commands::Play { easy, seed } => {
            let mut game = Game::new(&dictionary, DrawPolicy::Uniform, seed);
            game.start_game(!easy, None);
            play_interactive(&mut game, io::stdin().lock(), io::stdout())?;
        }
        Commands::Table { out } => {
            let table = build_table(&dictionary, &out)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!(
                "Wrote {} x {} patterns to {}",
                table.guesses().len(),
                table.answers().len(),
                out.display()
            );
        }
    }

    Ok(())
}
