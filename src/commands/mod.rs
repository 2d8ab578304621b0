//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;
pub mod table;

pub use benchmark::{
    BenchmarkConfig, MatchOutcome, ScoreCard, play_match, run_benchmark, run_benchmarks,
};
pub use play::play_interactive;
pub use solve::{GuessStep, SolveError, SolveResult, solve_word};
pub use table::build_table;
