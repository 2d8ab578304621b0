//! Entropy-based Wordle solver
//!
//! Implements Shannon entropy calculation for Wordle pattern distributions,
//! the precomputed pattern table it reads from, and the strategy built on both.

mod calculator;
mod selector;
mod strategy;
mod table;

pub use calculator::{PatternCounts, calculate_entropy, shannon_entropy};
pub use selector::select_best_guess;
pub use strategy::{DEFAULT_OPENING, EntropyStrategy};
pub use table::{PatternTable, TableError};
