//! Wordle solving algorithms
//!
//! This module contains the guessing strategies. Each maps a constraint state
//! to its next guess.
//!
//! ```
//! use wordle_lab::core::{ConstraintState, Word};
//! use wordle_lab::solver::{DistanceMetric, DistanceStrategy, Strategy};
//!
//! let words: Vec<Word> = ["crane", "crate", "grate"]
//!     .iter()
//!     .map(|s| Word::new(s).unwrap())
//!     .collect();
//! let state = ConstraintState::new(words.clone(), words);
//!
//! let mut strategy = DistanceStrategy::new(DistanceMetric::Hamming);
//! assert_eq!(strategy.choose(&state).unwrap().as_str(), "crate");
//! ```

pub mod distance;
pub mod entropy;
pub mod random;
pub mod strategy;

pub use distance::{DistanceMetric, DistanceStrategy, PairDistanceCache};
pub use entropy::{EntropyStrategy, PatternTable, TableError};
pub use random::{RandomPool, RandomStrategy};
pub use strategy::{AnyStrategy, Strategy, StrategyError, StrategyType};
