//! Guess selection strategies
//!
//! Defines the Strategy trait and runtime selection between implementations.

use super::distance::{DistanceMetric, DistanceStrategy};
use super::entropy::{EntropyStrategy, PatternTable};
use super::random::{RandomPool, RandomStrategy};
use crate::core::{ConstraintState, Word};
use std::fmt;
use thiserror::Error;

/// Failures a strategy can report instead of a guess
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// The constraints admit no candidate word
    #[error("no candidate words remain")]
    ExhaustedSearch,
    /// A word the precomputed pattern table does not cover
    #[error("{0} is not covered by the pattern table")]
    UnknownWord(Word),
    #[error("strategy {0} needs a pattern table")]
    TableRequired(StrategyType),
}

/// A policy mapping a constraint state to the next guess
///
/// Implementations may keep internal caches but must be safe to call across
/// many independent matches.
pub trait Strategy {
    /// Human-readable name, used in reports
    fn name(&self) -> String;

    /// Pick the next guess for `state`
    ///
    /// # Errors
    /// Returns `StrategyError::ExhaustedSearch` when no candidate remains.
    fn choose(&mut self, state: &ConstraintState) -> Result<Word, StrategyError>;
}

/// Strategy names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Entropy maximization over the answer candidates
    Entropy,
    /// Distance minimization with the given metric
    Distance(DistanceMetric),
    /// Uniform random choice from the given pool
    Random(RandomPool),
}

impl StrategyType {
    /// Every selectable strategy, in report order
    pub const ALL: [Self; 5] = [
        Self::Random(RandomPool::Answers),
        Self::Random(RandomPool::All),
        Self::Distance(DistanceMetric::Hamming),
        Self::Distance(DistanceMetric::Frequency),
        Self::Entropy,
    ];

    /// Create strategy type from name string
    ///
    /// Supported names: "entropy", "distance-hamming", "distance-frequency",
    /// "random", "random-all".
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "entropy" => Some(Self::Entropy),
            "distance-hamming" | "hamming" => Some(Self::Distance(DistanceMetric::Hamming)),
            "distance-frequency" | "frequency" => {
                Some(Self::Distance(DistanceMetric::Frequency))
            }
            "random" | "random-answers" => Some(Self::Random(RandomPool::Answers)),
            "random-all" => Some(Self::Random(RandomPool::All)),
            _ => None,
        }
    }

    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::Entropy => "entropy",
            Self::Distance(DistanceMetric::Hamming) => "distance-hamming",
            Self::Distance(DistanceMetric::Frequency) => "distance-frequency",
            Self::Random(RandomPool::Answers) => "random",
            Self::Random(RandomPool::All) => "random-all",
        }
    }

    /// Whether building this strategy needs a [`PatternTable`]
    #[must_use]
    pub const fn needs_table(self) -> bool {
        matches!(self, Self::Entropy)
    }

    /// Instantiate the strategy
    ///
    /// `seed` drives the random strategies.
    ///
    /// # Errors
    /// Returns `StrategyError::TableRequired` if an entropy strategy is requested
    /// without a table.
    pub fn build(
        self,
        table: Option<&PatternTable>,
        seed: u64,
    ) -> Result<AnyStrategy<'_>, StrategyError> {
        Ok(match self {
            Self::Entropy => {
                let table = table.ok_or(StrategyError::TableRequired(self))?;
                AnyStrategy::Entropy(EntropyStrategy::new(table)?)
            }
            Self::Distance(metric) => AnyStrategy::Distance(DistanceStrategy::new(metric)),
            Self::Random(pool) => AnyStrategy::Random(RandomStrategy::new(pool, seed)),
        })
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cli_name())
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum AnyStrategy<'t> {
    Entropy(EntropyStrategy<'t>),
    Distance(DistanceStrategy),
    Random(RandomStrategy),
}

impl Strategy for AnyStrategy<'_> {
    fn name(&self) -> String {
        match self {
            Self::Entropy(s) => s.name(),
            Self::Distance(s) => s.name(),
            Self::Random(s) => s.name(),
        }
    }

    fn choose(&mut self, state: &ConstraintState) -> Result<Word, StrategyError> {
        match self {
            Self::Entropy(s) => s.choose(state),
            Self::Distance(s) => s.choose(state),
            Self::Random(s) => s.choose(state),
        }
    }
}
