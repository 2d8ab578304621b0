//! Uniform random baseline

use super::strategy::{Strategy, StrategyError};
use crate::core::{ConstraintState, Word};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Which filtered list the random strategy draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomPool {
    /// Plausible answers only
    Answers,
    /// Any consistent guess word
    All,
}

/// Random strategy
///
/// Picks uniformly from the consistent words. Useful as a baseline.
pub struct RandomStrategy {
    pool: RandomPool,
    rng: StdRng,
}

impl RandomStrategy {
    #[must_use]
    pub fn new(pool: RandomPool, seed: u64) -> Self {
        Self {
            pool,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> String {
        match self.pool {
            RandomPool::Answers => "RandomSolver(accepted words)".to_string(),
            RandomPool::All => "RandomSolver(all words)".to_string(),
        }
    }

    fn choose(&mut self, state: &ConstraintState) -> Result<Word, StrategyError> {
        let pool = match self.pool {
            RandomPool::Answers => state.answers(),
            RandomPool::All => state.words_all(),
        };
        pool.choose(&mut self.rng)
            .copied()
            .ok_or(StrategyError::ExhaustedSearch)
    }
}
