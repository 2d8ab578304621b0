//! Secret word selection
//!
//! Two policies: uniform draws with replacement, or a shuffled cycle that deals
//! every answer once before reshuffling.

use crate::core::Word;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::str::FromStr;

/// How the engine picks a secret for each match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawPolicy {
    /// Independent uniform draw every match
    Uniform,
    /// Shuffle the answers, deal them in order, reshuffle when exhausted
    #[default]
    ShuffledCycle,
}

impl FromStr for DrawPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform" | "random" => Ok(Self::Uniform),
            "cycle" | "shuffled" => Ok(Self::ShuffledCycle),
            other => Err(format!("unknown draw policy: {other} (expected uniform or cycle)")),
        }
    }
}

/// Stateful secret dealer for one engine
#[derive(Debug, Clone)]
pub struct SecretDrawer {
    policy: DrawPolicy,
    deck: Vec<Word>,
}

impl SecretDrawer {
    #[must_use]
    pub const fn new(policy: DrawPolicy) -> Self {
        Self {
            policy,
            deck: Vec::new(),
        }
    }

    #[must_use]
    pub const fn policy(&self) -> DrawPolicy {
        self.policy
    }

    /// Forget the current cycle so the next draw starts a fresh shuffle
    pub fn reset(&mut self) {
        self.deck.clear();
    }

    /// Draw the next secret from `answers`
    ///
    /// Returns `None` only when `answers` is empty.
    pub fn draw(&mut self, answers: &[Word], rng: &mut StdRng) -> Option<Word> {
        match self.policy {
            DrawPolicy::Uniform => answers.choose(rng).copied(),
            DrawPolicy::ShuffledCycle => {
                if self.deck.is_empty() {
                    self.deck = answers.to_vec();
                    self.deck.shuffle(rng);
                    // Deal from the back
                    self.deck.reverse();
                }
                self.deck.pop()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rustc_hash::FxHashSet;

    fn answers() -> Vec<Word> {
        ["crane", "slate", "grape", "irate", "trace"]
            .iter()
            .map(|s| Word::new(s).unwrap())
            .collect()
    }

    #[test]
    fn cycle_deals_each_answer_once_per_round() {
        let answers = answers();
        let mut rng = StdRng::seed_from_u64(3);
        let mut drawer = SecretDrawer::new(DrawPolicy::ShuffledCycle);

        for _ in 0..3 {
            let round: FxHashSet<Word> = (0..answers.len())
                .map(|_| drawer.draw(&answers, &mut rng).unwrap())
                .collect();
            assert_eq!(round.len(), answers.len());
        }
    }

    #[test]
    fn uniform_draws_members() {
        let answers = answers();
        let mut rng = StdRng::seed_from_u64(11);
        let mut drawer = SecretDrawer::new(DrawPolicy::Uniform);

        for _ in 0..50 {
            let word = drawer.draw(&answers, &mut rng).unwrap();
            assert!(answers.contains(&word));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let answers = answers();
        let sequence = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut drawer = SecretDrawer::new(DrawPolicy::ShuffledCycle);
            (0..8)
                .map(|_| drawer.draw(&answers, &mut rng).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(sequence(42), sequence(42));
    }

    #[test]
    fn empty_answers_draw_nothing() {
        let mut rng = StdRng::seed_from_u64(0);
        for policy in [DrawPolicy::Uniform, DrawPolicy::ShuffledCycle] {
            assert!(SecretDrawer::new(policy).draw(&[], &mut rng).is_none());
        }
    }

    #[test]
    fn policy_parses() {
        assert_eq!("uniform".parse::<DrawPolicy>(), Ok(DrawPolicy::Uniform));
        assert_eq!("cycle".parse::<DrawPolicy>(), Ok(DrawPolicy::ShuffledCycle));
        assert!("sometimes".parse::<DrawPolicy>().is_err());
    }
}
