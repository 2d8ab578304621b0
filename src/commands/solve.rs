//! Word solving command
//!
//! Plays one match against a known secret and records the solution path.

use crate::core::{GuessRow, Word};
use crate::game::{DrawPolicy, Game, GameStatus, Rejection};
use crate::solver::entropy::calculate_entropy;
use crate::solver::{Strategy, StrategyError};
use crate::wordlists::Dictionary;
use thiserror::Error;

/// Why a solve trace could not be produced
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("{0} is not in the answer list")]
    NotAnAnswer(Word),
    #[error("strategy failed: {0}")]
    Strategy(#[from] StrategyError),
    #[error("guess {guess} was rejected: {reason}")]
    Rejected { guess: Word, reason: Rejection },
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub row: GuessRow,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Entropy of the guess over the candidates it faced, when there was a choice
    pub entropy: Option<f64>,
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub strategy: String,
    pub secret: Word,
    pub status: GameStatus,
    pub steps: Vec<GuessStep>,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.status == GameStatus::Won
    }
}

/// Solve `secret` with `strategy`
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not an answer word
/// - The strategy fails or runs out of candidates
/// - The engine rejects one of the strategy's guesses
pub fn solve_word<S: Strategy + ?Sized>(
    strategy: &mut S,
    dictionary: &Dictionary,
    secret: Word,
    hard_mode: bool,
) -> Result<SolveResult, SolveError> {
    let mut game = Game::new(dictionary, DrawPolicy::default(), Some(0));
    if !game.start_with_secret(secret, hard_mode) {
        return Err(SolveError::NotAnAnswer(secret));
    }

    let mut steps = Vec::new();
    while game.status() == GameStatus::InProgress {
        let candidates = game.state().answers();
        let candidates_before = candidates.len();
        let guess = strategy.choose(game.state())?;
        let entropy = (candidates_before > 1).then(|| calculate_entropy(&guess, candidates));

        let state = game
            .try_guess(&guess)
            .map_err(|reason| SolveError::Rejected { guess, reason })?;
        let Some(&row) = state.rows().last() else {
            break;
        };

        steps.push(GuessStep {
            row,
            candidates_before,
            candidates_after: state.answers().len(),
            entropy,
        });
    }

    Ok(SolveResult {
        strategy: strategy.name(),
        secret,
        status: game.status(),
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{DistanceMetric, DistanceStrategy, PatternTable, StrategyType};

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn dictionary() -> Dictionary {
        Dictionary::from_strs(
            &[
                "slate", "crane", "irate", "crate", "grate", "plate", "trace", "caret", "fizzy",
            ],
            &["irate", "crate", "grate", "plate", "trace", "caret", "slate"],
        )
        .unwrap()
    }

    #[test]
    fn solve_word_succeeds() {
        let dict = dictionary();
        let table = PatternTable::build(&dict);
        let mut strategy = StrategyType::Entropy.build(Some(&table), 0).unwrap();

        let result = solve_word(&mut strategy, &dict, w("grate"), true).unwrap();

        assert!(result.success());
        assert_eq!(result.strategy, "EntropySolver");
        assert_eq!(result.steps.first().unwrap().row.word(), w("slate"));
        assert_eq!(result.steps.last().unwrap().row.word(), w("grate"));
    }

    #[test]
    fn solve_records_history() {
        let dict = dictionary();
        let mut strategy = DistanceStrategy::new(DistanceMetric::Hamming);

        let result = solve_word(&mut strategy, &dict, w("caret"), false).unwrap();
        assert!(!result.steps.is_empty());

        // Candidates never grow, and each step starts where the last ended
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
        for pair in result.steps.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
    }

    #[test]
    fn entropy_only_when_there_is_a_choice() {
        let dict = Dictionary::from_strs(&["crane", "slate"], &["slate"]).unwrap();
        let mut strategy = DistanceStrategy::new(DistanceMetric::Hamming);

        let result = solve_word(&mut strategy, &dict, w("slate"), true).unwrap();
        assert!(result.success());
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.steps[0].entropy, None);
    }

    #[test]
    fn secret_must_be_an_answer() {
        let dict = dictionary();
        let mut strategy = DistanceStrategy::new(DistanceMetric::Hamming);
        assert!(matches!(
            solve_word(&mut strategy, &dict, w("fizzy"), true),
            Err(SolveError::NotAnAnswer(_))
        ));
    }
}
