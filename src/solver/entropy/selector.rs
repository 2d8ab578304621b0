//! Pure entropy-based word selection
//!
//! Selects words that maximize Shannon entropy (expected information gain).

use super::calculator::{PatternCounts, shannon_entropy, table_distribution};
use super::table::PatternTable;
use crate::core::{PATTERN_COUNT, Word};
use crate::solver::StrategyError;

/// Select best guess by maximizing entropy
///
/// Each guess is scored by the pattern distribution it induces over
/// `candidates`, read from the precomputed table. Returns the word with
/// highest entropy and its entropy value, or `None` if the guess pool is
/// empty. Ties go to the first guess in pool order.
///
/// # Errors
/// Returns `StrategyError::UnknownWord` if a guess or candidate is not
/// covered by the table.
///
/// # Examples
/// ```
/// use wordle_lab::core::Word;
/// use wordle_lab::solver::entropy::{PatternTable, select_best_guess};
/// use wordle_lab::wordlists::Dictionary;
///
/// let dict = Dictionary::from_strs(
///     &["aaaaa", "aeros", "slate", "irate"],
///     &["slate", "irate"],
/// ).unwrap();
/// let table = PatternTable::build(&dict);
///
/// let guesses = [Word::new("aaaaa").unwrap(), Word::new("aeros").unwrap()];
/// let (best, entropy) = select_best_guess(&table, &guesses, dict.answers())
///     .unwrap()
///     .unwrap();
/// assert_eq!(best.as_str(), "aeros"); // AEROS tells the two apart, AAAAA doesn't
/// assert!(entropy > 0.0);
/// ```
pub fn select_best_guess(
    table: &PatternTable,
    guesses: &[Word],
    candidates: &[Word],
) -> Result<Option<(Word, f64)>, StrategyError> {
    let secret_positions = candidates
        .iter()
        .map(|w| table.answer_position(w).ok_or(StrategyError::UnknownWord(*w)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut counts: PatternCounts = [0; PATTERN_COUNT];
    let mut best: Option<(Word, f64)> = None;

    for guess in guesses {
        let position = table
            .guess_position(guess)
            .ok_or(StrategyError::UnknownWord(*guess))?;
        table_distribution(table, position, &secret_positions, &mut counts);
        let entropy = shannon_entropy(&counts);

        if best.is_none_or(|(_, highest)| entropy > highest) {
            best = Some((*guess, entropy));
        }
    }

    Ok(best)
}
