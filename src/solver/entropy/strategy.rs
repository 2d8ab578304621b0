//! Entropy-maximizing strategy

use super::selector::select_best_guess;
use super::table::PatternTable;
use crate::core::{ConstraintKey, ConstraintState, Word};
use crate::solver::{Strategy, StrategyError};
use rustc_hash::FxHashMap;

/// Opening used whenever the dictionaries contain it
pub const DEFAULT_OPENING: &str = "slate";

/// Entropy strategy
///
/// The first guess of every match is a fixed opening. Afterwards each
/// remaining answer candidate is scored by the entropy of the patterns it
/// would produce across all remaining candidates, and the highest wins.
///
/// Choices are memoized by constraint key. The memo is only valid for states
/// derived from the table's own dictionaries.
pub struct EntropyStrategy<'t> {
    table: &'t PatternTable,
    opening: Word,
    memo: FxHashMap<ConstraintKey, Word>,
}

impl<'t> EntropyStrategy<'t> {
    /// Create a strategy over a prebuilt table
    ///
    /// Uses [`DEFAULT_OPENING`] when the table covers it; otherwise the best
    /// opening over the whole dictionary is computed once here.
    ///
    /// # Errors
    /// Returns `StrategyError::ExhaustedSearch` if the table has no words.
    pub fn new(table: &'t PatternTable) -> Result<Self, StrategyError> {
        let default = Word::new(DEFAULT_OPENING)
            .ok()
            .filter(|w| table.guess_position(w).is_some());

        let opening = match default {
            Some(word) => word,
            None => {
                let (word, bits) = select_best_guess(table, table.guesses(), table.answers())?
                    .ok_or(StrategyError::ExhaustedSearch)?;
                log::info!("computed opening {word} ({bits:.3} bits)");
                word
            }
        };

        Ok(Self {
            table,
            opening,
            memo: FxHashMap::default(),
        })
    }

    /// Replace the opening word
    ///
    /// # Errors
    /// Returns `StrategyError::UnknownWord` if the table does not cover `word`.
    pub fn with_opening(mut self, word: Word) -> Result<Self, StrategyError> {
        if self.table.guess_position(&word).is_none() {
            return Err(StrategyError::UnknownWord(word));
        }
        self.opening = word;
        Ok(self)
    }

    #[must_use]
    pub const fn opening(&self) -> Word {
        self.opening
    }
}

impl Strategy for EntropyStrategy<'_> {
    fn name(&self) -> String {
        "EntropySolver".to_string()
    }

    fn choose(&mut self, state: &ConstraintState) -> Result<Word, StrategyError> {
        if state.turns_taken() == 0 {
            return Ok(self.opening);
        }

        let candidates = state.answers();
        if candidates.is_empty() {
            return Err(StrategyError::ExhaustedSearch);
        }
        if let Some(&word) = self.memo.get(state.key()) {
            return Ok(word);
        }

        let (best, bits) = select_best_guess(self.table, candidates, candidates)?
            .ok_or(StrategyError::ExhaustedSearch)?;
        log::trace!("{best} splits {} candidates with {bits:.3} bits", candidates.len());

        self.memo.insert(*state.key(), best);
        Ok(best)
    }
}
