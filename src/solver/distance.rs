//! Distance-minimizing strategy
//!
//! Picks the candidate whose summed distance to every remaining answer is
//! smallest, a cheap stand-in for "most central" word.

use super::strategy::{Strategy, StrategyError};
use crate::core::{ConstraintKey, ConstraintState, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Turns during which the pool is the whole filtered dictionary
///
/// Early on, words that cannot be the answer may still split the candidates
/// better. After this many guesses only plausible answers are considered.
pub const EXPLORATION_TURNS: usize = 2;

/// Word distance functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceMetric {
    /// Number of differing positions
    Hamming,
    /// Word length minus the size of the letter multiset intersection
    Frequency,
}

impl DistanceMetric {
    /// Distance between two words; symmetric in its arguments
    ///
    /// # Examples
    /// ```
    /// use wordle_lab::core::Word;
    /// use wordle_lab::solver::DistanceMetric;
    ///
    /// let a = Word::new("crane").unwrap();
    /// let b = Word::new("nacre").unwrap();
    /// assert_eq!(DistanceMetric::Hamming.distance(&a, &b), 4);
    /// assert_eq!(DistanceMetric::Frequency.distance(&a, &b), 0);
    /// ```
    #[must_use]
    pub fn distance(self, a: &Word, b: &Word) -> u8 {
        match self {
            Self::Hamming => a
                .letters()
                .iter()
                .zip(b.letters())
                .filter(|(x, y)| x != y)
                .count() as u8,
            Self::Frequency => {
                let shared: u8 = a
                    .letter_counts()
                    .iter()
                    .zip(b.letter_counts())
                    .map(|(&x, y)| x.min(y))
                    .sum();
                WORD_LENGTH as u8 - shared
            }
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hamming => "hamming",
            Self::Frequency => "frequency",
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lazily filled distance cache keyed by unordered word pairs
///
/// Each pair is stored once under its lexicographically ordered key. Entries are
/// only ever added.
#[derive(Debug, Clone)]
pub struct PairDistanceCache {
    metric: DistanceMetric,
    pairs: FxHashMap<(Word, Word), u8>,
}

impl PairDistanceCache {
    #[must_use]
    pub fn new(metric: DistanceMetric) -> Self {
        Self {
            metric,
            pairs: FxHashMap::default(),
        }
    }

    /// Distance between `a` and `b`, computing it on first request
    pub fn get(&mut self, a: &Word, b: &Word) -> u8 {
        let key = if a <= b { (*a, *b) } else { (*b, *a) };
        let metric = self.metric;
        *self
            .pairs
            .entry(key)
            .or_insert_with(|| metric.distance(&key.0, &key.1))
    }

    #[must_use]
    pub const fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Number of cached pairs
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Distance-minimizing strategy
///
/// Chosen guesses are memoized by constraint key, so structurally identical
/// states reached through different histories are answered from the memo.
pub struct DistanceStrategy {
    cache: PairDistanceCache,
    memo: FxHashMap<(ConstraintKey, bool), Word>,
}

impl DistanceStrategy {
    #[must_use]
    pub fn new(metric: DistanceMetric) -> Self {
        Self {
            cache: PairDistanceCache::new(metric),
            memo: FxHashMap::default(),
        }
    }

    #[must_use]
    pub const fn cache(&self) -> &PairDistanceCache {
        &self.cache
    }

    /// Candidate from `pool` with the smallest total distance to `targets`
    ///
    /// Ties go to the first minimum in pool order.
    fn most_central(&mut self, pool: &[Word], targets: &[Word]) -> Option<Word> {
        let mut best: Option<(u32, Word)> = None;
        for candidate in pool {
            let total: u32 = targets
                .iter()
                .map(|target| u32::from(self.cache.get(candidate, target)))
                .sum();
            if best.is_none_or(|(lowest, _)| total < lowest) {
                best = Some((total, *candidate));
            }
        }
        best.map(|(_, word)| word)
    }
}

impl Strategy for DistanceStrategy {
    fn name(&self) -> String {
        format!("DistanceSolver({})", self.cache.metric())
    }

    fn choose(&mut self, state: &ConstraintState) -> Result<Word, StrategyError> {
        let targets = state.answers();
        if targets.is_empty() {
            return Err(StrategyError::ExhaustedSearch);
        }

        let explore = state.turns_taken() < EXPLORATION_TURNS;
        let memo_key = (*state.key(), explore);
        if let Some(&word) = self.memo.get(&memo_key) {
            return Ok(word);
        }

        let pool = if explore { state.words_all() } else { targets };
        let best = self
            .most_central(pool, targets)
            .ok_or(StrategyError::ExhaustedSearch)?;
        self.memo.insert(memo_key, best);
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GuessRow;

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| w(s)).collect()
    }

    #[test]
    fn hamming_counts_differing_positions() {
        let d = DistanceMetric::Hamming;
        assert_eq!(d.distance(&w("crane"), &w("crane")), 0);
        assert_eq!(d.distance(&w("crane"), &w("grape")), 2);
        assert_eq!(d.distance(&w("abcde"), &w("bcdea")), 5);
    }

    #[test]
    fn frequency_uses_multiset_intersection() {
        let d = DistanceMetric::Frequency;
        assert_eq!(d.distance(&w("abcde"), &w("bcdea")), 0);
        assert_eq!(d.distance(&w("crane"), &w("fizzy")), 5);
        // speed/erase share s, e, e
        assert_eq!(d.distance(&w("speed"), &w("erase")), 2);
        assert_eq!(d.distance(&w("aaaaa"), &w("abbbb")), 4);
    }

    #[test]
    fn metrics_are_symmetric() {
        let list = words(&["crane", "speed", "erase", "eerie", "mummy"]);
        for metric in [DistanceMetric::Hamming, DistanceMetric::Frequency] {
            for a in &list {
                for b in &list {
                    assert_eq!(metric.distance(a, b), metric.distance(b, a));
                }
            }
        }
    }

    #[test]
    fn cache_stores_unordered_pairs_once() {
        let mut cache = PairDistanceCache::new(DistanceMetric::Hamming);
        let (a, b) = (w("slate"), w("crane"));
        assert_eq!(cache.get(&a, &b), 3);
        assert_eq!(cache.get(&b, &a), 3);
        assert_eq!(cache.len(), 1);
        cache.get(&a, &a);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn picks_minimum_total_distance() {
        // "bbbbc" is within 1 of everything else
        let answers = words(&["bbbbb", "bbbbc", "bbbcc", "cbbbc"]);
        let state = ConstraintState::new(answers.clone(), answers);
        let mut strategy = DistanceStrategy::new(DistanceMetric::Hamming);
        assert_eq!(strategy.choose(&state).unwrap(), w("bbbbc"));
    }

    #[test]
    fn ties_go_to_first_in_pool_order() {
        let answers = words(&["zzzzz", "aaaaa"]);
        let state = ConstraintState::new(answers.clone(), answers);
        let mut strategy = DistanceStrategy::new(DistanceMetric::Hamming);
        assert_eq!(strategy.choose(&state).unwrap(), w("zzzzz"));
    }

    #[test]
    fn explores_full_dictionary_early_then_narrows() {
        // "bbbbc" is central but not an answer
        let all = words(&["bbbbb", "bbbbc", "bbbcc", "cbbbc", "dbbbb"]);
        let answers = words(&["bbbbb", "bbbcc", "cbbbc"]);
        let state = ConstraintState::new(all, answers);
        let mut strategy = DistanceStrategy::new(DistanceMetric::Hamming);

        assert_eq!(strategy.choose(&state).unwrap(), w("bbbbc"));

        // After two rows the pool is restricted to plausible answers
        let secret = w("bbbbb");
        let later = state
            .update(GuessRow::score(w("dbbbb"), &secret))
            .update(GuessRow::score(w("dbbbb"), &secret));
        assert_eq!(later.turns_taken(), 2);
        let guess = strategy.choose(&later).unwrap();
        assert!(later.answers().contains(&guess));
    }

    #[test]
    fn memo_is_keyed_by_structure() {
        let answers = words(&["bbbbb", "bbbbc", "bbbcc", "cbbbc"]);
        let state = ConstraintState::new(answers.clone(), answers);
        let mut strategy = DistanceStrategy::new(DistanceMetric::Frequency);

        let first = strategy.choose(&state).unwrap();
        let cached_pairs = strategy.cache().len();
        assert_eq!(strategy.choose(&state).unwrap(), first);
        assert_eq!(strategy.cache().len(), cached_pairs);
    }

    #[test]
    fn empty_answers_is_exhausted() {
        let state = ConstraintState::new(words(&["crane"]), Vec::new());
        let mut strategy = DistanceStrategy::new(DistanceMetric::Hamming);
        assert_eq!(strategy.choose(&state), Err(StrategyError::ExhaustedSearch));
    }

    #[test]
    fn name_includes_metric() {
        let strategy = DistanceStrategy::new(DistanceMetric::Frequency);
        assert_eq!(strategy.name(), "DistanceSolver(frequency)");
    }
}
