//! Constraint state derived from played rows
//!
//! The state keeps, per position, the set of letters still admissible there and,
//! per letter, the minimum number of copies any consistent word must contain. It
//! also carries the filtered candidates from both dictionaries.
//!
//! Equality and hashing go through [`ConstraintKey`], the canonical summary of the
//! derived constraints. Two different row histories that imply the same
//! constraints are the same state.

use super::word::{index_letter, letter_index};
use super::{ALPHABET_SIZE, GuessRow, WORD_LENGTH, Word};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A set of letters stored as a 26-bit mask
///
/// Iteration yields letters in alphabetical order, which makes the set its own
/// canonical sorted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LetterSet(u32);

impl LetterSet {
    /// Every letter of the alphabet
    pub const FULL: Self = Self((1 << ALPHABET_SIZE) - 1);

    pub const EMPTY: Self = Self(0);

    #[must_use]
    pub const fn singleton(letter: u8) -> Self {
        Self(1 << letter_index(letter))
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & (1 << letter_index(letter)) != 0
    }

    #[inline]
    pub fn remove(&mut self, letter: u8) {
        self.0 &= !(1 << letter_index(letter));
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub fn letters(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_SIZE)
            .filter(move |&i| self.0 & (1 << i) != 0)
            .map(index_letter)
    }
}

/// Canonical, hashable summary of the constraints implied by a row history
///
/// This is the cache key strategies use to memoize guesses by logical state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstraintKey {
    positions: [LetterSet; WORD_LENGTH],
    min_counts: [u8; ALPHABET_SIZE],
}

impl Default for ConstraintKey {
    fn default() -> Self {
        Self {
            positions: [LetterSet::FULL; WORD_LENGTH],
            min_counts: [0; ALPHABET_SIZE],
        }
    }
}

impl ConstraintKey {
    /// Replay `rows` in order and derive position sets and minimum letter counts
    ///
    /// Minimum counts are computed over every row before any positional narrowing,
    /// so an absent copy of a letter that is required elsewhere only removes the
    /// letter from its own position.
    #[must_use]
    pub fn derive(rows: &[GuessRow]) -> Self {
        let mut key = Self::default();

        // Strongest single-row evidence per letter, not the sum across rows
        for row in rows {
            let mut row_counts = [0u8; ALPHABET_SIZE];
            for position in 0..WORD_LENGTH {
                if row.is_exact(position) || row.is_misplaced(position) {
                    row_counts[letter_index(row.word().letter_at(position))] += 1;
                }
            }
            for (min, seen) in key.min_counts.iter_mut().zip(row_counts) {
                *min = (*min).max(seen);
            }
        }

        for row in rows {
            for position in 0..WORD_LENGTH {
                let letter = row.word().letter_at(position);
                if row.is_exact(position) {
                    key.positions[position] = LetterSet::singleton(letter);
                } else if row.is_misplaced(position) || key.is_required(letter) {
                    key.positions[position].remove(letter);
                } else {
                    for set in &mut key.positions {
                        set.remove(letter);
                    }
                }
            }
        }

        key
    }

    /// Letters admissible at `position`
    #[must_use]
    pub const fn admissible(&self, position: usize) -> LetterSet {
        self.positions[position]
    }

    /// Minimum number of copies of `letter` a consistent word must contain
    #[must_use]
    pub const fn min_count(&self, letter: u8) -> u8 {
        self.min_counts[letter_index(letter)]
    }

    #[must_use]
    pub const fn is_required(&self, letter: u8) -> bool {
        self.min_count(letter) > 0
    }

    /// Required letters with their minimum counts, in alphabetical order
    pub fn required_letters(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.min_counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(i, &count)| (index_letter(i), count))
    }

    /// Check whether `word` is consistent with these constraints
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        let positions_ok = word
            .letters()
            .iter()
            .zip(&self.positions)
            .all(|(&letter, set)| set.contains(letter));
        if !positions_ok {
            return false;
        }

        let counts = word.letter_counts();
        counts
            .iter()
            .zip(&self.min_counts)
            .all(|(have, need)| have >= need)
    }
}

/// Immutable snapshot of everything learned so far in a match
///
/// A new snapshot is produced for every accepted guess; existing snapshots are
/// never mutated.
#[derive(Debug, Clone)]
pub struct ConstraintState {
    rows: Vec<GuessRow>,
    key: ConstraintKey,
    words_all: Vec<Word>,
    answers: Vec<Word>,
}

impl ConstraintState {
    /// Empty state over the unfiltered dictionaries
    #[must_use]
    pub fn new(words_all: Vec<Word>, answers: Vec<Word>) -> Self {
        Self {
            rows: Vec::new(),
            key: ConstraintKey::default(),
            words_all,
            answers,
        }
    }

    /// Build the successor state with `row` appended
    ///
    /// Candidates are re-filtered from this state's already filtered lists, never
    /// from the original dictionaries.
    ///
    /// # Examples
    /// ```
    /// use wordle_lab::core::{ConstraintState, GuessRow, Word};
    ///
    /// let words: Vec<Word> = ["crane", "grape", "slate"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let state = ConstraintState::new(words.clone(), words.clone());
    ///
    /// let row = GuessRow::score(words[0], &words[1]);
    /// let next = state.update(row);
    /// assert_eq!(next.answers(), &[words[1]]);
    /// assert_eq!(state.answers().len(), 3);
    /// ```
    #[must_use]
    pub fn update(&self, row: GuessRow) -> Self {
        let mut rows = Vec::with_capacity(self.rows.len() + 1);
        rows.extend_from_slice(&self.rows);
        rows.push(row);

        let key = ConstraintKey::derive(&rows);
        let narrow = |words: &[Word]| -> Vec<Word> {
            words.iter().copied().filter(|w| key.admits(w)).collect()
        };

        Self {
            words_all: narrow(&self.words_all),
            answers: narrow(&self.answers),
            rows,
            key,
        }
    }

    /// Check whether `word` satisfies every position and count constraint
    #[must_use]
    pub fn filter(&self, word: &Word) -> bool {
        self.key.admits(word)
    }

    /// Rows played so far, oldest first
    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    #[must_use]
    pub fn turns_taken(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn key(&self) -> &ConstraintKey {
        &self.key
    }

    /// Full-dictionary words consistent with the constraints
    #[must_use]
    pub fn words_all(&self) -> &[Word] {
        &self.words_all
    }

    /// Answer-dictionary words consistent with the constraints
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }
}

impl PartialEq for ConstraintState {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for ConstraintState {}

impl Hash for ConstraintState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for ConstraintState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}
