//! Precomputed guess × secret pattern table
//!
//! Every pair from (full dictionary × answer dictionary) is scored once up
//! front. Building costs `|all| · |answers|` pattern calculations and one byte
//! of memory per pair; lookups afterwards are a single index.
//!
//! The table can be written to disk as CBOR and loaded back. Loading checks
//! the stored table against the live dictionaries so a stale or damaged file
//! is rejected instead of producing meaningless patterns.

use crate::core::{PATTERN_COUNT, Pattern, WORD_LENGTH, Word};
use crate::wordlists::Dictionary;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_cbor::{from_slice, ser::to_vec_packed};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;

/// Errors raised while persisting or restoring a pattern table
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to access pattern table {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("pattern table is not valid CBOR")]
    Codec(#[from] serde_cbor::Error),
    #[error("pattern table is corrupted: {0}")]
    Corrupted(String),
    #[error("pattern table was built for different word lists")]
    DictionaryMismatch,
}

/// On-disk form of a [`PatternTable`]
#[derive(Serialize, Deserialize)]
struct StoredTable {
    word_length: usize,
    guesses: Vec<String>,
    answers: Vec<String>,
    patterns: Vec<u8>,
}

/// Read-only lookup from (guess, secret) to pattern
#[derive(Debug, Clone)]
pub struct PatternTable {
    guesses: Vec<Word>,
    answers: Vec<Word>,
    guess_index: FxHashMap<Word, usize>,
    answer_index: FxHashMap<Word, usize>,
    /// Row-major: one row of `answers.len()` patterns per guess
    patterns: Vec<Pattern>,
}

impl PatternTable {
    /// Score every (guess, answer) pair of the dictionary
    #[must_use]
    pub fn build(dictionary: &Dictionary) -> Self {
        let start = Instant::now();
        let guesses = dictionary.all().to_vec();
        let answers = dictionary.answers().to_vec();

        let mut patterns = Vec::with_capacity(guesses.len() * answers.len());
        for guess in &guesses {
            patterns.extend(answers.iter().map(|secret| Pattern::calculate(guess, secret)));
        }

        log::info!(
            "built pattern table: {} x {} pairs in {:.2?}",
            guesses.len(),
            answers.len(),
            start.elapsed()
        );
        Self::from_parts(guesses, answers, patterns)
    }

    fn from_parts(guesses: Vec<Word>, answers: Vec<Word>, patterns: Vec<Pattern>) -> Self {
        let index = |words: &[Word]| {
            words
                .iter()
                .enumerate()
                .map(|(i, w)| (*w, i))
                .collect::<FxHashMap<_, _>>()
        };
        Self {
            guess_index: index(&guesses),
            answer_index: index(&answers),
            guesses,
            answers,
            patterns,
        }
    }

    /// Pattern `guess` produces against `secret`
    ///
    /// Returns `None` if either word is outside the table.
    #[must_use]
    pub fn pattern(&self, guess: &Word, secret: &Word) -> Option<Pattern> {
        let g = self.guess_position(guess)?;
        let s = self.answer_position(secret)?;
        Some(self.pattern_at(g, s))
    }

    /// Pattern by table positions
    ///
    /// # Panics
    /// Panics if either position is out of range.
    #[must_use]
    pub fn pattern_at(&self, guess_position: usize, answer_position: usize) -> Pattern {
        self.row(guess_position)[answer_position]
    }

    /// All patterns of one guess, in answer order
    #[must_use]
    pub fn row(&self, guess_position: usize) -> &[Pattern] {
        let width = self.answers.len();
        let start = guess_position * width;
        &self.patterns[start..start + width]
    }

    #[must_use]
    pub fn guess_position(&self, word: &Word) -> Option<usize> {
        self.guess_index.get(word).copied()
    }

    #[must_use]
    pub fn answer_position(&self, word: &Word) -> Option<usize> {
        self.answer_index.get(word).copied()
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Write the table to `path` as packed CBOR
    ///
    /// # Errors
    /// Returns an error if encoding or writing the file fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), TableError> {
        let path = path.as_ref();
        let stored = StoredTable {
            word_length: WORD_LENGTH,
            guesses: self.guesses.iter().map(ToString::to_string).collect(),
            answers: self.answers.iter().map(ToString::to_string).collect(),
            patterns: self.patterns.iter().map(|p| p.value()).collect(),
        };
        let bytes = to_vec_packed(&stored)?;
        fs::write(path, bytes).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("saved pattern table to {}", path.display());
        Ok(())
    }

    /// Read a table from `path` and check it against `dictionary`
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or decoded, if its contents
    /// are inconsistent, or if it was built from other word lists.
    pub fn load<P: AsRef<Path>>(path: P, dictionary: &Dictionary) -> Result<Self, TableError> {
        let path = path.as_ref();
        let start = Instant::now();
        let bytes = fs::read(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let stored: StoredTable = from_slice(&bytes)?;
        let table = Self::restore(stored, dictionary)?;
        log::info!(
            "loaded pattern table from {} in {:.2?}",
            path.display(),
            start.elapsed()
        );
        Ok(table)
    }

    /// Load `path` if it exists, otherwise build the table and write it there
    ///
    /// Without a path the table is only built in memory.
    ///
    /// # Errors
    /// Returns an error if an existing file is invalid or the new file cannot
    /// be written.
    pub fn load_or_build(path: Option<&Path>, dictionary: &Dictionary) -> Result<Self, TableError> {
        match path {
            Some(path) if path.exists() => Self::load(path, dictionary),
            Some(path) => {
                let table = Self::build(dictionary);
                table.save(path)?;
                Ok(table)
            }
            None => Ok(Self::build(dictionary)),
        }
    }

    fn restore(stored: StoredTable, dictionary: &Dictionary) -> Result<Self, TableError> {
        if stored.word_length != WORD_LENGTH {
            return Err(TableError::Corrupted(format!(
                "word length {} (expected {WORD_LENGTH})",
                stored.word_length
            )));
        }
        let expected = stored.guesses.len() * stored.answers.len();
        if stored.patterns.len() != expected {
            return Err(TableError::Corrupted(format!(
                "{} patterns for a {} x {} table",
                stored.patterns.len(),
                stored.guesses.len(),
                stored.answers.len()
            )));
        }

        let guesses = parse_words(&stored.guesses)?;
        let answers = parse_words(&stored.answers)?;
        if guesses != dictionary.all() || answers != dictionary.answers() {
            return Err(TableError::DictionaryMismatch);
        }

        let patterns = stored
            .patterns
            .iter()
            .map(|&byte| {
                Pattern::new(byte).ok_or_else(|| {
                    TableError::Corrupted(format!("pattern byte {byte} is not below {PATTERN_COUNT}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let table = Self::from_parts(guesses, answers, patterns);

        // Each answer scored against itself must be all-exact
        for answer in &table.answers {
            if table.pattern(answer, answer) != Some(Pattern::PERFECT) {
                return Err(TableError::Corrupted(format!(
                    "{answer} against itself is not a full match"
                )));
            }
        }
        Ok(table)
    }
}

fn parse_words(list: &[String]) -> Result<Vec<Word>, TableError> {
    list.iter()
        .map(|s| Word::new(s).map_err(|e| TableError::Corrupted(format!("{s:?}: {e}"))))
        .collect()
}
