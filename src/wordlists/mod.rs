//! Word lists for Wordle simulation
//!
//! A [`Dictionary`] pairs the full guess list with the answer list. Both are
//! immutable inputs for the lifetime of the process.

pub mod loader;

use crate::core::{Word, WordError};
use rustc_hash::FxHashSet;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while assembling dictionaries
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line}: {source}", .path.display())]
    InvalidWord {
        path: PathBuf,
        line: usize,
        #[source]
        source: WordError,
    },
    #[error("{0} word list is empty")]
    Empty(&'static str),
    #[error("answer {0} is missing from the full word list")]
    AnswerNotGuessable(Word),
}

/// The full guess dictionary and its answer subset
#[derive(Debug, Clone)]
pub struct Dictionary {
    all: Vec<Word>,
    answers: Vec<Word>,
    lookup: FxHashSet<Word>,
}

impl Dictionary {
    /// Create a dictionary from the two lists
    ///
    /// Duplicate entries are dropped, keeping first occurrence order.
    ///
    /// # Errors
    /// Returns an error if either list is empty or an answer is not in `all`.
    pub fn new(all: Vec<Word>, answers: Vec<Word>) -> Result<Self, DictionaryError> {
        let all = dedup(all);
        let answers = dedup(answers);

        if all.is_empty() {
            return Err(DictionaryError::Empty("full"));
        }
        if answers.is_empty() {
            return Err(DictionaryError::Empty("answer"));
        }

        let lookup: FxHashSet<Word> = all.iter().copied().collect();
        if let Some(missing) = answers.iter().find(|w| !lookup.contains(w)) {
            return Err(DictionaryError::AnswerNotGuessable(*missing));
        }

        Ok(Self {
            all,
            answers,
            lookup,
        })
    }

    /// Build a dictionary from string slices
    ///
    /// # Errors
    /// Returns an error if any entry is not a valid word, or under the same
    /// conditions as [`Dictionary::new`].
    pub fn from_strs(all: &[&str], answers: &[&str]) -> Result<Self, DictionaryError> {
        let parse = |list: &[&str], name: &str| -> Result<Vec<Word>, DictionaryError> {
            list.iter()
                .enumerate()
                .map(|(i, s)| {
                    Word::new(s).map_err(|source| DictionaryError::InvalidWord {
                        path: PathBuf::from(name),
                        line: i + 1,
                        source,
                    })
                })
                .collect()
        };
        Self::new(parse(all, "<all>")?, parse(answers, "<answers>")?)
    }

    /// All words usable as guesses
    #[must_use]
    pub fn all(&self) -> &[Word] {
        &self.all
    }

    /// Words eligible as secrets
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Check membership in the full dictionary
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }
}

fn dedup(words: Vec<Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words.into_iter().filter(|w| seen.insert(*w)).collect()
}
