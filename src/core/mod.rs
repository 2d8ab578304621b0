//! Core domain types for Wordle
//!
//! Words, the feedback pattern codec, played rows and the constraint state they
//! imply. Nothing here performs I/O.

mod constraints;
mod pattern;
mod row;
mod word;

pub use constraints::{ConstraintKey, ConstraintState, LetterSet};
pub use pattern::{Feedback, PATTERN_COUNT, Pattern};
pub use row::GuessRow;
pub use word::{Word, WordError, index_letter, letter_index};

/// Letters per word
pub const WORD_LENGTH: usize = 5;

/// Size of the `a..=z` alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Turn budget of a standard match
pub const NUMBER_OF_TURNS: usize = 6;
