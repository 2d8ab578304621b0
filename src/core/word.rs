//! Wordle word representation
//!
//! A Word is a fixed-length run of lowercase ASCII letters stored inline, so it is
//! `Copy` and cheap to hash. Filtered candidate lists hold words by value.

use super::{ALPHABET_SIZE, WORD_LENGTH};
use std::fmt;
use thiserror::Error;

/// A fixed-length lowercase word
///
/// Ordering is lexicographic on the letters, which the distance cache uses to
/// canonicalize unordered pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

/// Error type for malformed words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters a-z: {0:?}")]
    InvalidCharacters(String),
}

/// Map a lowercase ASCII letter to its alphabet index (0-25)
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// Map an alphabet index (0-25) back to its lowercase ASCII letter
#[inline]
#[must_use]
pub const fn index_letter(index: usize) -> u8 {
    b'a' + index as u8
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if the length is not [`WORD_LENGTH`] or if any
    /// character is outside `a..=z`.
    ///
    /// # Examples
    /// ```
    /// use wordle_lab::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.as_str(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let text = text.to_lowercase();

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        let letters: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        Ok(Self(letters))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Construction only admits ASCII letters
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Per-letter occurrence counts, indexed by [`letter_index`]
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &letter in &self.0 {
            counts[letter_index(letter)] += 1;
        }
        counts
    }

    /// Check whether the two words share any letter
    #[must_use]
    pub fn shares_letter_with(&self, other: &Self) -> bool {
        self.0.iter().any(|letter| other.0.contains(letter))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.as_str(), "crane");
        assert_eq!(word.letters(), b"crane");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.as_str(), "crane");
        assert_eq!(word, Word::new("crane").unwrap());
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("toolong"), Err(WordError::InvalidLength(7)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("cran3"),
            Err(WordError::InvalidCharacters(_))
        ));
        assert!(Word::new("cran ").is_err());
        assert!(Word::new("crân").is_err());
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.letter_at(0), b'c');
        assert_eq!(word.letter_at(4), b'e');
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let counts = Word::new("speed").unwrap().letter_counts();
        assert_eq!(counts[letter_index(b'e')], 2);
        assert_eq!(counts[letter_index(b's')], 1);
        assert_eq!(counts[letter_index(b'z')], 0);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 5);
    }

    #[test]
    fn word_shares_letter() {
        let crane = Word::new("crane").unwrap();
        assert!(crane.shares_letter_with(&Word::new("grape").unwrap()));
        assert!(!crane.shares_letter_with(&Word::new("fizzy").unwrap()));
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let a = Word::new("apple").unwrap();
        let b = Word::new("apply").unwrap();
        assert!(a < b);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "slate".parse().unwrap();
        assert_eq!(format!("{word}"), "slate");
    }

    #[test]
    fn letter_index_roundtrip() {
        for letter in b'a'..=b'z' {
            assert_eq!(index_letter(letter_index(letter)), letter);
        }
    }
}
