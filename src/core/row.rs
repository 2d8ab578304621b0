//! A single played guess and the feedback it received

use super::{Feedback, Pattern, WORD_LENGTH, Word};
use std::fmt;

/// An immutable record of one turn: the guess plus exact and misplaced flags
///
/// A position is absent when it is flagged neither exact nor misplaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessRow {
    word: Word,
    exact: [bool; WORD_LENGTH],
    misplaced: [bool; WORD_LENGTH],
}

impl GuessRow {
    /// Build a row from a guess and the pattern it received
    #[must_use]
    pub fn new(word: Word, pattern: Pattern) -> Self {
        let feedback = pattern.feedback();
        Self {
            word,
            exact: feedback.map(|f| f == Feedback::Exact),
            misplaced: feedback.map(|f| f == Feedback::Present),
        }
    }

    /// Score `guess` against `secret` and record the result
    #[must_use]
    pub fn score(guess: Word, secret: &Word) -> Self {
        Self::new(guess, Pattern::calculate(&guess, secret))
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> Word {
        self.word
    }

    #[inline]
    #[must_use]
    pub const fn is_exact(&self, position: usize) -> bool {
        self.exact[position]
    }

    #[inline]
    #[must_use]
    pub const fn is_misplaced(&self, position: usize) -> bool {
        self.misplaced[position]
    }

    /// Feedback at one position
    #[must_use]
    pub const fn feedback_at(&self, position: usize) -> Feedback {
        if self.exact[position] {
            Feedback::Exact
        } else if self.misplaced[position] {
            Feedback::Present
        } else {
            Feedback::Absent
        }
    }

    /// Re-encode the row's feedback
    #[must_use]
    pub fn pattern(&self) -> Pattern {
        let feedback: [Feedback; WORD_LENGTH] = std::array::from_fn(|i| self.feedback_at(i));
        Pattern::from_feedback(&feedback)
    }

    /// True when every position is exact
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.exact.iter().all(|&e| e)
    }
}

impl fmt::Display for GuessRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.pattern().to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn row_flags_follow_pattern() {
        let row = GuessRow::score(w("sassy"), &w("spasm"));
        assert!(row.is_exact(0));
        assert!(row.is_misplaced(1));
        assert!(!row.is_exact(2) && !row.is_misplaced(2));
        assert!(row.is_exact(3));
        assert_eq!(row.feedback_at(4), Feedback::Absent);
        assert!(!row.is_solved());
    }

    #[test]
    fn row_pattern_roundtrip() {
        let pattern = Pattern::calculate(&w("allee"), &w("eagle"));
        let row = GuessRow::new(w("allee"), pattern);
        assert_eq!(row.pattern(), pattern);
    }

    #[test]
    fn row_solved() {
        let row = GuessRow::score(w("crane"), &w("crane"));
        assert!(row.is_solved());
        assert_eq!(row.to_string(), "crane 🟩🟩🟩🟩🟩");
    }
}
