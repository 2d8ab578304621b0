//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word, or all copies already accounted for)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Exact (letter in correct position)
//!
//! Position `i` contributes `digit × 3^i`, so position 0 is the least significant
//! digit. Every encoder, decoder and parser in the crate uses this order.

use super::{ALPHABET_SIZE, WORD_LENGTH, Word, word::letter_index};
use std::fmt;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Absent = 0,
    Present = 1,
    Exact = 2,
}

impl Feedback {
    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Exact,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }
}

/// Number of distinct patterns (3^WORD_LENGTH)
pub const PATTERN_COUNT: usize = 3usize.pow(WORD_LENGTH as u32);

/// Feedback pattern for a Wordle guess
///
/// Represents the per-position feedback as a single byte value in `[0, 243)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

impl Pattern {
    /// All exact (perfect match)
    pub const PERFECT: Self = Self((PATTERN_COUNT - 1) as u8);

    /// All absent
    pub const NONE: Self = Self(0);

    /// Create a pattern from a raw value
    ///
    /// Returns `None` if `value >= 243`.
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if (value as usize) < PATTERN_COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw pattern value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Index into per-pattern count arrays
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is a perfect match (all exact)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Calculate the pattern when `guess` is played against `secret`
    ///
    /// Duplicate letters follow Wordle's rules: exact matches consume their
    /// letter first, then misplaced letters are flagged left to right while the
    /// secret still has unconsumed copies.
    ///
    /// # Examples
    /// ```
    /// use wordle_lab::core::{Feedback, Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("grape").unwrap();
    /// let pattern = Pattern::calculate(&guess, &secret);
    ///
    /// use Feedback::{Absent, Exact};
    /// assert_eq!(pattern.feedback(), [Absent, Exact, Exact, Absent, Exact]);
    /// // 0 + 2×3 + 2×9 + 0×27 + 2×81 = 186
    /// assert_eq!(pattern.value(), 186);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut result = [Feedback::Absent; WORD_LENGTH];
        let mut pool: [u8; ALPHABET_SIZE] = secret.letter_counts();

        for (i, (g, s)) in guess.letters().iter().zip(secret.letters()).enumerate() {
            if g == s {
                result[i] = Feedback::Exact;
                pool[letter_index(*g)] -= 1;
            }
        }

        for (i, &g) in guess.letters().iter().enumerate() {
            if result[i] == Feedback::Exact {
                continue;
            }
            let remaining = &mut pool[letter_index(g)];
            if *remaining > 0 {
                result[i] = Feedback::Present;
                *remaining -= 1;
            }
        }

        Self::from_feedback(&result)
    }

    /// Encode per-position feedback
    #[must_use]
    pub fn from_feedback(feedback: &[Feedback; WORD_LENGTH]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for &state in feedback {
            value += state as u8 * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(value)
    }

    /// Decode into per-position feedback
    #[must_use]
    pub fn feedback(self) -> [Feedback; WORD_LENGTH] {
        let mut result = [Feedback::Absent; WORD_LENGTH];
        let mut val = self.0;
        for slot in &mut result {
            *slot = Feedback::from_digit(val % 3);
            val /= 3;
        }
        result
    }

    /// Count the number of exact positions
    #[must_use]
    pub fn count_exact(self) -> usize {
        self.feedback()
            .iter()
            .filter(|&&f| f == Feedback::Exact)
            .count()
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for exact
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'.'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_lab::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        let mut count = 0;

        for ch in s.chars() {
            let slot = feedback.get_mut(count)?;
            *slot = match ch {
                'G' | 'g' | '🟩' => Feedback::Exact,
                'Y' | 'y' | '🟨' => Feedback::Present,
                '-' | '_' | '.' | '⬜' => Feedback::Absent,
                _ => return None,
            };
            count += 1;
        }

        (count == WORD_LENGTH).then(|| Self::from_feedback(&feedback))
    }

    /// Convert pattern to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.feedback()
            .iter()
            .map(|f| match f {
                Feedback::Exact => '🟩',
                Feedback::Present => '🟨',
                Feedback::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in self.feedback() {
            let ch = match state {
                Feedback::Exact => 'G',
                Feedback::Present => 'Y',
                Feedback::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
