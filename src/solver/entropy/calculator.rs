//! Shannon entropy calculation for Wordle patterns
//!
//! Given a guess and set of candidates, computes the expected information gain.

use super::table::PatternTable;
use crate::core::{PATTERN_COUNT, Pattern, Word};

/// Number of candidates falling into each pattern, indexed by pattern value
pub type PatternCounts = [u32; PATTERN_COUNT];

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits. Patterns are computed
/// directly, without a precomputed table.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing pattern x.
///
/// # Examples
/// ```
/// use wordle_lab::core::Word;
/// use wordle_lab::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    let mut counts = [0u32; PATTERN_COUNT];
    for candidate in candidates {
        counts[Pattern::calculate(guess, candidate).index()] += 1;
    }
    shannon_entropy(&counts)
}

/// Pattern distribution of one table row over a set of secret positions
pub(crate) fn table_distribution(
    table: &PatternTable,
    guess_position: usize,
    secret_positions: &[usize],
    counts: &mut PatternCounts,
) {
    counts.fill(0);
    let row = table.row(guess_position);
    for &secret in secret_positions {
        counts[row[secret].index()] += 1;
    }
}

/// Calculate Shannon entropy from a pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
///
/// # Examples
/// ```
/// use wordle_lab::solver::entropy::shannon_entropy;
///
/// let uniform = [25, 25, 25, 25];
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(counts: &[u32]) -> f64 {
    let total: u64 = counts.iter().map(|&c| u64::from(c)).sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;

    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = f64::from(count) / total;
            -p * p.log2()
        })
        .sum()
}
