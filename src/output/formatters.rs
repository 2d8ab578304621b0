//! Formatting utilities for terminal output

use crate::commands::ScoreCard;
use std::fmt::Write;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a rate in `[0, 1]` as a percentage
#[must_use]
pub fn format_percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// Format an average winning turn, or a dash when nothing was won
#[must_use]
pub fn format_average(average: Option<f64>) -> String {
    average.map_or_else(|| "-".to_string(), |a| format!("{a:.3}"))
}

/// Benchmark results as a markdown table
#[must_use]
pub fn results_table(cards: &[ScoreCard]) -> String {
    let mut table = String::from(
        "| Solver | Success Rate | Average Score (Success only) |\n|---|---|---|\n",
    );
    for card in cards {
        let _ = writeln!(
            table,
            "| {} | {} | {} |",
            card.name,
            format_percent(card.success_rate()),
            format_average(card.average_score())
        );
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MatchOutcome;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn percent_and_average() {
        assert_eq!(format_percent(0.5), "50.00%");
        assert_eq!(format_percent(1.0), "100.00%");
        assert_eq!(format_average(Some(3.5)), "3.500");
        assert_eq!(format_average(None), "-");
    }

    #[test]
    fn markdown_table_rows() {
        let mut card = ScoreCard::new("DistanceSolver(hamming)".to_string(), 6);
        card.record(MatchOutcome::Won(3));
        card.record(MatchOutcome::Lost);

        let table = results_table(&[card]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "| Solver | Success Rate | Average Score (Success only) |");
        assert_eq!(lines[2], "| DistanceSolver(hamming) | 50.00% | 3.000 |");
        assert_eq!(lines.len(), 3);
    }
}
