//! Display functions for command results

use super::formatters::{create_progress_bar, results_table};
use crate::commands::{ScoreCard, SolveResult};
use crate::core::{Feedback, GuessRow, WORD_LENGTH};
use colored::Colorize;

/// Render a row as colored tiles: green exact, yellow misplaced, grey absent
#[must_use]
pub fn render_row(row: &GuessRow) -> String {
    let word = row.word();
    (0..WORD_LENGTH)
        .map(|i| {
            let tile = format!(" {} ", char::from(word.letter_at(i).to_ascii_uppercase()));
            let tile = match row.feedback_at(i) {
                Feedback::Exact => tile.black().on_green(),
                Feedback::Present => tile.black().on_yellow(),
                Feedback::Absent => tile.white().on_bright_black(),
            };
            tile.bold().to_string()
        })
        .collect()
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} with {}",
        result.secret.as_str().to_uppercase().bright_yellow().bold(),
        result.strategy.bright_cyan()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!("\nTurn {}: {}", i + 1, render_row(&step.row));

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if step.candidates_after > 0 {
                    let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                        reduction.log2()
                    );
                }
            }
        }
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print benchmark results: the summary table, then each strategy's spread
pub fn print_benchmark_results(cards: &[ScoreCard]) {
    println!("\n{}", results_table(cards));

    for card in cards {
        println!("{}", card.name.bright_cyan().bold());
        let games = card.games().max(1) as f64;
        for (i, &count) in card.wins_by_turn.iter().enumerate() {
            let pct = count as f64 / games * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {}: {} {count:5} ({pct:5.1}%)", i + 1, bar.green());
        }
        println!(
            "   {} {}  {} {}  {} {}  {:.2}s",
            "lost".red(),
            card.losses,
            "exhausted".yellow(),
            card.exhausted,
            "rejected".yellow(),
            card.rejected,
            card.duration.as_secs_f64()
        );
    }
}
