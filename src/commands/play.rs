//! Interactive play
//!
//! A human guesses against the engine, one word per input line.

use crate::core::Word;
use crate::game::{Game, GameStatus};
use crate::output::render_row;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Play one match reading guesses from `input`
///
/// Blank lines are ignored and `quit` abandons the match. Malformed or
/// rejected guesses are reported and cost nothing. Returns the final status,
/// which stays `InProgress` if the input ends early.
///
/// # Errors
/// Returns an error if reading input or writing output fails.
pub fn play_interactive<R: BufRead, W: Write>(
    game: &mut Game<'_>,
    input: R,
    mut out: W,
) -> io::Result<GameStatus> {
    writeln!(
        out,
        "Guess the {}-letter word in {} tries{}.",
        crate::core::WORD_LENGTH,
        game.turn_budget(),
        if game.is_hard_mode() { " (hard mode)" } else { "" }
    )?;

    let mut lines = input.lines();
    while game.status() == GameStatus::InProgress {
        write!(out, "{}> ", game.turns_used() + 1)?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") {
            break;
        }

        let word = match Word::new(line) {
            Ok(word) => word,
            Err(e) => {
                writeln!(out, "{}", e.to_string().yellow())?;
                continue;
            }
        };

        match game.try_guess(&word) {
            Ok(state) => {
                for row in state.rows() {
                    writeln!(out, "{}", render_row(row))?;
                }
                writeln!(out, "{} possible answers left", state.answers().len())?;
            }
            Err(reason) => writeln!(out, "{}", format!("{word}: {reason}").yellow())?,
        }
    }

    match (game.status(), game.revealed_secret()) {
        (GameStatus::Won, _) => writeln!(
            out,
            "{}",
            format!("Solved in {}!", game.turns_used()).green().bold()
        )?,
        (GameStatus::Lost, Some(secret)) => writeln!(
            out,
            "{}",
            format!("Out of turns. The word was {secret}.").red().bold()
        )?,
        _ => writeln!(out, "Game abandoned.")?,
    }
    Ok(game.status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::DrawPolicy;
    use crate::wordlists::Dictionary;
    use std::io::Cursor;

    fn dictionary() -> Dictionary {
        Dictionary::from_strs(&["crane", "grape", "slate", "fizzy"], &["grape"]).unwrap()
    }

    fn play(input: &str, hard_mode: bool) -> (GameStatus, String) {
        let dict = dictionary();
        let mut game = Game::new(&dict, DrawPolicy::Uniform, Some(3));
        game.start_game(hard_mode, None);
        let mut out = Vec::new();
        let status = play_interactive(&mut game, Cursor::new(input), &mut out).unwrap();
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn winning_game() {
        let (status, out) = play("crane\n\ngrape\n", true);
        assert_eq!(status, GameStatus::Won);
        assert!(out.contains("Solved in 2!"));
    }

    #[test]
    fn bad_input_costs_nothing() {
        let (status, out) = play("toolong\nmummy\ngrape\n", false);
        assert_eq!(status, GameStatus::Won);
        assert!(out.contains("not in the word list"));
        assert!(out.contains("Solved in 1!"));
    }

    #[test]
    fn hard_mode_rejection_is_reported() {
        // crane reveals r, a, e; fizzy uses none of them
        let (status, out) = play("crane\nfizzy\nquit\n", true);
        assert_eq!(status, GameStatus::InProgress);
        assert!(out.contains("does not use every revealed hint"));
        assert!(out.contains("Game abandoned."));
    }

    #[test]
    fn losing_reveals_the_secret() {
        let (status, out) = play(&"fizzy\n".repeat(6), false);
        assert_eq!(status, GameStatus::Lost);
        assert!(out.contains("The word was grape"));
    }

    #[test]
    fn end_of_input_abandons() {
        let (status, _) = play("crane\n", false);
        assert_eq!(status, GameStatus::InProgress);
    }
}
