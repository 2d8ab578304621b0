//! Wordle Lab
//!
//! A Wordle simulator for comparing guessing strategies: a feedback pattern
//! codec, constraint propagation over the word lists, a turn-based match
//! engine, and distance, entropy and random strategies.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_lab::core::{Word, Pattern};
//! use wordle_lab::game::{DrawPolicy, Game, GameStatus};
//! use wordle_lab::wordlists::Dictionary;
//!
//! // Calculate a pattern
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("slate").unwrap();
//! let pattern = Pattern::calculate(&guess, &answer);
//! println!("Pattern value: {}", pattern.value());
//!
//! // Play a match
//! let dict = Dictionary::from_strs(&["crane", "slate"], &["slate"]).unwrap();
//! let mut game = Game::new(&dict, DrawPolicy::Uniform, Some(1));
//! game.start_game(true, None);
//! let state = game.guess(&guess).unwrap();
//! assert_eq!(state.answers(), &[answer]);
//! game.guess(&answer);
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Match engine
pub mod game;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
