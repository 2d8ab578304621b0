//! Wordle match simulation
//!
//! The engine owns the secret and turn counter and hands out immutable
//! constraint snapshots after each accepted guess.

mod draw;
mod engine;

pub use draw::{DrawPolicy, SecretDrawer};
pub use engine::{Game, GameStatus, Rejection};
