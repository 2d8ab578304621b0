//! Turn-based Wordle match controller

use super::draw::{DrawPolicy, SecretDrawer};
use crate::core::{ConstraintState, GuessRow, NUMBER_OF_TURNS, Word};
use crate::wordlists::Dictionary;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

/// Lifecycle of a match
///
/// `Won` and `Lost` are terminal; only a new `start_game` leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(label)
    }
}

/// Why a guess was turned away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotInProgress,
    NotInDictionary,
    ViolatesHardMode,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::NotInProgress => "no game in progress",
            Self::NotInDictionary => "not in the word list",
            Self::ViolatesHardMode => "does not use every revealed hint",
        };
        f.write_str(reason)
    }
}

/// A Wordle match engine
///
/// Holds the secret, the latest constraint snapshot and the turn counter. Each
/// accepted guess replaces the snapshot with its successor.
pub struct Game<'d> {
    dictionary: &'d Dictionary,
    drawer: SecretDrawer,
    rng: StdRng,
    turn_budget: usize,
    secret: Option<Word>,
    state: ConstraintState,
    turns_left: usize,
    hard_mode: bool,
    status: GameStatus,
}

impl<'d> Game<'d> {
    /// Create an engine over `dictionary`
    ///
    /// With `seed` the secret sequence is reproducible; without it the generator
    /// is seeded from the OS.
    #[must_use]
    pub fn new(dictionary: &'d Dictionary, policy: DrawPolicy, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            dictionary,
            drawer: SecretDrawer::new(policy),
            rng,
            turn_budget: NUMBER_OF_TURNS,
            secret: None,
            state: ConstraintState::new(Vec::new(), Vec::new()),
            turns_left: 0,
            hard_mode: false,
            status: GameStatus::NotStarted,
        }
    }

    /// Override the turn budget (default [`NUMBER_OF_TURNS`])
    #[must_use]
    pub fn with_turn_budget(mut self, turns: usize) -> Self {
        self.turn_budget = turns.max(1);
        self
    }

    /// Start a new match with a drawn secret
    ///
    /// Passing `seed` reseeds the generator and restarts the shuffled cycle, so the
    /// same seed always yields the same secret sequence.
    pub fn start_game(&mut self, hard_mode: bool, seed: Option<u64>) {
        if let Some(seed) = seed {
            self.rng = StdRng::seed_from_u64(seed);
            self.drawer.reset();
        }
        let secret = self.drawer.draw(self.dictionary.answers(), &mut self.rng);
        self.begin(secret, hard_mode);
    }

    /// Start a new match against a chosen secret
    ///
    /// Returns `false` without starting if `secret` is not an answer word.
    pub fn start_with_secret(&mut self, secret: Word, hard_mode: bool) -> bool {
        if !self.dictionary.answers().contains(&secret) {
            log::debug!("{secret} is not in the answer list");
            return false;
        }
        self.begin(Some(secret), hard_mode);
        true
    }

    fn begin(&mut self, secret: Option<Word>, hard_mode: bool) {
        self.secret = secret;
        self.state = ConstraintState::new(
            self.dictionary.all().to_vec(),
            self.dictionary.answers().to_vec(),
        );
        self.turns_left = self.turn_budget;
        self.hard_mode = hard_mode;
        self.status = GameStatus::InProgress;
        log::debug!(
            "game started ({} mode, {} turns)",
            if hard_mode { "hard" } else { "normal" },
            self.turn_budget
        );
    }

    /// Play `word`
    ///
    /// Returns the new constraint state, or `None` when the guess is rejected.
    /// A rejected guess changes nothing and consumes no turn.
    pub fn guess(&mut self, word: &Word) -> Option<&ConstraintState> {
        match self.try_guess(word) {
            Ok(state) => Some(state),
            Err(reason) => {
                log::debug!("guess {word} rejected: {reason}");
                None
            }
        }
    }

    /// Like [`Game::guess`] but reports why a guess was rejected
    ///
    /// # Errors
    /// Returns the [`Rejection`] reason; the game is left untouched.
    pub fn try_guess(&mut self, word: &Word) -> Result<&ConstraintState, Rejection> {
        if self.status != GameStatus::InProgress {
            return Err(Rejection::NotInProgress);
        }
        let Some(secret) = self.secret else {
            return Err(Rejection::NotInProgress);
        };
        if !self.dictionary.contains(word) {
            return Err(Rejection::NotInDictionary);
        }
        if self.hard_mode && !self.state.filter(word) {
            return Err(Rejection::ViolatesHardMode);
        }

        let row = GuessRow::score(*word, &secret);
        log::debug!("{row}");

        self.turns_left -= 1;
        if row.is_solved() {
            self.status = GameStatus::Won;
            log::debug!("game won with {} turns left", self.turns_left);
        } else if self.turns_left == 0 {
            self.status = GameStatus::Lost;
            log::debug!("game lost, secret was {secret}");
        }

        self.state = self.state.update(row);
        Ok(&self.state)
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn turns_left(&self) -> usize {
        self.turns_left
    }

    /// Turns consumed in the current match
    #[must_use]
    pub const fn turns_used(&self) -> usize {
        self.turn_budget - self.turns_left
    }

    #[must_use]
    pub const fn turn_budget(&self) -> usize {
        self.turn_budget
    }

    #[must_use]
    pub const fn is_hard_mode(&self) -> bool {
        self.hard_mode
    }

    #[must_use]
    pub const fn state(&self) -> &ConstraintState {
        &self.state
    }

    /// The secret, revealed once the match is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<Word> {
        self.secret.filter(|_| self.status.is_finished())
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }
}
