//! Benchmark command
//!
//! Plays many simulated matches per strategy and tallies the outcomes. Every
//! strategy faces the same secret sequence, drawn from one process seed.

use crate::core::{NUMBER_OF_TURNS, Word};
use crate::game::{DrawPolicy, Game, GameStatus};
use crate::solver::{PatternTable, Strategy, StrategyError, StrategyType};
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Settings shared by every strategy in a run
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    pub games: usize,
    pub seed: u64,
    pub hard_mode: bool,
    pub draw: DrawPolicy,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: 0,
            hard_mode: true,
            draw: DrawPolicy::default(),
        }
    }
}

/// How one simulated match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Solved on the given turn (1-based)
    Won(usize),
    /// Turn budget ran out
    Lost,
    /// The strategy had no candidate left
    Exhausted,
    /// The engine refused the strategy's guess
    Rejected(Word),
}

/// Tally of one strategy's matches
#[derive(Debug, Clone)]
pub struct ScoreCard {
    pub name: String,
    /// Wins indexed by turn - 1
    pub wins_by_turn: Vec<usize>,
    pub losses: usize,
    pub exhausted: usize,
    pub rejected: usize,
    pub duration: Duration,
}

impl ScoreCard {
    #[must_use]
    pub fn new(name: String, turn_budget: usize) -> Self {
        Self {
            name,
            wins_by_turn: vec![0; turn_budget],
            losses: 0,
            exhausted: 0,
            rejected: 0,
            duration: Duration::ZERO,
        }
    }

    pub fn record(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Won(turn) => {
                if turn > self.wins_by_turn.len() {
                    self.wins_by_turn.resize(turn, 0);
                }
                self.wins_by_turn[turn - 1] += 1;
            }
            MatchOutcome::Lost => self.losses += 1,
            MatchOutcome::Exhausted => self.exhausted += 1,
            MatchOutcome::Rejected(_) => self.rejected += 1,
        }
    }

    #[must_use]
    pub fn wins(&self) -> usize {
        self.wins_by_turn.iter().sum()
    }

    #[must_use]
    pub fn games(&self) -> usize {
        self.wins() + self.losses + self.exhausted + self.rejected
    }

    /// Fraction of matches won, in `[0, 1]`
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            games => self.wins() as f64 / games as f64,
        }
    }

    /// Mean winning turn, `None` without wins
    #[must_use]
    pub fn average_score(&self) -> Option<f64> {
        let wins = self.wins();
        if wins == 0 {
            return None;
        }
        let total: usize = self
            .wins_by_turn
            .iter()
            .enumerate()
            .map(|(i, &count)| (i + 1) * count)
            .sum();
        Some(total as f64 / wins as f64)
    }
}

/// Play the engine's current match to the end with `strategy`
///
/// # Errors
/// Returns strategy failures other than `ExhaustedSearch`, which is an outcome.
pub fn play_match<S: Strategy + ?Sized>(
    game: &mut Game<'_>,
    strategy: &mut S,
) -> Result<MatchOutcome, StrategyError> {
    while game.status() == GameStatus::InProgress {
        let guess = match strategy.choose(game.state()) {
            Ok(guess) => guess,
            Err(StrategyError::ExhaustedSearch) => {
                log::debug!("{} ran out of candidates", strategy.name());
                return Ok(MatchOutcome::Exhausted);
            }
            Err(err) => return Err(err),
        };
        if let Err(reason) = game.try_guess(&guess) {
            log::warn!("{} guessed {guess}: {reason}", strategy.name());
            return Ok(MatchOutcome::Rejected(guess));
        }
    }

    Ok(match game.status() {
        GameStatus::Won => MatchOutcome::Won(game.turns_used()),
        _ => MatchOutcome::Lost,
    })
}

/// Run `config.games` matches with one strategy
///
/// The engine is reseeded with `config.seed` first, so separate calls see the
/// same secrets.
///
/// # Errors
/// Returns the first strategy failure that is not an exhausted search.
pub fn run_benchmark<S: Strategy + ?Sized>(
    strategy: &mut S,
    dictionary: &Dictionary,
    config: &BenchmarkConfig,
    progress: &ProgressBar,
) -> Result<ScoreCard, StrategyError> {
    let start = Instant::now();
    let mut game = Game::new(dictionary, config.draw, Some(config.seed));
    let mut card = ScoreCard::new(strategy.name(), NUMBER_OF_TURNS);

    progress.set_length(config.games as u64);
    progress.set_position(0);
    progress.set_message(card.name.clone());

    for i in 0..config.games {
        let seed = (i == 0).then_some(config.seed);
        game.start_game(config.hard_mode, seed);
        card.record(play_match(&mut game, strategy)?);
        progress.inc(1);
    }

    card.duration = start.elapsed();
    log::info!(
        "{}: {}/{} won in {:.2?}",
        card.name,
        card.wins(),
        card.games(),
        card.duration
    );
    Ok(card)
}

/// Benchmark several strategies against the same secrets
///
/// # Errors
/// Returns an error if a strategy cannot be built or fails mid-run.
pub fn run_benchmarks(
    kinds: &[StrategyType],
    table: Option<&PatternTable>,
    dictionary: &Dictionary,
    config: &BenchmarkConfig,
) -> Result<Vec<ScoreCard>, StrategyError> {
    let progress = ProgressBar::new(config.games as u64);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} {msg:<28} [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
    ) {
        progress.set_style(style.progress_chars("█▓▒░"));
    }

    let mut cards = Vec::with_capacity(kinds.len());
    for &kind in kinds {
        let mut strategy = kind.build(table, config.seed)?;
        cards.push(run_benchmark(&mut strategy, dictionary, config, &progress)?);
    }
    progress.finish_and_clear();
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{DistanceMetric, DistanceStrategy, RandomPool, RandomStrategy};

    fn dictionary() -> Dictionary {
        Dictionary::from_strs(
            &[
                "slate", "crane", "irate", "crate", "grate", "plate", "trace", "caret", "fizzy",
                "mummy",
            ],
            &["irate", "crate", "grate", "plate", "trace", "caret", "slate"],
        )
        .unwrap()
    }

    fn config(games: usize) -> BenchmarkConfig {
        BenchmarkConfig {
            games,
            seed: 42,
            ..BenchmarkConfig::default()
        }
    }

    #[test]
    fn score_card_accounting() {
        let mut card = ScoreCard::new("test".to_string(), NUMBER_OF_TURNS);
        card.record(MatchOutcome::Won(2));
        card.record(MatchOutcome::Won(4));
        card.record(MatchOutcome::Won(3));
        card.record(MatchOutcome::Lost);
        card.record(MatchOutcome::Exhausted);
        card.record(MatchOutcome::Rejected(Word::new("mummy").unwrap()));

        assert_eq!(card.wins(), 3);
        assert_eq!(card.games(), 6);
        assert!((card.success_rate() - 0.5).abs() < f64::EPSILON);
        assert!((card.average_score().unwrap() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_score_card() {
        let card = ScoreCard::new("empty".to_string(), NUMBER_OF_TURNS);
        assert_eq!(card.games(), 0);
        assert!(card.success_rate().abs() < f64::EPSILON);
        assert_eq!(card.average_score(), None);
    }

    #[test]
    fn every_game_is_counted() {
        let dict = dictionary();
        let mut strategy = DistanceStrategy::new(DistanceMetric::Hamming);
        let card =
            run_benchmark(&mut strategy, &dict, &config(20), &ProgressBar::hidden()).unwrap();

        assert_eq!(card.games(), 20);
        assert_eq!(card.rejected, 0);
        assert_eq!(card.wins_by_turn.len(), NUMBER_OF_TURNS);
        if let Some(average) = card.average_score() {
            assert!((1.0..=NUMBER_OF_TURNS as f64).contains(&average));
        }
    }

    #[test]
    fn secrets_do_not_depend_on_the_strategy() {
        let dict = dictionary();
        let config = config(10);

        let secrets = |pool| {
            let mut game = Game::new(&dict, config.draw, Some(config.seed));
            let mut strategy = RandomStrategy::new(pool, 1);
            (0..config.games)
                .map(|i| {
                    game.start_game(true, (i == 0).then_some(config.seed));
                    play_match(&mut game, &mut strategy).unwrap();
                    game.revealed_secret()
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(secrets(RandomPool::Answers), secrets(RandomPool::All));
    }

    #[test]
    fn same_seed_same_score_card() {
        let dict = dictionary();
        let run = || {
            let mut strategy = DistanceStrategy::new(DistanceMetric::Frequency);
            run_benchmark(&mut strategy, &dict, &config(15), &ProgressBar::hidden()).unwrap()
        };
        let (a, b) = (run(), run());
        assert_eq!(a.wins_by_turn, b.wins_by_turn);
        assert_eq!(a.losses, b.losses);
    }

    #[test]
    fn run_benchmarks_covers_every_strategy() {
        let dict = dictionary();
        let table = PatternTable::build(&dict);
        let cards = run_benchmarks(&StrategyType::ALL, Some(&table), &dict, &config(8)).unwrap();

        assert_eq!(cards.len(), StrategyType::ALL.len());
        for card in &cards {
            assert_eq!(card.games(), 8, "{}", card.name);
            assert_eq!(card.exhausted, 0, "{}", card.name);
        }
        // A tiny dictionary is always solved by the answer-restricted strategies
        let entropy = cards.iter().find(|c| c.name == "EntropySolver").unwrap();
        assert_eq!(entropy.wins(), 8);
    }

    #[test]
    fn play_match_reports_win_turn() {
        let dict = dictionary();
        let mut game = Game::new(&dict, DrawPolicy::Uniform, Some(0));
        assert!(game.start_with_secret(Word::new("slate").unwrap(), true));

        let table = PatternTable::build(&dict);
        let mut entropy = StrategyType::Entropy.build(Some(&table), 0).unwrap();
        assert_eq!(play_match(&mut game, &mut entropy), Ok(MatchOutcome::Won(1)));
    }
}
