use std::fmt;

use clap::ValueEnum;
use hanabi_bot::driver::{DriverError, Visibility, run_game};
use hanabi_bot::strategy::{ClueAlgorithm, CluePolicy, RandomStrategy, SearchStrategy, Strategy};
use hanabi_core::game::serialization::GameSnapshot;
use hanabi_core::game::session::Session;
use hanabi_core::model::player::PlayerId;
use hanabi_core::model::state::SetupError;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use thiserror::Error;

use crate::stats::GameStat;

/// Which strategy family fills every seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    Random,
    Clue,
    Search,
}

impl StrategyKind {
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Random => "random",
            StrategyKind::Clue => "clue",
            StrategyKind::Search => "search",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// CLI-facing spelling of the clue algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmKind {
    Random,
    FirstPlayable,
    LowestValue,
    LowestInFirstHand,
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AlgorithmKind::Random => "random",
            AlgorithmKind::FirstPlayable => "first-playable",
            AlgorithmKind::LowestValue => "lowest-value",
            AlgorithmKind::LowestInFirstHand => "lowest-in-first-hand",
        })
    }
}

impl From<AlgorithmKind> for ClueAlgorithm {
    fn from(kind: AlgorithmKind) -> ClueAlgorithm {
        match kind {
            AlgorithmKind::Random => ClueAlgorithm::RandomClue,
            AlgorithmKind::FirstPlayable => ClueAlgorithm::FirstPlayable,
            AlgorithmKind::LowestValue => ClueAlgorithm::LowestValue,
            AlgorithmKind::LowestInFirstHand => ClueAlgorithm::LowestInFirstHand,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    pub games: usize,
    pub players: usize,
    pub strategy: StrategyKind,
    pub algorithm: ClueAlgorithm,
    pub seed: u64,
    pub search_depth: usize,
    pub search_nodes: usize,
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error("game {game} aborted: {source}")]
    Game {
        game: usize,
        #[source]
        source: DriverError,
    },
}

/// Play every game of the run. All randomness derives from the master
/// seed, so the same config replays the same games move for move.
pub fn run(config: &RunConfig) -> Result<Vec<GameStat>, RunnerError> {
    let mut master = StdRng::seed_from_u64(config.seed);
    let visibility = match config.strategy {
        StrategyKind::Search => Visibility::Full,
        _ => Visibility::Masked,
    };
    let mut stats = Vec::with_capacity(config.games);
    for game in 0..config.games {
        let mut deal_rng = StdRng::seed_from_u64(master.next_u64());
        let mut session = Session::deal(config.players, &mut deal_rng)?;
        let mut table: Vec<Box<dyn Strategy>> = (0..config.players)
            .map(|seat| build_strategy(config, PlayerId(seat as u8), master.next_u64()))
            .collect();
        match run_game(&mut session, &mut table, visibility) {
            Ok(outcome) => {
                let state = session.state();
                tracing::info!(
                    game,
                    %outcome,
                    score = state.score(),
                    lives = state.lives(),
                    turns = state.moves().len(),
                    "game finished"
                );
                stats.push(GameStat {
                    outcome,
                    score: state.score(),
                    lives: state.lives(),
                    clues: state.clues(),
                    turns: state.moves().len(),
                });
            }
            Err(source) => {
                dump_abort(game, &source);
                return Err(RunnerError::Game { game, source });
            }
        }
    }
    Ok(stats)
}

/// An aborted game gets its full state and move log into the log
/// stream before the error propagates.
fn dump_abort(game: usize, error: &DriverError) {
    if let DriverError::IllegalMove { state, .. } = error {
        match GameSnapshot::to_json(state) {
            Ok(snapshot) => tracing::error!(game, %error, %snapshot, "aborting run"),
            Err(json_err) => tracing::error!(game, %error, %json_err, "aborting run"),
        }
    } else {
        tracing::error!(game, %error, "aborting run");
    }
}

fn build_strategy(config: &RunConfig, seat: PlayerId, seed: u64) -> Box<dyn Strategy> {
    match config.strategy {
        StrategyKind::Random => Box::new(RandomStrategy::seeded(seed)),
        StrategyKind::Clue => Box::new(CluePolicy::new(seat, config.algorithm, seed)),
        StrategyKind::Search => Box::new(SearchStrategy::new(
            config.search_depth,
            config.search_nodes,
        )),
    }
}
