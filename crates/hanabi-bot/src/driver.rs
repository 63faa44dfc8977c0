//! Drives a dealt session to completion by polling one strategy per
//! seat. The driver owns the trust boundary: strategies only ever see
//! what the [`Observation`] hands them, and anything illegal they
//! return aborts the run with the full state attached for post-mortem.

use crate::strategy::{Observation, Strategy};
use hanabi_core::game::legality::IllegalMove;
use hanabi_core::game::session::{Outcome, Session};
use hanabi_core::model::moves::Move;
use hanabi_core::model::player::PlayerId;
use hanabi_core::model::state::GameState;
use std::error::Error;
use std::fmt;

/// Whether strategies receive the masked per-player view or the whole
/// session. Full visibility exists for simulation-driven diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Masked,
    Full,
}

#[derive(Debug)]
pub enum DriverError {
    /// The table needs exactly one strategy per seat.
    SeatMismatch { players: usize, strategies: usize },
    /// A strategy returned a move the rules reject. Carries the state
    /// at the moment of the violation so the run can be dumped.
    IllegalMove {
        player: PlayerId,
        mv: Move,
        reason: IllegalMove,
        state: Box<GameState>,
    },
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::SeatMismatch {
                players,
                strategies,
            } => write!(f, "{players} players but {strategies} strategies"),
            DriverError::IllegalMove {
                player,
                mv,
                reason,
                ..
            } => write!(f, "{player} chose illegal move '{mv}': {reason}"),
        }
    }
}

impl Error for DriverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DriverError::SeatMismatch { .. } => None,
            DriverError::IllegalMove { reason, .. } => Some(reason),
        }
    }
}

/// Play the session out and return how it ended.
pub fn run_game(
    session: &mut Session,
    strategies: &mut [Box<dyn Strategy>],
    visibility: Visibility,
) -> Result<Outcome, DriverError> {
    let players = session.state().player_count();
    if strategies.len() != players {
        return Err(DriverError::SeatMismatch {
            players,
            strategies: strategies.len(),
        });
    }
    while !session.is_over() {
        let seat = session.current_player();
        let strategy = &mut strategies[seat.index()];
        let mv = match visibility {
            Visibility::Masked => {
                let view = session.view();
                strategy.choose(&Observation::Masked(&view))
            }
            Visibility::Full => strategy.choose(&Observation::Full(session)),
        };
        tracing::debug!(player = %seat, strategy = strategy.name(), mv = %mv, "turn");
        if let Err(reason) = session.take_turn(mv) {
            return Err(DriverError::IllegalMove {
                player: seat,
                mv,
                reason,
                state: Box::new(session.state().clone()),
            });
        }
    }
    let outcome = session
        .outcome()
        .expect("the loop only exits once the session is over");
    tracing::debug!(
        %outcome,
        score = session.state().score(),
        lives = session.state().lives(),
        turns = session.state().moves().len(),
        "game over"
    );
    Ok(outcome)
}
