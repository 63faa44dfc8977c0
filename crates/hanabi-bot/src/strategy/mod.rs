mod clue;
mod random;
mod search;

pub use clue::{ClueAlgorithm, CluePolicy};
pub use random::RandomStrategy;
pub use search::SearchStrategy;

use hanabi_core::game::session::Session;
use hanabi_core::game::view::StateView;
use hanabi_core::model::moves::Move;
use std::borrow::Cow;

/// What a strategy is allowed to look at when deciding. Runs normally
/// hand out the masked view; a run can opt the whole table into full
/// visibility for simulation-driven strategies, which is the "don't
/// cheat" escape hatch and nothing a fair game should use.
pub enum Observation<'a> {
    Masked(&'a StateView),
    Full(&'a Session),
}

impl Observation<'_> {
    /// The masked view, derived on the fly when the observation is a
    /// full session.
    pub fn view(&self) -> Cow<'_, StateView> {
        match self {
            Observation::Masked(view) => Cow::Borrowed(view),
            Observation::Full(session) => Cow::Owned(session.view()),
        }
    }

    pub fn full(&self) -> Option<&Session> {
        match self {
            Observation::Masked(_) => None,
            Observation::Full(session) => Some(session),
        }
    }
}

/// One decision-maker bound to one seat for the length of a game. The
/// instance's own fields are its memory: they persist across that
/// seat's turns and are never visible to any other seat, so the only
/// channel between players is the clues themselves.
pub trait Strategy {
    fn name(&self) -> &'static str;

    /// Return exactly one move. Whatever comes back is validated
    /// against the true state; an illegal move aborts the run.
    fn choose(&mut self, obs: &Observation<'_>) -> Move;
}
