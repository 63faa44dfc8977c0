use crate::model::state::GameState;
use serde::{Deserialize, Serialize};

/// Full JSON image of a state, used by the run harness when dumping the
/// true state after an illegal move, and by tooling that wants to poke
/// at one game offline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub state: GameState,
}

impl GameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            state: state.clone(),
        }
    }

    pub fn to_json(state: &GameState) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Self::capture(state))
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
