use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct PlayerId(pub u8);

impl PlayerId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Next seat in ascending cyclic order for a table of `player_count`.
    pub const fn next(self, player_count: usize) -> PlayerId {
        PlayerId(((self.index() + 1) % player_count) as u8)
    }
}

/// Seats in the order they will act after `current`, excluding `current`
/// itself.
pub fn players_after(current: PlayerId, player_count: usize) -> Vec<PlayerId> {
    (1..player_count)
        .map(|offset| PlayerId(((current.index() + offset) % player_count) as u8))
        .collect()
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}
