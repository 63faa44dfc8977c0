//! Per-observer reconstruction of what each unknown card could be.
//!
//! This module is composed of:
//! - `kinds`: the 30-kind bitmask (`KindSet`) and the remaining-copies
//!   tally (`KindTally`).
//! - `candidates`: candidate-set construction and clue replay
//!   (`HandBelief`).
//! - `tracker`: the incremental own-hand belief a strategy keeps in its
//!   per-player memory.
//! - `likelihood`: decay-weighted discard ranking on top of the hard
//!   sets.

mod candidates;
mod kinds;
mod likelihood;
mod tracker;

pub use candidates::HandBelief;
pub use kinds::{KindSet, KindTally};
pub use likelihood::{LikelihoodConfig, LikelihoodModel};
pub use tracker::BeliefTracker;
