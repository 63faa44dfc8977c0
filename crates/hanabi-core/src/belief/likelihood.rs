//! Heuristic likelihood weights layered on top of the candidate sets.
//!
//! Not a calibrated probability model: a kind's weight is discounted by
//! a fixed decay for every copy of it visible in other hands, and the
//! resulting per-card weights only ever rank discard choices when
//! nothing is definitely discardable.

use crate::belief::candidates::HandBelief;
use crate::belief::kinds::KindSet;
use crate::game::view::StateView;
use crate::model::card::{CardId, CardKind};
use std::env;

/// Tunable configuration for the discard-ranking weights.
#[derive(Debug, Clone, Copy)]
pub struct LikelihoodConfig {
    /// Multiplier applied per visible copy of a candidate kind held by
    /// other players.
    pub visible_copy_decay: f64,
}

impl Default for LikelihoodConfig {
    fn default() -> Self {
        Self {
            visible_copy_decay: 0.9,
        }
    }
}

impl LikelihoodConfig {
    pub fn from_env() -> Self {
        let base = Self::default();
        let decay = env::var("HANABI_BELIEF_DECAY")
            .ok()
            .and_then(|value| value.parse::<f64>().ok())
            .filter(|value| value.is_finite())
            .unwrap_or(base.visible_copy_decay);
        Self {
            visible_copy_decay: decay.clamp(0.1, 1.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LikelihoodModel {
    config: LikelihoodConfig,
}

impl Default for LikelihoodModel {
    fn default() -> Self {
        Self::new(LikelihoodConfig::from_env())
    }
}

impl LikelihoodModel {
    pub fn new(config: LikelihoodConfig) -> Self {
        Self { config }
    }

    /// Weight of one candidate kind: 1.0 when no copy is visible
    /// elsewhere, decayed once per visible copy.
    pub fn kind_weight(&self, view: &StateView, kind: CardKind) -> f64 {
        self.config
            .visible_copy_decay
            .powi(view.visible_copies(kind) as i32)
    }

    /// How much a card is worth keeping: the summed weight of every
    /// candidate kind that is still useful (not already on its pile).
    /// Lower means safer to throw away.
    pub fn keep_weight(&self, view: &StateView, candidates: KindSet) -> f64 {
        candidates
            .iter()
            .filter(|kind| !view.played().contains(*kind))
            .map(|kind| self.kind_weight(view, kind))
            .sum()
    }

    /// The card in `belief` with the lowest keep weight.
    pub fn safest_discard(&self, view: &StateView, belief: &HandBelief) -> Option<CardId> {
        belief
            .iter()
            .map(|(id, set)| (id, self.keep_weight(view, set)))
            .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(id, _)| id)
    }
}
