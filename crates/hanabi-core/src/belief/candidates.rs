use crate::belief::kinds::{KindSet, KindTally};
use crate::game::view::StateView;
use crate::model::card::{Card, CardId};
use crate::model::moves::{Move, MoveRecord};
use crate::model::player::PlayerId;
use crate::model::state::{GameState, PlayedPiles, kind_is_discardable};

/// Candidate sets for each card in one target's hand, from one
/// observer's knowledge: visible cards prune through the copy tally,
/// then the clue history narrows the named and unnamed slots. Sets only
/// ever shrink for the life of a game.
#[derive(Debug, Clone)]
pub struct HandBelief {
    target: PlayerId,
    slots: Vec<(CardId, KindSet)>,
}

impl HandBelief {
    pub fn new(target: PlayerId, ids: &[CardId]) -> Self {
        Self {
            target,
            slots: ids.iter().map(|&id| (id, KindSet::FULL)).collect(),
        }
    }

    /// The viewer reasoning about her own hidden hand.
    pub fn of_own_hand(view: &StateView) -> Self {
        let mut belief = Self::new(view.current_player(), view.own_ids());
        let mut tally = KindTally::new();
        for card in view
            .visible_cards()
            .chain(view.played().iter_cards())
            .chain(view.discarded())
        {
            tally.record(*card);
        }
        belief.rule_out(tally.exhausted());
        belief.replay(view.moves());
        belief
    }

    /// The viewer reconstructing what `target` can know about her own
    /// hand. The target's cards are visible to the viewer but must not
    /// inform the reconstruction, so they are skipped along with the
    /// viewer's own (already hidden) hand.
    pub fn of_target(view: &StateView, target: PlayerId) -> Self {
        if target == view.current_player() {
            return Self::of_own_hand(view);
        }
        let ids = view
            .visible_hand(target)
            .map(|hand| hand.ids())
            .unwrap_or_default();
        let mut belief = Self::new(target, &ids);
        let mut tally = KindTally::new();
        for player in 0..view.player_count() {
            let player = PlayerId(player as u8);
            if player == target {
                continue;
            }
            if let Some(hand) = view.visible_hand(player) {
                for card in hand.iter() {
                    tally.record(*card);
                }
            }
        }
        for card in view.played().iter_cards().chain(view.discarded()) {
            tally.record(*card);
        }
        belief.rule_out(tally.exhausted());
        belief.replay(view.moves());
        belief
    }

    /// Built from the true state for a given observer/target pair;
    /// engine-side checks and property tests use this directly.
    pub fn observed(state: &GameState, observer: PlayerId, target: PlayerId) -> Self {
        let mut belief = Self::new(target, &state.hand(target).ids());
        let mut tally = KindTally::new();
        for (index, hand) in state.hands().iter().enumerate() {
            if index == observer.index() || index == target.index() {
                continue;
            }
            for card in hand.iter() {
                tally.record(*card);
            }
        }
        for card in state.played().iter_cards().chain(state.discarded()) {
            tally.record(*card);
        }
        belief.rule_out(tally.exhausted());
        belief.replay(state.moves());
        belief
    }

    pub fn target(&self) -> PlayerId {
        self.target
    }

    pub fn candidates(&self, id: CardId) -> Option<KindSet> {
        self.slots
            .iter()
            .find(|(slot_id, _)| *slot_id == id)
            .map(|(_, set)| *set)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CardId, KindSet)> + '_ {
        self.slots.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn set_candidates(&mut self, id: CardId, set: KindSet) {
        for (slot_id, slot) in &mut self.slots {
            if *slot_id == id {
                *slot = set;
            }
        }
    }

    /// Drop slots for cards no longer held, start fresh full sets for
    /// newly drawn ids. Used by the incremental tracker.
    pub(crate) fn sync_ids(&mut self, ids: &[CardId]) {
        self.slots.retain(|(id, _)| ids.contains(id));
        for &id in ids {
            if self.candidates(id).is_none() {
                self.slots.push((id, KindSet::FULL));
            }
        }
    }

    /// Remove `kinds` from every slot (kinds whose copies are all
    /// accounted for elsewhere).
    pub fn rule_out(&mut self, kinds: KindSet) {
        for (_, set) in &mut self.slots {
            set.subtract(kinds);
        }
    }

    /// One clue from the log: slots the clue named keep only matching
    /// kinds, the slots it passed over lose them. Slots absent from the
    /// record's frozen hand list were drawn after the clue and learn
    /// nothing. Clues for other players are ignored.
    pub fn apply_clue(&mut self, record: &MoveRecord) {
        let Move::Clue { target, signal } = record.mv else {
            return;
        };
        if target != self.target {
            return;
        }
        for (id, set) in &mut self.slots {
            if record.touched.contains(id) {
                set.retain_matching(signal);
            } else if record.target_hand.contains(id) {
                set.remove_matching(signal);
            }
        }
    }

    pub fn replay(&mut self, moves: &[MoveRecord]) {
        for record in moves {
            self.apply_clue(record);
        }
    }

    /// A card is definitely playable when every kind it could still be
    /// passes the current playable-value test.
    pub fn is_definitely_playable(&self, id: CardId, played: &PlayedPiles) -> bool {
        self.candidates(id)
            .is_some_and(|set| !set.is_empty() && set.iter().all(|kind| played.is_playable(kind)))
    }

    pub fn definitely_playable(&self, played: &PlayedPiles) -> Vec<CardId> {
        self.slots
            .iter()
            .filter(|(id, _)| self.is_definitely_playable(*id, played))
            .map(|(id, _)| *id)
            .collect()
    }

    /// A card is definitely discardable when every remaining kind is
    /// already played or sits behind a permanently blocked pile.
    pub fn is_definitely_discardable(
        &self,
        id: CardId,
        played: &PlayedPiles,
        discarded: &[Card],
    ) -> bool {
        self.candidates(id).is_some_and(|set| {
            !set.is_empty()
                && set
                    .iter()
                    .all(|kind| kind_is_discardable(played, discarded, kind))
        })
    }

    pub fn definitely_discardable(
        &self,
        played: &PlayedPiles,
        discarded: &[Card],
    ) -> Vec<CardId> {
        self.slots
            .iter()
            .filter(|(id, _)| self.is_definitely_discardable(*id, played, discarded))
            .map(|(id, _)| *id)
            .collect()
    }
}
