use crate::model::card::{Card, CardId, CardKind};
use crate::model::colour::Colour;
use crate::model::hand::Hand;
use crate::model::moves::MoveRecord;
use crate::model::player::PlayerId;
use crate::model::state::{GameState, PlayedPiles, kind_is_discardable};
use crate::model::value::Value;
use serde::Serialize;

/// What one player is allowed to see: everyone else's hand in full, her
/// own hand as bare card ids, the deck as a count only. A structurally
/// independent copy, so nothing a strategy does can reach the true
/// state.
#[derive(Debug, Clone, Serialize)]
pub struct StateView {
    current: PlayerId,
    own_ids: Vec<CardId>,
    hands: Vec<Option<Hand>>,
    played: PlayedPiles,
    discarded: Vec<Card>,
    lives: u8,
    clues: u8,
    deck_len: usize,
    moves: Vec<MoveRecord>,
}

impl StateView {
    pub fn for_player(state: &GameState, player: PlayerId) -> Self {
        let hands = state
            .hands()
            .iter()
            .enumerate()
            .map(|(index, hand)| {
                if index == player.index() {
                    None
                } else {
                    Some(hand.clone())
                }
            })
            .collect();

        Self {
            current: player,
            own_ids: state.hand(player).ids(),
            hands,
            played: state.played().clone(),
            discarded: state.discarded().to_vec(),
            lives: state.lives(),
            clues: state.clues(),
            deck_len: state.deck_len(),
            moves: state.moves().to_vec(),
        }
    }

    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    pub fn player_count(&self) -> usize {
        self.hands.len()
    }

    /// The viewer's own hand, colour and value erased.
    pub fn own_ids(&self) -> &[CardId] {
        &self.own_ids
    }

    /// `None` for the viewer's own seat.
    pub fn visible_hand(&self, player: PlayerId) -> Option<&Hand> {
        self.hands.get(player.index())?.as_ref()
    }

    /// Every card the viewer can see in other players' hands.
    pub fn visible_cards(&self) -> impl Iterator<Item = &Card> {
        self.hands.iter().flatten().flat_map(Hand::iter)
    }

    pub fn played(&self) -> &PlayedPiles {
        &self.played
    }

    pub fn discarded(&self) -> &[Card] {
        &self.discarded
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn clues(&self) -> u8 {
        self.clues
    }

    pub fn deck_len(&self) -> usize {
        self.deck_len
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    pub fn playable_value(&self, colour: Colour) -> Option<Value> {
        self.played.playable_value(colour)
    }

    pub fn is_playable(&self, kind: CardKind) -> bool {
        self.played.is_playable(kind)
    }

    pub fn is_discardable(&self, kind: CardKind) -> bool {
        kind_is_discardable(&self.played, &self.discarded, kind)
    }

    /// Copies of `kind` the viewer can see in other hands. Drives the
    /// likelihood discount when ranking discards.
    pub fn visible_copies(&self, kind: CardKind) -> usize {
        self.visible_cards().filter(|c| c.kind == kind).count()
    }
}
