use crate::model::card::{Card, CardKind};
use crate::model::colour::Colour;
use crate::model::deck::Deck;
use crate::model::hand::Hand;
use crate::model::moves::MoveRecord;
use crate::model::player::PlayerId;
use crate::model::value::Value;
use core::fmt;
use serde::{Deserialize, Serialize};
use std::array;

pub const INITIAL_LIVES: u8 = 3;
pub const INITIAL_CLUES: u8 = 8;

/// One ascending stack of successfully played cards per colour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayedPiles {
    piles: [Vec<Card>; 6],
}

impl Default for PlayedPiles {
    fn default() -> Self {
        Self {
            piles: array::from_fn(|_| Vec::new()),
        }
    }
}

impl PlayedPiles {
    pub fn pile(&self, colour: Colour) -> &[Card] {
        &self.piles[colour.index()]
    }

    pub fn top(&self, colour: Colour) -> Option<Value> {
        self.piles[colour.index()].last().map(|c| c.kind.value)
    }

    /// The next value this colour will accept, or `None` once its 5 is
    /// down.
    pub fn playable_value(&self, colour: Colour) -> Option<Value> {
        match self.top(colour) {
            None => Some(Value::One),
            Some(top) => top.successor(),
        }
    }

    pub fn is_playable(&self, kind: CardKind) -> bool {
        self.playable_value(kind.colour) == Some(kind.value)
    }

    /// Whether a card of this kind has already been played.
    pub fn contains(&self, kind: CardKind) -> bool {
        self.top(kind.colour)
            .is_some_and(|top| kind.value <= top)
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.piles[card.kind.colour.index()].push(card);
    }

    pub fn score(&self) -> usize {
        self.piles.iter().map(Vec::len).sum()
    }

    pub fn iter_cards(&self) -> impl Iterator<Item = &Card> {
        self.piles.iter().flatten()
    }
}

/// A kind is safe to throw away when it is already on its pile, or when
/// its colour is permanently blocked because every copy of the value the
/// pile is waiting for has been discarded.
pub(crate) fn kind_is_discardable(
    played: &PlayedPiles,
    discarded: &[Card],
    kind: CardKind,
) -> bool {
    if played.contains(kind) {
        return true;
    }
    let Some(blocking) = played.playable_value(kind.colour) else {
        return false;
    };
    let blocking_kind = CardKind::new(kind.colour, blocking);
    let lost = discarded.iter().filter(|c| c.kind == blocking_kind).count();
    lost >= blocking_kind.copies() as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    PlayerCount(usize),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::PlayerCount(count) => {
                write!(f, "player count must be between 2 and 5, got {count}")
            }
        }
    }
}

impl std::error::Error for SetupError {}

/// The authoritative hidden-information record of one game in progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) hands: Vec<Hand>,
    pub(crate) deck: Deck,
    pub(crate) played: PlayedPiles,
    pub(crate) discarded: Vec<Card>,
    pub(crate) lives: u8,
    pub(crate) clues: u8,
    pub(crate) moves: Vec<MoveRecord>,
}

impl GameState {
    /// Shuffles a fresh deck from `rng` and deals the opening hands in
    /// ascending player-id order.
    pub fn deal<R: rand::Rng + ?Sized>(
        player_count: usize,
        rng: &mut R,
    ) -> Result<Self, SetupError> {
        let hand_size =
            Deck::hand_size(player_count).ok_or(SetupError::PlayerCount(player_count))?;
        let mut deck = Deck::shuffled(rng);
        let hands = (0..player_count)
            .map(|_| Hand::with_cards(deck.deal(hand_size)))
            .collect();

        Ok(Self {
            hands,
            deck,
            played: PlayedPiles::default(),
            discarded: Vec::new(),
            lives: INITIAL_LIVES,
            clues: INITIAL_CLUES,
            moves: Vec::new(),
        })
    }

    pub fn player_count(&self) -> usize {
        self.hands.len()
    }

    pub fn is_player(&self, player: PlayerId) -> bool {
        player.index() < self.hands.len()
    }

    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player.index()]
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// The face-down deck. The true state hides nothing; obfuscation
    /// happens in [`crate::game::view::StateView`].
    pub fn deck(&self) -> &Deck {
        &self.deck
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

    pub fn score(&self) -> usize {
        self.played.score()
    }

    pub const fn max_score(&self) -> usize {
        Colour::COUNT * Value::ORDERED.len()
    }

    pub fn have_won(&self) -> bool {
        self.score() == self.max_score()
    }

    /// Total cards across every collection. Stays at 60 for the life of
    /// a game.
    pub fn total_cards(&self) -> usize {
        self.hands.iter().map(Hand::len).sum::<usize>()
            + self.deck.len()
            + self.played.score()
            + self.discarded.len()
    }
}
