use crate::model::card::{Card, CardId};
use crate::model::colour::Colour;
use crate::model::moves::ClueSignal;
use crate::model::value::Value;
use serde::{Deserialize, Serialize};

/// An ordered sequence of cards. Slot order is never rearranged: clues
/// refer to positions the owner is tracking, and replacement cards are
/// appended at the end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id == id)?;
        Some(self.cards.remove(index))
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn contains_id(&self, id: CardId) -> bool {
        self.cards.iter().any(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id).collect()
    }

    pub fn count_matching(&self, signal: ClueSignal) -> usize {
        self.cards.iter().filter(|c| signal.matches(c.kind)).count()
    }

    /// Ids of the cards a clue with `signal` would touch, in slot order.
    pub fn ids_matching(&self, signal: ClueSignal) -> Vec<CardId> {
        self.cards
            .iter()
            .filter(|c| signal.matches(c.kind))
            .map(|c| c.id)
            .collect()
    }

    pub fn colours_present(&self) -> Vec<Colour> {
        let mut colours: Vec<Colour> = Vec::new();
        for card in &self.cards {
            if !colours.contains(&card.kind.colour) {
                colours.push(card.kind.colour);
            }
        }
        colours
    }

    pub fn values_present(&self) -> Vec<Value> {
        let mut values: Vec<Value> = Vec::new();
        for card in &self.cards {
            if !values.contains(&card.kind.value) {
                values.push(card.kind.value);
            }
        }
        values
    }
}
