use crate::model::card::{Card, CardId, CardKind};
use crate::model::colour::Colour;
use crate::model::value::Value;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// The fixed multiset of 60 cards: per colour, three 1s, two each of
/// 2..4, and a single 5.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub const TOTAL: usize = 60;

    /// Builds, shuffles, and only then assigns sequential ids, so an id
    /// carries no information about the card behind it.
    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut kinds = Vec::with_capacity(Self::TOTAL);
        for colour in Colour::ALL.iter().copied() {
            for value in Value::ORDERED.iter().copied() {
                for _ in 0..value.copies() {
                    kinds.push(CardKind::new(colour, value));
                }
            }
        }
        kinds.shuffle(rng);

        let cards = kinds
            .into_iter()
            .enumerate()
            .map(|(id, kind)| Card::new(kind, CardId(id as u16)))
            .collect();
        Self { cards }
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    /// Hand size by player count; `None` outside the supported 2..=5.
    pub const fn hand_size(player_count: usize) -> Option<usize> {
        match player_count {
            2 | 3 => Some(5),
            4 | 5 => Some(4),
            _ => None,
        }
    }

    /// Removes the next `count` cards from the front for the opening deal.
    pub fn deal(&mut self, count: usize) -> Vec<Card> {
        self.cards.drain(..count.min(self.cards.len())).collect()
    }

    /// Replacement cards come off the back.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Deck;
    use std::collections::HashSet;

    #[test]
    fn shuffled_deck_has_sixty_cards_with_unique_ids() {
        let deck = Deck::shuffled_with_seed(7);
        assert_eq!(deck.len(), Deck::TOTAL);
        let ids: HashSet<_> = deck.cards().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), Deck::TOTAL);
    }

    #[test]
    fn composition_matches_per_kind_copies() {
        let deck = Deck::shuffled_with_seed(7);
        for kind in crate::model::card::CardKind::all() {
            let count = deck.cards().iter().filter(|c| c.kind == kind).count();
            assert_eq!(count, kind.copies() as usize, "copies of {kind}");
        }
    }

    #[test]
    fn shuffle_with_seed_is_deterministic() {
        let a = Deck::shuffled_with_seed(42);
        let b = Deck::shuffled_with_seed(42);
        assert_eq!(a.cards(), b.cards());
    }

    #[test]
    fn deal_takes_from_front_and_draw_from_back() {
        let mut deck = Deck::shuffled_with_seed(1);
        let front = deck.cards()[0];
        let back = *deck.cards().last().expect("full deck");
        let dealt = deck.deal(5);
        assert_eq!(dealt[0], front);
        assert_eq!(deck.draw(), Some(back));
        assert_eq!(deck.len(), Deck::TOTAL - 6);
    }

    #[test]
    fn hand_size_per_player_count() {
        assert_eq!(Deck::hand_size(2), Some(5));
        assert_eq!(Deck::hand_size(3), Some(5));
        assert_eq!(Deck::hand_size(4), Some(4));
        assert_eq!(Deck::hand_size(5), Some(4));
        assert_eq!(Deck::hand_size(1), None);
        assert_eq!(Deck::hand_size(6), None);
    }
}
