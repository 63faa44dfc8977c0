use crate::model::colour::Colour;
use crate::model::value::Value;
use core::fmt;
use serde::{Deserialize, Serialize};

/// A colour/value combination. Two physical cards are "the same kind"
/// when their `CardKind`s are equal, even if their ids differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardKind {
    pub colour: Colour,
    pub value: Value,
}

impl CardKind {
    pub const COUNT: usize = Colour::COUNT * Value::ORDERED.len();

    pub const fn new(colour: Colour, value: Value) -> Self {
        Self { colour, value }
    }

    /// Dense index into the 30-kind space, grouped by colour.
    pub const fn index(self) -> usize {
        self.colour.index() * 5 + (self.value.number() as usize - 1)
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= Self::COUNT {
            return None;
        }
        let colour = match Colour::from_index(index / 5) {
            Some(colour) => colour,
            None => return None,
        };
        let value = match Value::from_number((index % 5) as u8 + 1) {
            Some(value) => value,
            None => return None,
        };
        Some(Self { colour, value })
    }

    /// Physical copies of this kind in a fresh deck.
    pub const fn copies(self) -> u8 {
        self.value.copies()
    }

    pub fn all() -> impl Iterator<Item = CardKind> {
        (0..Self::COUNT).filter_map(Self::from_index)
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.colour, self.value)
    }
}

/// Stable identifier assigned at deck creation, unique for the life of
/// a game and uncorrelated with the card's kind.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct CardId(pub u16);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub kind: CardKind,
    pub id: CardId,
}

impl Card {
    pub const fn new(kind: CardKind, id: CardId) -> Self {
        Self { kind, id }
    }

    pub const fn colour(self) -> Colour {
        self.kind.colour
    }

    pub const fn value(self) -> Value {
        self.kind.value
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.id)
    }
}
