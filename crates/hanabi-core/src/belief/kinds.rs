use crate::model::card::{Card, CardId, CardKind};
use crate::model::colour::Colour;
use crate::model::moves::ClueSignal;
use core::fmt;
use std::collections::HashSet;

const FULL_MASK: u32 = (1 << CardKind::COUNT) - 1;

/// Set of card kinds as a 30-bit mask over the 6x5 kind space.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KindSet(u32);

impl KindSet {
    pub const EMPTY: KindSet = KindSet(0);
    pub const FULL: KindSet = KindSet(FULL_MASK);

    pub fn only(kind: CardKind) -> Self {
        Self(1 << kind.index())
    }

    /// Every kind a clue with `signal` would name.
    pub fn matching(signal: ClueSignal) -> Self {
        match signal {
            ClueSignal::Colour(colour) => Self(0b11111 << (colour.index() * 5)),
            ClueSignal::Value(value) => {
                let mut mask = 0u32;
                for colour in Colour::ALL {
                    mask |= 1 << (colour.index() * 5 + value.number() as usize - 1);
                }
                Self(mask)
            }
        }
    }

    pub fn contains(self, kind: CardKind) -> bool {
        self.0 & (1 << kind.index()) != 0
    }

    pub fn insert(&mut self, kind: CardKind) {
        self.0 |= 1 << kind.index();
    }

    pub fn remove(&mut self, kind: CardKind) {
        self.0 &= !(1 << kind.index());
    }

    pub fn retain_matching(&mut self, signal: ClueSignal) {
        self.0 &= Self::matching(signal).0;
    }

    pub fn remove_matching(&mut self, signal: ClueSignal) {
        self.0 &= !Self::matching(signal).0;
    }

    pub fn subtract(&mut self, other: KindSet) {
        self.0 &= !other.0;
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// A candidate set with exactly one member left is resolved.
    pub fn resolved(self) -> Option<CardKind> {
        if self.len() == 1 {
            CardKind::from_index(self.0.trailing_zeros() as usize)
        } else {
            None
        }
    }

    pub fn iter(self) -> impl Iterator<Item = CardKind> {
        (0..CardKind::COUNT)
            .filter(move |index| self.0 & (1 << index) != 0)
            .filter_map(CardKind::from_index)
    }
}

impl fmt::Debug for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Remaining physical copies per kind, given the cards a player has
/// seen. Each card counts once, tracked by id, no matter how many
/// passes re-present it.
#[derive(Debug, Clone, Default)]
pub struct KindTally {
    remaining: [u8; CardKind::COUNT],
    seen: HashSet<CardId>,
}

impl KindTally {
    pub fn new() -> Self {
        let mut remaining = [0u8; CardKind::COUNT];
        for kind in CardKind::all() {
            remaining[kind.index()] = kind.copies();
        }
        Self {
            remaining,
            seen: HashSet::new(),
        }
    }

    /// Counts `card` against its kind; returns false if this id was
    /// already recorded.
    pub fn record(&mut self, card: Card) -> bool {
        if !self.seen.insert(card.id) {
            return false;
        }
        let slot = &mut self.remaining[card.kind.index()];
        *slot = slot.saturating_sub(1);
        true
    }

    pub fn remaining(&self, kind: CardKind) -> u8 {
        self.remaining[kind.index()]
    }

    /// Kinds with no copies left unseen; impossible for any unresolved
    /// card.
    pub fn exhausted(&self) -> KindSet {
        let mut set = KindSet::EMPTY;
        for kind in CardKind::all() {
            if self.remaining[kind.index()] == 0 {
                set.insert(kind);
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::{KindSet, KindTally};
    use crate::model::card::{Card, CardId, CardKind};
    use crate::model::colour::Colour;
    use crate::model::moves::ClueSignal;
    use crate::model::value::Value;

    #[test]
    fn full_set_holds_all_thirty_kinds() {
        assert_eq!(KindSet::FULL.len(), 30);
        assert!(KindSet::EMPTY.is_empty());
    }

    #[test]
    fn colour_mask_covers_five_kinds() {
        let set = KindSet::matching(ClueSignal::Colour(Colour::Yellow));
        assert_eq!(set.len(), 5);
        assert!(set.contains(CardKind::new(Colour::Yellow, Value::Three)));
        assert!(!set.contains(CardKind::new(Colour::Red, Value::Three)));
    }

    #[test]
    fn value_mask_covers_six_kinds() {
        let set = KindSet::matching(ClueSignal::Value(Value::Two));
        assert_eq!(set.len(), 6);
        assert!(set.contains(CardKind::new(Colour::White, Value::Two)));
        assert!(!set.contains(CardKind::new(Colour::White, Value::One)));
    }

    #[test]
    fn retain_and_remove_are_complementary() {
        let signal = ClueSignal::Colour(Colour::Blue);
        let mut named = KindSet::FULL;
        named.retain_matching(signal);
        let mut unnamed = KindSet::FULL;
        unnamed.remove_matching(signal);
        assert_eq!(named.len() + unnamed.len(), 30);
    }

    #[test]
    fn resolved_needs_exactly_one_member() {
        let kind = CardKind::new(Colour::Green, Value::Five);
        assert_eq!(KindSet::only(kind).resolved(), Some(kind));
        assert_eq!(KindSet::FULL.resolved(), None);
        assert_eq!(KindSet::EMPTY.resolved(), None);
    }

    #[test]
    fn tally_counts_each_id_once() {
        let mut tally = KindTally::new();
        let kind = CardKind::new(Colour::Red, Value::Five);
        let card = Card::new(kind, CardId(3));
        assert_eq!(tally.remaining(kind), 1);
        assert!(tally.record(card));
        assert!(!tally.record(card));
        assert_eq!(tally.remaining(kind), 0);
        assert!(tally.exhausted().contains(kind));
    }

    #[test]
    fn exhausted_tracks_all_copies_of_a_one() {
        let mut tally = KindTally::new();
        let kind = CardKind::new(Colour::Blue, Value::One);
        for id in 0..3 {
            assert!(!tally.exhausted().contains(kind));
            tally.record(Card::new(kind, CardId(id)));
        }
        assert!(tally.exhausted().contains(kind));
    }
}
