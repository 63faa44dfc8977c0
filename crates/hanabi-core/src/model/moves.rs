use crate::model::card::{CardId, CardKind};
use crate::model::colour::Colour;
use crate::model::player::PlayerId;
use crate::model::value::Value;
use core::fmt;
use serde::{Deserialize, Serialize};

/// The information revealed by a clue: one colour or one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClueSignal {
    Colour(Colour),
    Value(Value),
}

impl ClueSignal {
    pub fn matches(self, kind: CardKind) -> bool {
        match self {
            ClueSignal::Colour(colour) => kind.colour == colour,
            ClueSignal::Value(value) => kind.value == value,
        }
    }
}

impl fmt::Display for ClueSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClueSignal::Colour(colour) => f.write_str(colour.name()),
            ClueSignal::Value(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Clue { target: PlayerId, signal: ClueSignal },
    Discard(CardId),
    Play(CardId),
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Clue { target, signal } => write!(f, "clue {target} {signal}"),
            Move::Discard(id) => write!(f, "discard {id}"),
            Move::Play(id) => write!(f, "play {id}"),
        }
    }
}

/// A move as it entered the log. For clues, `touched` is the list of
/// card ids in the target's hand that matched the signal at clue time,
/// and `target_hand` is the target's full hand-id list at that instant;
/// both are resolved and frozen by the engine and are what belief
/// inference replays later. A card absent from `target_hand` was drawn
/// after the clue and learned nothing from it. Both lists are empty for
/// discards and plays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: PlayerId,
    pub mv: Move,
    pub touched: Vec<CardId>,
    pub target_hand: Vec<CardId>,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.player, self.mv)?;
        if !self.touched.is_empty() {
            write!(f, " [")?;
            for (i, id) in self.touched.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{id}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ClueSignal, Move, MoveRecord};
    use crate::model::card::{CardId, CardKind};
    use crate::model::colour::Colour;
    use crate::model::player::PlayerId;
    use crate::model::value::Value;

    #[test]
    fn colour_signal_matches_only_that_colour() {
        let signal = ClueSignal::Colour(Colour::Red);
        assert!(signal.matches(CardKind::new(Colour::Red, Value::Two)));
        assert!(!signal.matches(CardKind::new(Colour::Blue, Value::Two)));
    }

    #[test]
    fn value_signal_matches_across_colours() {
        let signal = ClueSignal::Value(Value::Five);
        assert!(signal.matches(CardKind::new(Colour::White, Value::Five)));
        assert!(!signal.matches(CardKind::new(Colour::White, Value::Four)));
    }

    #[test]
    fn record_display_includes_touched_ids() {
        let record = MoveRecord {
            player: PlayerId(0),
            mv: Move::Clue {
                target: PlayerId(1),
                signal: ClueSignal::Value(Value::One),
            },
            touched: vec![CardId(3), CardId(9)],
            target_hand: vec![CardId(3), CardId(5), CardId(9)],
        };
        assert_eq!(record.to_string(), "P0 -> clue P1 1 [3, 9]");
    }
}
