use crate::model::card::CardId;
use crate::model::moves::{ClueSignal, Move};
use crate::model::player::PlayerId;
use crate::model::state::GameState;
use core::fmt;

/// Why a proposed move was rejected. Any of these coming back from a
/// strategy is treated as a programming bug by the callers, not as a
/// recoverable condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    GameOver,
    NoCluesRemaining,
    UnknownPlayer(PlayerId),
    SignalNotInHand { target: PlayerId, signal: ClueSignal },
    CardNotInHand { player: PlayerId, card: CardId },
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::GameOver => f.write_str("the game is already over"),
            IllegalMove::NoCluesRemaining => f.write_str("no clues remaining"),
            IllegalMove::UnknownPlayer(player) => {
                write!(f, "clue is not directed at a valid player id ({player})")
            }
            IllegalMove::SignalNotInHand { target, signal } => {
                write!(f, "{target}'s hand has no card matching the clue '{signal}'")
            }
            IllegalMove::CardNotInHand { player, card } => {
                write!(f, "card id {card} is not in {player}'s hand")
            }
        }
    }
}

impl std::error::Error for IllegalMove {}

/// Validates `mv` for `actor` against the true state. Pure; checks run
/// in order and stop at the first failure. Discarding at the full clue
/// budget is legal, and a player clueing herself is not structurally
/// rejected here.
pub fn validate(state: &GameState, actor: PlayerId, mv: &Move) -> Result<(), IllegalMove> {
    match *mv {
        Move::Clue { target, signal } => {
            if state.clues() == 0 {
                return Err(IllegalMove::NoCluesRemaining);
            }
            if !state.is_player(target) {
                return Err(IllegalMove::UnknownPlayer(target));
            }
            // Misleading clues are illegal: the signal must touch at
            // least one card.
            if state.hand(target).count_matching(signal) == 0 {
                return Err(IllegalMove::SignalNotInHand { target, signal });
            }
            Ok(())
        }
        Move::Discard(card) | Move::Play(card) => {
            if !state.hand(actor).contains_id(card) {
                return Err(IllegalMove::CardNotInHand {
                    player: actor,
                    card,
                });
            }
            Ok(())
        }
    }
}

/// Every move `actor` could legally make right now: a play and a discard
/// for each card held, plus one clue per colour and value present in
/// each other hand while the clue budget allows.
pub fn legal_moves(state: &GameState, actor: PlayerId) -> Vec<Move> {
    let mut moves = Vec::new();

    for id in state.hand(actor).ids() {
        moves.push(Move::Play(id));
        moves.push(Move::Discard(id));
    }

    if state.clues() > 0 {
        for offset in 1..state.player_count() {
            let target = PlayerId(((actor.index() + offset) % state.player_count()) as u8);
            let hand = state.hand(target);
            for colour in hand.colours_present() {
                moves.push(Move::Clue {
                    target,
                    signal: ClueSignal::Colour(colour),
                });
            }
            for value in hand.values_present() {
                moves.push(Move::Clue {
                    target,
                    signal: ClueSignal::Value(value),
                });
            }
        }
    }

    moves
}
