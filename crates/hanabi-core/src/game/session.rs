use crate::game::legality::IllegalMove;
use crate::game::turn::apply_move;
use crate::game::view::StateView;
use crate::model::moves::Move;
use crate::model::player::PlayerId;
use crate::model::state::{GameState, SetupError};
use core::fmt;
use serde::{Deserialize, Serialize};

/// How a finished game ended. `Completed` is emptying the deck without
/// losing, but short of the full 30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Completed,
    Lost,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Won => "won",
            Outcome::Completed => "completed",
            Outcome::Lost => "lost",
        };
        f.write_str(label)
    }
}

/// The turn state machine around one [`GameState`]: active play, the
/// final round once the deck runs dry, and the terminal conditions.
///
/// The final player is pinned the moment a turn starts with the deck
/// already empty: whoever acted previously drew the last card, and play
/// continues until control comes back around to them.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    previous: Option<PlayerId>,
    current: PlayerId,
    final_player: Option<PlayerId>,
}

impl Session {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            previous: None,
            current: PlayerId(0),
            final_player: None,
        }
    }

    pub fn deal<R: rand::Rng + ?Sized>(
        player_count: usize,
        rng: &mut R,
    ) -> Result<Self, SetupError> {
        Ok(Self::new(GameState::deal(player_count, rng)?))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    pub fn final_player(&self) -> Option<PlayerId> {
        self.final_player
    }

    pub fn in_final_round(&self) -> bool {
        self.final_player.is_some()
    }

    /// The obfuscated snapshot handed to the current player's strategy.
    pub fn view(&self) -> StateView {
        StateView::for_player(&self.state, self.current)
    }

    pub fn is_over(&self) -> bool {
        self.state.lives() == 0
            || (self.state.deck_len() == 0 && self.final_player == Some(self.current))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_over() {
            return None;
        }
        Some(if self.state.lives() == 0 {
            Outcome::Lost
        } else if self.state.have_won() {
            Outcome::Won
        } else {
            Outcome::Completed
        })
    }

    /// Applies the current player's move and passes control to the next
    /// seat. An illegal move, or a call on a finished session, leaves
    /// the session untouched.
    pub fn take_turn(&mut self, mv: Move) -> Result<(), IllegalMove> {
        if self.is_over() {
            return Err(IllegalMove::GameOver);
        }
        if self.state.deck_len() == 0 && self.final_player.is_none() {
            self.final_player = self.previous;
        }

        apply_move(&mut self.state, self.current, mv)?;

        self.previous = Some(self.current);
        self.current = self.current.next(self.state.player_count());
        Ok(())
    }

    /// Clone-and-advance, the edge generator for search strategies. The
    /// original session is untouched.
    pub fn simulate(&self, mv: Move) -> Result<Session, IllegalMove> {
        let mut next = self.clone();
        next.take_turn(mv)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::{Outcome, Session};
    use crate::model::moves::Move;
    use crate::model::player::PlayerId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fresh_session(seed: u64) -> Session {
        let mut rng = StdRng::seed_from_u64(seed);
        Session::deal(3, &mut rng).expect("valid player count")
    }

    fn discard_first(session: &mut Session) {
        let id = session.state().hand(session.current_player()).cards()[0].id;
        session.take_turn(Move::Discard(id)).expect("legal discard");
    }

    #[test]
    fn turns_rotate_in_ascending_order() {
        let mut session = fresh_session(3);
        assert_eq!(session.current_player(), PlayerId(0));
        discard_first(&mut session);
        assert_eq!(session.current_player(), PlayerId(1));
        discard_first(&mut session);
        assert_eq!(session.current_player(), PlayerId(2));
        discard_first(&mut session);
        assert_eq!(session.current_player(), PlayerId(0));
    }

    #[test]
    fn illegal_move_leaves_the_session_unchanged() {
        let mut session = fresh_session(3);
        let foreign = session.state().hand(PlayerId(1)).cards()[0].id;
        assert!(session.take_turn(Move::Play(foreign)).is_err());
        assert_eq!(session.current_player(), PlayerId(0));
        assert!(session.state().moves().is_empty());
    }

    #[test]
    fn deck_exhaustion_gives_every_player_one_last_turn() {
        let mut session = fresh_session(3);
        // Discard forever; each discard past the deck's end shrinks a
        // hand instead of drawing.
        let mut turns = 0;
        while !session.is_over() {
            discard_first(&mut session);
            turns += 1;
            assert!(turns < 200, "game must terminate");
        }

        // 45 discards drain the deck; the drawer of the last card is the
        // final player and the other two seats act once more after them.
        assert_eq!(session.outcome(), Some(Outcome::Completed));
        assert_eq!(session.state().deck_len(), 0);
        assert!(session.in_final_round());
        assert_eq!(turns, 45 + 2);
        assert_eq!(session.final_player(), Some(session.current_player()));
    }

    #[test]
    fn losing_all_lives_ends_the_game_immediately() {
        let mut session = fresh_session(3);
        let mut misplays = 0;
        while !session.is_over() {
            let seat = session.current_player();
            let bad = session
                .state()
                .hand(seat)
                .iter()
                .copied()
                .find(|c| !session.state().is_playable(c.kind));
            match bad {
                Some(card) => {
                    session.take_turn(Move::Play(card.id)).expect("legal play");
                    misplays += 1;
                }
                None => discard_first(&mut session),
            }
            assert!(misplays <= 3);
        }
        assert_eq!(session.state().lives(), 0);
        assert_eq!(session.outcome(), Some(Outcome::Lost));
    }

    #[test]
    fn a_finished_session_rejects_further_turns() {
        let mut session = fresh_session(3);
        session.state.lives = 0;
        assert!(session.is_over());

        let id = session.state().hand(session.current_player()).cards()[0].id;
        assert_eq!(
            session.take_turn(Move::Play(id)),
            Err(crate::game::legality::IllegalMove::GameOver)
        );
        assert_eq!(session.state().lives(), 0);
        assert!(session.state().moves().is_empty());
        assert_eq!(session.current_player(), PlayerId(0));
    }

    #[test]
    fn simulate_leaves_the_original_untouched() {
        let session = fresh_session(3);
        let id = session.state().hand(PlayerId(0)).cards()[0].id;
        let next = session.simulate(Move::Discard(id)).expect("legal discard");
        assert_eq!(session.state().moves().len(), 0);
        assert_eq!(next.state().moves().len(), 1);
        assert_eq!(next.current_player(), PlayerId(1));
    }
}
