use super::{Observation, Strategy};
use hanabi_core::game::view::StateView;
use hanabi_core::model::moves::{ClueSignal, Move};
use hanabi_core::model::player::PlayerId;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Picks uniformly among clue, discard and play (dropping clue when the
/// budget is spent), then fills in the details at random. The baseline
/// every other strategy gets measured against.
pub struct RandomStrategy {
    rng: SmallRng,
}

impl RandomStrategy {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&mut self, obs: &Observation<'_>) -> Move {
        let view = obs.view();
        let view = view.as_ref();
        let can_clue = view.clues() > 0 && has_cluable_target(view);
        let choices = if can_clue { 3 } else { 2 };
        match self.rng.gen_range(0..choices) {
            0 if can_clue => random_clue(view, &mut self.rng),
            _ => {
                let ids = view.own_ids();
                let id = ids[self.rng.gen_range(0..ids.len())];
                if self.rng.gen_bool(0.5) {
                    Move::Discard(id)
                } else {
                    Move::Play(id)
                }
            }
        }
    }
}

fn has_cluable_target(view: &StateView) -> bool {
    (0..view.player_count())
        .map(|i| PlayerId(i as u8))
        .any(|pid| view.visible_hand(pid).is_some_and(|h| !h.is_empty()))
}

/// A clue about a random card in a random other player's hand, with the
/// colour/value choice itself a coin flip. Shared with the heuristic
/// strategies as their tie-breaking fallback.
pub(crate) fn random_clue(view: &StateView, rng: &mut SmallRng) -> Move {
    let targets: Vec<PlayerId> = (0..view.player_count())
        .map(|i| PlayerId(i as u8))
        .filter(|&pid| view.visible_hand(pid).is_some_and(|h| !h.is_empty()))
        .collect();
    let target = targets[rng.gen_range(0..targets.len())];
    let hand = view
        .visible_hand(target)
        .expect("clue target was chosen from visible hands");
    let card = hand.cards()[rng.gen_range(0..hand.len())];
    let signal = if rng.gen_bool(0.5) {
        ClueSignal::Colour(card.kind.colour)
    } else {
        ClueSignal::Value(card.kind.value)
    };
    Move::Clue { target, signal }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanabi_core::game::legality::validate;
    use hanabi_core::game::session::Session;
    use rand::rngs::StdRng;

    #[test]
    fn every_chosen_move_is_legal() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = Session::deal(3, &mut rng).unwrap();
        let mut strategies: Vec<RandomStrategy> =
            (0..3).map(|s| RandomStrategy::seeded(100 + s)).collect();
        let mut turns = 0;
        while !session.is_over() && turns < 200 {
            let seat = session.current_player();
            let view = session.view();
            let mv = strategies[seat.index()].choose(&Observation::Masked(&view));
            validate(session.state(), seat, &mv).expect("random strategy picked an illegal move");
            session.take_turn(mv).unwrap();
            turns += 1;
        }
        assert!(session.is_over());
    }

    #[test]
    fn same_seed_same_choices() {
        let mut rng = StdRng::seed_from_u64(12);
        let session = Session::deal(3, &mut rng).unwrap();
        let view = session.view();
        let mut a = RandomStrategy::seeded(7);
        let mut b = RandomStrategy::seeded(7);
        for _ in 0..20 {
            assert_eq!(
                a.choose(&Observation::Masked(&view)),
                b.choose(&Observation::Masked(&view))
            );
        }
    }

    #[test]
    fn never_clues_when_budget_is_empty() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut session = Session::deal(3, &mut rng).unwrap();
        // Burn the whole clue budget.
        for _ in 0..8 {
            let seat = session.current_player();
            let mv = random_clue(&session.view(), &mut SmallRng::seed_from_u64(0));
            // random_clue never targets the actor's own hidden hand, but
            // re-pick if the signal happens to miss.
            if validate(session.state(), seat, &mv).is_ok() {
                session.take_turn(mv).unwrap();
            } else {
                break;
            }
        }
        if session.state().clues() == 0 {
            let mut strategy = RandomStrategy::seeded(5);
            for _ in 0..50 {
                let view = session.view();
                let mv = strategy.choose(&Observation::Masked(&view));
                assert!(!matches!(mv, Move::Clue { .. }));
            }
        }
    }
}
