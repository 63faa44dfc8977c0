use super::random::random_clue;
use super::{Observation, Strategy};
use hanabi_core::belief::{BeliefTracker, LikelihoodModel};
use hanabi_core::game::view::StateView;
use hanabi_core::model::card::Card;
use hanabi_core::model::moves::{ClueSignal, Move};
use hanabi_core::model::player::{PlayerId, players_after};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// How a [`CluePolicy`] spends its clue when nothing in its own hand is
/// a certain play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClueAlgorithm {
    /// A random card in a random other hand.
    RandomClue,
    /// The first playable card found, scanning hands in turn order.
    FirstPlayable,
    /// The lowest-valued playable card across all other hands.
    LowestValue,
    /// The lowest-valued playable card in the next hand that has one.
    LowestInFirstHand,
}

impl ClueAlgorithm {
    pub const ALL: [ClueAlgorithm; 4] = [
        ClueAlgorithm::RandomClue,
        ClueAlgorithm::FirstPlayable,
        ClueAlgorithm::LowestValue,
        ClueAlgorithm::LowestInFirstHand,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ClueAlgorithm::RandomClue => "random-clue",
            ClueAlgorithm::FirstPlayable => "first-playable",
            ClueAlgorithm::LowestValue => "lowest-value",
            ClueAlgorithm::LowestInFirstHand => "lowest-in-first-hand",
        }
    }
}

/// Belief-driven strategy: play what the clue history proves playable,
/// otherwise spend a clue per the configured algorithm, otherwise
/// discard the card the likelihood model rates safest.
pub struct CluePolicy {
    seat: PlayerId,
    algorithm: ClueAlgorithm,
    tracker: BeliefTracker,
    likelihood: LikelihoodModel,
    rng: SmallRng,
}

impl CluePolicy {
    pub fn new(seat: PlayerId, algorithm: ClueAlgorithm, seed: u64) -> Self {
        Self {
            seat,
            algorithm,
            tracker: BeliefTracker::new(seat),
            likelihood: LikelihoodModel::default(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn algorithm(&self) -> ClueAlgorithm {
        self.algorithm
    }

    /// Playable cards in other hands, visited in turn order starting
    /// with the player after us.
    fn playable_elsewhere(&self, view: &StateView) -> Vec<(PlayerId, Card)> {
        let mut found = Vec::new();
        for pid in players_after(self.seat, view.player_count()) {
            let Some(hand) = view.visible_hand(pid) else {
                continue;
            };
            for card in hand.iter() {
                if view.is_playable(card.kind) {
                    found.push((pid, *card));
                }
            }
        }
        found
    }

    fn clue_for(&mut self, target: PlayerId, card: Card) -> Move {
        let signal = if self.rng.gen_bool(0.5) {
            ClueSignal::Colour(card.kind.colour)
        } else {
            ClueSignal::Value(card.kind.value)
        };
        Move::Clue { target, signal }
    }

    fn pick_clue(&mut self, view: &StateView) -> Move {
        let candidates = self.playable_elsewhere(view);
        let picked = match self.algorithm {
            ClueAlgorithm::RandomClue => None,
            ClueAlgorithm::FirstPlayable => candidates.first().copied(),
            ClueAlgorithm::LowestValue => candidates
                .iter()
                .min_by_key(|(_, card)| card.kind.value.number())
                .copied(),
            ClueAlgorithm::LowestInFirstHand => candidates.first().map(|&(first_pid, _)| {
                candidates
                    .iter()
                    .take_while(|(pid, _)| *pid == first_pid)
                    .min_by_key(|(_, card)| card.kind.value.number())
                    .copied()
                    .expect("take_while keeps the element it was seeded from")
            }),
        };
        match picked {
            Some((target, card)) => self.clue_for(target, card),
            None => random_clue(view, &mut self.rng),
        }
    }

    fn pick_discard(&mut self, view: &StateView) -> Move {
        let belief = self.tracker.belief();
        if let Some(&id) = belief
            .definitely_discardable(view.played(), view.discarded())
            .first()
        {
            return Move::Discard(id);
        }
        match self.likelihood.safest_discard(view, belief) {
            Some(id) => Move::Discard(id),
            None => {
                let ids = view.own_ids();
                Move::Discard(ids[self.rng.gen_range(0..ids.len())])
            }
        }
    }
}

impl Strategy for CluePolicy {
    fn name(&self) -> &'static str {
        "clue"
    }

    fn choose(&mut self, obs: &Observation<'_>) -> Move {
        let view = obs.view();
        let view = view.as_ref();
        debug_assert_eq!(view.current_player(), self.seat);
        self.tracker.observe(view);

        if let Some(&id) = self
            .tracker
            .belief()
            .definitely_playable(view.played())
            .first()
        {
            tracing::debug!(seat = %self.seat, card = ?id, "playing a proven card");
            return Move::Play(id);
        }
        if view.clues() > 0 {
            let mv = self.pick_clue(view);
            tracing::debug!(seat = %self.seat, algorithm = self.algorithm.name(), mv = %mv, "spending a clue");
            return mv;
        }
        let mv = self.pick_discard(view);
        tracing::debug!(seat = %self.seat, mv = %mv, "out of clues, discarding");
        mv
    }
}
