use crate::belief::candidates::HandBelief;
use crate::belief::kinds::KindTally;
use crate::game::view::StateView;
use crate::model::player::PlayerId;

/// Incremental own-hand belief, kept across turns in a strategy's
/// per-player memory. Rebuilding from scratch every turn would give the
/// same answer; the tracker just remembers which cards and clues it has
/// already digested.
#[derive(Debug, Clone)]
pub struct BeliefTracker {
    seat: PlayerId,
    belief: HandBelief,
    tally: KindTally,
    processed_moves: usize,
}

impl BeliefTracker {
    pub fn new(seat: PlayerId) -> Self {
        Self {
            seat,
            belief: HandBelief::new(seat, &[]),
            tally: KindTally::new(),
            processed_moves: 0,
        }
    }

    pub fn seat(&self) -> PlayerId {
        self.seat
    }

    pub fn belief(&self) -> &HandBelief {
        &self.belief
    }

    /// Folds everything new in `view` into the candidate sets: drawn
    /// and departed cards, cards seen for the first time, and clues
    /// logged since the previous call.
    pub fn observe(&mut self, view: &StateView) {
        self.belief.sync_ids(view.own_ids());

        for card in view
            .visible_cards()
            .chain(view.played().iter_cards())
            .chain(view.discarded())
        {
            self.tally.record(*card);
        }
        self.belief.rule_out(self.tally.exhausted());

        let moves = view.moves();
        for record in moves.iter().skip(self.processed_moves) {
            self.belief.apply_clue(record);
        }
        self.processed_moves = moves.len();
    }
}
