use super::{Observation, Strategy};
use hanabi_core::game::legality::legal_moves;
use hanabi_core::game::session::Session;
use hanabi_core::model::moves::Move;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Best-first lookahead over simulated futures. Needs the full session,
/// deck order included, so it only makes sense as a diagnostic upper
/// bound under [`crate::driver::Visibility::Full`]; given only a masked
/// view it degrades to discarding its oldest card.
pub struct SearchStrategy {
    max_depth: usize,
    max_nodes: usize,
}

impl SearchStrategy {
    pub fn new(max_depth: usize, max_nodes: usize) -> Self {
        Self {
            max_depth,
            max_nodes,
        }
    }

    fn search(&self, session: &Session) -> Move {
        let root_moves = legal_moves(session.state(), session.current_player());
        let fallback = root_moves
            .first()
            .copied()
            .expect("a live session always has a legal move for the player to act");
        let mut heap = BinaryHeap::new();
        for mv in root_moves {
            if let Ok(next) = session.simulate(mv) {
                heap.push(Node::new(next, mv, 1));
            }
        }
        let mut best: Option<(Rating, Move)> = None;
        let mut expanded = 0;
        while let Some(node) = heap.pop() {
            if node.session.state().have_won() {
                return node.first;
            }
            let better = best.as_ref().is_none_or(|(rating, _)| node.rating > *rating);
            if better {
                best = Some((node.rating, node.first));
            }
            expanded += 1;
            if expanded >= self.max_nodes {
                break;
            }
            if node.depth >= self.max_depth || node.session.is_over() {
                continue;
            }
            let actor = node.session.current_player();
            for mv in legal_moves(node.session.state(), actor) {
                if let Ok(next) = node.session.simulate(mv) {
                    heap.push(Node::new(next, node.first, node.depth + 1));
                }
            }
        }
        best.map(|(_, mv)| mv).unwrap_or(fallback)
    }
}

impl Default for SearchStrategy {
    fn default() -> Self {
        Self::new(4, 2_000)
    }
}

impl Strategy for SearchStrategy {
    fn name(&self) -> &'static str {
        "search"
    }

    fn choose(&mut self, obs: &Observation<'_>) -> Move {
        match obs.full() {
            Some(session) => self.search(session),
            None => {
                tracing::warn!("search strategy given a masked view, discarding blind");
                let view = obs.view();
                Move::Discard(
                    *view
                        .own_ids()
                        .first()
                        .expect("a player on turn holds at least one card"),
                )
            }
        }
    }
}

/// Score first, then lives, then clues; shallower nodes win ties so
/// the strategy does not pad lines of play with idle clues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Rating {
    score: usize,
    lives: u8,
    clues: u8,
}

struct Node {
    rating: Rating,
    depth: usize,
    first: Move,
    session: Session,
}

impl Node {
    fn new(session: Session, first: Move, depth: usize) -> Self {
        let state = session.state();
        Self {
            rating: Rating {
                score: state.score(),
                lives: state.lives(),
                clues: state.clues(),
            },
            depth,
            first,
            session,
        }
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rating
            .cmp(&other.rating)
            .then_with(|| other.depth.cmp(&self.depth))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

#[cfg(test)]
mod tests {
    use super::*;
    use hanabi_core::game::legality::validate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn deal_session(seed: u64) -> Session {
        let mut rng = StdRng::seed_from_u64(seed);
        Session::deal(3, &mut rng).unwrap()
    }

    #[test]
    fn chosen_move_is_legal_for_the_current_player() {
        let session = deal_session(21);
        let mut strategy = SearchStrategy::new(3, 400);
        let mv = strategy.choose(&Observation::Full(&session));
        validate(session.state(), session.current_player(), &mv).unwrap();
    }

    #[test]
    fn full_visibility_plays_a_one_on_the_first_turn() {
        // At depth 1 a successful play is the only move that raises the
        // score, so it must out-rate every clue and discard.
        let session = (0..32)
            .map(deal_session)
            .find(|s| {
                s.state()
                    .hand(s.current_player())
                    .iter()
                    .any(|c| s.state().is_playable(c.kind))
            })
            .expect("some seed opens with a playable card");
        let mut strategy = SearchStrategy::new(1, 600);
        let mv = strategy.choose(&Observation::Full(&session));
        match mv {
            Move::Play(id) => {
                let card = session
                    .state()
                    .hand(session.current_player())
                    .get(id)
                    .unwrap();
                assert!(session.state().is_playable(card.kind));
            }
            other => panic!("expected a play, got {other}"),
        }
    }

    #[test]
    fn node_budget_bounds_the_search() {
        let session = deal_session(22);
        let mut tight = SearchStrategy::new(10, 1);
        let mv = tight.choose(&Observation::Full(&session));
        validate(session.state(), session.current_player(), &mv).unwrap();
    }
}
