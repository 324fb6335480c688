//! Depth-limited minimax with alpha/beta bounds and a capture extension.

use log::trace;

use crate::core::moves::Move;
use crate::engine::eval::{score_moves, ScoredMoves};
use crate::engine::movegen::MoveGen;

use super::searcher::Searcher;
use super::tiebreak::TieBreaker;
use super::types::{SearchNode, NOISY_CAPTURE};

/// Fold a child's score with the capture made on this ply.
///
/// Even plies add the capture, odd plies subtract it.
#[inline]
pub fn combine(depth: u32, own_score: i32, child_score: i32) -> i32 {
    if depth % 2 == 0 {
        child_score + own_score
    } else {
        child_score - own_score
    }
}

impl<T: TieBreaker> Searcher<T> {
    /// Returns the node's score and the move chosen here (or the parent move at a leaf).
    ///
    /// Bounds travel down by value; a cutoff returns the offending move's gain at once.
    pub(super) fn min_max(&mut self, node: SearchNode<'_>) -> (i32, Option<Move>) {
        self.stats.nodes += 1;

        let SearchNode {
            board,
            side,
            parent,
            score,
            mut alpha,
            mut beta,
            extending,
            mut quiescence_left,
            depth,
            target,
        } = node;

        let at_horizon = depth == target;
        if at_horizon && extending {
            quiescence_left -= 1;
        }
        if at_horizon && !(extending && quiescence_left >= 0) {
            self.stats.leaves += 1;
            return (score, parent);
        }

        let moves = MoveGen::legal_moves(board, side);
        if moves.is_empty() {
            return (score, parent);
        }

        let scored = score_moves(board, &moves);
        let maximizing = depth % 2 == 0;
        let mut best_choices = ScoredMoves::default();

        for &mv in &moves {
            let child_board = board.apply(mv, side);
            let Some(own_score) = scored.score_of(&mv) else {
                unreachable!("{} missing from the scores of its own move list", mv);
            };

            let child = SearchNode {
                board: &child_board,
                side: !side,
                parent: Some(mv),
                score,
                alpha,
                beta,
                extending: own_score >= NOISY_CAPTURE,
                quiescence_left,
                // Past the horizon only the quiescence budget advances
                depth: if at_horizon { depth } else { depth + 1 },
                target,
            };
            let (child_score, _) = self.min_max(child);
            let gain = combine(depth, own_score, child_score);

            if maximizing {
                alpha = alpha.max(gain);
            } else {
                beta = beta.min(gain);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                trace!("cutoff at depth {} on {} (gain {})", depth, mv, gain);
                return (gain, Some(mv));
            }

            best_choices.push(gain, mv);
        }

        match best_choices.pick(maximizing, &mut self.tie_breaker) {
            Some((gain, mv)) => (gain, Some(mv)),
            None => (score, parent),
        }
    }
}
