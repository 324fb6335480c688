//! Material evaluation of candidate moves.
//!
//! A move is worth the value of whatever stands on its destination square before
//! it is played. Moves are grouped by that value rather than ranked one by one;
//! the search picks among equal groups at random.

use std::collections::{BTreeMap, HashMap};

use super::search::TieBreaker;
use crate::core::board::{Board, PieceType};
use crate::core::moves::Move;

pub fn piece_value(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::Pawn => 1,
        PieceType::Knight => 3,
        PieceType::Bishop => 3,
        PieceType::Rook => 5,
        PieceType::Queen => 9,
        PieceType::King => 10,
    }
}

/// Value of the piece on the destination square, 0 for a quiet move.
///
/// En passant lands on an empty square and therefore scores 0.
pub fn capture_value(board: &Board, mv: Move) -> i32 {
    board
        .piece_at(mv.to())
        .map(|p| piece_value(p.piece_type))
        .unwrap_or(0)
}

/// Moves bucketed by score. Within a bucket moves keep insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoredMoves {
    buckets: BTreeMap<i32, Vec<Move>>,
    /// Reverse index for `score_of`
    scores: HashMap<Move, i32>,
}

impl ScoredMoves {
    pub fn push(&mut self, score: i32, mv: Move) {
        self.buckets.entry(score).or_default().push(mv);
        self.scores.insert(mv, score);
    }

    pub fn buckets(&self) -> &BTreeMap<i32, Vec<Move>> {
        &self.buckets
    }

    pub fn get(&self, score: i32) -> Option<&[Move]> {
        self.buckets.get(&score).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn score_of(&self, mv: &Move) -> Option<i32> {
        self.scores.get(mv).copied()
    }

    /// Take the highest (or lowest) bucket and let `tie_breaker` pick within it.
    pub fn pick<T: TieBreaker + ?Sized>(
        &self,
        maximizing: bool,
        tie_breaker: &mut T,
    ) -> Option<(i32, Move)> {
        let (&score, moves) = if maximizing {
            self.buckets.last_key_value()?
        } else {
            self.buckets.first_key_value()?
        };
        let mv = match moves.as_slice() {
            [only] => *only,
            tied => tie_breaker.pick(tied)?,
        };
        Some((score, mv))
    }
}

/// Group `moves` by capture value on `board`.
pub fn score_moves(board: &Board, moves: &[Move]) -> ScoredMoves {
    let mut scored = ScoredMoves::default();
    for &mv in moves {
        scored.push(capture_value(board, mv), mv);
    }
    scored
}
