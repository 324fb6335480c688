//! Move generation
//!
//! Pseudo-legal moves come from per-piece rules on the mailbox board: pawn steps,
//! captures, en passant and promotions; knight jumps; ray-cast sliders; single
//! king steps. A move is legal when, once applied, the mover's king is not attacked.
//!
//! Castling destinations are not produced. `Board::apply` still executes the four
//! castling moves if a host feeds one in.

use super::check::{in_check, DIAGONAL, KNIGHT_OFFSETS, ORTHOGONAL};
use crate::core::board::{Board, Color, Piece, PieceType, Square};
use crate::core::moves::Move;

pub struct MoveGen;

impl MoveGen {
    /// All legal moves for `side`, in scan order (a1..h8) and fixed direction order.
    pub fn legal_moves(board: &Board, side: Color) -> Vec<Move> {
        let king = board.king_square(side);
        Self::pseudo_legal_moves(board, side)
            .into_iter()
            .filter(|&mv| {
                let king_sq = if Some(mv.from()) == king {
                    Some(mv.to())
                } else {
                    king
                };
                match king_sq {
                    Some(sq) => !in_check(&board.apply(mv, side), side, sq),
                    None => true,
                }
            })
            .collect()
    }

    /// Moves that obey piece movement rules, before king-safety filtering.
    pub fn pseudo_legal_moves(board: &Board, side: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        for from in Square::all() {
            let Some(piece) = board.piece_at(from) else {
                continue;
            };
            if piece.color != side {
                continue;
            }
            match piece.piece_type {
                PieceType::Pawn => Self::pawn_moves(board, from, side, &mut moves),
                PieceType::Knight => Self::knight_moves(board, from, side, &mut moves),
                PieceType::Bishop => Self::slider_moves(board, from, side, &DIAGONAL, 7, &mut moves),
                PieceType::Rook => Self::slider_moves(board, from, side, &ORTHOGONAL, 7, &mut moves),
                PieceType::Queen => {
                    Self::slider_moves(board, from, side, &ORTHOGONAL, 7, &mut moves);
                    Self::slider_moves(board, from, side, &DIAGONAL, 7, &mut moves);
                }
                PieceType::King => {
                    Self::slider_moves(board, from, side, &DIAGONAL, 1, &mut moves);
                    Self::slider_moves(board, from, side, &ORTHOGONAL, 1, &mut moves);
                }
            }
        }
        moves
    }

    fn pawn_moves(board: &Board, from: Square, side: Color, moves: &mut Vec<Move>) {
        let dir = side.pawn_direction();

        // Forward steps stop at the first occupied square
        let steps = if from.rank() == side.pawn_start_rank() { 2 } else { 1 };
        let mut sq = from;
        for _ in 0..steps {
            match sq.offset(dir, 0) {
                Some(next) if board.piece_at(next).is_none() => {
                    Self::push_pawn_move(from, next, side, moves);
                    sq = next;
                }
                _ => break,
            }
        }

        for df in [1, -1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            match board.piece_at(target) {
                Some(p) if p.color != side => Self::push_pawn_move(from, target, side, moves),
                None if board.en_passant == Some(target) => {
                    let victim = target.offset(-dir, 0).and_then(|sq| board.piece_at(sq));
                    if victim == Some(Piece::new(PieceType::Pawn, !side)) {
                        moves.push(Move::new(from, target));
                    }
                }
                _ => {}
            }
        }
    }

    fn push_pawn_move(from: Square, to: Square, side: Color, moves: &mut Vec<Move>) {
        if to.rank() == side.promotion_rank() {
            for piece in PieceType::PROMOTIONS {
                moves.push(Move::new_promotion(from, to, piece));
            }
        } else {
            moves.push(Move::new(from, to));
        }
    }

    fn knight_moves(board: &Board, from: Square, side: Color, moves: &mut Vec<Move>) {
        for &(dr, df) in &KNIGHT_OFFSETS {
            let Some(to) = from.offset(dr, df) else {
                continue;
            };
            if board.piece_at(to).is_none_or(|p| p.color != side) {
                moves.push(Move::new(from, to));
            }
        }
    }

    /// Walk each direction up to `max_steps`; an enemy blocker is a capture, an own blocker is not.
    fn slider_moves(
        board: &Board,
        from: Square,
        side: Color,
        directions: &[(i8, i8)],
        max_steps: usize,
        moves: &mut Vec<Move>,
    ) {
        for &(dr, df) in directions {
            let mut sq = from;
            for _ in 0..max_steps {
                let Some(to) = sq.offset(dr, df) else {
                    break;
                };
                match board.piece_at(to) {
                    None => moves.push(Move::new(from, to)),
                    Some(p) => {
                        if p.color != side {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                sq = to;
            }
        }
    }
}

/// Count leaf nodes of the legal move tree.
pub fn perft(board: &Board, side: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = MoveGen::legal_moves(board, side);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|&mv| perft(&board.apply(mv, side), !side, depth - 1))
        .sum()
}
