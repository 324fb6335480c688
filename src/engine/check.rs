//! Check detection by looking outward from the king square.

use crate::core::board::{Board, Color, Piece, PieceType, Square};

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];

/// Right, left, up, down
pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// North-east, north-west, south-west, south-east
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// Is the king of `side` standing on `king` attacked?
pub fn in_check(board: &Board, side: Color, king: Square) -> bool {
    knight_attack(board, side, king)
        || cardinal_attack(board, side, king)
        || diagonal_attack(board, side, king)
}

/// Locate the king of `side` and test it. A board without that king is never in check.
pub fn king_in_check(board: &Board, side: Color) -> bool {
    board
        .king_square(side)
        .is_some_and(|king| in_check(board, side, king))
}

pub fn knight_attack(board: &Board, side: Color, king: Square) -> bool {
    let knight = Piece::new(PieceType::Knight, !side);
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(dr, df)| king.offset(dr, df))
        .any(|sq| board.piece_at(sq) == Some(knight))
}

/// Rook or queen along a rank or file
pub fn cardinal_attack(board: &Board, side: Color, king: Square) -> bool {
    ORTHOGONAL.iter().any(|&dir| {
        matches!(
            first_blocker(board, king, dir),
            Some(p) if p.color != side
                && matches!(p.piece_type, PieceType::Rook | PieceType::Queen)
        )
    })
}

/// Bishop or queen along a diagonal, plus pawn and adjacent-king contacts
pub fn diagonal_attack(board: &Board, side: Color, king: Square) -> bool {
    let enemy = !side;

    // Enemy pawns attack toward us, so they sit one rank "ahead" of our king
    let pawn = Piece::new(PieceType::Pawn, enemy);
    let pawn_rank = side.pawn_direction();
    if [-1, 1]
        .iter()
        .filter_map(|&df| king.offset(pawn_rank, df))
        .any(|sq| board.piece_at(sq) == Some(pawn))
    {
        return true;
    }

    let enemy_king = Piece::new(PieceType::King, enemy);
    if ORTHOGONAL
        .iter()
        .chain(DIAGONAL.iter())
        .filter_map(|&(dr, df)| king.offset(dr, df))
        .any(|sq| board.piece_at(sq) == Some(enemy_king))
    {
        return true;
    }

    DIAGONAL.iter().any(|&dir| {
        matches!(
            first_blocker(board, king, dir),
            Some(p) if p.color == enemy
                && matches!(p.piece_type, PieceType::Bishop | PieceType::Queen)
        )
    })
}

/// First piece met walking from `from` (exclusive) in direction `dir`.
fn first_blocker(board: &Board, from: Square, (dr, df): (i8, i8)) -> Option<Piece> {
    let mut sq = from;
    while let Some(next) = sq.offset(dr, df) {
        if let Some(piece) = board.piece_at(next) {
            return Some(piece);
        }
        sq = next;
    }
    None
}
