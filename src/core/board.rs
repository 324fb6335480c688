//! Chess board representation
//!
//! A `Board` is an 8x8 mailbox snapshot plus castling rights and the en passant
//! target. Boards are plain values: `apply` returns a new board and leaves the
//! original untouched.

use super::error::BoardError;
use super::moves::Move;
use std::fmt;
use std::str::FromStr;

/// Square representation (0-63, a1=0, h8=63)
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct Square(pub u8);

impl Square {
    pub const A1: Square = Square(0);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);

    #[inline]
    pub const fn new(sq: u8) -> Self {
        Square(sq)
    }

    #[inline]
    pub const fn from_file_rank(file: u8, rank: u8) -> Self {
        Square(rank * 8 + file)
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.0 & 7
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 >> 3
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The square `dr` ranks and `df` files away, or `None` when that leaves the board.
    #[inline]
    pub fn offset(self, dr: i8, df: i8) -> Option<Square> {
        let rank = self.rank() as i8 + dr;
        let file = self.file() as i8 + df;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square::from_file_rank(file as u8, rank as u8))
        } else {
            None
        }
    }

    /// Iterate a1, b1, ..., h1, a2, ..., h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    /// Parse a square from algebraic notation (e.g., "e4")
    pub fn from_algebraic(s: &str) -> Option<Self> {
        if s.len() != 2 {
            return None;
        }
        let bytes = s.as_bytes();
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        if file < 8 && rank < 8 {
            Some(Square::from_file_rank(file, rank))
        } else {
            None
        }
    }

    /// Convert to algebraic notation
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.file()) as char;
        let rank = (b'1' + self.rank()) as char;
        format!("{}{}", file, rank)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

/// Piece color
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a pawn step (+1 for white, -1 for black)
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank index from which pawns may double-step
    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Promotion rank for pawns
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;
    fn not(self) -> Self::Output {
        self.opposite()
    }
}

impl FromStr for Color {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Color::White),
            "black" | "b" => Ok(Color::Black),
            other => Err(BoardError::Color(other.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Piece type
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum PieceType {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceType {
    /// Pieces a pawn may promote to, in generation order.
    pub const PROMOTIONS: [PieceType; 4] = [
        PieceType::Rook,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Queen,
    ];

    pub const fn to_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }
}

/// A colored piece
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(piece_type: PieceType, color: Color) -> Self {
        Piece { piece_type, color }
    }

    /// Uppercase for white, lowercase for black
    pub fn to_char(self) -> char {
        let c = self.piece_type.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let piece_type = PieceType::from_char(c)?;
        let color = if c.is_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(piece_type, color))
    }
}

/// Castling rights
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_KINGSIDE: u8 = 1;
    pub const WHITE_QUEENSIDE: u8 = 2;
    pub const BLACK_KINGSIDE: u8 = 4;
    pub const BLACK_QUEENSIDE: u8 = 8;
    pub const ALL: CastlingRights = CastlingRights(0xF);

    #[inline]
    pub const fn new(rights: u8) -> Self {
        CastlingRights(rights)
    }

    #[inline]
    pub const fn has(self, right: u8) -> bool {
        (self.0 & right) != 0
    }

    #[inline]
    pub fn remove(&mut self, right: u8) {
        self.0 &= !right;
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    pub fn can_castle_kingside(self, color: Color) -> bool {
        match color {
            Color::White => self.has(Self::WHITE_KINGSIDE),
            Color::Black => self.has(Self::BLACK_KINGSIDE),
        }
    }

    pub fn can_castle_queenside(self, color: Color) -> bool {
        match color {
            Color::White => self.has(Self::WHITE_QUEENSIDE),
            Color::Black => self.has(Self::BLACK_QUEENSIDE),
        }
    }

    /// Both rights of one color
    pub const fn both(color: Color) -> u8 {
        match color {
            Color::White => Self::WHITE_KINGSIDE | Self::WHITE_QUEENSIDE,
            Color::Black => Self::BLACK_KINGSIDE | Self::BLACK_QUEENSIDE,
        }
    }
}

/// The fixed castling moves: king from, king to, rook from, rook to, color.
const CASTLES: [(Square, Square, Square, Square, Color); 4] = [
    (Square::E1, Square::G1, Square::H1, Square::F1, Color::White),
    (Square::E1, Square::C1, Square::A1, Square::D1, Color::White),
    (Square::E8, Square::G8, Square::H8, Square::F8, Color::Black),
    (Square::E8, Square::C8, Square::A8, Square::D8, Color::Black),
];

/// Rank-major grid, `grid[0]` is white's first rank.
pub type Grid = [[Option<Piece>; 8]; 8];

const START_RANKS: [&str; 8] = [
    "rnbqkbnr", "pppppppp", "8", "8", "8", "8", "PPPPPPPP", "RNBQKBNR",
];

/// The chess board state
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    grid: Grid,
    /// Castling rights
    pub castling: CastlingRights,
    /// Square passed over by the last double pawn step, if any
    pub en_passant: Option<Square>,
}

impl Board {
    /// Create a new empty board
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            castling: CastlingRights::NONE,
            en_passant: None,
        }
    }

    /// Create a board from the starting position
    pub fn startpos() -> Self {
        Self::from_ranks(&START_RANKS).expect("starting ranks are well formed")
    }

    /// Build a board from placement rows in FEN order (eighth rank first).
    ///
    /// Digits are runs of empty squares, letters are pieces. Rows are reversed so
    /// that rank index 0 is white's first rank. Every castling right starts set and
    /// there is no en passant target.
    pub fn from_ranks<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        if rows.len() != 8 {
            return Err(BoardError::RankCount(rows.len()));
        }

        let mut board = Board::empty();
        board.castling = CastlingRights::ALL;

        for (rank, row) in rows.iter().rev().enumerate() {
            let mut file = 0usize;
            for c in row.as_ref().chars() {
                if let Some(run) = c.to_digit(10) {
                    file += run as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(BoardError::UnknownPiece(c))?;
                if file >= 8 {
                    return Err(BoardError::RankWidth { rank, width: file + 1 });
                }
                board.grid[rank][file] = Some(piece);
                file += 1;
            }
            if file != 8 {
                return Err(BoardError::RankWidth { rank, width: file });
            }
        }

        Ok(board)
    }

    /// Parse a board and side to move from FEN notation. Clocks are ignored.
    pub fn from_fen(fen: &str) -> Result<(Self, Color), BoardError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(BoardError::Fen("too few fields".to_string()));
        }

        let rows: Vec<&str> = parts[0].split('/').collect();
        let mut board = Board::from_ranks(&rows)?;

        let side = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(BoardError::Fen(format!("invalid side to move '{}'", other))),
        };

        let mut castling = 0u8;
        for c in parts[2].chars() {
            match c {
                'K' => castling |= CastlingRights::WHITE_KINGSIDE,
                'Q' => castling |= CastlingRights::WHITE_QUEENSIDE,
                'k' => castling |= CastlingRights::BLACK_KINGSIDE,
                'q' => castling |= CastlingRights::BLACK_QUEENSIDE,
                '-' => {}
                _ => return Err(BoardError::Fen(format!("unknown castling right '{}'", c))),
            }
        }
        board.castling = CastlingRights::new(castling);

        board.en_passant = if parts[3] == "-" {
            None
        } else {
            Some(
                Square::from_algebraic(parts[3]).ok_or_else(|| {
                    BoardError::Fen(format!("invalid en passant square '{}'", parts[3]))
                })?,
            )
        };

        Ok((board, side))
    }

    /// Piece placement field, eighth rank first
    pub fn placement(&self) -> String {
        let mut out = String::new();
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.grid[rank][file] {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }
        out
    }

    /// Convert the board to FEN notation with the given side to move
    pub fn to_fen(&self, side: Color) -> String {
        let mut fen = self.placement();

        fen.push(' ');
        fen.push(match side {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        if self.castling.raw() == 0 {
            fen.push('-');
        } else {
            for (right, c) in [
                (CastlingRights::WHITE_KINGSIDE, 'K'),
                (CastlingRights::WHITE_QUEENSIDE, 'Q'),
                (CastlingRights::BLACK_KINGSIDE, 'k'),
                (CastlingRights::BLACK_QUEENSIDE, 'q'),
            ] {
                if self.castling.has(right) {
                    fen.push(c);
                }
            }
        }

        fen.push(' ');
        match self.en_passant {
            Some(sq) => fen.push_str(&sq.to_algebraic()),
            None => fen.push('-'),
        }

        fen.push_str(" 0 1");
        fen
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.rank() as usize][sq.file() as usize]
    }

    /// Put a piece on the board
    pub fn put_piece(&mut self, piece: Piece, sq: Square) {
        self.grid[sq.rank() as usize][sq.file() as usize] = Some(piece);
    }

    /// Remove a piece from the board
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.grid[sq.rank() as usize][sq.file() as usize].take()
    }

    /// First square holding the king of `color`
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceType::King, color);
        Square::all().find(|&sq| self.piece_at(sq) == Some(king))
    }

    /// Return the board after `mv` is played by `mover`.
    ///
    /// No legality checks happen here; `mv` is expected to come from the move
    /// generator for this exact board.
    pub fn apply(&self, mv: Move, mover: Color) -> Board {
        let mut next = *self;
        next.en_passant = None;

        let (from, to) = (mv.from(), mv.to());
        let Some(piece) = next.remove_piece(from) else {
            return next;
        };

        if piece.piece_type == PieceType::Pawn {
            // En passant: the captured pawn sits one rank behind the target
            if self.en_passant == Some(to) && from.file() != to.file() {
                if let Some(victim_sq) = to.offset(-mover.pawn_direction(), 0) {
                    if next.piece_at(victim_sq) == Some(Piece::new(PieceType::Pawn, !mover)) {
                        next.remove_piece(victim_sq);
                    }
                }
            }

            if to.rank().abs_diff(from.rank()) == 2 {
                next.en_passant = from.offset(mover.pawn_direction(), 0);
            }
        }

        let placed = match mv.promotion_piece() {
            Some(promo) if piece.piece_type == PieceType::Pawn => Piece::new(promo, piece.color),
            _ => piece,
        };
        next.put_piece(placed, to);

        if piece.piece_type == PieceType::King {
            let castle = CASTLES
                .iter()
                .find(|(k_from, k_to, _, _, color)| {
                    *k_from == from && *k_to == to && *color == piece.color
                });
            if let Some(&(_, _, rook_from, rook_to, color)) = castle {
                if let Some(rook) = next.remove_piece(rook_from) {
                    next.put_piece(rook, rook_to);
                }
                next.castling.remove(CastlingRights::both(color));
            }
        }

        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for rank in (0..8).rev() {
            write!(f, "  {} ", rank + 1)?;
            for file in 0..8 {
                match self.grid[rank][file] {
                    Some(piece) => write!(f, "{} ", piece.to_char())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "    a b c d e f g h")?;
        writeln!(f)?;
        writeln!(f, "  Placement: {}", self.placement())?;
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
