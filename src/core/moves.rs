//! Move representation
//!
//! A move is an origin/destination pair with an optional promotion piece. It
//! carries no reference to the board it was generated from.

use super::board::{PieceType, Square};
use super::error::MoveParseError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PieceType>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn new_promotion(from: Square, to: Square, piece: PieceType) -> Self {
        Move {
            from,
            to,
            promotion: Some(piece),
        }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    pub const fn promotion_piece(self) -> Option<PieceType> {
        self.promotion
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Coordinate notation (e.g., "e2e4", "e7e8q")
    pub fn to_uci(self) -> String {
        let mut s = format!("{}{}", self.from.to_algebraic(), self.to.to_algebraic());
        if let Some(piece) = self.promotion {
            s.push(piece.to_char());
        }
        s
    }

    /// Parse coordinate notation.
    ///
    /// Longer notations are normalized first: capture markers (`x`) are stripped,
    /// and a fifth character left over is read as the promotion piece.
    pub fn from_uci(s: &str) -> Result<Self, MoveParseError> {
        let cleaned: String = s.trim().chars().filter(|&c| c != 'x').collect();
        if !cleaned.is_ascii() || cleaned.len() < 4 || cleaned.len() > 5 {
            return Err(MoveParseError::Length(s.to_string()));
        }

        let square = |part: &str| {
            Square::from_algebraic(part).ok_or_else(|| MoveParseError::Square(s.to_string()))
        };
        let from = square(&cleaned[0..2])?;
        let to = square(&cleaned[2..4])?;

        match cleaned.chars().nth(4) {
            None => Ok(Move::new(from, to)),
            Some(c) => match PieceType::from_char(c) {
                Some(piece) if PieceType::PROMOTIONS.contains(&piece) => {
                    Ok(Move::new_promotion(from, to, piece))
                }
                _ => Err(MoveParseError::Promotion(c)),
            },
        }
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::from_uci(s)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}
