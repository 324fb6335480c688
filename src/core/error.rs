//! Errors raised while decoding host input (boards and move notation).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("expected 8 ranks, got {0}")]
    RankCount(usize),
    #[error("rank {rank} covers {width} squares instead of 8")]
    RankWidth { rank: usize, width: usize },
    #[error("unknown piece letter '{0}'")]
    UnknownPiece(char),
    #[error("unknown color '{0}'")]
    Color(String),
    #[error("invalid FEN: {0}")]
    Fen(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    #[error("move '{0}' must be 4 or 5 characters after normalization")]
    Length(String),
    #[error("invalid square in move '{0}'")]
    Square(String),
    #[error("invalid promotion piece '{0}'")]
    Promotion(char),
}
