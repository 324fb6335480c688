//! Core chess types and representations
//!
//! This module contains the fundamental building blocks of the engine:
//! - Mailbox board state and move application
//! - Move encoding and coordinate notation
//! - Input decoding errors

pub mod board;
pub mod error;
pub mod moves;

pub use board::{Board, CastlingRights, Color, Grid, Piece, PieceType, Square};
pub use error::{BoardError, MoveParseError};
pub use moves::Move;
