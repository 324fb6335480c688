pub mod core;
pub mod engine;
pub mod uci;

pub use crate::core::{Board, Color, Move, Piece, PieceType, Square};
pub use engine::search::{choose_move, SearchLimits, Searcher};
pub use uci::UCI;
