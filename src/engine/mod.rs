//! Chess engine components
//!
//! This module contains the decision-making core:
//! - Legal move generation and check detection
//! - Capture-value evaluation
//! - Iterative-deepening minimax search
//! - Time budgeting and the game history table

pub mod check;
pub mod eval;
pub mod history;
pub mod movegen;
pub mod search;
pub mod time;

pub use check::{in_check, king_in_check};
pub use eval::{capture_value, piece_value, score_moves, ScoredMoves};
pub use history::{HistoryEntry, HistoryTable};
pub use movegen::{perft, MoveGen};
pub use search::{choose_move, SearchLimits, SearchStats, Searcher, TieBreaker};
pub use time::{budget, GamePhase};
