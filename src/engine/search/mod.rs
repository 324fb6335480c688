//! Search: iterative deepening, minimax with alpha/beta bounds, capture extension.

mod minimax;
mod searcher;
mod tiebreak;
mod types;

pub use minimax::combine;
pub use searcher::{choose_move, Searcher};
pub use tiebreak::{FirstMove, RandomTieBreaker, TieBreaker};
pub use types::{
    SearchLimits, SearchNode, SearchStats, DEPTH_GROWTH, GAME_TIME_SECS, INFINITY, MAX_DEPTH,
    NOISY_CAPTURE, QUIESCENCE_PLIES,
};
