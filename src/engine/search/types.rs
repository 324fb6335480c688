//! Search limits, stats, and constants.

use std::time::Duration;

use crate::core::board::Board;
use crate::core::board::Color;
use crate::core::moves::Move;

pub const INFINITY: i32 = 30000;
/// Iterative deepening never goes past this target depth.
pub const MAX_DEPTH: u32 = 100;
/// Extra plies allowed past the horizon after a significant capture.
pub const QUIESCENCE_PLIES: i32 = 2;
/// Capture value from which a move counts as non-quiescent (minor piece or more).
pub const NOISY_CAPTURE: i32 = 3;
/// Stop deepening once `DEPTH_GROWTH * elapsed` exceeds the budget.
pub const DEPTH_GROWTH: u32 = 5;
/// Length of a whole game clock in seconds.
pub const GAME_TIME_SECS: u64 = 900;

#[derive(Clone, Debug)]
pub struct SearchLimits {
    /// Iterations run for target depths `0..max_depth` (at least one).
    pub max_depth: u32,
    pub quiescence_plies: i32,
    /// Whole-game clock used to size opening moves.
    pub game_time: Duration,
    pub depth_growth: u32,
    /// Fixed per-move time, bypassing the time manager.
    pub movetime: Option<Duration>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            quiescence_plies: QUIESCENCE_PLIES,
            game_time: Duration::from_secs(GAME_TIME_SECS),
            depth_growth: DEPTH_GROWTH,
            movetime: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
    pub cutoffs: u64,
    /// Last fully searched target depth
    pub depth: Option<u32>,
    /// Score reported by the last completed iteration
    pub score: i32,
    pub elapsed: Duration,
}

/// One recursive call of the minimax walk.
#[derive(Clone, Copy, Debug)]
pub struct SearchNode<'a> {
    pub board: &'a Board,
    pub side: Color,
    /// Move that led to this node (`None` at the root)
    pub parent: Option<Move>,
    pub score: i32,
    pub alpha: i32,
    pub beta: i32,
    /// The move into this node was a significant capture
    pub extending: bool,
    pub quiescence_left: i32,
    pub depth: u32,
    pub target: u32,
}
