//! Per-move time budget derived from the clock and the game phase.

use std::time::{Duration, Instant};

use crate::core::moves::Move;

/// Full moves up to which the game counts as the opening.
pub const OPENING_MOVES: usize = 10;
/// Full moves up to which the game counts as the middlegame.
pub const MIDGAME_MOVES: usize = 30;
/// Expected game length in full moves.
pub const AVERAGE_GAME_MOVES: u32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Opening,
    Midgame,
    Endgame,
}

impl GamePhase {
    /// Phase from the number of plies played so far.
    pub fn from_plies(plies: usize) -> Self {
        let moves_made = plies / 2;
        if moves_made <= OPENING_MOVES {
            GamePhase::Opening
        } else if moves_made <= MIDGAME_MOVES {
            GamePhase::Midgame
        } else {
            GamePhase::Endgame
        }
    }
}

/// Time to spend on the next move.
///
/// The opening spends a fixed slice of the whole game clock, later phases a
/// slice of what is left. The cost of this computation is deducted.
pub fn budget(history: &[Move], remaining: Duration, game_time: Duration) -> Duration {
    let start = Instant::now();
    let allotted = match GamePhase::from_plies(history.len()) {
        GamePhase::Opening => game_time / (2 * AVERAGE_GAME_MOVES),
        GamePhase::Midgame => remaining / AVERAGE_GAME_MOVES,
        GamePhase::Endgame => remaining / (2 * AVERAGE_GAME_MOVES),
    };
    allotted.saturating_sub(start.elapsed())
}
