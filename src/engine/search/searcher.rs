//! Searcher: iterative deepening driver, time budget, and turn entry point.

use log::{debug, info};
use std::time::{Duration, Instant};

use crate::core::board::{Board, Color};
use crate::core::moves::Move;
use crate::engine::eval::score_moves;
use crate::engine::movegen::MoveGen;
use crate::engine::time::{self, GamePhase};

use super::tiebreak::{RandomTieBreaker, TieBreaker};
use super::types::{SearchLimits, SearchNode, SearchStats, INFINITY};

pub struct Searcher<T = RandomTieBreaker> {
    pub(super) limits: SearchLimits,
    pub(super) tie_breaker: T,
    pub(super) stats: SearchStats,
}

impl Searcher<RandomTieBreaker> {
    pub fn new() -> Self {
        Self::with_tie_breaker(SearchLimits::default(), RandomTieBreaker::new())
    }

    /// Reproducible tie-breaking.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_tie_breaker(SearchLimits::default(), RandomTieBreaker::seeded(seed))
    }
}

impl<T: TieBreaker> Searcher<T> {
    pub fn with_tie_breaker(limits: SearchLimits, tie_breaker: T) -> Self {
        Searcher {
            limits,
            tie_breaker,
            stats: SearchStats::default(),
        }
    }

    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    pub fn limits_mut(&mut self) -> &mut SearchLimits {
        &mut self.limits
    }

    pub fn set_tie_breaker(&mut self, tie_breaker: T) {
        self.tie_breaker = tie_breaker;
    }

    /// Stats of the most recent `search`.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick a move for `color` given the clock and the moves played so far.
    pub fn choose_move(
        &mut self,
        board: &Board,
        color: Color,
        remaining: Duration,
        history: &[Move],
    ) -> Option<Move> {
        let budget = match self.limits.movetime {
            Some(movetime) => movetime,
            None => time::budget(history, remaining, self.limits.game_time),
        };
        info!(
            "{} to move, {:?} phase, budget {:?} of {:?} remaining",
            color,
            GamePhase::from_plies(history.len()),
            budget,
            remaining
        );

        let chosen = self.search(board, color, budget);
        match chosen {
            Some(mv) => info!("chose {} at depth {:?}", mv, self.stats.depth),
            None => info!("no legal move for {}", color),
        }
        chosen
    }

    /// Iterative deepening from target depth 0 until the budget guard trips.
    ///
    /// An iteration always runs to completion once started; the budget is only
    /// checked between iterations.
    pub fn search(&mut self, board: &Board, side: Color, budget: Duration) -> Option<Move> {
        self.stats = SearchStats::default();
        let start = Instant::now();
        let mut best_move = None;
        let mut taken = Duration::ZERO;

        for target in 0..self.limits.max_depth.max(1) {
            let iteration = Instant::now();
            let (score, mv) = self.search_depth(board, side, target);
            taken += iteration.elapsed();

            if mv.is_some() {
                best_move = mv;
                self.stats.score = score;
            }
            self.stats.depth = Some(target);
            self.stats.elapsed = start.elapsed();
            debug!(
                "depth {} score {} move {} nodes {} time {}ms",
                target,
                score,
                mv.map_or_else(|| "none".to_string(), |m| m.to_uci()),
                self.stats.nodes,
                self.stats.elapsed.as_millis()
            );

            if taken * self.limits.depth_growth > budget {
                break;
            }
        }

        best_move
    }

    /// One iteration at a fixed target depth.
    ///
    /// Depth 0 is a one-ply pick of the best capture; deeper targets run minimax.
    pub fn search_depth(&mut self, board: &Board, side: Color, target: u32) -> (i32, Option<Move>) {
        if target == 0 {
            self.stats.nodes += 1;
            let moves = MoveGen::legal_moves(board, side);
            return match score_moves(board, &moves).pick(true, &mut self.tie_breaker) {
                Some((score, mv)) => (score, Some(mv)),
                None => (0, None),
            };
        }

        let root = SearchNode {
            board,
            side,
            parent: None,
            score: 0,
            alpha: -INFINITY,
            beta: INFINITY,
            extending: false,
            quiescence_left: self.limits.quiescence_plies,
            depth: 0,
            target,
        };
        self.min_max(root)
    }
}

impl Default for Searcher<RandomTieBreaker> {
    fn default() -> Self {
        Self::new()
    }
}

/// Choose a move with default limits and fresh random tie-breaking.
pub fn choose_move(board: &Board, color: Color, remaining: Duration, history: &[Move]) -> Option<Move> {
    Searcher::new().choose_move(board, color, remaining, history)
}
