//! Choosing among equally scored moves.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::core::moves::Move;

/// Source of randomness for tie-breaking between equal-score moves.
pub trait TieBreaker {
    /// Pick one of `candidates`; `None` only when the slice is empty.
    fn pick(&mut self, candidates: &[Move]) -> Option<Move>;
}

/// Uniform choice driven by a seedable generator.
pub struct RandomTieBreaker {
    rng: StdRng,
}

impl RandomTieBreaker {
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    pub fn seeded(seed: u64) -> Self {
        RandomTieBreaker {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomTieBreaker {
    fn default() -> Self {
        Self::new()
    }
}

impl TieBreaker for RandomTieBreaker {
    fn pick(&mut self, candidates: &[Move]) -> Option<Move> {
        candidates.choose(&mut self.rng).copied()
    }
}

/// Always the first candidate in generation order.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMove;

impl TieBreaker for FirstMove {
    fn pick(&mut self, candidates: &[Move]) -> Option<Move> {
        candidates.first().copied()
    }
}
