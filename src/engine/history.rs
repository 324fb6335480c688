//! Occurrence counts of (position, move) pairs played during a game.
//!
//! The table is append-only for the lifetime of a game and lives with the host
//! session. Lookups are linear; a game produces at most a few hundred entries.

use crate::core::board::{Board, Grid};
use crate::core::moves::Move;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub grid: Grid,
    pub mv: Move,
    pub count: u32,
}

#[derive(Clone, Debug, Default)]
pub struct HistoryTable {
    entries: Vec<HistoryEntry>,
}

impl HistoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump the count for (board contents, move), appending a new entry on first sight.
    pub fn record(&mut self, board: &Board, mv: Move) -> u32 {
        let grid = board.grid();
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.mv == mv && &e.grid == grid)
        {
            entry.count += 1;
            return entry.count;
        }
        self.entries.push(HistoryEntry {
            grid: *grid,
            mv,
            count: 1,
        });
        1
    }

    pub fn lookup(&self, board: &Board, mv: Move) -> u32 {
        let grid = board.grid();
        self.entries
            .iter()
            .find(|e| e.mv == mv && &e.grid == grid)
            .map_or(0, |e| e.count)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
