//! Fundamental grid and timing types.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A cell on the playfield. x = column, y = row, row 0 is the bottom.
pub type GridPos = IVec2;

/// Playfield dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Index of the rightmost column.
    pub fn right_edge(&self) -> i32 {
        self.width - 1
    }

    /// Index of the top row.
    pub fn top_row(&self) -> i32 {
        self.height - 1
    }

    pub fn column_in_bounds(&self, x: i32) -> bool {
        (0..self.width).contains(&x)
    }

    pub fn row_in_bounds(&self, y: i32) -> bool {
        (0..self.height).contains(&y)
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        self.column_in_bounds(pos.x) && self.row_in_bounds(pos.y)
    }

    /// Distances from a column to the left and right borders.
    pub fn border_distances(&self, x: i32) -> (i32, i32) {
        (x, self.right_edge() - x)
    }
}

/// Per-actor tick counter used for "act every Nth tick" gating.
///
/// `advance(n)` bumps the counter, wraps it to zero once it reaches `n`,
/// and returns the counter modulo `n`. With `n = 2` the results alternate
/// 1, 0, 1, 0, ... starting from a fresh counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cadence {
    ticks: u32,
}

impl Cadence {
    pub fn advance(&mut self, n: u32) -> u32 {
        self.ticks += 1;
        if self.ticks >= n {
            self.ticks = 0;
        }
        self.ticks % n
    }
}

/// Stable identity of an actor in the world's collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u64);
