//! Score and lives bookkeeping.
//!
//! The world mutates these counters only through the methods below; the
//! driver reads them to decide between respawn and game over.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    score: u64,
    lives: u32,
}

impl ScoreLedger {
    pub fn new(lives: u32) -> Self {
        Self { score: 0, lives }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn increase_score(&mut self, points: u64) {
        self.score += points;
    }

    pub fn inc_lives(&mut self) {
        self.lives += 1;
    }

    /// Lose a life. Never wraps below zero.
    pub fn dec_lives(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }
}
