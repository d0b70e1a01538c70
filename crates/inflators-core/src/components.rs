//! Plain data carried by actors.
//!
//! Components have no behavior beyond trivial accessors.
//! Game logic lives in the automata and the world, not here.

use serde::{Deserialize, Serialize};

use crate::enums::{Facing, NachlingPhase};

/// Memory of the Nachling automaton.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NachlingMind {
    pub phase: NachlingPhase,
    pub facing: Facing,
    /// Distance to the nearer side border, captured when patrol begins.
    pub border_distance: i32,
    /// Half the amplitude of a patrol sweep.
    pub half_move: i32,
    /// Patrol steps left before the facing flips.
    pub hold_remaining: i32,
}

/// Energy pool shared by every ship (player and aliens).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Energy {
    current: i32,
    full: i32,
}

impl Energy {
    pub fn new(full: i32) -> Self {
        Self {
            current: full,
            full,
        }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn full(&self) -> i32 {
        self.full
    }

    pub fn decrease(&mut self, points: i32) {
        self.current -= points;
    }

    /// Overwrite the current level, e.g. to stage a scripted encounter.
    pub fn set_current(&mut self, value: i32) {
        self.current = value;
    }

    pub fn restore_full(&mut self) {
        self.current = self.full;
    }

    /// Remaining fraction of full energy, 0.0 when depleted.
    pub fn pct(&self) -> f64 {
        if self.full <= 0 {
            return 0.0;
        }
        (f64::from(self.current) / f64::from(self.full)).max(0.0)
    }

    /// Energy at or below zero is the universal death trigger for ships.
    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }
}
