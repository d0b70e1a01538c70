//! Headless Space Inflators driver.
//!
//! Wires a `World` to an input source and runs the tick-driver contract:
//! advance, respawn after a lost ship, stop on game over or tick limit.

pub mod game_loop;
pub mod input;

pub use inflators_core as core;
