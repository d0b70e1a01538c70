//! Per-tick systems run by the world.
//!
//! Systems are plain functions over the pieces of world state they need;
//! they hold no state of their own.

pub mod cleanup;
pub mod snapshot;
pub mod spawner;
