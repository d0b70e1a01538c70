//! Simulation engine for Space Inflators.
//!
//! Owns the actor arena and the player, runs the per-tick update protocol,
//! resolves collisions and produces `WorldSnapshot`s for the renderer.

pub mod actor;
pub mod alien;
pub mod goodie;
pub mod player;
pub mod projectile;
pub mod ship;
pub mod systems;
pub mod world;

pub use inflators_core as core;
pub use world::World;
