//! Core types and definitions for the Space Inflators simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! grid types, enums, tuning constants, configuration, audio events,
//! the score ledger, HUD formatting and renderer snapshots.
//! It contains no simulation logic.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod hud;
pub mod ledger;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
