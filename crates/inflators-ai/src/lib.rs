//! Alien behavior for Space Inflators.
//!
//! Implements the Nachling movement/firing automaton, the Smallbot policy
//! and the per-species profiles. Everything here is a pure function of
//! plain data plus an injected RNG.

pub mod nachling;
pub mod profiles;
pub mod smallbot;

pub use inflators_core as core;

/// Odds denominator for round-scaled rolls: floor(scale / round) + 1.
pub fn round_scaled_odds(scale: u32, round: u32) -> u32 {
    scale / round.max(1) + 1
}

#[cfg(test)]
mod tests;
