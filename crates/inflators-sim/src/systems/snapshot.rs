//! Snapshot system: builds the renderer-facing `WorldSnapshot`.

use inflators_core::events::AudioEvent;
use inflators_core::ledger::ScoreLedger;
use inflators_core::state::WorldSnapshot;

use crate::actor::Actor;
use crate::player::Player;

/// Per-tick counters copied into the snapshot.
pub struct SnapshotCounters {
    pub tick: u64,
    pub round: u32,
    pub killed_this_round: u32,
}

/// Build a complete snapshot from the current world state. Actors appear
/// in insertion order; dead ones awaiting reap are skipped.
pub fn build_snapshot(
    counters: SnapshotCounters,
    actors: &[Option<Actor>],
    player: Option<&Player>,
    ledger: &ScoreLedger,
    hud: &str,
    audio_events: Vec<AudioEvent>,
) -> WorldSnapshot {
    WorldSnapshot {
        tick: counters.tick,
        round: counters.round,
        killed_this_round: counters.killed_this_round,
        score: ledger.score(),
        lives: ledger.lives(),
        hud: hud.to_string(),
        player: player.map(Player::view),
        actors: actors
            .iter()
            .flatten()
            .filter(|actor| actor.is_alive())
            .map(Actor::view)
            .collect(),
        audio_events,
    }
}
