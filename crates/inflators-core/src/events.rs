//! Events emitted by the simulation for audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{GoodieKind, ProjectileKind, Species};

/// Fire-and-forget sound cues, drained by the driver once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// An alien survived a projectile hit.
    EnemyHit { species: Species },
    /// An alien was destroyed by a projectile.
    EnemyDied { species: Species },
    /// An alien projectile hit the player.
    PlayerHit,
    /// The player collided with one or more aliens.
    PlayerRammed,
    PlayerDied,
    GoodieCollected { kind: GoodieKind },
    /// Player launched a bullet.
    PlayerFiredPrimary,
    /// Player launched a torpedo.
    PlayerFiredSecondary,
    EnemyFired { kind: ProjectileKind },
}
