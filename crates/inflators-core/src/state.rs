//! World snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::VisualKind;
use crate::events::AudioEvent;
use crate::types::{ActorId, GridPos};

/// One live actor as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActorView {
    pub id: ActorId,
    pub kind: VisualKind,
    pub position: GridPos,
    pub visible: bool,
    /// Display intensity in 0.0..=1.2; only goodies fade.
    pub brightness: f64,
}

/// The player ship and its resources.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: GridPos,
    pub energy: i32,
    pub energy_pct: f64,
    pub torpedoes: u32,
    pub alive: bool,
}

/// Complete world state after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub round: u32,
    pub killed_this_round: u32,
    pub score: u64,
    pub lives: u32,
    pub hud: String,
    pub player: Option<PlayerView>,
    /// Live actors in insertion order.
    pub actors: Vec<ActorView>,
    pub audio_events: Vec<AudioEvent>,
}
