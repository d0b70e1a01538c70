//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// A single key press consumed by the player in one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    /// Fire a bullet.
    FirePrimary,
    /// Fire a torpedo (needs torpedoes in stock).
    FireSecondary,
}

/// Projectile flavour. Torpedoes hit harder than bullets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    Bullet,
    Torpedo,
}

/// Who launched a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shooter {
    /// Travels up the screen.
    Player,
    /// Travels down the screen.
    Alien,
}

/// Pickup flavour dropped by dying aliens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoodieKind {
    /// One extra life.
    FreeShip,
    /// Restores the player's energy to full.
    Energy,
    /// Adds torpedoes.
    Torpedo,
}

/// Alien species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Nachling,
    /// Nachling variant that malfunctions and drops richer goodies.
    WealthyNachling,
    Smallbot,
}

/// Behavior phase of the Nachling automaton.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NachlingPhase {
    /// Dive toward the player's column.
    #[default]
    Descend,
    /// Strafe left/right and shoot.
    Patrol,
    /// Climb back to the top row.
    ReturnPass,
}

/// Horizontal facing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

impl Facing {
    pub fn reversed(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    /// Column delta for one step in this direction.
    pub fn dx(self) -> i32 {
        match self {
            Facing::Left => -1,
            Facing::Right => 1,
        }
    }
}

/// How damage was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitCause {
    Projectile,
    /// Contact between the player ship and an alien.
    Ram,
}

/// Sprite selector handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualKind {
    PlayerShip,
    Nachling,
    WealthyNachling,
    Smallbot,
    Bullet,
    Torpedo,
    FreeShipGoodie,
    EnergyGoodie,
    TorpedoGoodie,
    Star,
}

/// Result of advancing the world by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickStatus {
    Continue,
    PlayerDied,
}
