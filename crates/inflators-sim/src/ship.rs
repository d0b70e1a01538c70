//! Energy pool and projectile launcher shared by the player and aliens.

use inflators_core::components::Energy;
use inflators_core::enums::{ProjectileKind, Shooter};
use inflators_core::types::{ActorId, GridPos};

use crate::world::World;

#[derive(Debug, Clone)]
pub struct Ship {
    energy: Energy,
    shooter: Shooter,
}

impl Ship {
    pub fn new(full_energy: i32, shooter: Shooter) -> Self {
        Self {
            energy: Energy::new(full_energy),
            shooter,
        }
    }

    pub fn energy(&self) -> Energy {
        self.energy
    }

    pub fn energy_mut(&mut self) -> &mut Energy {
        &mut self.energy
    }

    pub fn decrease_energy(&mut self, points: i32) {
        self.energy.decrease(points);
    }

    pub fn restore_full_energy(&mut self) {
        self.energy.restore_full();
    }

    pub fn energy_pct(&self) -> f64 {
        self.energy.pct()
    }

    /// Energy at or below zero.
    pub fn is_destroyed(&self) -> bool {
        self.energy.is_depleted()
    }

    /// Fire a projectile from `from` on behalf of this ship.
    pub(crate) fn launch(&self, world: &mut World, from: GridPos, kind: ProjectileKind) -> ActorId {
        world.launch_projectile(from, kind, self.shooter)
    }
}
