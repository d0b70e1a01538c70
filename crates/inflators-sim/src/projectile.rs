//! Bullets and torpedoes.

use inflators_core::constants::{BULLET_DAMAGE, TORPEDO_DAMAGE};
use inflators_core::enums::{HitCause, ProjectileKind, Shooter};

use crate::actor::ActorBody;
use crate::world::World;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projectile {
    kind: ProjectileKind,
    shooter: Shooter,
}

impl Projectile {
    pub fn new(kind: ProjectileKind, shooter: Shooter) -> Self {
        Self { kind, shooter }
    }

    pub fn kind(&self) -> ProjectileKind {
        self.kind
    }

    pub fn shooter(&self) -> Shooter {
        self.shooter
    }

    pub fn damage(&self) -> i32 {
        match self.kind {
            ProjectileKind::Bullet => BULLET_DAMAGE,
            ProjectileKind::Torpedo => TORPEDO_DAMAGE,
        }
    }

    /// Player shots climb one row and then strike every alien in the new
    /// cell. Alien shots strike the player in the current cell and then
    /// drop one row.
    pub(crate) fn act(&self, body: &mut ActorBody, world: &mut World) {
        match self.shooter {
            Shooter::Player => {
                body.position.y += 1;
                let hits = world.colliding_aliens(body.position);
                for id in &hits {
                    world.damage_alien(*id, self.damage(), HitCause::Projectile);
                }
                if !hits.is_empty() {
                    body.set_dead();
                }
            }
            Shooter::Alien => {
                let hit_player = world.colliding_player(body.position).is_some();
                body.position.y -= 1;
                if hit_player {
                    world.damage_player(self.damage(), HitCause::Projectile);
                    body.set_dead();
                }
            }
        }

        if !world.grid().row_in_bounds(body.position.y) {
            body.set_dead();
        }
    }
}
