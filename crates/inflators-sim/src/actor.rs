//! Actor records stored in the world's arena.
//!
//! Every actor shares an `ActorBody` (identity, position, liveness, cadence)
//! and carries one variant of `ActorKind` with its own behavior.

use inflators_core::enums::{GoodieKind, ProjectileKind, VisualKind};
use inflators_core::state::ActorView;
use inflators_core::types::{ActorId, Cadence, GridPos};

use crate::alien::Alien;
use crate::goodie::Goodie;
use crate::projectile::Projectile;
use crate::world::World;

/// State common to every actor.
#[derive(Debug, Clone)]
pub struct ActorBody {
    pub(crate) id: ActorId,
    pub(crate) position: GridPos,
    pub(crate) alive: bool,
    pub(crate) visible: bool,
    pub(crate) cadence: Cadence,
}

impl ActorBody {
    fn new(id: ActorId, position: GridPos) -> Self {
        Self {
            id,
            position,
            alive: true,
            visible: true,
            cadence: Cadence::default(),
        }
    }

    /// One-way transition; dead actors are never resurrected.
    pub(crate) fn set_dead(&mut self) {
        self.alive = false;
    }
}

/// The closed set of actor variants living in the arena.
#[derive(Debug, Clone)]
pub enum ActorKind {
    /// Decorative particle falling down the screen.
    Star,
    Projectile(Projectile),
    Goodie(Goodie),
    Alien(Alien),
}

#[derive(Debug, Clone)]
pub struct Actor {
    pub(crate) body: ActorBody,
    pub(crate) kind: ActorKind,
}

impl Actor {
    pub(crate) fn new(id: ActorId, position: GridPos, kind: ActorKind) -> Self {
        Self {
            body: ActorBody::new(id, position),
            kind,
        }
    }

    pub fn id(&self) -> ActorId {
        self.body.id
    }

    pub fn position(&self) -> GridPos {
        self.body.position
    }

    pub fn is_alive(&self) -> bool {
        self.body.alive
    }

    pub fn kind(&self) -> &ActorKind {
        &self.kind
    }

    pub fn as_alien(&self) -> Option<&Alien> {
        match &self.kind {
            ActorKind::Alien(alien) => Some(alien),
            _ => None,
        }
    }

    pub(crate) fn as_alien_mut(&mut self) -> Option<&mut Alien> {
        match &mut self.kind {
            ActorKind::Alien(alien) => Some(alien),
            _ => None,
        }
    }

    pub fn as_projectile(&self) -> Option<&Projectile> {
        match &self.kind {
            ActorKind::Projectile(projectile) => Some(projectile),
            _ => None,
        }
    }

    pub fn as_goodie(&self) -> Option<&Goodie> {
        match &self.kind {
            ActorKind::Goodie(goodie) => Some(goodie),
            _ => None,
        }
    }

    pub fn is_alien(&self) -> bool {
        matches!(self.kind, ActorKind::Alien(_))
    }

    /// Run this actor's behavior for one tick.
    pub(crate) fn act(&mut self, world: &mut World) {
        let body = &mut self.body;
        match &mut self.kind {
            ActorKind::Star => {
                body.position.y -= 1;
                if body.position.y < 0 {
                    body.set_dead();
                }
            }
            ActorKind::Projectile(projectile) => projectile.act(body, world),
            ActorKind::Goodie(goodie) => goodie.act(body, world),
            ActorKind::Alien(alien) => alien.act(body, world),
        }
    }

    pub fn visual_kind(&self) -> VisualKind {
        match &self.kind {
            ActorKind::Star => VisualKind::Star,
            ActorKind::Projectile(p) => match p.kind() {
                ProjectileKind::Bullet => VisualKind::Bullet,
                ProjectileKind::Torpedo => VisualKind::Torpedo,
            },
            ActorKind::Goodie(g) => match g.kind() {
                GoodieKind::FreeShip => VisualKind::FreeShipGoodie,
                GoodieKind::Energy => VisualKind::EnergyGoodie,
                GoodieKind::Torpedo => VisualKind::TorpedoGoodie,
            },
            ActorKind::Alien(a) => a.visual_kind(),
        }
    }

    pub fn view(&self) -> ActorView {
        let brightness = match &self.kind {
            ActorKind::Goodie(goodie) => goodie.brightness(),
            _ => 1.0,
        };
        ActorView {
            id: self.body.id,
            kind: self.visual_kind(),
            position: self.body.position,
            visible: self.body.visible,
            brightness,
        }
    }
}
