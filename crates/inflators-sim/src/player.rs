//! The player's ship.

use glam::IVec2;

use inflators_core::components::Energy;
use inflators_core::constants::{
    PLAYER_FIRE_PERIOD, PLAYER_FULL_ENERGY, PLAYER_START_ROW, PLAYER_START_TORPEDOES, RAM_DAMAGE,
};
use inflators_core::enums::{HitCause, Key, ProjectileKind, Shooter};
use inflators_core::events::AudioEvent;
use inflators_core::state::PlayerView;
use inflators_core::types::{Cadence, Grid, GridPos};

use crate::ship::Ship;
use crate::world::World;

#[derive(Debug, Clone)]
pub struct Player {
    position: GridPos,
    alive: bool,
    cadence: Cadence,
    ship: Ship,
    torpedoes: u32,
    /// Latched after a shot, cleared on the fire cadence.
    fired: bool,
}

impl Player {
    /// A fresh ship centered on the bottom rows of `grid`.
    pub fn new(grid: Grid) -> Self {
        Self {
            position: IVec2::new(grid.width / 2, PLAYER_START_ROW.min(grid.top_row())),
            alive: true,
            cadence: Cadence::default(),
            ship: Ship::new(PLAYER_FULL_ENERGY, Shooter::Player),
            torpedoes: PLAYER_START_TORPEDOES,
            fired: false,
        }
    }

    pub fn position(&self) -> GridPos {
        self.position
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn energy(&self) -> Energy {
        self.ship.energy()
    }

    pub fn energy_mut(&mut self) -> &mut Energy {
        self.ship.energy_mut()
    }

    pub fn torpedoes(&self) -> u32 {
        self.torpedoes
    }

    pub fn add_torpedoes(&mut self, count: u32) {
        self.torpedoes += count;
    }

    pub fn restore_full_energy(&mut self) {
        self.ship.restore_full_energy();
    }

    pub fn view(&self) -> PlayerView {
        PlayerView {
            position: self.position,
            energy: self.ship.energy().current(),
            energy_pct: self.ship.energy_pct(),
            torpedoes: self.torpedoes,
            alive: self.alive,
        }
    }

    /// Subtract `points` of energy and queue the matching audio cue.
    /// The death cue fires only on the first crossing to zero.
    pub fn damage(&mut self, points: i32, cause: HitCause, audio: &mut Vec<AudioEvent>) {
        self.ship.decrease_energy(points);
        audio.push(match cause {
            HitCause::Projectile => AudioEvent::PlayerHit,
            HitCause::Ram => AudioEvent::PlayerRammed,
        });
        if self.alive && self.ship.is_destroyed() {
            self.alive = false;
            audio.push(AudioEvent::PlayerDied);
            log::info!("Player destroyed at {:?}", self.position);
        }
    }

    /// One tick: ram check, death check, fire latch, input, ram check again.
    pub(crate) fn act(&mut self, world: &mut World, input: Option<Key>) {
        self.resolve_rams(world);

        if self.ship.is_destroyed() {
            self.alive = false;
            return;
        }

        if self.cadence.advance(PLAYER_FIRE_PERIOD) == 0 && self.fired {
            self.fired = false;
        }

        if let Some(key) = input {
            self.handle_key(key, world);
        }

        self.resolve_rams(world);
    }

    fn resolve_rams(&mut self, world: &mut World) {
        let rammed = world.colliding_aliens(self.position);
        if rammed.is_empty() {
            return;
        }
        for id in &rammed {
            world.damage_alien(*id, 0, HitCause::Ram);
        }
        log::debug!("Player rammed by {} alien(s)", rammed.len());
        self.damage(RAM_DAMAGE, HitCause::Ram, world.audio_mut());
    }

    fn handle_key(&mut self, key: Key, world: &mut World) {
        let grid = world.grid();
        match key {
            Key::MoveLeft => self.step(IVec2::NEG_X, grid),
            Key::MoveRight => self.step(IVec2::X, grid),
            Key::MoveUp => self.step(IVec2::Y, grid),
            Key::MoveDown => self.step(IVec2::NEG_Y, grid),
            Key::FirePrimary => {
                if !self.fired {
                    self.ship.launch(world, self.position, ProjectileKind::Bullet);
                    self.fired = true;
                }
            }
            Key::FireSecondary => {
                if !self.fired && self.torpedoes > 0 {
                    self.ship.launch(world, self.position, ProjectileKind::Torpedo);
                    self.torpedoes -= 1;
                    self.fired = true;
                }
            }
        }
    }

    fn step(&mut self, delta: IVec2, grid: Grid) {
        let target = self.position + delta;
        if grid.contains(target) {
            self.position = target;
        }
    }
}
