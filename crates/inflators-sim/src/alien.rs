//! Alien actors: nachlings, wealthy nachlings and smallbots.
//!
//! Movement decisions come from the pure automata in `inflators-ai`; this
//! module feeds them world context and applies the result.

use rand::Rng;

use inflators_ai::nachling::{self, NachlingContext};
use inflators_ai::profiles::{get_profile, starting_energy};
use inflators_ai::smallbot::{self, SmallbotContext};
use inflators_core::components::{Energy, NachlingMind};
use inflators_core::constants::{ALIEN_MOVE_PERIOD, MALFUNCTION_ODDS, MALFUNCTION_TICKS};
use inflators_core::enums::{HitCause, Shooter, Species, VisualKind};

use crate::actor::ActorBody;
use crate::ship::Ship;
use crate::world::World;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Brain {
    Nachling(NachlingMind),
    /// A nachling that occasionally freezes in place.
    Wealthy {
        mind: NachlingMind,
        malfunction_left: u32,
    },
    Smallbot {
        was_hit: bool,
    },
}

/// Result of applying damage to an alien.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    Survived,
    /// Destroyed by a projectile; the world credits the kill.
    Destroyed,
    /// Destroyed by colliding with the player; no kill credit.
    Rammed,
    /// The alien was already dead; nothing changed.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct Alien {
    ship: Ship,
    worth: u64,
    brain: Brain,
}

impl Alien {
    /// A fresh alien of `species` scaled to `round`.
    pub fn new(species: Species, round: u32) -> Self {
        let brain = match species {
            Species::Nachling => Brain::Nachling(NachlingMind::default()),
            Species::WealthyNachling => Brain::Wealthy {
                mind: NachlingMind::default(),
                malfunction_left: 0,
            },
            Species::Smallbot => Brain::Smallbot { was_hit: false },
        };
        Self {
            ship: Ship::new(starting_energy(species, round), Shooter::Alien),
            worth: get_profile(species).worth,
            brain,
        }
    }

    pub fn species(&self) -> Species {
        match self.brain {
            Brain::Nachling(_) => Species::Nachling,
            Brain::Wealthy { .. } => Species::WealthyNachling,
            Brain::Smallbot { .. } => Species::Smallbot,
        }
    }

    pub fn energy(&self) -> Energy {
        self.ship.energy()
    }

    pub fn energy_mut(&mut self) -> &mut Energy {
        self.ship.energy_mut()
    }

    pub fn worth(&self) -> u64 {
        self.worth
    }

    pub fn visual_kind(&self) -> VisualKind {
        get_profile(self.species()).visual
    }

    /// Automaton state for nachling-family aliens.
    pub fn mind(&self) -> Option<NachlingMind> {
        match self.brain {
            Brain::Nachling(mind) | Brain::Wealthy { mind, .. } => Some(mind),
            Brain::Smallbot { .. } => None,
        }
    }

    /// Overwrite the automaton state (for staging tests).
    #[cfg(test)]
    pub(crate) fn set_mind(&mut self, staged: NachlingMind) {
        if let Brain::Nachling(mind) | Brain::Wealthy { mind, .. } = &mut self.brain {
            *mind = staged;
        }
    }

    pub fn is_malfunctioning(&self) -> bool {
        matches!(self.brain, Brain::Wealthy { malfunction_left, .. } if malfunction_left > 0)
    }

    /// Freeze a wealthy nachling for the next `MALFUNCTION_TICKS` acts.
    /// Returns false for species that never malfunction.
    pub fn start_malfunction(&mut self) -> bool {
        match &mut self.brain {
            Brain::Wealthy {
                malfunction_left, ..
            } => {
                *malfunction_left = MALFUNCTION_TICKS;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn act(&mut self, body: &mut ActorBody, world: &mut World) {
        if let Brain::Wealthy {
            malfunction_left, ..
        } = &mut self.brain
        {
            if *malfunction_left == 0 && world.rng_mut().gen_ratio(1, MALFUNCTION_ODDS) {
                log::debug!("Wealthy nachling {:?} malfunctioning", body.id);
                *malfunction_left = MALFUNCTION_TICKS;
            }
            if *malfunction_left > 0 {
                *malfunction_left -= 1;
                return;
            }
        }

        if body.cadence.advance(ALIEN_MOVE_PERIOD) == 0 {
            return;
        }

        let Some(player) = world.player_position() else {
            return;
        };

        match &mut self.brain {
            Brain::Nachling(mind) | Brain::Wealthy { mind, .. } => {
                let ctx = NachlingContext {
                    position: body.position,
                    player,
                    mind: *mind,
                    grid: world.grid(),
                    round: world.round(),
                    energy_depleted: self.ship.is_destroyed(),
                    alien_projectiles: world.num_alien_fired_projectiles(),
                };
                let update = nachling::evaluate(&ctx, world.rng_mut());
                if update.phase_changed {
                    log::trace!(
                        "Nachling {:?}: {:?} -> {:?}",
                        body.id,
                        mind.phase,
                        update.mind.phase
                    );
                }
                *mind = update.mind;
                body.position = update.position;
                if let Some(kind) = update.fire {
                    self.ship.launch(world, body.position, kind);
                }
                if update.dies {
                    body.set_dead();
                }
            }
            Brain::Smallbot { was_hit } => {
                let ctx = SmallbotContext {
                    position: body.position,
                    player,
                    was_hit: *was_hit,
                    grid: world.grid(),
                    round: world.round(),
                    alien_projectiles: world.num_alien_fired_projectiles(),
                };
                let update = smallbot::evaluate(&ctx, world.rng_mut());
                *was_hit = false;
                body.position = update.position;
                if let Some(kind) = update.fire {
                    self.ship.launch(world, body.position, kind);
                }
                if update.dies {
                    body.set_dead();
                }
            }
        }
    }

    /// Apply damage. Projectile hits subtract `points`; a ram drains all
    /// remaining energy regardless of `points`.
    pub(crate) fn take_hit(
        &mut self,
        body: &mut ActorBody,
        points: i32,
        cause: HitCause,
    ) -> HitOutcome {
        if !body.alive {
            return HitOutcome::Ignored;
        }
        match cause {
            HitCause::Projectile => {
                if let Brain::Smallbot { was_hit } = &mut self.brain {
                    *was_hit = true;
                }
                self.ship.decrease_energy(points);
                if self.ship.is_destroyed() {
                    body.set_dead();
                    HitOutcome::Destroyed
                } else {
                    HitOutcome::Survived
                }
            }
            HitCause::Ram => {
                self.ship.decrease_energy(self.ship.energy().current());
                body.set_dead();
                HitOutcome::Rammed
            }
        }
    }
}
