//! Collectible bonuses dropped by destroyed aliens.

use inflators_core::constants::{
    GOODIE_FALL_PERIOD, GOODIE_LIFETIME_BASE, GOODIE_LIFETIME_SCALE, GOODIE_MIN_BRIGHTNESS,
};
use inflators_core::enums::GoodieKind;

use crate::actor::ActorBody;
use crate::world::World;

/// Ticks a goodie dropped in `round` stays on screen.
pub fn goodie_lifetime(round: u32) -> u32 {
    GOODIE_LIFETIME_SCALE / round.max(1) + GOODIE_LIFETIME_BASE
}

#[derive(Debug, Clone, PartialEq)]
pub struct Goodie {
    kind: GoodieKind,
    lifetime_total: u32,
    lifetime_left: u32,
    brightness: f64,
}

impl Goodie {
    pub fn new(kind: GoodieKind, round: u32) -> Self {
        let lifetime = goodie_lifetime(round);
        Self {
            kind,
            lifetime_total: lifetime,
            lifetime_left: lifetime,
            brightness: 1.0 + GOODIE_MIN_BRIGHTNESS,
        }
    }

    pub fn kind(&self) -> GoodieKind {
        self.kind
    }

    pub fn lifetime_left(&self) -> u32 {
        self.lifetime_left
    }

    /// Fades toward `GOODIE_MIN_BRIGHTNESS` as the lifetime runs out.
    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    pub(crate) fn act(&mut self, body: &mut ActorBody, world: &mut World) {
        if world.colliding_player(body.position).is_some() {
            self.collect(body, world);
        } else {
            self.brightness = f64::from(self.lifetime_left) / f64::from(self.lifetime_total)
                + GOODIE_MIN_BRIGHTNESS;
            self.lifetime_left = self.lifetime_left.saturating_sub(1);
            if body.cadence.advance(GOODIE_FALL_PERIOD) == 0 {
                body.position.y -= 1;
                if world.colliding_player(body.position).is_some() {
                    self.collect(body, world);
                }
            }
        }

        if self.lifetime_left == 0 || body.position.y < 0 {
            body.set_dead();
        }
    }

    fn collect(&self, body: &mut ActorBody, world: &mut World) {
        if !body.alive {
            return;
        }
        world.award_goodie(self.kind);
        body.set_dead();
    }
}
