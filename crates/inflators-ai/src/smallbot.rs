//! Smallbot behavior.
//!
//! Smallbots only ever descend. After a projectile hit they may sidestep
//! diagonally; whenever they share the player's column they shoot.

use glam::IVec2;
use rand::Rng;

use inflators_core::constants::*;
use inflators_core::enums::ProjectileKind;
use inflators_core::types::{Grid, GridPos};

use crate::nachling::alien_projectile_cap;
use crate::round_scaled_odds;

pub struct SmallbotContext {
    pub position: GridPos,
    pub player: GridPos,
    /// Set when a projectile hit this smallbot since its last move.
    pub was_hit: bool,
    pub grid: Grid,
    pub round: u32,
    pub alien_projectiles: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmallbotUpdate {
    pub position: GridPos,
    pub fire: Option<ProjectileKind>,
    pub dies: bool,
}

pub fn evaluate(ctx: &SmallbotContext, rng: &mut impl Rng) -> SmallbotUpdate {
    let mut position = ctx.position;

    if ctx.was_hit && rng.gen_ratio(1, SMALLBOT_EVADE_ODDS) {
        let dx = if position.x == 0 {
            1
        } else if position.x == ctx.grid.right_edge() {
            -1
        } else if rng.gen_bool(0.5) {
            1
        } else {
            -1
        };
        position += IVec2::new(dx, -1);
    } else {
        position.y -= 1;
    }

    let mut fire = None;
    if ctx.player.x == position.x {
        let odds = round_scaled_odds(SMALLBOT_TORPEDO_SCALE, ctx.round);
        if rng.gen_ratio(1, odds) {
            fire = Some(ProjectileKind::Torpedo);
        } else if ctx.alien_projectiles < alien_projectile_cap(ctx.round) {
            fire = Some(ProjectileKind::Bullet);
        }
    }

    SmallbotUpdate {
        position,
        fire,
        dies: position.y < 0,
    }
}
