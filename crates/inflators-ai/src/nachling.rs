//! Nachling behavior finite state machine.
//!
//! Dive toward the player's column, strafe and shoot once level with it,
//! climb back to the top row, repeat. The caller gates evaluation to every
//! other tick and applies the returned update to the actor.

use glam::IVec2;
use rand::Rng;

use inflators_core::components::NachlingMind;
use inflators_core::constants::*;
use inflators_core::enums::{Facing, NachlingPhase, ProjectileKind};
use inflators_core::types::{Grid, GridPos};

use crate::round_scaled_odds;

/// Input to the automaton for a single nachling.
pub struct NachlingContext {
    pub position: GridPos,
    pub player: GridPos,
    pub mind: NachlingMind,
    pub grid: Grid,
    pub round: u32,
    pub energy_depleted: bool,
    /// Live projectiles currently fired by aliens.
    pub alien_projectiles: usize,
}

/// Output from the automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NachlingUpdate {
    pub position: GridPos,
    pub mind: NachlingMind,
    pub fire: Option<ProjectileKind>,
    pub dies: bool,
    pub phase_changed: bool,
}

/// Evaluate the automaton for one nachling act.
pub fn evaluate(ctx: &NachlingContext, rng: &mut impl Rng) -> NachlingUpdate {
    let mut update = NachlingUpdate {
        position: ctx.position,
        mind: ctx.mind,
        fire: None,
        dies: false,
        phase_changed: false,
    };

    match ctx.mind.phase {
        NachlingPhase::Descend => evaluate_descend(ctx, &mut update, rng),
        NachlingPhase::Patrol => evaluate_patrol(ctx, &mut update, rng),
        NachlingPhase::ReturnPass => evaluate_return_pass(ctx, &mut update, rng),
    }

    update.phase_changed = update.mind.phase != ctx.mind.phase;
    if update.position.y < 0 {
        update.dies = true;
    }
    update
}

fn evaluate_descend(ctx: &NachlingContext, update: &mut NachlingUpdate, rng: &mut impl Rng) {
    let x = ctx.position.x;

    if ctx.player.x != x {
        if !rng.gen_ratio(1, NACHLING_DIAGONAL_ODDS) {
            update.position.y -= 1;
            if update.position.y < 0 || ctx.energy_depleted {
                update.dies = true;
            }
        } else if ctx.player.x > x && ctx.grid.column_in_bounds(x + 1) {
            update.position += IVec2::new(1, -1);
        } else if ctx.player.x < x && ctx.grid.column_in_bounds(x - 1) {
            update.position += IVec2::new(-1, -1);
        }
        return;
    }

    // Level with the player: commit to a patrol toward the nearer border.
    let (left, right) = ctx.grid.border_distances(x);
    let (border, facing) = if left > right {
        (right, Facing::Right)
    } else {
        (left, Facing::Left)
    };
    update.mind.phase = NachlingPhase::Patrol;
    update.mind.border_distance = border;
    update.mind.facing = facing;
    update.mind.half_move = if border > NACHLING_MAX_HALF_MOVE {
        rng.gen_range(1..=NACHLING_MAX_HALF_MOVE)
    } else {
        border
    };
    update.position.y -= 1;
}

fn evaluate_patrol(ctx: &NachlingContext, update: &mut NachlingUpdate, rng: &mut impl Rng) {
    if ctx.player.y > ctx.position.y {
        update.mind.phase = NachlingPhase::ReturnPass;
        return;
    }

    let mind = &mut update.mind;
    if mind.hold_remaining == 0 {
        mind.facing = mind.facing.reversed();
        mind.hold_remaining = 2 * mind.half_move;
    } else {
        mind.hold_remaining -= 1;
    }

    let next_x = ctx.position.x + mind.facing.dx();
    if ctx.grid.column_in_bounds(next_x) {
        update.position.x = next_x;
    }

    let odds = round_scaled_odds(NACHLING_FIRE_SCALE, ctx.round);
    if rng.gen_ratio(1, odds) && ctx.alien_projectiles < alien_projectile_cap(ctx.round) {
        update.fire = Some(ProjectileKind::Bullet);
    }

    if rng.gen_ratio(1, NACHLING_BREAK_OFF_ODDS) {
        update.mind.phase = NachlingPhase::ReturnPass;
    }
}

fn evaluate_return_pass(ctx: &NachlingContext, update: &mut NachlingUpdate, rng: &mut impl Rng) {
    let x = ctx.position.x;

    if ctx.position.y == ctx.grid.top_row() {
        update.mind.phase = NachlingPhase::Descend;
        return;
    }

    let facing = if x == 0 {
        Facing::Right
    } else if x == ctx.grid.right_edge() {
        Facing::Left
    } else if rng.gen_bool(0.5) {
        Facing::Left
    } else {
        Facing::Right
    };
    update.mind.facing = facing;
    update.position += IVec2::new(facing.dx(), 1);
}

/// Aliens stop shooting once this many of their projectiles are in flight.
pub fn alien_projectile_cap(round: u32) -> usize {
    ALIEN_PROJECTILES_PER_ROUND * round as usize
}
