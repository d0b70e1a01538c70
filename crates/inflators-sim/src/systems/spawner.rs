//! Spawning system: tops up the alien population and sprinkles stars.

use glam::IVec2;
use rand::Rng;

use inflators_core::constants::{
    ALIEN_LIMIT_BASE, ALIEN_LIMIT_PER_ROUND, KILLS_PER_ROUND, NACHLING_FAMILY_PERCENT,
    STAR_PERCENT, WEALTHY_PERCENT,
};
use inflators_core::enums::Species;
use inflators_core::types::{Grid, GridPos};

/// What the spawner decided to add this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnPlan {
    pub alien: Option<(Species, GridPos)>,
    pub star: Option<GridPos>,
}

/// Maximum aliens on screen at once in `round`.
pub fn alien_limit(round: u32) -> usize {
    (ALIEN_LIMIT_BASE + ALIEN_LIMIT_PER_ROUND * f64::from(round)).floor() as usize
}

/// Aliens still owed to the player before the round can end.
pub fn remaining_quota(round: u32, killed_this_round: u32) -> i64 {
    i64::from(KILLS_PER_ROUND * round) - i64::from(killed_this_round)
}

/// 70% nachling family (a fifth of them wealthy), otherwise a smallbot.
pub fn choose_species(rng: &mut impl Rng) -> Species {
    if rng.gen_range(0..100) < NACHLING_FAMILY_PERCENT {
        if rng.gen_range(0..100) < WEALTHY_PERCENT {
            Species::WealthyNachling
        } else {
            Species::Nachling
        }
    } else {
        Species::Smallbot
    }
}

/// Decide this tick's spawns. At most one alien and one star; both enter
/// on the top row at a random column.
pub fn run(
    rng: &mut impl Rng,
    grid: Grid,
    round: u32,
    killed_this_round: u32,
    live_aliens: usize,
) -> SpawnPlan {
    let mut plan = SpawnPlan::default();

    let under_cap = live_aliens < alien_limit(round);
    let under_quota = (live_aliens as i64) < remaining_quota(round, killed_this_round);
    if under_cap && under_quota {
        let species = choose_species(rng);
        let x = rng.gen_range(0..grid.width);
        plan.alien = Some((species, IVec2::new(x, grid.top_row())));
    }

    if rng.gen_range(0..100) < STAR_PERCENT {
        let x = rng.gen_range(0..grid.width);
        plan.star = Some(IVec2::new(x, grid.top_row()));
    }

    plan
}
