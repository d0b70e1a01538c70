//! Game loop: advances the world until game over or the tick limit.
//!
//! Headless and unpaced; every tick's snapshot is handed to an observer
//! so a frontend (or a test) can consume frames and audio cues.

use serde::Serialize;

use inflators_core::enums::TickStatus;
use inflators_core::state::WorldSnapshot;
use inflators_sim::World;

use crate::input::InputSource;

/// Outcome of a driver run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub round: u32,
    pub score: u64,
    pub lives: u32,
    pub ships_lost: u32,
    pub game_over: bool,
}

/// Run `world` (already initialised) for at most `max_ticks` ticks.
///
/// A lost ship tears the world down; if lives remain the player is placed
/// again with round and score carried over, otherwise the run ends.
pub fn run(
    world: &mut World,
    input: &mut impl InputSource,
    max_ticks: u64,
    mut on_snapshot: impl FnMut(&WorldSnapshot),
) -> RunSummary {
    let mut ticks = 0;
    let mut ships_lost = 0;
    let mut game_over = false;

    while ticks < max_ticks {
        let key = input.next_key(world);
        let status = world.advance_one_tick(key);
        ticks += 1;

        let snapshot = world.snapshot();
        log::trace!("{}", snapshot.hud);
        on_snapshot(&snapshot);

        if status == TickStatus::PlayerDied {
            ships_lost += 1;
            world.tear_down();
            if world.ledger().lives() == 0 {
                log::info!("Game over after {ticks} ticks");
                game_over = true;
                break;
            }
            log::info!("Respawning, {} ship(s) left", world.ledger().lives());
            world.init();
        }
    }

    RunSummary {
        ticks,
        round: world.round(),
        score: world.ledger().score(),
        lives: world.ledger().lives(),
        ships_lost,
        game_over,
    }
}
