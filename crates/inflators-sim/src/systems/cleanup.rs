//! Cleanup system: removes dead actors from the arena.

use inflators_core::types::ActorId;

use crate::actor::Actor;

/// Reap every dead actor, preserving the relative order of survivors.
/// Uses a pre-allocated buffer to avoid per-tick allocation. Returns the
/// number of actors removed.
pub fn run(actors: &mut Vec<Option<Actor>>, despawn_buffer: &mut Vec<ActorId>) -> usize {
    despawn_buffer.clear();
    despawn_buffer.extend(
        actors
            .iter()
            .flatten()
            .filter(|actor| !actor.is_alive())
            .map(Actor::id),
    );

    let reaped = despawn_buffer.len();
    for id in despawn_buffer.drain(..) {
        let index = actors
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|actor| actor.id() == id));
        if let Some(index) = index {
            actors.remove(index);
        }
    }
    reaped
}
