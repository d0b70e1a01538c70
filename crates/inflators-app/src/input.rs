//! Input sources feeding one optional key per tick into the world.

use inflators_core::enums::Key;
use inflators_sim::World;

/// Supplies the key pressed on the coming tick.
pub trait InputSource {
    fn next_key(&mut self, world: &World) -> Option<Key>;
}

/// Deterministic bot: slides under the nearest alien and shoots.
#[derive(Debug, Default)]
pub struct Autopilot {
    shots: u64,
}

impl InputSource for Autopilot {
    fn next_key(&mut self, world: &World) -> Option<Key> {
        let player = world.player()?;
        let here = player.position();

        let target = world
            .actors()
            .filter(|a| a.is_alien() && a.position().y > here.y)
            .min_by_key(|a| {
                let delta = a.position() - here;
                (delta.x.abs(), delta.y)
            })?;

        let column = target.position().x;
        if column < here.x {
            return Some(Key::MoveLeft);
        }
        if column > here.x {
            return Some(Key::MoveRight);
        }

        self.shots += 1;
        // Every fourth shot is a torpedo when any are in stock.
        if player.torpedoes() > 0 && self.shots % 4 == 0 {
            Some(Key::FireSecondary)
        } else {
            Some(Key::FirePrimary)
        }
    }
}

/// Replays a fixed key sequence, then stays idle.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    keys: Vec<Option<Key>>,
    cursor: usize,
}

impl Scripted {
    pub fn new(keys: Vec<Option<Key>>) -> Self {
        Self { keys, cursor: 0 }
    }
}

impl InputSource for Scripted {
    fn next_key(&mut self, _world: &World) -> Option<Key> {
        let key = self.keys.get(self.cursor).copied().flatten();
        self.cursor += 1;
        key
    }
}

#[cfg(test)]
mod tests {
    use glam::IVec2;

    use inflators_core::config::SimConfig;
    use inflators_core::enums::Species;

    use super::*;

    fn quiet_world() -> World {
        let mut world = World::new(SimConfig {
            auto_spawn: false,
            ..Default::default()
        });
        world.init();
        world
    }

    #[test]
    fn test_autopilot_idles_without_targets() {
        let world = quiet_world();
        assert_eq!(Autopilot::default().next_key(&world), None);
    }

    #[test]
    fn test_autopilot_steers_toward_nearest_column() {
        let mut world = quiet_world();
        world.spawn_alien(Species::Nachling, IVec2::new(3, 30));
        world.spawn_alien(Species::Nachling, IVec2::new(18, 30));
        assert_eq!(
            Autopilot::default().next_key(&world),
            Some(Key::MoveRight)
        );
    }

    #[test]
    fn test_autopilot_fires_when_aligned() {
        let mut world = quiet_world();
        let column = world.player_position().unwrap().x;
        world.spawn_alien(Species::Smallbot, IVec2::new(column, 30));
        world.player_mut().unwrap().add_torpedoes(2);

        let mut pilot = Autopilot::default();
        let keys: Vec<_> = (0..4).map(|_| pilot.next_key(&world)).collect();
        assert_eq!(
            keys,
            vec![
                Some(Key::FirePrimary),
                Some(Key::FirePrimary),
                Some(Key::FirePrimary),
                Some(Key::FireSecondary),
            ]
        );
    }

    #[test]
    fn test_scripted_replays_then_idles() {
        let world = quiet_world();
        let mut script = Scripted::new(vec![Some(Key::MoveUp), None, Some(Key::FirePrimary)]);
        let keys: Vec<_> = (0..5).map(|_| script.next_key(&world)).collect();
        assert_eq!(
            keys,
            vec![Some(Key::MoveUp), None, Some(Key::FirePrimary), None, None]
        );
    }
}
