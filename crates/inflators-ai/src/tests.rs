#[cfg(test)]
mod tests {
    use glam::IVec2;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use inflators_core::components::NachlingMind;
    use inflators_core::enums::*;
    use inflators_core::types::Grid;

    use crate::nachling::{self, NachlingContext};
    use crate::profiles::{roll_goodie_drop, starting_energy};
    use crate::round_scaled_odds;
    use crate::smallbot::{self, SmallbotContext};

    /// An RNG whose every Bernoulli roll succeeds and every range roll
    /// returns the low end.
    fn always_rng() -> StepRng {
        StepRng::new(0, 0)
    }

    fn nachling_ctx(x: i32, y: i32, player: IVec2, mind: NachlingMind) -> NachlingContext {
        NachlingContext {
            position: IVec2::new(x, y),
            player,
            mind,
            grid: Grid::new(30, 40),
            round: 1,
            energy_depleted: false,
            alien_projectiles: 0,
        }
    }

    fn patrol_mind(facing: Facing, half_move: i32, hold_remaining: i32) -> NachlingMind {
        NachlingMind {
            phase: NachlingPhase::Patrol,
            facing,
            border_distance: 5,
            half_move,
            hold_remaining,
        }
    }

    // ---- Descend ----

    #[test]
    fn test_descend_aligned_enters_patrol_toward_near_border() {
        let ctx = nachling_ctx(2, 20, IVec2::new(2, 1), NachlingMind::default());
        let update = nachling::evaluate(&ctx, &mut ChaCha8Rng::seed_from_u64(1));
        assert!(update.phase_changed);
        assert_eq!(update.mind.phase, NachlingPhase::Patrol);
        assert_eq!(update.mind.facing, Facing::Left);
        assert_eq!(update.mind.border_distance, 2);
        // Border within 3 cells: half move equals the border distance.
        assert_eq!(update.mind.half_move, 2);
        assert_eq!(update.position, IVec2::new(2, 19));
    }

    #[test]
    fn test_descend_aligned_right_border_random_half_move() {
        let ctx = nachling_ctx(24, 20, IVec2::new(24, 1), NachlingMind::default());
        let update = nachling::evaluate(&ctx, &mut always_rng());
        assert_eq!(update.mind.facing, Facing::Right);
        assert_eq!(update.mind.border_distance, 5);
        assert_eq!(update.mind.half_move, 1);
    }

    #[test]
    fn test_descend_half_move_always_in_range() {
        for seed in 0..50 {
            let ctx = nachling_ctx(12, 20, IVec2::new(12, 1), NachlingMind::default());
            let update = nachling::evaluate(&ctx, &mut ChaCha8Rng::seed_from_u64(seed));
            assert!((1..=3).contains(&update.mind.half_move));
        }
    }

    #[test]
    fn test_descend_diagonal_toward_player() {
        let ctx = nachling_ctx(10, 20, IVec2::new(15, 1), NachlingMind::default());
        let update = nachling::evaluate(&ctx, &mut always_rng());
        assert_eq!(update.position, IVec2::new(11, 19));
        assert_eq!(update.mind.phase, NachlingPhase::Descend);
        assert!(!update.phase_changed);

        let ctx = nachling_ctx(10, 20, IVec2::new(3, 1), NachlingMind::default());
        let update = nachling::evaluate(&ctx, &mut always_rng());
        assert_eq!(update.position, IVec2::new(9, 19));
    }

    #[test]
    fn test_descend_moves_one_row_per_act() {
        for seed in 0..100 {
            let ctx = nachling_ctx(10, 20, IVec2::new(15, 1), NachlingMind::default());
            let update = nachling::evaluate(&ctx, &mut ChaCha8Rng::seed_from_u64(seed));
            assert_eq!(update.position.y, 19);
            assert!(update.position.x == 10 || update.position.x == 11);
            assert!(!update.dies);
        }
    }

    #[test]
    fn test_descend_off_bottom_dies() {
        for seed in 0..50 {
            let ctx = nachling_ctx(10, 0, IVec2::new(15, 1), NachlingMind::default());
            let update = nachling::evaluate(&ctx, &mut ChaCha8Rng::seed_from_u64(seed));
            assert!(update.dies, "seed {seed} left a nachling below the grid alive");
        }
    }

    #[test]
    fn test_descend_with_depleted_energy_dies_on_plain_step() {
        let mut saw_plain_step = false;
        for seed in 0..50 {
            let mut ctx = nachling_ctx(10, 20, IVec2::new(15, 1), NachlingMind::default());
            ctx.energy_depleted = true;
            let update = nachling::evaluate(&ctx, &mut ChaCha8Rng::seed_from_u64(seed));
            if update.position.x == 10 {
                saw_plain_step = true;
                assert!(update.dies);
            }
        }
        assert!(saw_plain_step);
    }

    // ---- Patrol ----

    #[test]
    fn test_patrol_player_above_starts_return_pass() {
        let mind = patrol_mind(Facing::Left, 2, 3);
        let ctx = nachling_ctx(10, 5, IVec2::new(4, 8), mind);
        let update = nachling::evaluate(&ctx, &mut ChaCha8Rng::seed_from_u64(3));
        assert_eq!(update.mind.phase, NachlingPhase::ReturnPass);
        assert_eq!(update.position, ctx.position);
        assert_eq!(update.fire, None);
    }

    #[test]
    fn test_patrol_zero_hold_reverses_and_reloads() {
        let mind = patrol_mind(Facing::Left, 2, 0);
        let ctx = nachling_ctx(10, 5, IVec2::new(10, 1), mind);
        let update = nachling::evaluate(&ctx, &mut always_rng());
        assert_eq!(update.mind.facing, Facing::Right);
        assert_eq!(update.mind.hold_remaining, 4);
        assert_eq!(update.position, IVec2::new(11, 5));
    }

    #[test]
    fn test_patrol_hold_counts_down_and_steps() {
        let mind = patrol_mind(Facing::Left, 2, 3);
        let ctx = nachling_ctx(10, 5, IVec2::new(10, 1), mind);
        let update = nachling::evaluate(&ctx, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(update.mind.facing, Facing::Left);
        assert_eq!(update.mind.hold_remaining, 2);
        assert_eq!(update.position, IVec2::new(9, 5));
    }

    #[test]
    fn test_patrol_clamped_at_edge() {
        let mind = patrol_mind(Facing::Right, 2, 3);
        let ctx = nachling_ctx(29, 5, IVec2::new(29, 1), mind);
        let update = nachling::evaluate(&ctx, &mut ChaCha8Rng::seed_from_u64(4));
        assert_eq!(update.position.x, 29);
    }

    #[test]
    fn test_patrol_fire_respects_projectile_cap() {
        let mind = patrol_mind(Facing::Left, 2, 3);
        let mut ctx = nachling_ctx(10, 5, IVec2::new(10, 1), mind);
        let update = nachling::evaluate(&ctx, &mut always_rng());
        assert_eq!(update.fire, Some(ProjectileKind::Bullet));
        // Forced rolls also trigger the 1-in-20 break-off.
        assert_eq!(update.mind.phase, NachlingPhase::ReturnPass);

        ctx.alien_projectiles = 2;
        let update = nachling::evaluate(&ctx, &mut always_rng());
        assert_eq!(update.fire, None);
    }

    #[test]
    fn test_patrol_sweep_amplitude() {
        // Over a full back-and-forth the column stays within 2*half_move+1 cells.
        let mut mind = patrol_mind(Facing::Left, 2, 0);
        let mut position = IVec2::new(15, 5);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut columns = Vec::new();
        for _ in 0..12 {
            let ctx = nachling_ctx(position.x, position.y, IVec2::new(0, 1), mind);
            let update = nachling::evaluate(&ctx, &mut rng);
            if update.mind.phase != NachlingPhase::Patrol {
                break;
            }
            mind = update.mind;
            position = update.position;
            columns.push(position.x);
        }
        if let (Some(min), Some(max)) = (columns.iter().min(), columns.iter().max()) {
            assert!(max - min <= 5, "sweep too wide: {columns:?}");
        }
    }

    // ---- ReturnPass ----

    #[test]
    fn test_return_pass_top_row_resets_to_descend() {
        let mind = NachlingMind {
            phase: NachlingPhase::ReturnPass,
            ..Default::default()
        };
        let ctx = nachling_ctx(10, 39, IVec2::new(10, 1), mind);
        let update = nachling::evaluate(&ctx, &mut always_rng());
        assert_eq!(update.mind.phase, NachlingPhase::Descend);
        assert_eq!(update.position, ctx.position);
    }

    #[test]
    fn test_return_pass_bounces_off_edges() {
        let mind = NachlingMind {
            phase: NachlingPhase::ReturnPass,
            ..Default::default()
        };
        let ctx = nachling_ctx(0, 10, IVec2::new(10, 1), mind);
        let update = nachling::evaluate(&ctx, &mut always_rng());
        assert_eq!(update.position, IVec2::new(1, 11));
        assert_eq!(update.mind.facing, Facing::Right);

        let ctx = nachling_ctx(29, 10, IVec2::new(10, 1), mind);
        let update = nachling::evaluate(&ctx, &mut always_rng());
        assert_eq!(update.position, IVec2::new(28, 11));
        assert_eq!(update.mind.facing, Facing::Left);
    }

    #[test]
    fn test_return_pass_climbs_diagonally() {
        let mind = NachlingMind {
            phase: NachlingPhase::ReturnPass,
            ..Default::default()
        };
        for seed in 0..20 {
            let ctx = nachling_ctx(10, 10, IVec2::new(10, 1), mind);
            let update = nachling::evaluate(&ctx, &mut ChaCha8Rng::seed_from_u64(seed));
            assert_eq!(update.position.y, 11);
            assert_eq!((update.position.x - 10).abs(), 1);
        }
    }

    // ---- Smallbot ----

    fn smallbot_ctx(x: i32, y: i32, player_x: i32, was_hit: bool) -> SmallbotContext {
        SmallbotContext {
            position: IVec2::new(x, y),
            player: IVec2::new(player_x, 1),
            was_hit,
            grid: Grid::new(30, 40),
            round: 1,
            alien_projectiles: 0,
        }
    }

    #[test]
    fn test_smallbot_plain_descent_when_not_hit() {
        let ctx = smallbot_ctx(10, 20, 3, false);
        let update = smallbot::evaluate(&ctx, &mut always_rng());
        assert_eq!(update.position, IVec2::new(10, 19));
        assert_eq!(update.fire, None);
        assert!(!update.dies);
    }

    #[test]
    fn test_smallbot_evades_after_hit() {
        let ctx = smallbot_ctx(0, 20, 15, true);
        let update = smallbot::evaluate(&ctx, &mut always_rng());
        assert_eq!(update.position, IVec2::new(1, 19));

        let ctx = smallbot_ctx(29, 20, 15, true);
        let update = smallbot::evaluate(&ctx, &mut always_rng());
        assert_eq!(update.position, IVec2::new(28, 19));
    }

    #[test]
    fn test_smallbot_fires_when_aligned() {
        let ctx = smallbot_ctx(7, 20, 7, false);
        let update = smallbot::evaluate(&ctx, &mut always_rng());
        assert_eq!(update.fire, Some(ProjectileKind::Torpedo));

        let mut fired_bullet = false;
        for seed in 0..20 {
            let mut ctx = smallbot_ctx(7, 20, 7, false);
            ctx.alien_projectiles = 2;
            let update = smallbot::evaluate(&ctx, &mut ChaCha8Rng::seed_from_u64(seed));
            // At the cap only the rare torpedo can still fire.
            assert_ne!(update.fire, Some(ProjectileKind::Bullet));
            let ctx = smallbot_ctx(7, 20, 7, false);
            let update = smallbot::evaluate(&ctx, &mut ChaCha8Rng::seed_from_u64(seed));
            fired_bullet |= update.fire == Some(ProjectileKind::Bullet);
        }
        assert!(fired_bullet);
    }

    #[test]
    fn test_smallbot_off_bottom_dies() {
        let ctx = smallbot_ctx(5, 0, 20, false);
        let update = smallbot::evaluate(&ctx, &mut always_rng());
        assert!(update.dies);
    }

    // ---- Profiles ----

    #[test]
    fn test_starting_energy_scales_with_round() {
        assert_eq!(starting_energy(Species::Nachling, 1), 5);
        assert_eq!(starting_energy(Species::WealthyNachling, 1), 8);
        assert_eq!(starting_energy(Species::Smallbot, 1), 12);
        assert_eq!(starting_energy(Species::Nachling, 3), 6);
        assert_eq!(starting_energy(Species::Smallbot, 3), 14);
    }

    #[test]
    fn test_round_scaled_odds() {
        assert_eq!(round_scaled_odds(10, 1), 11);
        assert_eq!(round_scaled_odds(10, 20), 1);
        assert_eq!(round_scaled_odds(100, 3), 34);
    }

    #[test]
    fn test_goodie_drop_policy() {
        let mut rng = always_rng();
        assert_eq!(roll_goodie_drop(Species::Nachling, &mut rng), None);
        assert_eq!(
            roll_goodie_drop(Species::Smallbot, &mut rng),
            Some(GoodieKind::FreeShip)
        );
        assert_eq!(
            roll_goodie_drop(Species::WealthyNachling, &mut rng),
            Some(GoodieKind::Energy)
        );
    }
}
