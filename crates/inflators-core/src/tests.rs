#[cfg(test)]
mod tests {
    use crate::components::{Energy, NachlingMind};
    use crate::config::SimConfig;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::AudioEvent;
    use crate::ledger::ScoreLedger;
    use crate::state::WorldSnapshot;
    use crate::types::{Cadence, Grid};

    #[test]
    fn test_cadence_every_other_tick() {
        let mut cadence = Cadence::default();
        let seq: Vec<u32> = (0..6).map(|_| cadence.advance(2)).collect();
        assert_eq!(seq, vec![1, 0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_cadence_every_third_tick() {
        let mut cadence = Cadence::default();
        let seq: Vec<u32> = (0..6).map(|_| cadence.advance(3)).collect();
        assert_eq!(seq, vec![1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_grid_bounds() {
        let grid = Grid::new(30, 40);
        assert_eq!(grid.right_edge(), 29);
        assert_eq!(grid.top_row(), 39);
        assert!(grid.column_in_bounds(0));
        assert!(!grid.column_in_bounds(30));
        assert!(!grid.row_in_bounds(-1));
        assert_eq!(grid.border_distances(4), (4, 25));
    }

    #[test]
    fn test_energy_depletion_and_restore() {
        let mut energy = Energy::new(50);
        energy.decrease(15);
        assert_eq!(energy.current(), 35);
        assert!((energy.pct() - 0.7).abs() < 1e-9);
        energy.decrease(40);
        assert!(energy.is_depleted());
        assert_eq!(energy.pct(), 0.0);
        energy.restore_full();
        assert_eq!(energy.current(), 50);
    }

    #[test]
    fn test_facing_reversal() {
        assert_eq!(Facing::Left.reversed(), Facing::Right);
        assert_eq!(Facing::Right.dx(), 1);
        assert_eq!(NachlingMind::default().phase, NachlingPhase::Descend);
    }

    #[test]
    fn test_ledger_lives_saturate() {
        let mut ledger = ScoreLedger::new(1);
        ledger.dec_lives();
        ledger.dec_lives();
        assert_eq!(ledger.lives(), 0);
        ledger.inc_lives();
        ledger.increase_score(5000);
        assert_eq!(ledger.lives(), 1);
        assert_eq!(ledger.score(), 5000);
    }

    #[test]
    fn test_config_defaults_from_empty_json() {
        let config = SimConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SimConfig::default());
        assert_eq!(config.grid(), Grid::new(30, 40));
    }

    #[test]
    fn test_config_partial_override() {
        let config = SimConfig::from_json_str(r#"{"seed": 7, "starting_round": 3}"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.starting_round, 3);
        assert_eq!(config.grid_width, 30);
        assert!(config.auto_spawn);

        let scripted = SimConfig::from_json_str(r#"{"auto_spawn": false}"#).unwrap();
        assert!(!scripted.auto_spawn);
    }

    #[test]
    fn test_config_rejects_invalid_values() {
        let err = SimConfig::from_json_str(r#"{"grid_width": 1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "grid_width", .. }));

        let err = SimConfig::from_json_str(r#"{"starting_lives": 0}"#).unwrap_err();
        assert!(err.to_string().contains("starting_lives"));

        let err = SimConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_audio_event_serde_tagged() {
        let event = AudioEvent::EnemyDied {
            species: Species::Smallbot,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"EnemyDied\""), "{json}");
        let back: AudioEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_empty_snapshot_serializes() {
        let snapshot = WorldSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: WorldSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
