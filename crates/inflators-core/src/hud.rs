//! Status line shown at the top of the screen.

use crate::constants::{HUD_ROUND_DIGITS, HUD_SCORE_DIGITS, HUD_SHIPS_DIGITS, HUD_TORPEDO_DIGITS};

/// Values that feed the status line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HudStats {
    pub score: u64,
    pub round: u32,
    /// Remaining energy as a 0.0..=1.0 fraction.
    pub energy_pct: f64,
    pub torpedoes: u32,
    pub ships: u32,
}

/// Format the fixed-width status line.
pub fn format_status_line(stats: &HudStats) -> String {
    let energy = (stats.energy_pct * 100.0).floor().max(0.0) as u32;
    format!(
        "Score: {score:0sw$}  Round: {round:0rw$}  Energy: {energy}%  Torpedoes: {torps:0tw$}  Ships: {ships:0hw$}",
        score = stats.score,
        sw = HUD_SCORE_DIGITS,
        round = stats.round,
        rw = HUD_ROUND_DIGITS,
        torps = stats.torpedoes,
        tw = HUD_TORPEDO_DIGITS,
        ships = stats.ships,
        hw = HUD_SHIPS_DIGITS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_padding() {
        let line = format_status_line(&HudStats {
            score: 4200,
            round: 3,
            energy_pct: 0.7,
            torpedoes: 5,
            ships: 2,
        });
        assert_eq!(
            line,
            "Score: 0004200  Round: 03  Energy: 70%  Torpedoes: 005  Ships: 02"
        );
    }

    #[test]
    fn test_status_line_never_negative_energy() {
        let line = format_status_line(&HudStats {
            energy_pct: -0.3,
            ..Default::default()
        });
        assert!(line.contains("Energy: 0%"), "{line}");
    }
}
