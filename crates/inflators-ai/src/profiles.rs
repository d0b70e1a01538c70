//! Species-specific parameters.
//!
//! Consolidates per-species numbers and the goodie-drop policy.

use rand::Rng;

use inflators_core::constants::*;
use inflators_core::enums::{GoodieKind, Species, VisualKind};

/// Static parameters for an alien species.
pub struct AlienProfile {
    /// Energy at round 1.0 before the round multiplier.
    pub base_energy: f64,
    /// Score awarded for a projectile kill.
    pub worth: u64,
    pub visual: VisualKind,
}

/// Get the profile for a given species.
pub fn get_profile(species: Species) -> AlienProfile {
    match species {
        Species::Nachling => AlienProfile {
            base_energy: NACHLING_BASE_ENERGY,
            worth: NACHLING_WORTH,
            visual: VisualKind::Nachling,
        },
        Species::WealthyNachling => AlienProfile {
            base_energy: WEALTHY_NACHLING_BASE_ENERGY,
            worth: WEALTHY_NACHLING_WORTH,
            visual: VisualKind::WealthyNachling,
        },
        Species::Smallbot => AlienProfile {
            base_energy: SMALLBOT_BASE_ENERGY,
            worth: SMALLBOT_WORTH,
            visual: VisualKind::Smallbot,
        },
    }
}

/// Starting energy scales 10% per round around a 0.9 baseline.
pub fn starting_energy(species: Species, round: u32) -> i32 {
    let profile = get_profile(species);
    (profile.base_energy * (0.9 + 0.1 * f64::from(round))).floor() as i32
}

/// Which goodie a freshly killed alien leaves behind, once the 1-in-3
/// drop roll has already succeeded.
pub fn roll_goodie_drop(species: Species, rng: &mut impl Rng) -> Option<GoodieKind> {
    match species {
        Species::Nachling => None,
        Species::WealthyNachling => {
            if rng.gen_bool(0.5) {
                Some(GoodieKind::Energy)
            } else {
                Some(GoodieKind::Torpedo)
            }
        }
        Species::Smallbot => Some(GoodieKind::FreeShip),
    }
}
