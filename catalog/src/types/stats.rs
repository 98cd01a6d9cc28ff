//! Base stats and derived combat stats

use pokego_protocol::RawStat;

/// Raw base stats as published upstream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl BaseStats {
    /// Collect base stats from upstream entries.
    ///
    /// Missing stats stay at 0. The first entry for a stat name wins and
    /// unknown names are ignored.
    pub fn from_raw(stats: &[RawStat]) -> Self {
        let lookup = |name: &str| {
            stats
                .iter()
                .find(|s| s.name() == Some(name))
                .and_then(|s| s.base_stat)
                .unwrap_or(0)
        };

        Self {
            hp: lookup("hp"),
            attack: lookup("attack"),
            defense: lookup("defense"),
            special_attack: lookup("special-attack"),
            special_defense: lookup("special-defense"),
            speed: lookup("speed"),
        }
    }

    /// Derive the combat stats for these base stats
    pub fn derive(&self) -> CombatStats {
        derive_combat_stats(self)
    }
}

/// Attack/defense/stamina used for in-app battle estimates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    pub attack: u32,
    pub defense: u32,
    pub stamina: u32,
}

const OFFENSE_SCALE: f64 = 1.8;
const SPEED_SCALE: f64 = 0.25;
const STAMINA_SCALE: f64 = 2.0;

/// Map six base stats onto three combat stats.
///
/// - attack  = round(max(atk, spa) * 1.8 + spe * 0.25)
/// - defense = round(max(def, spd) * 1.8 + spe * 0.25)
/// - stamina = round(hp * 2)
///
/// The arithmetic runs in `f64` and rounds half up, so results match values
/// computed by earlier releases bit for bit.
pub fn derive_combat_stats(base: &BaseStats) -> CombatStats {
    let speed = f64::from(base.speed) * SPEED_SCALE;
    let offense = f64::from(base.attack.max(base.special_attack));
    let bulk = f64::from(base.defense.max(base.special_defense));

    CombatStats {
        attack: round_half_up(offense * OFFENSE_SCALE + speed),
        defense: round_half_up(bulk * OFFENSE_SCALE + speed),
        stamina: round_half_up(f64::from(base.hp) * STAMINA_SCALE),
    }
}

// Inputs are non-negative, where `round` (half away from zero) is half up.
fn round_half_up(value: f64) -> u32 {
    value.round() as u32
}
