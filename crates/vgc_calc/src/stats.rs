//! Stat model: base stats, EV/IV spreads and final stat computation.
//!
//! Every intermediate division truncates. The nature multiplier is applied
//! as an integer `* 9 / 10`, `* 10 / 10` or `* 11 / 10` so that the result
//! is exactly `floor(raw * nature)`.

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};
use crate::natures::{BattleStat, NatureId, StatId};

/// Max EVs in one stat.
pub const MAX_STAT_EVS: u16 = 252;

/// Max EVs across all six stats.
pub const MAX_TOTAL_EVS: u16 = 508;

/// Max IV in one stat.
pub const MAX_IV: u16 = 31;

/// Default level for builds.
pub const DEFAULT_LEVEL: u8 = 50;

/// Compute one final stat.
///
/// HP: `floor((2*base + iv + floor(ev/4)) * level / 100) + level + 10`,
/// fixed at 1 when base HP is 1.
/// Others: `floor(floor((2*base + iv + floor(ev/4)) * level / 100 + 5) * nature)`.
///
/// `nature_mod` is in tenths (9, 10 or 11) and is ignored for HP.
pub fn final_stat(base: u16, iv: u16, ev: u16, level: u8, nature_mod: u8, is_hp: bool) -> u16 {
    let base = base as u32;
    let level = level as u32;
    let core = (2 * base + iv as u32 + ev as u32 / 4) * level / 100;

    if is_hp {
        if base == 1 {
            return 1;
        }
        return (core + level + 10) as u16;
    }

    ((core + 5) * nature_mod as u32 / 10) as u16
}

macro_rules! six_stats {
    ($(#[$meta:meta])* $name:ident, $default:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $name {
            pub hp: u16,
            pub attack: u16,
            pub defense: u16,
            pub special_attack: u16,
            pub special_defense: u16,
            pub speed: u16,
        }

        impl Default for $name {
            fn default() -> Self {
                Self::splat($default)
            }
        }

        impl $name {
            /// All six stats set to `value` (no validation).
            pub const fn splat(value: u16) -> Self {
                Self {
                    hp: value,
                    attack: value,
                    defense: value,
                    special_attack: value,
                    special_defense: value,
                    speed: value,
                }
            }

            /// Values in HP/Atk/Def/SpA/SpD/Spe order.
            pub const fn to_array(&self) -> [u16; 6] {
                [
                    self.hp,
                    self.attack,
                    self.defense,
                    self.special_attack,
                    self.special_defense,
                    self.speed,
                ]
            }

            pub const fn get(&self, stat: StatId) -> u16 {
                match stat {
                    StatId::Hp => self.hp,
                    StatId::Atk => self.attack,
                    StatId::Def => self.defense,
                    StatId::SpA => self.special_attack,
                    StatId::SpD => self.special_defense,
                    StatId::Spe => self.speed,
                }
            }

            /// Copy with one stat replaced (no validation).
            pub const fn with(mut self, stat: StatId, value: u16) -> Self {
                match stat {
                    StatId::Hp => self.hp = value,
                    StatId::Atk => self.attack = value,
                    StatId::Def => self.defense = value,
                    StatId::SpA => self.special_attack = value,
                    StatId::SpD => self.special_defense = value,
                    StatId::Spe => self.speed = value,
                }
                self
            }
        }

        impl From<[u16; 6]> for $name {
            fn from(v: [u16; 6]) -> Self {
                Self {
                    hp: v[0],
                    attack: v[1],
                    defense: v[2],
                    special_attack: v[3],
                    special_defense: v[4],
                    speed: v[5],
                }
            }
        }
    };
}

six_stats!(
    /// Species base stats.
    BaseStats,
    0
);

six_stats!(
    /// Effort values. Each 0..=252, total at most 508.
    EvSpread,
    0
);

six_stats!(
    /// Individual values. Each 0..=31, default 31.
    IvSpread,
    MAX_IV
);

six_stats!(
    /// Final battle stats.
    FinalStats,
    0
);

impl EvSpread {
    /// Validated spread. Out-of-range values are rejected, never clamped.
    pub fn new(values: [u16; 6]) -> Result<Self> {
        let spread = Self::from(values);
        spread.validate()?;
        Ok(spread)
    }

    pub fn total(&self) -> u16 {
        self.to_array().iter().sum()
    }

    pub fn validate(&self) -> Result<()> {
        for stat in StatId::ALL {
            let value = self.get(stat);
            if value > MAX_STAT_EVS {
                return Err(CalcError::EvOutOfRange { stat, value });
            }
        }
        let total = self.total();
        if total > MAX_TOTAL_EVS {
            return Err(CalcError::EvTotalExceeded { total });
        }
        Ok(())
    }
}

impl IvSpread {
    pub fn new(values: [u16; 6]) -> Result<Self> {
        let spread = Self::from(values);
        spread.validate()?;
        Ok(spread)
    }

    pub fn validate(&self) -> Result<()> {
        for stat in StatId::ALL {
            let value = self.get(stat);
            if value > MAX_IV {
                return Err(CalcError::IvOutOfRange { stat, value });
            }
        }
        Ok(())
    }
}

impl FinalStats {
    /// Non-HP stat lookup.
    #[inline]
    pub const fn battle(&self, stat: BattleStat) -> u16 {
        self.get(stat.stat_id())
    }
}

/// Compute all six final stats.
pub fn compute_stats(
    base: &BaseStats,
    ivs: &IvSpread,
    evs: &EvSpread,
    level: u8,
    nature: NatureId,
) -> FinalStats {
    let hp = final_stat(base.hp, ivs.hp, evs.hp, level, 10, true);
    let other = |stat: BattleStat| {
        let id = stat.stat_id();
        final_stat(
            base.get(id),
            ivs.get(id),
            evs.get(id),
            level,
            nature.stat_modifier(stat),
            false,
        )
    };

    FinalStats {
        hp,
        attack: other(BattleStat::Atk),
        defense: other(BattleStat::Def),
        special_attack: other(BattleStat::SpA),
        special_defense: other(BattleStat::SpD),
        speed: other(BattleStat::Spe),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_50_attack() {
        // Base 100, 31 IV, 252 EV, Adamant:
        // core = floor((200 + 31 + 63) * 50 / 100) = 147
        // floor((147 + 5) * 11 / 10) = floor(167.2) = 167
        assert_eq!(final_stat(100, 31, 252, 50, 11, false), 167);
    }

    #[test]
    fn test_level_50_neutral_defense() {
        // core = floor((200 + 31 + 0) * 50 / 100) = 115, + 5 = 120
        assert_eq!(final_stat(100, 31, 0, 50, 10, false), 120);
    }

    #[test]
    fn test_hp_formula() {
        // floor((2*35 + 31 + 0) * 50 / 100) + 50 + 10 = 50 + 60 = 110
        assert_eq!(final_stat(35, 31, 0, 50, 10, true), 110);
        // floor((200 + 31 + 63) * 100 / 100) + 110 = 404
        assert_eq!(final_stat(100, 31, 252, 100, 10, true), 404);
    }

    #[test]
    fn test_base_one_hp_is_always_one() {
        assert_eq!(final_stat(1, 31, 252, 100, 10, true), 1);
        assert_eq!(final_stat(1, 0, 0, 1, 10, true), 1);
        // Only HP is pinned
        assert_ne!(final_stat(1, 31, 252, 100, 10, false), 1);
    }

    #[test]
    fn test_nature_truncates_after_multiply() {
        // Base 55 Atk, Timid: core+5 = floor(141*50/100)+5 = 75
        // floor(75 * 0.9) = 67
        assert_eq!(final_stat(55, 31, 0, 50, 9, false), 67);
        // Base 90 Spe, 252 EVs, Timid: 142 -> floor(156.2) = 156
        assert_eq!(final_stat(90, 31, 252, 50, 11, false), 156);
    }

    #[test]
    fn test_monotonic_in_ev() {
        for &base in &[1u16, 45, 100, 150, 255] {
            for &nature in &[9u8, 10, 11] {
                for &is_hp in &[false, true] {
                    let mut prev = 0;
                    for ev in 0..=252u16 {
                        let stat = final_stat(base, 31, ev, 50, nature, is_hp);
                        assert!(
                            stat >= prev,
                            "stat decreased at base={base} ev={ev} nature={nature} hp={is_hp}"
                        );
                        prev = stat;
                    }
                }
            }
        }
    }

    #[test]
    fn test_ev_validation_rejects() {
        assert_eq!(
            EvSpread::new([0, 256, 0, 0, 0, 0]),
            Err(CalcError::EvOutOfRange { stat: StatId::Atk, value: 256 })
        );
        assert_eq!(
            EvSpread::new([252, 252, 8, 0, 0, 0]),
            Err(CalcError::EvTotalExceeded { total: 512 })
        );
        assert!(EvSpread::new([252, 252, 4, 0, 0, 0]).is_ok());
        // Non-multiples of 4 are legal
        assert!(EvSpread::new([1, 2, 3, 0, 0, 0]).is_ok());
    }

    #[test]
    fn test_iv_validation() {
        assert_eq!(IvSpread::default(), IvSpread::splat(31));
        assert_eq!(
            IvSpread::new([31, 31, 32, 31, 31, 31]),
            Err(CalcError::IvOutOfRange { stat: StatId::Def, value: 32 })
        );
    }

    #[test]
    fn test_compute_stats() {
        let base = BaseStats::from([100, 100, 100, 100, 100, 100]);
        let evs = EvSpread::new([252, 252, 0, 0, 0, 0]).unwrap();
        let stats = compute_stats(&base, &IvSpread::default(), &evs, 100, NatureId::Adamant);
        assert_eq!(stats.hp, 404);
        assert_eq!(stats.attack, 328);
        // floor(236 * 0.9) = 212
        assert_eq!(stats.special_attack, 212);
        // No Def EVs: floor(231 * 100 / 100) + 5 = 236
        assert_eq!(stats.battle(BattleStat::Def), 236);
    }

    #[test]
    fn test_spread_deserialize_defaults() {
        let evs: EvSpread = serde_json::from_str(r#"{"attack": 252}"#).unwrap();
        assert_eq!(evs.attack, 252);
        assert_eq!(evs.hp, 0);
        let ivs: IvSpread = serde_json::from_str(r#"{"speed": 0}"#).unwrap();
        assert_eq!(ivs.speed, 0);
        assert_eq!(ivs.attack, 31);
    }
}
