//! Natures and stat identifiers.
//!
//! Natures sit on a 5x5 grid: `id = plus * 5 + minus` over
//! (Atk, Def, SpA, SpD, Spe). The diagonal holds the five neutral natures.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CalcError, Result};

/// Non-HP battle stats, in nature-grid order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BattleStat {
    Atk = 0,
    Def = 1,
    SpA = 2,
    SpD = 3,
    Spe = 4,
}

impl BattleStat {
    pub const ALL: [BattleStat; 5] = [
        BattleStat::Atk,
        BattleStat::Def,
        BattleStat::SpA,
        BattleStat::SpD,
        BattleStat::Spe,
    ];

    const fn from_index(index: u8) -> Self {
        match index {
            0 => BattleStat::Atk,
            1 => BattleStat::Def,
            2 => BattleStat::SpA,
            3 => BattleStat::SpD,
            _ => BattleStat::Spe,
        }
    }

    /// Parse "atk", "attack", "special_defense", "spe", ...
    pub fn from_str(s: &str) -> Option<Self> {
        match crate::macros::lookup_key(s).as_str() {
            "atk" | "attack" => Some(BattleStat::Atk),
            "def" | "defense" => Some(BattleStat::Def),
            "spa" | "specialattack" | "spatk" => Some(BattleStat::SpA),
            "spd" | "specialdefense" | "spdef" => Some(BattleStat::SpD),
            "spe" | "speed" => Some(BattleStat::Spe),
            _ => None,
        }
    }

    pub const fn stat_id(self) -> StatId {
        match self {
            BattleStat::Atk => StatId::Atk,
            BattleStat::Def => StatId::Def,
            BattleStat::SpA => StatId::SpA,
            BattleStat::SpD => StatId::SpD,
            BattleStat::Spe => StatId::Spe,
        }
    }
}

impl Serialize for BattleStat {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.stat_id().key())
    }
}

impl<'de> Deserialize<'de> for BattleStat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        BattleStat::from_str(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown stat: {raw}")))
    }
}

/// All six stats, used for EV/IV spreads and error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatId {
    Hp,
    Atk,
    Def,
    SpA,
    SpD,
    Spe,
}

impl StatId {
    pub const ALL: [StatId; 6] = [
        StatId::Hp,
        StatId::Atk,
        StatId::Def,
        StatId::SpA,
        StatId::SpD,
        StatId::Spe,
    ];

    /// Field name as it appears in spreads.
    pub const fn key(self) -> &'static str {
        match self {
            StatId::Hp => "hp",
            StatId::Atk => "attack",
            StatId::Def => "defense",
            StatId::SpA => "special_attack",
            StatId::SpD => "special_defense",
            StatId::Spe => "speed",
        }
    }
}

impl std::fmt::Display for StatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            StatId::Hp => "HP",
            StatId::Atk => "Atk",
            StatId::Def => "Def",
            StatId::SpA => "SpA",
            StatId::SpD => "SpD",
            StatId::Spe => "Spe",
        };
        f.write_str(label)
    }
}

impl Serialize for StatId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// The 25 natures, numbered by their grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum NatureId {
    Bashful = 0,
    Lonely = 1,
    Adamant = 2,
    Naughty = 3,
    Brave = 4,
    Bold = 5,
    Docile = 6,
    Impish = 7,
    Lax = 8,
    Relaxed = 9,
    Modest = 10,
    Mild = 11,
    #[default]
    Hardy = 12,
    Rash = 13,
    Quiet = 14,
    Calm = 15,
    Gentle = 16,
    Careful = 17,
    Quirky = 18,
    Sassy = 19,
    Timid = 20,
    Hasty = 21,
    Jolly = 22,
    Naive = 23,
    Serious = 24,
}

impl NatureId {
    pub const COUNT: usize = 25;

    pub const ALL: [NatureId; NatureId::COUNT] = [
        NatureId::Bashful,
        NatureId::Lonely,
        NatureId::Adamant,
        NatureId::Naughty,
        NatureId::Brave,
        NatureId::Bold,
        NatureId::Docile,
        NatureId::Impish,
        NatureId::Lax,
        NatureId::Relaxed,
        NatureId::Modest,
        NatureId::Mild,
        NatureId::Hardy,
        NatureId::Rash,
        NatureId::Quiet,
        NatureId::Calm,
        NatureId::Gentle,
        NatureId::Careful,
        NatureId::Quirky,
        NatureId::Sassy,
        NatureId::Timid,
        NatureId::Hasty,
        NatureId::Jolly,
        NatureId::Naive,
        NatureId::Serious,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            NatureId::Bashful => "Bashful",
            NatureId::Lonely => "Lonely",
            NatureId::Adamant => "Adamant",
            NatureId::Naughty => "Naughty",
            NatureId::Brave => "Brave",
            NatureId::Bold => "Bold",
            NatureId::Docile => "Docile",
            NatureId::Impish => "Impish",
            NatureId::Lax => "Lax",
            NatureId::Relaxed => "Relaxed",
            NatureId::Modest => "Modest",
            NatureId::Mild => "Mild",
            NatureId::Hardy => "Hardy",
            NatureId::Rash => "Rash",
            NatureId::Quiet => "Quiet",
            NatureId::Calm => "Calm",
            NatureId::Gentle => "Gentle",
            NatureId::Careful => "Careful",
            NatureId::Quirky => "Quirky",
            NatureId::Sassy => "Sassy",
            NatureId::Timid => "Timid",
            NatureId::Hasty => "Hasty",
            NatureId::Jolly => "Jolly",
            NatureId::Naive => "Naive",
            NatureId::Serious => "Serious",
        }
    }

    /// Case-insensitive lookup.
    pub fn from_str(s: &str) -> Option<Self> {
        let key = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|n| n.name().eq_ignore_ascii_case(key))
    }

    /// Strict parse for caller-supplied names.
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| CalcError::UnknownNature(s.to_string()))
    }

    /// Stat raised by 10%, if any.
    pub const fn boosted(self) -> Option<BattleStat> {
        if self.is_neutral() {
            None
        } else {
            Some(BattleStat::from_index(self as u8 / 5))
        }
    }

    /// Stat lowered by 10%, if any.
    pub const fn lowered(self) -> Option<BattleStat> {
        if self.is_neutral() {
            None
        } else {
            Some(BattleStat::from_index(self as u8 % 5))
        }
    }

    #[inline]
    pub const fn is_neutral(self) -> bool {
        let id = self as u8;
        id / 5 == id % 5
    }

    /// Nature multiplier for `stat` in tenths: 11, 10 or 9.
    #[inline]
    pub const fn stat_modifier(self, stat: BattleStat) -> u8 {
        if self.is_neutral() {
            return 10;
        }
        let id = self as u8;
        if id / 5 == stat as u8 {
            11
        } else if id % 5 == stat as u8 {
            9
        } else {
            10
        }
    }
}

impl std::fmt::Display for NatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for NatureId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for NatureId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NatureId::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_positions() {
        assert_eq!(NatureId::Adamant.boosted(), Some(BattleStat::Atk));
        assert_eq!(NatureId::Adamant.lowered(), Some(BattleStat::SpA));
        assert_eq!(NatureId::Timid.boosted(), Some(BattleStat::Spe));
        assert_eq!(NatureId::Timid.lowered(), Some(BattleStat::Atk));
        assert_eq!(NatureId::Sassy.boosted(), Some(BattleStat::SpD));
        assert_eq!(NatureId::Sassy.lowered(), Some(BattleStat::Spe));
        assert_eq!(NatureId::Hardy.boosted(), None);
    }

    #[test]
    fn test_exactly_five_neutral_natures() {
        let neutral: Vec<_> = NatureId::ALL.iter().filter(|n| n.is_neutral()).collect();
        assert_eq!(neutral.len(), 5);
        for nature in neutral {
            for stat in BattleStat::ALL {
                assert_eq!(nature.stat_modifier(stat), 10, "{nature} must be neutral on {stat:?}");
            }
        }
    }

    #[test]
    fn test_every_non_neutral_nature_has_one_up_one_down() {
        for nature in NatureId::ALL.iter().filter(|n| !n.is_neutral()) {
            let mods: Vec<u8> = BattleStat::ALL.iter().map(|&s| nature.stat_modifier(s)).collect();
            assert_eq!(mods.iter().filter(|&&m| m == 11).count(), 1, "{nature}");
            assert_eq!(mods.iter().filter(|&&m| m == 9).count(), 1, "{nature}");
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(NatureId::parse("adamant"), Ok(NatureId::Adamant));
        assert_eq!(NatureId::parse(" Modest "), Ok(NatureId::Modest));
        assert_eq!(
            NatureId::parse("Spicy"),
            Err(CalcError::UnknownNature("Spicy".into()))
        );
        assert_eq!(BattleStat::from_str("special_defense"), Some(BattleStat::SpD));
        assert_eq!(BattleStat::from_str("Spe"), Some(BattleStat::Spe));
        assert_eq!(BattleStat::from_str("hp"), None);
    }
}
