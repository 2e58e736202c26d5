//! Type enum and the Generation 9 type chart.
//!
//! Effectiveness is reported on a 4-scale so dual-type products stay exact
//! integers: 0 = immune, 1 = 0.25x, 2 = 0.5x, 4 = 1x, 8 = 2x, 16 = 4x.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CalcError, Result};

/// Pokemon type (the 18 battle types).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Type {
    /// Total number of types
    pub const COUNT: usize = 18;

    pub const ALL: [Type; Type::COUNT] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Parse type from string (case-insensitive)
    #[inline]
    pub fn from_str(s: &str) -> Option<Self> {
        let key = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(key))
    }

    /// Strict parse for caller-supplied names.
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| CalcError::UnknownType(s.to_string()))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Type {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Type {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Type::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Damage taken by a defending type from one attacking type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeEffectiveness {
    Normal,
    SuperEffective,
    Resistant,
    Immune,
}

impl TypeEffectiveness {
    /// Multiplier on the 4-scale.
    #[inline]
    pub const fn scale(self) -> u8 {
        match self {
            TypeEffectiveness::Normal => 4,
            TypeEffectiveness::SuperEffective => 8,
            TypeEffectiveness::Resistant => 2,
            TypeEffectiveness::Immune => 0,
        }
    }
}

use TypeEffectiveness::{Immune as I, Normal as N, Resistant as R, SuperEffective as S};

/// `TYPE_CHART[defender][attacker]`, rows and columns in `Type` order.
#[rustfmt::skip]
pub static TYPE_CHART: [[TypeEffectiveness; Type::COUNT]; Type::COUNT] = [
    //           Nor Fir Wat Ele Gra Ice Fig Poi Gro Fly Psy Bug Roc Gho Dra Dar Ste Fai
    /* Normal */  [N,  N,  N,  N,  N,  N,  S,  N,  N,  N,  N,  N,  N,  I,  N,  N,  N,  N],
    /* Fire */    [N,  R,  S,  N,  R,  R,  N,  N,  S,  N,  N,  R,  S,  N,  N,  N,  R,  R],
    /* Water */   [N,  R,  R,  S,  S,  R,  N,  N,  N,  N,  N,  N,  N,  N,  N,  N,  R,  N],
    /* Electric */[N,  N,  N,  R,  N,  N,  N,  N,  S,  R,  N,  N,  N,  N,  N,  N,  R,  N],
    /* Grass */   [N,  S,  R,  R,  R,  S,  N,  S,  R,  S,  N,  S,  N,  N,  N,  N,  N,  N],
    /* Ice */     [N,  S,  N,  N,  N,  R,  S,  N,  N,  N,  N,  N,  S,  N,  N,  N,  S,  N],
    /* Fighting */[N,  N,  N,  N,  N,  N,  N,  N,  N,  S,  S,  R,  R,  N,  N,  R,  N,  S],
    /* Poison */  [N,  N,  N,  N,  R,  N,  R,  R,  S,  N,  S,  R,  N,  N,  N,  N,  N,  R],
    /* Ground */  [N,  N,  S,  I,  S,  S,  N,  R,  N,  N,  N,  N,  R,  N,  N,  N,  N,  N],
    /* Flying */  [N,  N,  N,  S,  R,  S,  R,  N,  I,  N,  N,  R,  S,  N,  N,  N,  N,  N],
    /* Psychic */ [N,  N,  N,  N,  N,  N,  R,  N,  N,  N,  R,  S,  N,  S,  N,  S,  N,  N],
    /* Bug */     [N,  S,  N,  N,  R,  N,  R,  N,  R,  S,  N,  N,  S,  N,  N,  N,  N,  N],
    /* Rock */    [R,  R,  S,  N,  S,  N,  S,  R,  S,  R,  N,  N,  N,  N,  N,  N,  S,  N],
    /* Ghost */   [I,  N,  N,  N,  N,  N,  I,  R,  N,  N,  N,  R,  N,  S,  N,  S,  N,  N],
    /* Dragon */  [N,  R,  R,  R,  R,  S,  N,  N,  N,  N,  N,  N,  N,  N,  S,  N,  N,  S],
    /* Dark */    [N,  N,  N,  N,  N,  N,  S,  N,  N,  N,  I,  S,  N,  R,  N,  R,  N,  S],
    /* Steel */   [R,  S,  N,  N,  R,  R,  S,  I,  S,  R,  R,  R,  R,  N,  R,  N,  R,  R],
    /* Fairy */   [N,  N,  N,  N,  N,  N,  R,  S,  N,  N,  N,  R,  N,  N,  I,  R,  S,  N],
];

/// Effectiveness of `attacking` against one defending type (4-scale).
#[inline]
pub fn single_effectiveness(attacking: Type, defending: Type) -> u8 {
    TYPE_CHART[defending as usize][attacking as usize].scale()
}

/// Effectiveness against one or two defending types (4-scale).
///
/// The dual-type value is the exact product of the two single lookups:
/// `e1 * e2 / 4` never truncates because every factor is a power of two.
#[inline]
pub fn type_effectiveness(attacking: Type, def1: Type, def2: Option<Type>) -> u8 {
    let first = single_effectiveness(attacking, def1);
    match def2 {
        Some(second) if second != def1 => first * single_effectiveness(attacking, second) / 4,
        _ => first,
    }
}

/// Effectiveness against a slice of defending types (4-scale).
pub fn effectiveness_against(attacking: Type, defenders: &[Type]) -> u8 {
    match defenders {
        [] => 4,
        [only] => type_effectiveness(attacking, *only, None),
        [first, second, ..] => type_effectiveness(attacking, *first, Some(*second)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_matchups() {
        assert_eq!(single_effectiveness(Type::Fire, Type::Grass), 8, "Fire hits Grass 2x");
        assert_eq!(single_effectiveness(Type::Water, Type::Grass), 2, "Water is resisted by Grass");
        assert_eq!(single_effectiveness(Type::Ground, Type::Flying), 0, "Flying is immune to Ground");
        assert_eq!(single_effectiveness(Type::Dragon, Type::Fairy), 0, "Fairy is immune to Dragon");
        assert_eq!(single_effectiveness(Type::Normal, Type::Normal), 4);
        assert_eq!(single_effectiveness(Type::Poison, Type::Steel), 0);
        assert_eq!(single_effectiveness(Type::Psychic, Type::Dark), 0);
    }

    #[test]
    fn test_dual_type_is_exact_product() {
        // 2x vs Water, 0.5x vs Dragon -> exactly 1x
        assert_eq!(type_effectiveness(Type::Grass, Type::Water, Some(Type::Dragon)), 4);
        // Ice vs Dragon/Flying: 2x * 2x = 4x
        assert_eq!(type_effectiveness(Type::Ice, Type::Dragon, Some(Type::Flying)), 16);
        // Fire vs Water/Rock: 0.5x * 0.5x = 0.25x
        assert_eq!(type_effectiveness(Type::Fire, Type::Water, Some(Type::Rock)), 1);
        // Fighting vs Normal/Flying: 2x * 0.5x = 1x
        assert_eq!(type_effectiveness(Type::Fighting, Type::Normal, Some(Type::Flying)), 4);
        // Any immunity zeroes the product
        assert_eq!(type_effectiveness(Type::Electric, Type::Water, Some(Type::Ground)), 0);
    }

    #[test]
    fn test_dual_product_matches_singles_for_every_pair() {
        for &atk in &Type::ALL {
            for &d1 in &Type::ALL {
                for &d2 in &Type::ALL {
                    if d1 == d2 {
                        continue;
                    }
                    let product = single_effectiveness(atk, d1) as u32
                        * single_effectiveness(atk, d2) as u32;
                    assert_eq!(
                        type_effectiveness(atk, d1, Some(d2)) as u32 * 4,
                        product,
                        "{atk} vs {d1}/{d2} should be the exact product"
                    );
                }
            }
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(Type::from_str("fire"), Some(Type::Fire));
        assert_eq!(Type::from_str("FAIRY"), Some(Type::Fairy));
        assert_eq!(Type::from_str("Shadow"), None);
        assert_eq!(Type::parse("Plasma"), Err(CalcError::UnknownType("Plasma".into())));
    }
}
