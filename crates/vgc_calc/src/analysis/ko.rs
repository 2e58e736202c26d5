//! KO analysis.
//!
//! The authoritative figure is the per-roll KO count: a roll KOs when it
//! reaches the defender's HP, so the OHKO chance is always a multiple of
//! 1/16. The OHKO/2HKO/3HKO class is a convenience read of the minimum
//! roll against fixed thresholds.

use serde::Serialize;

use crate::damage::percent_of;
use crate::error::{CalcError, Result};

use super::distribution::{percent, DamageDistribution};

/// Largest hit count analyzed exactly (16^4 = 65536 combinations).
pub const MAX_ANALYZED_HITS: u8 = 4;

/// Chances at or above this read as guaranteed in the verdict, so a single
/// surviving combination out of 4096 still reports "Guaranteed 3HKO".
pub const GUARANTEED_PERCENT: f64 = 99.9;

/// Threshold class of the minimum roll, in truncated permille of HP.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KoClass {
    /// min roll >= 100%
    Ohko,
    /// min roll >= 50%
    TwoHko,
    /// min roll >= 33.4%
    ThreeHko,
    /// Anything weaker
    FourHkoOrWorse,
    NoDamage,
}

impl KoClass {
    pub fn from_min_damage(min_damage: u32, hp: u16) -> Self {
        if min_damage == 0 || hp == 0 {
            return KoClass::NoDamage;
        }
        let permille = min_damage as u64 * 1000 / hp as u64;
        match permille {
            1000.. => KoClass::Ohko,
            500.. => KoClass::TwoHko,
            334.. => KoClass::ThreeHko,
            _ => KoClass::FourHkoOrWorse,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            KoClass::Ohko => "OHKO",
            KoClass::TwoHko => "2HKO",
            KoClass::ThreeHko => "3HKO",
            KoClass::FourHkoOrWorse => "4HKO+",
            KoClass::NoDamage => "No damage",
        }
    }
}

/// Chance, in percent, that `hits` independent uses reach `hp`.
///
/// Exact over all 16^hits roll combinations. Zero hits, or more than fit
/// in a 64-bit combination count (16 with 16 rolls), is `InvalidHitCount`.
pub fn n_hit_ko_chance(rolls: &[u32], hits: u8, hp: u16) -> Result<f64> {
    if hits == 0 || !DamageDistribution::countable(rolls.len(), hits) {
        return Err(CalcError::InvalidHitCount(hits));
    }
    Ok(ko_chance(rolls, hits, hp))
}

fn ko_chance(rolls: &[u32], hits: u8, hp: u16) -> f64 {
    let dist = DamageDistribution::repeated(rolls, hits);
    percent(dist.count_at_least(hp as u32), dist.combinations())
}

/// KO analysis of one move's rolls against one defender.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KoAnalysis {
    pub defender_hp: u16,
    pub min_damage: u32,
    pub max_damage: u32,
    /// Rolls that OHKO, out of 16
    pub ko_rolls: u8,
    /// OHKO chance in percent
    pub ko_chance_percent: f64,
    pub is_guaranteed_ohko: bool,
    pub is_possible_ohko: bool,
    pub class: KoClass,
    /// Exact KO chance in percent within 1, 2, 3 and 4 uses
    pub n_hit_chances: [f64; MAX_ANALYZED_HITS as usize],
    /// Uses needed when every roll is the minimum, up to four
    pub guaranteed_hits: Option<u8>,
}

impl KoAnalysis {
    pub fn from_rolls(rolls: &[u32], defender_hp: u16) -> Self {
        let hp = defender_hp as u32;
        let min_damage = rolls.iter().copied().min().unwrap_or(0);
        let max_damage = rolls.iter().copied().max().unwrap_or(0);

        let ko_rolls = rolls.iter().filter(|&&roll| roll >= hp).count();
        let total = rolls.len();

        let mut n_hit_chances = [0.0; MAX_ANALYZED_HITS as usize];
        if max_damage > 0 {
            for (i, chance) in n_hit_chances.iter_mut().enumerate() {
                *chance = ko_chance(rolls, i as u8 + 1, defender_hp);
            }
        }

        let guaranteed_hits = (min_damage > 0)
            .then(|| (1..=MAX_ANALYZED_HITS).find(|&n| min_damage * n as u32 >= hp))
            .flatten();

        Self {
            defender_hp,
            min_damage,
            max_damage,
            ko_rolls: ko_rolls as u8,
            ko_chance_percent: percent(ko_rolls as u64, total as u64),
            is_guaranteed_ohko: total > 0 && ko_rolls == total,
            is_possible_ohko: ko_rolls > 0,
            class: KoClass::from_min_damage(min_damage, defender_hp),
            n_hit_chances,
            guaranteed_hits,
        }
    }

    /// Exact KO chance within `hits` uses (1..=4).
    pub fn chance_within(&self, hits: u8) -> Option<f64> {
        if hits == 0 {
            return None;
        }
        self.n_hit_chances.get(hits as usize - 1).copied()
    }

    pub fn min_percent(&self) -> f64 {
        percent_of(self.min_damage, self.defender_hp)
    }

    pub fn max_percent(&self) -> f64 {
        percent_of(self.max_damage, self.defender_hp)
    }

    /// Human verdict: "Guaranteed OHKO", "37.50% chance to OHKO",
    /// "Guaranteed 2HKO", ..., "5+ HKO".
    pub fn verdict(&self) -> String {
        if self.max_damage == 0 {
            return "No damage".to_string();
        }
        for (i, &chance) in self.n_hit_chances.iter().enumerate() {
            let label = if i == 0 {
                "OHKO".to_string()
            } else {
                format!("{}HKO", i + 1)
            };
            if chance >= GUARANTEED_PERCENT {
                return format!("Guaranteed {label}");
            }
            if chance > 0.0 {
                return format!("{chance:.2}% chance to {label}");
            }
        }
        "5+ HKO".to_string()
    }
}
