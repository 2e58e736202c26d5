//! Survival across repeated or combined hits.
//!
//! Each hit draws one of its own 16 rolls independently. Up to three hits
//! are counted exactly over the full Cartesian product; beyond that the
//! average-sum approximation is used and flagged as such.

use serde::Serialize;

use crate::error::{CalcError, Result};

use super::distribution::{percent, DamageDistribution};

/// Largest number of hits counted exactly by default.
pub const MAX_EXACT_HITS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// Counted over every roll combination.
    Exact,
    /// Average damage compared against HP; either 0% or 100%.
    Approximate,
}

/// Chance that the defender is still standing after every hit.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Survival {
    pub survive_percent: f64,
    pub precision: Precision,
    /// Surviving combinations (exact results only)
    pub surviving: Option<u64>,
    /// All combinations (exact results only)
    pub combinations: Option<u64>,
}

impl Survival {
    fn exact(dist: &DamageDistribution, hp: u16) -> Self {
        let surviving = dist.count_below(hp as u32);
        Self {
            survive_percent: percent(surviving, dist.combinations()),
            precision: Precision::Exact,
            surviving: Some(surviving),
            combinations: Some(dist.combinations()),
        }
    }

    fn approximate(average_total: f64, hp: u16) -> Self {
        let survives = average_total < hp as f64;
        Self {
            survive_percent: if survives { 100.0 } else { 0.0 },
            precision: Precision::Approximate,
            surviving: None,
            combinations: None,
        }
    }

    pub fn is_exact(&self) -> bool {
        self.precision == Precision::Exact
    }
}

fn average(rolls: &[u32]) -> f64 {
    if rolls.is_empty() {
        return 0.0;
    }
    rolls.iter().map(|&r| r as f64).sum::<f64>() / rolls.len() as f64
}

/// Survival against several different attacks landing together.
///
/// Exact for up to three attacks; more fall back to comparing the sum of
/// average rolls against HP.
pub fn combined_survival(attacks: &[&[u32]], hp: u16) -> Result<Survival> {
    if attacks.is_empty() {
        return Err(CalcError::InvalidHitCount(0));
    }
    if attacks.len() <= MAX_EXACT_HITS {
        let countable = attacks
            .iter()
            .try_fold(1u64, |acc, rolls| acc.checked_mul(rolls.len() as u64))
            .is_some();
        if !countable {
            return Err(CalcError::InvalidHitCount(attacks.len() as u8));
        }
        let dist = DamageDistribution::combined(attacks);
        return Ok(Survival::exact(&dist, hp));
    }
    let average_total = attacks.iter().map(|rolls| average(rolls)).sum();
    Ok(Survival::approximate(average_total, hp))
}

/// Survival against the same attack landing `hits` times.
///
/// Exact for up to three hits; more use `average_roll * hits`.
pub fn repeated_hit_survival(rolls: &[u32], hits: u8, hp: u16) -> Result<Survival> {
    if hits == 0 {
        return Err(CalcError::InvalidHitCount(0));
    }
    if hits as usize <= MAX_EXACT_HITS {
        return exact_repeated_survival(rolls, hits, hp);
    }
    Ok(Survival::approximate(average(rolls) * hits as f64, hp))
}

/// Exact survival for repeated hits, by convolution.
///
/// Limited to hit counts whose combinations fit in a `u64` (15 with 16
/// rolls); beyond that is `InvalidHitCount`.
pub fn exact_repeated_survival(rolls: &[u32], hits: u8, hp: u16) -> Result<Survival> {
    if hits == 0 || !DamageDistribution::countable(rolls.len(), hits) {
        return Err(CalcError::InvalidHitCount(hits));
    }
    let dist = DamageDistribution::repeated(rolls, hits);
    Ok(Survival::exact(&dist, hp))
}
