//! Exact damage distributions over discrete rolls.
//!
//! A distribution maps each reachable damage total to the number of roll
//! combinations producing it. Convolving two distributions gives the totals
//! of two independent hits, so N hits of 16 rolls collapse from 16^N
//! combinations to at most `(max - min) * N + 1` distinct sums.

use std::collections::BTreeMap;

/// Damage totals with their combination counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DamageDistribution {
    counts: BTreeMap<u32, u64>,
    combinations: u64,
}

impl DamageDistribution {
    /// One hit: every roll is one equally likely combination.
    pub fn from_rolls(rolls: &[u32]) -> Self {
        let mut counts = BTreeMap::new();
        for &roll in rolls {
            *counts.entry(roll).or_insert(0) += 1;
        }
        Self {
            counts,
            combinations: rolls.len() as u64,
        }
    }

    /// Totals of this hit followed by an independent `other` hit.
    pub fn convolve(&self, other: &Self) -> Self {
        let mut counts = BTreeMap::new();
        for (&a, &count_a) in &self.counts {
            for (&b, &count_b) in &other.counts {
                *counts.entry(a + b).or_insert(0) += count_a * count_b;
            }
        }
        Self {
            counts,
            combinations: self.combinations * other.combinations,
        }
    }

    /// Whether `hits` draws from `roll_count` rolls can be counted in a `u64`.
    ///
    /// Sixteen rolls allow up to 15 hits (16^16 = 2^64).
    pub fn countable(roll_count: usize, hits: u8) -> bool {
        (roll_count as u64).checked_pow(hits as u32).is_some()
    }

    /// `hits` independent draws from the same rolls. Zero hits is the
    /// single combination totalling 0.
    ///
    /// Counts overflow unless [`Self::countable`] holds for `rolls.len()` and `hits`.
    pub fn repeated(rolls: &[u32], hits: u8) -> Self {
        let single = Self::from_rolls(rolls);
        let mut total = Self {
            counts: BTreeMap::from([(0, 1)]),
            combinations: 1,
        };
        for _ in 0..hits {
            total = total.convolve(&single);
        }
        total
    }

    /// Independent hits from different roll sets.
    pub fn combined(attacks: &[&[u32]]) -> Self {
        attacks
            .iter()
            .map(|rolls| Self::from_rolls(rolls))
            .fold(Self::repeated(&[], 0), |acc, next| acc.convolve(&next))
    }

    /// Total number of roll combinations (16^N for N full hits).
    pub fn combinations(&self) -> u64 {
        self.combinations
    }

    /// Number of distinct totals.
    pub fn distinct_totals(&self) -> usize {
        self.counts.len()
    }

    /// Combinations whose total reaches `threshold`.
    pub fn count_at_least(&self, threshold: u32) -> u64 {
        self.counts.range(threshold..).map(|(_, &count)| count).sum()
    }

    /// Combinations whose total stays below `threshold`.
    pub fn count_below(&self, threshold: u32) -> u64 {
        self.combinations - self.count_at_least(threshold)
    }

    pub fn min(&self) -> Option<u32> {
        self.counts.keys().next().copied()
    }

    pub fn max(&self) -> Option<u32> {
        self.counts.keys().next_back().copied()
    }

    pub fn mean(&self) -> f64 {
        if self.combinations == 0 {
            return 0.0;
        }
        let weighted: f64 = self
            .counts
            .iter()
            .map(|(&total, &count)| total as f64 * count as f64)
            .sum();
        weighted / self.combinations as f64
    }
}

/// Percent of `part` in `whole`; 0 when there are no combinations.
#[inline]
pub(crate) fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_hit_counts() {
        let rolls = [10, 10, 11, 12];
        let dist = DamageDistribution::from_rolls(&rolls);
        assert_eq!(dist.combinations(), 4);
        assert_eq!(dist.count_at_least(11), 2);
        assert_eq!(dist.count_below(11), 2);
        assert_eq!(dist.min(), Some(10));
        assert_eq!(dist.max(), Some(12));
    }

    #[test]
    fn test_two_hits_match_brute_force() {
        let rolls: Vec<u32> = (0..16).map(|i| 40 + i / 2).collect();
        let dist = DamageDistribution::repeated(&rolls, 2);
        assert_eq!(dist.combinations(), 256);

        let hp = 95;
        let brute = rolls
            .iter()
            .flat_map(|a| rolls.iter().map(move |b| a + b))
            .filter(|&total| total >= hp)
            .count() as u64;
        assert_eq!(dist.count_at_least(hp), brute);
    }

    #[test]
    fn test_four_hits_distinct_totals_stay_small() {
        let rolls: Vec<u32> = (0..16).map(|i| 85 + i).collect();
        let dist = DamageDistribution::repeated(&rolls, 4);
        assert_eq!(dist.combinations(), 65_536);
        // 4 * 85 ..= 4 * 100
        assert_eq!(dist.distinct_totals(), 61);
        assert_eq!(dist.min(), Some(340));
        assert_eq!(dist.max(), Some(400));
    }

    #[test]
    fn test_countable_limit() {
        assert!(DamageDistribution::countable(16, 15));
        assert!(!DamageDistribution::countable(16, 16));
        assert!(DamageDistribution::countable(0, 200));
    }

    #[test]
    fn test_combined_different_attacks() {
        let a = [10, 20];
        let b = [1, 2];
        let dist = DamageDistribution::combined(&[&a[..], &b[..]]);
        assert_eq!(dist.combinations(), 4);
        assert_eq!(dist.count_at_least(12), 3, "only 10+1 stays below 12");
        assert_eq!(dist.mean(), 16.5);
    }
}
