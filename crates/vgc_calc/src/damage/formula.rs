//! Integer damage math: base damage, rolls, stages and 4096-scale rounding.
//!
//! Products are widened to 64 bits before dividing so that no intermediate
//! wraps.

use crate::error::{CalcError, Result};

/// Number of random damage rolls (85%..=100%).
pub const ROLL_COUNT: usize = 16;

/// `value / divisor` rounded to nearest, with an exact half rounding down.
#[inline]
pub fn pokeround(value: u64, divisor: u64) -> u64 {
    let (q, r) = (value / divisor, value % divisor);
    if r > divisor / 2 {
        q + 1
    } else {
        q
    }
}

/// `value * modifier / 4096`, pokerounded.
#[inline]
pub fn apply_modifier(value: u32, modifier: u16) -> u32 {
    if modifier == 4096 {
        return value;
    }
    pokeround(value as u64 * modifier as u64, 4096) as u32
}

/// Apply a fractional modifier and floor the result (no rounding).
///
/// Used for stat reductions such as the Ruin auras (3/4) and Paradox
/// boosts (13/10).
#[inline]
pub fn apply_modifier_floor(value: u32, modifier_num: u32, modifier_den: u32) -> u32 {
    (value as u64 * modifier_num as u64 / modifier_den as u64) as u32
}

/// Fold 4096-scale modifiers into one, pokerounding after every step.
///
/// Clamped to 1..=131072 (32x).
pub fn chain_mods(modifiers: &[u16]) -> u32 {
    let mut result: u64 = 4096;

    for &m in modifiers.iter().filter(|&&m| m != 4096) {
        result = pokeround(result * m as u64, 4096);
    }

    result.clamp(1, 131072) as u32
}

/// Calculate base damage before modifiers.
///
/// Formula: `floor(floor(floor(2 * Level / 5 + 2) * BasePower * Attack / Defense) / 50) + 2`
///
/// Each intermediate step is truncated. A zero defense is a broken
/// precondition, not something to clamp.
pub fn get_base_damage(level: u32, base_power: u32, attack: u32, defense: u32) -> Result<u32> {
    if defense == 0 {
        return Err(CalcError::ZeroDefense);
    }

    // Level factor: floor(2 * level / 5 + 2)
    let level_factor = (2 * level / 5 + 2) as u64;

    let numerator = level_factor * base_power as u64 * attack as u64;
    let after_defense = numerator / defense as u64;
    let after_50 = after_defense / 50;

    Ok((after_50 + 2) as u32)
}

/// Apply the random damage roll.
///
/// Returns the damage for a specific roll index (0 = 85%, 15 = 100%).
#[inline]
pub fn apply_random_roll(damage: u32, roll_index: u8) -> u32 {
    let roll = 85 + (roll_index.min(15) as u64);
    (damage as u64 * roll / 100) as u32
}

/// Boost multiplier table.
///
/// Index 0 = -6, Index 6 = 0, Index 12 = +6
/// Each entry is (numerator, denominator).
const BOOST_TABLE: [(u32, u32); 13] = [
    (2, 8), // -6: 0.25x
    (2, 7), // -5
    (2, 6), // -4
    (2, 5), // -3: 0.4x
    (2, 4), // -2: 0.5x
    (2, 3), // -1
    (2, 2), //  0: 1.0x
    (3, 2), // +1: 1.5x
    (4, 2), // +2: 2.0x
    (5, 2), // +3
    (6, 2), // +4: 3.0x
    (7, 2), // +5
    (8, 2), // +6: 4.0x
];

/// Apply stat stage to a stat (`(2+s)/2` up, `2/(2-s)` down, floored).
pub fn apply_boost(stat: u32, stage: i8) -> u32 {
    let stage = stage.clamp(-6, 6);
    let (num, den) = BOOST_TABLE[(stage + 6) as usize];
    stat * num / den
}

/// Percent of `hp`, truncated to 0.1%: `floor(damage * 1000 / hp) / 10`.
#[inline]
pub fn percent_of(damage: u32, hp: u16) -> f64 {
    if hp == 0 {
        return 0.0;
    }
    (damage as u64 * 1000 / hp as u64) as f64 / 10.0
}
