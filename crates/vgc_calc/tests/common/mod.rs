//! Shared builders for the integration tests.
//!
//! Every test Pokemon uses base 100 in all stats at level 50 with 31 IVs, so
//! the numbers stay easy to check by hand:
//! - 252 Atk EVs, Adamant: Attack 167
//! - 0 EVs, neutral: HP 175, Defense 120, Sp. Def 120
//! - Adamant, 0 SpA EVs: Sp. Atk 108

#![allow(dead_code)]

use vgc_calc::{BaseStats, EvSpread, NatureId, PokemonBuild, Type};

/// Attacker with 252 Atk Adamant (167 Attack).
pub fn attacker(types: &[Type]) -> PokemonBuild {
    PokemonBuild::builder("Attacker", BaseStats::splat(100), types)
        .nature(NatureId::Adamant)
        .evs(EvSpread::new([0, 252, 0, 0, 0, 0]).expect("valid evs"))
        .build()
        .expect("valid build")
}

/// Uninvested defender (175 HP, 120 Def, 120 SpD).
pub fn defender(name: &str, types: &[Type]) -> PokemonBuild {
    PokemonBuild::builder(name, BaseStats::splat(100), types)
        .build()
        .expect("valid build")
}

/// Rolls of a neutral, non-STAB 100 BP physical hit from [`attacker`] into
/// [`defender`]. Base damage is 63.
pub const STRIKE_ROLLS: [u32; 16] = [53, 54, 54, 55, 56, 56, 57, 57, 58, 59, 59, 60, 61, 61, 62, 63];
