//! Attacker abilities that modify the offensive stat (OnModifyAttack).

use crate::damage::{DamageContext, Modifier};
use crate::damage::field::Terrain;

/// Huge Power / Pure Power: 2x Attack
pub fn huge_power(ctx: &DamageContext) -> Option<Modifier> {
    ctx.is_physical().then_some(Modifier::DOUBLE)
}

/// Hustle / Gorilla Tactics: 1.5x Attack
pub fn hustle(ctx: &DamageContext) -> Option<Modifier> {
    ctx.is_physical().then_some(Modifier::ONE_POINT_FIVE)
}

/// Guts: 1.5x Attack when statused (burn penalty is skipped separately)
pub fn guts(ctx: &DamageContext) -> Option<Modifier> {
    (ctx.is_physical() && ctx.attacker_statused()).then_some(Modifier::ONE_POINT_FIVE)
}

/// Flare Boost: 1.5x Special Attack while burned
pub fn flare_boost(ctx: &DamageContext) -> Option<Modifier> {
    (ctx.is_special() && ctx.mods.attacker_burned).then_some(Modifier::ONE_POINT_FIVE)
}

/// Toxic Boost: 1.5x Attack while statused
pub fn toxic_boost(ctx: &DamageContext) -> Option<Modifier> {
    (ctx.is_physical() && ctx.attacker_statused()).then_some(Modifier::ONE_POINT_FIVE)
}

/// Orichalcum Pulse: 5461/4096 Attack in sun
pub fn orichalcum_pulse(ctx: &DamageContext) -> Option<Modifier> {
    (ctx.is_physical() && ctx.weather().is_sun()).then_some(Modifier::FOUR_THIRDS)
}

/// Hadron Engine: 5461/4096 Special Attack in Electric Terrain
pub fn hadron_engine(ctx: &DamageContext) -> Option<Modifier> {
    (ctx.is_special() && ctx.terrain() == Terrain::Electric).then_some(Modifier::FOUR_THIRDS)
}
