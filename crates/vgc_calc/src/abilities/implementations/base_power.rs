//! Attacker abilities that modify base power (OnModifyBasePower).

use crate::damage::{DamageContext, Modifier};
use crate::damage::field::Weather;
use crate::moves::MoveFlags;
use crate::types::Type;

#[inline]
fn when(cond: bool, modifier: Modifier) -> Option<Modifier> {
    cond.then_some(modifier)
}

/// Technician: 1.5x for moves with 60 BP or less
pub fn technician(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.base_power <= 60, Modifier::ONE_POINT_FIVE)
}

/// Sheer Force: 1.3x for moves with a secondary effect
pub fn sheer_force(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.has_flag(MoveFlags::SECONDARY_EFFECT), Modifier::ONE_POINT_THREE)
}

/// Tough Claws: 1.3x for contact moves
pub fn tough_claws(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.has_flag(MoveFlags::CONTACT), Modifier::ONE_POINT_THREE)
}

/// Iron Fist: 1.2x for punching moves
pub fn iron_fist(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.has_flag(MoveFlags::PUNCH), Modifier::ONE_POINT_TWO)
}

pub fn rocky_payload(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.move_type == Type::Rock, Modifier::ONE_POINT_FIVE)
}

pub fn sharpness(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.has_flag(MoveFlags::SLICING), Modifier::ONE_POINT_FIVE)
}

pub fn strong_jaw(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.has_flag(MoveFlags::BITING), Modifier::ONE_POINT_FIVE)
}

pub fn mega_launcher(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.has_flag(MoveFlags::PULSE), Modifier::ONE_POINT_FIVE)
}

pub fn reckless(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.has_flag(MoveFlags::RECOIL), Modifier::ONE_POINT_TWO)
}

/// Supreme Overlord: +10% (410/4096) per fainted ally, up to five
pub fn supreme_overlord(ctx: &DamageContext) -> Option<Modifier> {
    let fainted = ctx.mods.supreme_overlord_allies.min(5) as u16;
    when(fainted > 0, Modifier(4096 + 410 * fainted))
}

/// Sand Force: 1.3x Rock, Ground and Steel moves in sand
pub fn sand_force(ctx: &DamageContext) -> Option<Modifier> {
    let boosted = matches!(ctx.move_type, Type::Rock | Type::Ground | Type::Steel);
    when(ctx.weather() == Weather::Sand && boosted, Modifier::ONE_POINT_THREE)
}

pub fn steely_spirit(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.move_type == Type::Steel, Modifier::ONE_POINT_FIVE)
}

/// Transistor: 1.3x Electric moves (reduced from 1.5x in Gen 9)
pub fn transistor(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.move_type == Type::Electric, Modifier::ONE_POINT_THREE)
}

pub fn dragons_maw(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.move_type == Type::Dragon, Modifier::ONE_POINT_FIVE)
}

/// Water Bubble (offensive half): 2x Water moves
pub fn water_bubble(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.move_type == Type::Water, Modifier::DOUBLE)
}

/// Punk Rock (offensive half): 1.3x sound moves
pub fn punk_rock(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.has_flag(MoveFlags::SOUND), Modifier::ONE_POINT_THREE)
}

/// Analytic: 1.3x when moving after the target
pub fn analytic(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.mods.moving_last, Modifier::ONE_POINT_THREE)
}
