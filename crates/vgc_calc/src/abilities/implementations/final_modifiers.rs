//! Final damage modifiers (post-random roll).
//!
//! Split into attacker modifiers (OnAttackerFinalMod) and defender modifiers (OnDefenderFinalMod).
//! Order: Attacker mods apply first, then defender mods.

use crate::damage::{DamageContext, Modifier};
use crate::moves::MoveFlags;
use crate::types::Type;

// =============================================================================
// Attacker Final Modifiers
// =============================================================================

/// Tinted Lens: 2x damage on "not very effective" hits
pub fn tinted_lens(ctx: &DamageContext) -> Option<Modifier> {
    ctx.is_resisted().then_some(Modifier::DOUBLE)
}

/// Sniper: 1.5x damage on critical hits
pub fn sniper(ctx: &DamageContext) -> Option<Modifier> {
    ctx.is_crit.then_some(Modifier::ONE_POINT_FIVE)
}

/// Neuroforce: 1.25x on super-effective hits
pub fn neuroforce(ctx: &DamageContext) -> Option<Modifier> {
    ctx.is_super_effective().then_some(Modifier::ONE_POINT_TWO_FIVE)
}

// =============================================================================
// Defender Final Modifiers
// =============================================================================

/// Multiscale / Shadow Shield: 0.5x damage when at full HP
pub fn multiscale(ctx: &DamageContext) -> Option<Modifier> {
    ctx.mods.defender_at_full_hp.then_some(Modifier::HALF)
}

/// Ice Scales: 0.5x from special moves
pub fn ice_scales(ctx: &DamageContext) -> Option<Modifier> {
    ctx.is_special().then_some(Modifier::HALF)
}

/// Filter / Solid Rock / Prism Armor: 0.75x on super-effective hits
pub fn filter(ctx: &DamageContext) -> Option<Modifier> {
    ctx.is_super_effective().then_some(Modifier::FILTER)
}

/// Fluffy: 0.5x from contact, 2x from Fire (a Fire contact move nets 1x)
pub fn fluffy(ctx: &DamageContext) -> Option<Modifier> {
    let contact = ctx.has_flag(MoveFlags::CONTACT);
    let fire = ctx.move_type == Type::Fire;
    match (contact, fire) {
        (true, false) => Some(Modifier::HALF),
        (false, true) => Some(Modifier::DOUBLE),
        _ => None,
    }
}

/// Thick Fat: 0.5x from Fire and Ice
pub fn thick_fat(ctx: &DamageContext) -> Option<Modifier> {
    matches!(ctx.move_type, Type::Fire | Type::Ice).then_some(Modifier::HALF)
}

pub fn purifying_salt(ctx: &DamageContext) -> Option<Modifier> {
    (ctx.move_type == Type::Ghost).then_some(Modifier::HALF)
}

/// Heatproof / Water Bubble: 0.5x from Fire
pub fn heatproof(ctx: &DamageContext) -> Option<Modifier> {
    (ctx.move_type == Type::Fire).then_some(Modifier::HALF)
}

/// Dry Skin: 1.25x from Fire
pub fn dry_skin(ctx: &DamageContext) -> Option<Modifier> {
    (ctx.move_type == Type::Fire).then_some(Modifier::ONE_POINT_TWO_FIVE)
}

/// Fur Coat: 0.5x from physical moves
pub fn fur_coat(ctx: &DamageContext) -> Option<Modifier> {
    ctx.is_physical().then_some(Modifier::HALF)
}

/// Punk Rock (defensive half): 0.5x from sound moves
pub fn punk_rock(ctx: &DamageContext) -> Option<Modifier> {
    ctx.has_flag(MoveFlags::SOUND).then_some(Modifier::HALF)
}
