//! Defender abilities that grant immunity (OnTypeImmunity).

use crate::damage::DamageContext;
use crate::moves::MoveFlags;
use crate::types::Type;

/// Levitate / Earth Eater: Ground immunity
pub fn ground(ctx: &DamageContext) -> bool {
    ctx.move_type == Type::Ground
}

/// Flash Fire / Well-Baked Body: Fire immunity
pub fn fire(ctx: &DamageContext) -> bool {
    ctx.move_type == Type::Fire
}

/// Volt Absorb / Motor Drive / Lightning Rod: Electric immunity
pub fn electric(ctx: &DamageContext) -> bool {
    ctx.move_type == Type::Electric
}

/// Water Absorb / Storm Drain / Dry Skin: Water immunity
pub fn water(ctx: &DamageContext) -> bool {
    ctx.move_type == Type::Water
}

/// Sap Sipper: Grass immunity
pub fn grass(ctx: &DamageContext) -> bool {
    ctx.move_type == Type::Grass
}

pub fn wind_rider(ctx: &DamageContext) -> bool {
    ctx.has_flag(MoveFlags::WIND)
}

pub fn soundproof(ctx: &DamageContext) -> bool {
    ctx.has_flag(MoveFlags::SOUND)
}

/// Bulletproof: ball and bomb moves
pub fn bulletproof(ctx: &DamageContext) -> bool {
    ctx.has_flag(MoveFlags::BULLET)
}
