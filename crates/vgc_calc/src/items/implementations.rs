//! Item hook implementations.

use crate::damage::{DamageContext, Modifier};
use crate::moves::MoveFlags;
use crate::types::Type;

// Choice Band: 1.5x Atk.
pub fn on_modify_attack_choice_band(ctx: &DamageContext) -> Option<Modifier> {
    ctx.is_physical().then_some(Modifier::ONE_POINT_FIVE)
}

// Choice Specs: 1.5x SpA.
pub fn on_modify_attack_choice_specs(ctx: &DamageContext) -> Option<Modifier> {
    ctx.is_special().then_some(Modifier::ONE_POINT_FIVE)
}

// Assault Vest: 1.5x SpD. Psyshock-style moves target Def and skip it.
pub fn on_modify_defense_assault_vest(ctx: &DamageContext) -> Option<Modifier> {
    use crate::moves::SpecialMove;
    let hits_spd = ctx.is_special() && !ctx.is_move(SpecialMove::Psyshock);
    hits_spd.then_some(Modifier::ONE_POINT_FIVE)
}

// Ogerpon masks: 1.2x to every move.
pub fn on_modify_base_power_mask(_ctx: &DamageContext) -> Option<Modifier> {
    Some(Modifier::ONE_POINT_TWO)
}

// Normal Gem: 1.3x to Normal moves (single use).
pub fn on_modify_base_power_normal_gem(ctx: &DamageContext) -> Option<Modifier> {
    (ctx.move_type == Type::Normal).then_some(Modifier::ONE_POINT_THREE)
}

pub fn on_final_mod_life_orb(_ctx: &DamageContext) -> Option<Modifier> {
    Some(Modifier::LIFE_ORB)
}

pub fn on_final_mod_expert_belt(ctx: &DamageContext) -> Option<Modifier> {
    ctx.is_super_effective().then_some(Modifier::ONE_POINT_TWO)
}

pub fn on_final_mod_muscle_band(ctx: &DamageContext) -> Option<Modifier> {
    ctx.is_physical().then_some(Modifier::ONE_POINT_ONE)
}

pub fn on_final_mod_wise_glasses(ctx: &DamageContext) -> Option<Modifier> {
    ctx.is_special().then_some(Modifier::ONE_POINT_ONE)
}

pub fn on_final_mod_punching_glove(ctx: &DamageContext) -> Option<Modifier> {
    ctx.has_flag(MoveFlags::PUNCH).then_some(Modifier::ONE_POINT_ONE)
}

// Air Balloon: Ground immunity until popped.
pub fn on_type_immunity_air_balloon(ctx: &DamageContext) -> bool {
    ctx.move_type == Type::Ground
}
