use crate::damage::{DamageContext, Modifier};
use crate::natures::BattleStat;
use crate::types::Type;

/// Called while computing base power; returns a 4096-scale multiplier.
pub type OnModifyBasePower = fn(ctx: &DamageContext) -> Option<Modifier>;

/// Called on the attacker's offensive stat after stages, Ruin, Paradox and Commander.
pub type OnModifyAttack = fn(ctx: &DamageContext) -> Option<Modifier>;

/// Attacker-side final damage modifier (Tinted Lens, Sniper, ...).
pub type OnAttackerFinalMod = fn(ctx: &DamageContext) -> Option<Modifier>;

/// Defender-side final damage modifier (Multiscale, Filter, ...).
pub type OnDefenderFinalMod = fn(ctx: &DamageContext) -> Option<Modifier>;

/// Returns true when the defender's ability makes it immune to the move.
pub type OnTypeImmunity = fn(ctx: &DamageContext) -> bool;

#[derive(Clone, Copy, Default)]
pub struct AbilityHooks {
    pub on_modify_base_power: Option<OnModifyBasePower>,
    pub on_modify_attack: Option<OnModifyAttack>,
    pub on_attacker_final_mod: Option<OnAttackerFinalMod>,
    pub on_defender_final_mod: Option<OnDefenderFinalMod>,
    pub on_type_immunity: Option<OnTypeImmunity>,
    /// Normal-type moves become this type (-ate abilities).
    pub ate_type: Option<Type>,
    /// Ruin aura: the stat lowered to 0.75x on every other battler.
    pub ruin: Option<BattleStat>,
    /// Ignored by Mold Breaker, Teravolt and Turboblaze.
    pub breakable: bool,
}

impl AbilityHooks {
    /// Empty hooks (default)
    pub const NONE: Self = Self {
        on_modify_base_power: None,
        on_modify_attack: None,
        on_attacker_final_mod: None,
        on_defender_final_mod: None,
        on_type_immunity: None,
        ate_type: None,
        ruin: None,
        breakable: false,
    };

    /// Empty hooks for an ability Mold Breaker ignores.
    pub const BREAKABLE: Self = Self {
        breakable: true,
        ..Self::NONE
    };
}
