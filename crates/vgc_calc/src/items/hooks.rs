use crate::damage::{DamageContext, Modifier};
use crate::types::Type;

/// Modifies the holder's offensive stat (Choice Band, Choice Specs).
pub type OnModifyAttack = fn(ctx: &DamageContext) -> Option<Modifier>;

/// Modifies the holder's defensive stat (Assault Vest).
pub type OnModifyDefense = fn(ctx: &DamageContext) -> Option<Modifier>;

/// Modifies base power of the holder's moves.
pub type OnModifyBasePower = fn(ctx: &DamageContext) -> Option<Modifier>;

/// Final damage modifier when the holder attacks (Life Orb, Expert Belt, ...).
pub type OnAttackerFinalMod = fn(ctx: &DamageContext) -> Option<Modifier>;

/// Returns true when the held item makes the holder immune.
pub type OnTypeImmunity = fn(ctx: &DamageContext) -> bool;

#[derive(Clone, Copy, Default)]
pub struct ItemHooks {
    pub on_modify_attack: Option<OnModifyAttack>,
    pub on_modify_defense: Option<OnModifyDefense>,
    pub on_modify_base_power: Option<OnModifyBasePower>,
    pub on_attacker_final_mod: Option<OnAttackerFinalMod>,
    pub on_type_immunity: Option<OnTypeImmunity>,
    /// Moves of this type get 1.2x base power.
    pub boosts_type: Option<Type>,
    /// Halves a super-effective hit of this type (Chilan: any Normal hit).
    pub resist_berry: Option<Type>,
}

impl ItemHooks {
    pub const NONE: Self = Self {
        on_modify_attack: None,
        on_modify_defense: None,
        on_modify_base_power: None,
        on_attacker_final_mod: None,
        on_type_immunity: None,
        boosts_type: None,
        resist_berry: None,
    };

    /// Type-boosting item or plate.
    pub(crate) const fn boosting(t: Type) -> Option<Self> {
        Some(Self {
            boosts_type: Some(t),
            ..Self::NONE
        })
    }

    /// Resistance berry.
    pub(crate) const fn berry(t: Type) -> Option<Self> {
        Some(Self {
            resist_berry: Some(t),
            ..Self::NONE
        })
    }
}
