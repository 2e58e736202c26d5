//! Damage calculation context.
//!
//! The `DamageContext` struct holds everything resolved for a single damage
//! calculation: the participants, the effective abilities and items after
//! overrides and Mold Breaker, the resolved move type and category, and the
//! type effectiveness. Ability and item hooks read it and never mutate it.

use crate::abilities::{is_breakable, AbilityId};
use crate::entities::PokemonBuild;
use crate::items::ItemId;
use crate::moves::{Move, MoveCategory, MoveFlags, SpecialMove};
use crate::types::Type;

use super::field::{DamageModifiers, Terrain, Weather};

/// Context for a single damage calculation.
pub struct DamageContext<'a> {
    // ========================================================================
    // Participants
    // ========================================================================
    pub attacker: &'a PokemonBuild,
    pub defender: &'a PokemonBuild,
    pub mv: &'a Move,
    pub mods: &'a DamageModifiers,

    /// Attacker's ability (override first, then build).
    pub attacker_ability: Option<AbilityId>,

    /// Defender's ability as held, ignoring Mold Breaker.
    pub defender_ability_raw: Option<AbilityId>,

    /// Defender's ability after Mold Breaker suppression.
    pub defender_ability: Option<AbilityId>,

    pub attacker_item: Option<ItemId>,
    pub defender_item: Option<ItemId>,

    /// Attacker's Tera type when Terastallized.
    pub attacker_tera: Option<Type>,

    /// Defender's Tera type when Terastallized.
    pub defender_tera: Option<Type>,

    // ========================================================================
    // Move Information
    // ========================================================================
    /// Move type after -ate abilities, Tera Blast and Weather Ball.
    pub move_type: Type,

    /// Effective category (Tera Blast may switch to physical).
    pub category: MoveCategory,

    /// Base power after variable-power rules, before modifiers.
    pub base_power: u16,

    /// An -ate ability converted this move's type.
    pub ate_boosted: bool,

    // ========================================================================
    // Calculation Flags
    // ========================================================================
    pub is_crit: bool,

    /// Type effectiveness (4 = 1x, 8 = 2x, etc.)
    pub effectiveness: u8,

    /// Number of hits that land.
    pub hits: u8,
}

impl<'a> DamageContext<'a> {
    /// Resolve abilities, items and Tera state. Move type, category and
    /// effectiveness start from the raw move and are filled in by the
    /// pipeline.
    pub fn new(
        attacker: &'a PokemonBuild,
        defender: &'a PokemonBuild,
        mv: &'a Move,
        mods: &'a DamageModifiers,
    ) -> Self {
        let attacker_ability = mods.attacker_ability.or(attacker.ability);
        let defender_ability_raw = mods.defender_ability.or(defender.ability);

        let breaks_molds = attacker_ability.is_some_and(AbilityId::breaks_molds);
        let defender_ability =
            defender_ability_raw.filter(|&ability| !(breaks_molds && is_breakable(ability)));

        let attacker_tera = if mods.tera_active {
            mods.tera_type.or(attacker.tera_type)
        } else {
            None
        };
        let defender_tera = if mods.defender_tera_active {
            mods.defender_tera_type.or(defender.tera_type)
        } else {
            None
        };

        let hits = if mv.is_multi_hit() {
            mods.hits.unwrap_or(mv.max_hits).clamp(mv.min_hits, mv.max_hits)
        } else {
            1
        };

        Self {
            attacker,
            defender,
            mv,
            mods,
            attacker_ability,
            defender_ability_raw,
            defender_ability,
            attacker_item: mods.attacker_item.or(attacker.item),
            defender_item: mods.defender_item.or(defender.item),
            attacker_tera,
            defender_tera,
            move_type: mv.move_type,
            category: mv.category,
            base_power: mv.power,
            ate_boosted: false,
            is_crit: mods.critical_hit || mv.always_crit,
            effectiveness: 4,
            hits,
        }
    }

    // ========================================================================
    // Queries used by hooks
    // ========================================================================

    #[inline]
    pub fn is_physical(&self) -> bool {
        self.category == MoveCategory::Physical
    }

    #[inline]
    pub fn is_special(&self) -> bool {
        self.category == MoveCategory::Special
    }

    #[inline]
    pub fn has_flag(&self, flag: MoveFlags) -> bool {
        self.mv.has(flag)
    }

    #[inline]
    pub fn is_move(&self, special: SpecialMove) -> bool {
        self.mv.is(special)
    }

    #[inline]
    pub fn weather(&self) -> Weather {
        self.mods.weather
    }

    #[inline]
    pub fn terrain(&self) -> Terrain {
        self.mods.terrain
    }

    /// Attacker has a major status condition (burn included).
    #[inline]
    pub fn attacker_statused(&self) -> bool {
        self.mods.is_statused()
    }

    #[inline]
    pub fn is_super_effective(&self) -> bool {
        self.effectiveness > 4
    }

    #[inline]
    pub fn is_resisted(&self) -> bool {
        self.effectiveness > 0 && self.effectiveness < 4
    }

    /// Defender's types for matchups: the Tera type alone when Terastallized.
    pub fn defender_types(&self) -> (Type, Option<Type>) {
        match self.defender_tera {
            Some(tera) => (tera, None),
            None => (self.defender.primary_type(), self.defender.secondary_type()),
        }
    }
}
