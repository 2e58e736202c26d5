//! Type effectiveness and immunity resolution.
//!
//! Effectiveness is kept on a 4-scale (4 = 1x) so that dual-type products
//! stay exact integers: 0, 1, 2, 4, 8 or 16.

use std::fmt;

use serde::Serialize;

use crate::abilities::{ability_hooks, AbilityId};
use crate::items::{item_hooks, ItemId};
use crate::types::{single_effectiveness, Type};

use super::context::DamageContext;
use super::field::Weather;

/// Why a move deals no damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Immunity {
    /// The type chart gives 0x.
    TypeChart,
    Ability(AbilityId),
    Item(ItemId),
    /// Primal weather evaporates the move.
    Weather(Weather),
}

impl fmt::Display for Immunity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Immunity::TypeChart => f.write_str("type"),
            Immunity::Ability(ability) => f.write_str(ability.name()),
            Immunity::Item(item) => f.write_str(item.name()),
            Immunity::Weather(Weather::HarshSun) => f.write_str("Extremely Harsh Sunlight"),
            Immunity::Weather(Weather::HeavyRain) => f.write_str("Heavy Rain"),
            Immunity::Weather(_) => f.write_str("weather"),
        }
    }
}

/// Chart lookup honoring Scrappy and Mind's Eye, which let Normal and
/// Fighting moves hit Ghost types neutrally.
pub fn chart_effectiveness(
    move_type: Type,
    defender: (Type, Option<Type>),
    ignores_ghost: bool,
) -> u8 {
    let factor = |def: Type| {
        if ignores_ghost
            && def == Type::Ghost
            && matches!(move_type, Type::Normal | Type::Fighting)
        {
            4
        } else {
            single_effectiveness(move_type, def)
        }
    };

    let (def1, def2) = defender;
    let first = factor(def1);
    match def2 {
        Some(def2) if def2 != def1 => first * factor(def2) / 4,
        _ => first,
    }
}

/// Resolve effectiveness for a context whose move type is already final.
///
/// Returns the 4-scale effectiveness and, when it is zero, the reason.
pub fn resolve_effectiveness(ctx: &DamageContext) -> (u8, Option<Immunity>) {
    let ignores_ghost = matches!(
        ctx.attacker_ability,
        Some(AbilityId::Scrappy | AbilityId::MindsEye)
    );
    let eff = chart_effectiveness(ctx.move_type, ctx.defender_types(), ignores_ghost);
    if eff == 0 {
        return (0, Some(Immunity::TypeChart));
    }

    if let Some(immune) = ability_hooks(ctx.defender_ability).and_then(|h| h.on_type_immunity) {
        if immune(ctx) {
            if let Some(ability) = ctx.defender_ability {
                return (0, Some(Immunity::Ability(ability)));
            }
        }
    }

    if let Some(immune) = item_hooks(ctx.defender_item).and_then(|h| h.on_type_immunity) {
        if immune(ctx) {
            if let Some(item) = ctx.defender_item {
                return (0, Some(Immunity::Item(item)));
            }
        }
    }

    match (ctx.weather(), ctx.move_type) {
        (Weather::HeavyRain, Type::Fire) | (Weather::HarshSun, Type::Water) => {
            return (0, Some(Immunity::Weather(ctx.weather())));
        }
        _ => {}
    }

    // Tera Shell: every hit is resisted while at full HP
    if ctx.defender_ability == Some(AbilityId::TeraShell) && ctx.mods.defender_at_full_hp {
        return (2, None);
    }

    (eff, None)
}
