//! Damage calculation.
//!
//! This module implements the Generation 9 damage formula as a fixed
//! pipeline of 4096-scale modifiers:
//! 1. **Base Damage**: `floor(floor(floor(2 * Level / 5 + 2) * Power * Atk / Def) / 50) + 2`
//! 2. **Modifier Chain**: sequential modifiers, truncated or pokeRounded at
//!    every step exactly as the games do
//! 3. **Rolls**: 16 discrete random rolls (85%..=100%)
//!
//! # Usage
//!
//! ```ignore
//! use vgc_calc::damage::{calculate_damage, DamageModifiers};
//!
//! let result = calculate_damage(&attacker, &defender, &move_, &DamageModifiers::default())?;
//!
//! // result.rolls contains all 16 damage values (85-100% rolls)
//! ```

mod context;
pub mod effectiveness;
pub mod field;
pub mod formula;
mod modifier;
pub mod pipeline;

pub use context::DamageContext;
pub use effectiveness::Immunity;
pub use field::{DamageModifiers, Terrain, Weather};
pub use formula::{
    apply_boost, apply_modifier, chain_mods, get_base_damage, percent_of, pokeround, ROLL_COUNT,
};
pub use modifier::Modifier;
pub use pipeline::{AppliedModifier, Stage};

use serde::Serialize;
use tracing::debug;

use crate::analysis::KoAnalysis;
use crate::entities::PokemonBuild;
use crate::error::Result;
use crate::moves::{Move, MoveCategory};
use crate::types::Type;

/// KO verdict attached to a result.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KoChance {
    /// "Guaranteed OHKO", "37.50% chance to OHKO", "Guaranteed 2HKO", ...
    pub text: String,
    /// Chance that a single use KOs, in percent (a multiple of 6.25).
    pub percent: f64,
}

/// Result of a damage calculation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DamageResult {
    pub attacker: String,
    pub defender: String,
    pub move_name: String,

    /// Damage of one use for each of the 16 rolls (per-hit damage times hits)
    pub rolls: [u32; ROLL_COUNT],
    /// Damage of a single hit for each roll
    pub per_hit_rolls: [u32; ROLL_COUNT],
    pub hit_count: u8,

    pub min_damage: u32,
    pub max_damage: u32,
    /// Truncated to 0.1%
    pub min_percent: f64,
    pub max_percent: f64,
    pub defender_hp: u16,

    pub ko_chance: KoChance,
    pub is_guaranteed_ohko: bool,
    pub is_possible_ohko: bool,

    /// Modifiers that fired, in application order
    pub applied: Vec<AppliedModifier>,

    pub attack_stat: u32,
    pub defense_stat: u32,
    /// Base power after modifications
    pub base_power: u32,
    /// Base damage after spread, weather, terrain and crit
    pub base_damage: u32,

    /// Resolved move type and category
    pub move_type: Type,
    pub category: MoveCategory,
    /// Type effectiveness multiplier (4 = neutral, 8 = 2x, etc.)
    pub effectiveness: u8,
    pub is_crit: bool,
    /// Set when the move cannot affect the defender
    pub immunity: Option<Immunity>,
}

impl DamageResult {
    /// Human-readable percent range, e.g. "45.2-53.6%".
    pub fn display_range(&self) -> String {
        format!("{:.1}-{:.1}%", self.min_percent, self.max_percent)
    }

    /// Full KO analysis of the per-use rolls.
    pub fn ko_analysis(&self) -> KoAnalysis {
        KoAnalysis::from_rolls(&self.rolls, self.defender_hp)
    }

    pub fn deals_damage(&self) -> bool {
        self.max_damage > 0
    }
}

/// Calculate damage for one attacker, defender, move and set of conditions.
///
/// Status moves, zero-power moves and immunities are ordinary results with
/// 16 zero rolls. Errors are reserved for broken preconditions.
pub fn calculate_damage(
    attacker: &PokemonBuild,
    defender: &PokemonBuild,
    mv: &Move,
    mods: &DamageModifiers,
) -> Result<DamageResult> {
    let mut ctx = DamageContext::new(attacker, defender, mv, mods);
    let out = pipeline::run(&mut ctx)?;

    let hits = out.hits.max(1) as u32;
    let rolls = out.per_hit_rolls.map(|damage| damage * hits);
    let defender_hp = defender.max_hp();
    let min_damage = rolls[0];
    let max_damage = rolls[ROLL_COUNT - 1];

    let analysis = KoAnalysis::from_rolls(&rolls, defender_hp);
    let text = match out.immunity {
        Some(immunity) => format!("Immune ({immunity})"),
        None => analysis.verdict(),
    };

    debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        move_name = %mv.name,
        move_type = %out.move_type,
        category = ?out.category,
        attack = out.attack_stat,
        defense = out.defense_stat,
        base_power = out.base_power,
        base_damage = out.base_damage,
        min_damage,
        max_damage,
        "damage calculated"
    );

    Ok(DamageResult {
        attacker: attacker.name.clone(),
        defender: defender.name.clone(),
        move_name: mv.name.clone(),
        rolls,
        per_hit_rolls: out.per_hit_rolls,
        hit_count: out.hits,
        min_damage,
        max_damage,
        min_percent: percent_of(min_damage, defender_hp),
        max_percent: percent_of(max_damage, defender_hp),
        defender_hp,
        ko_chance: KoChance {
            text,
            percent: analysis.ko_chance_percent,
        },
        is_guaranteed_ohko: analysis.is_guaranteed_ohko,
        is_possible_ohko: analysis.is_possible_ohko,
        applied: out.applied,
        attack_stat: out.attack_stat,
        defense_stat: out.defense_stat,
        base_power: out.base_power,
        base_damage: out.base_damage,
        move_type: out.move_type,
        category: out.category,
        effectiveness: out.effectiveness,
        is_crit: out.is_crit,
        immunity: out.immunity,
    })
}
