//! Gen 9 damage pipeline.
//!
//! The calculation runs in fixed phases:
//! 1. **Move resolution** - -ate abilities, Tera Blast, Weather Ball
//! 2. **Effectiveness** - chart, ability/item immunities, primal weather
//! 3. **Effective stats** - stages, Ruin, Paradox, Commander, item/ability
//! 4. **Base power** - variable power, ability, ally, -ate, Tera floor, item
//! 5. **Base damage** - the formula, then spread, weather, terrain, crit
//! 6. **Per roll** - random roll, STAB, effectiveness, final modifier chain
//!
//! Every modifier that fires is recorded in a [`ModifierLog`] and traced.

use serde::Serialize;
use tracing::trace;

use crate::abilities::{ability_hooks, AbilityHooks, AbilityId};
use crate::entities::PokemonBuild;
use crate::error::Result;
use crate::items::{item_hooks, ItemHooks, ItemId};
use crate::moves::{MoveCategory, SpecialMove};
use crate::natures::BattleStat;
use crate::stats::FinalStats;
use crate::types::Type;

use super::context::DamageContext;
use super::effectiveness::{resolve_effectiveness, Immunity};
use super::field::{DamageModifiers, Terrain, Weather};
use super::formula::{
    apply_boost, apply_modifier, apply_modifier_floor, apply_random_roll, chain_mods,
    get_base_damage, pokeround, ROLL_COUNT,
};
use super::Modifier;

/// Shape shared by every modifier hook.
type ModifierHook = fn(&DamageContext) -> Option<Modifier>;

// ============================================================================
// Modifier log
// ============================================================================

/// Pipeline phase a modifier belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Attack,
    Defense,
    BasePower,
    BaseDamage,
    Stab,
    Final,
}

/// One modifier that fired during a calculation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AppliedModifier {
    pub stage: Stage,
    pub name: &'static str,
    /// 4096-scale multiplier (stages and floored stat changes are shown
    /// at their nearest 4096 equivalent).
    pub multiplier: Modifier,
}

#[derive(Debug, Default)]
pub struct ModifierLog {
    entries: Vec<AppliedModifier>,
}

impl ModifierLog {
    fn record(&mut self, stage: Stage, name: &'static str, multiplier: Modifier) {
        trace!(?stage, name, multiplier = multiplier.val(), "modifier applied");
        self.entries.push(AppliedModifier {
            stage,
            name,
            multiplier,
        });
    }

    pub fn entries(&self) -> &[AppliedModifier] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<AppliedModifier> {
        self.entries
    }
}

// ============================================================================
// Pipeline output
// ============================================================================

/// Everything the pipeline resolved for one hit.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    pub move_type: Type,
    pub category: MoveCategory,
    pub effectiveness: u8,
    pub immunity: Option<Immunity>,
    pub is_crit: bool,
    pub hits: u8,
    pub attack_stat: u32,
    pub defense_stat: u32,
    pub base_power: u32,
    pub base_damage: u32,
    /// Damage of a single hit for each of the 16 rolls.
    pub per_hit_rolls: [u32; ROLL_COUNT],
    pub applied: Vec<AppliedModifier>,
}

impl PipelineOutput {
    fn no_damage(ctx: &DamageContext, immunity: Option<Immunity>, log: ModifierLog) -> Self {
        Self {
            move_type: ctx.move_type,
            category: ctx.category,
            effectiveness: ctx.effectiveness,
            immunity,
            is_crit: ctx.is_crit,
            hits: ctx.hits,
            attack_stat: 0,
            defense_stat: 0,
            base_power: 0,
            base_damage: 0,
            per_hit_rolls: [0; ROLL_COUNT],
            applied: log.into_vec(),
        }
    }
}

/// Run every phase for a freshly built context.
pub fn run(ctx: &mut DamageContext) -> Result<PipelineOutput> {
    let mut log = ModifierLog::default();

    resolve_move(ctx);
    if ctx.category == MoveCategory::Status || ctx.mv.power == 0 {
        return Ok(PipelineOutput::no_damage(ctx, None, log));
    }

    let (effectiveness, immunity) = resolve_effectiveness(ctx);
    ctx.effectiveness = effectiveness;
    if immunity.is_some() {
        return Ok(PipelineOutput::no_damage(ctx, immunity, log));
    }

    let attack_stat = attack_stat(ctx, &mut log);
    let defense_stat = defense_stat(ctx, &mut log);
    let base_power = base_power(ctx, &mut log);
    let base_damage = base_damage(ctx, base_power, attack_stat, defense_stat, &mut log)?;

    let stab = stab_modifier(ctx);
    if !stab.is_neutral() {
        log.record(Stage::Stab, "STAB", stab);
    }
    let collision = ctx.is_move(SpecialMove::CollisionCourse) && ctx.is_super_effective();
    if collision {
        log.record(Stage::Final, "Collision Course", Modifier::FOUR_THIRDS);
    }
    let final_mod = final_modifier(ctx, &mut log);

    let mut per_hit_rolls = [0u32; ROLL_COUNT];
    for (i, slot) in per_hit_rolls.iter_mut().enumerate() {
        let mut damage = apply_random_roll(base_damage, i as u8);
        damage = apply_modifier(damage, stab.val());
        damage = damage * ctx.effectiveness as u32 / 4;
        if collision {
            damage = apply_modifier(damage, Modifier::FOUR_THIRDS.val());
        }
        damage = pokeround(damage as u64 * final_mod as u64, 4096) as u32;
        *slot = damage.max(1);
    }

    Ok(PipelineOutput {
        move_type: ctx.move_type,
        category: ctx.category,
        effectiveness: ctx.effectiveness,
        immunity: None,
        is_crit: ctx.is_crit,
        hits: ctx.hits,
        attack_stat,
        defense_stat,
        base_power,
        base_damage,
        per_hit_rolls,
        applied: log.into_vec(),
    })
}

// ============================================================================
// Hook dispatch
// ============================================================================

fn fire_ability(
    ctx: &DamageContext,
    ability: Option<AbilityId>,
    select: fn(&AbilityHooks) -> Option<ModifierHook>,
) -> Option<(&'static str, Modifier)> {
    let id = ability?;
    let hook = select(ability_hooks(Some(id))?)?;
    hook(ctx).map(|modifier| (id.name(), modifier))
}

fn fire_item(
    ctx: &DamageContext,
    item: Option<ItemId>,
    select: fn(&ItemHooks) -> Option<ModifierHook>,
) -> Option<(&'static str, Modifier)> {
    let id = item?;
    let hook = select(item_hooks(Some(id))?)?;
    hook(ctx).map(|modifier| (id.name(), modifier))
}

// ============================================================================
// Phase 1: Move resolution
// ============================================================================

/// Resolve the move's final type and category.
///
/// -ate abilities convert Normal moves first; Tera Blast and Weather Ball
/// then override the type and cancel the -ate boost when they do.
pub fn resolve_move(ctx: &mut DamageContext) {
    if ctx.mv.is_status() {
        return;
    }

    if ctx.move_type == Type::Normal {
        if let Some(ate) = ability_hooks(ctx.attacker_ability).and_then(|h| h.ate_type) {
            ctx.move_type = ate;
            ctx.ate_boosted = true;
        }
    }

    if ctx.is_move(SpecialMove::TeraBlast) {
        if let Some(tera) = ctx.attacker_tera {
            ctx.move_type = tera;
            ctx.ate_boosted = false;
            let stats = &ctx.attacker.stats;
            if stats.attack > stats.special_attack {
                ctx.category = MoveCategory::Physical;
            }
        }
    }

    if ctx.is_move(SpecialMove::WeatherBall) {
        let weather_type = match ctx.weather() {
            Weather::Sun | Weather::HarshSun => Some(Type::Fire),
            Weather::Rain | Weather::HeavyRain => Some(Type::Water),
            Weather::Sand => Some(Type::Rock),
            Weather::Snow => Some(Type::Ice),
            Weather::None => None,
        };
        if let Some(t) = weather_type {
            ctx.move_type = t;
            ctx.ate_boosted = false;
        }
    }
}

// ============================================================================
// Phase 3: Effective stats
// ============================================================================

/// Ruin aura lowering `stat` that comes from the field or the opposing side.
/// The holder of the aura is never affected by it.
fn ruin_lowers(
    mods: &DamageModifiers,
    stat: BattleStat,
    holder: Option<AbilityId>,
    opponent: Option<AbilityId>,
) -> bool {
    let field = match stat {
        BattleStat::Atk => mods.tablets_of_ruin,
        BattleStat::SpA => mods.vessel_of_ruin,
        BattleStat::Def => mods.sword_of_ruin,
        BattleStat::SpD => mods.beads_of_ruin,
        BattleStat::Spe => false,
    };
    let has_ruin = |ability| ability_hooks(ability).and_then(|h| h.ruin) == Some(stat);
    (field || has_ruin(opponent)) && !has_ruin(holder)
}

/// Highest raw non-HP stat; ties go Atk > Def > SpA > SpD > Spe.
pub fn highest_stat(stats: &FinalStats) -> BattleStat {
    let mut best = BattleStat::Atk;
    for stat in BattleStat::ALL {
        if stats.battle(stat) > stats.battle(best) {
            best = stat;
        }
    }
    best
}

/// Stat boosted by an active Protosynthesis or Quark Drive, if any.
pub fn paradox_boost(
    build: &PokemonBuild,
    ability: Option<AbilityId>,
    item: Option<ItemId>,
    energy_flag: bool,
    stat_override: Option<BattleStat>,
    mods: &DamageModifiers,
) -> Option<BattleStat> {
    let energy = energy_flag || item == Some(ItemId::BoosterEnergy);
    let active = match ability {
        Some(AbilityId::Protosynthesis) => mods.weather.is_sun() || energy,
        Some(AbilityId::QuarkDrive) => mods.terrain == Terrain::Electric || energy,
        _ => false,
    };
    active.then(|| stat_override.unwrap_or_else(|| highest_stat(&build.stats)))
}

#[inline]
fn stage_multiplier(stage: i8) -> Modifier {
    Modifier(apply_boost(4096, stage) as u16)
}

/// Offensive stat after stages, Ruin, Paradox, Commander and item/ability.
pub fn attack_stat(ctx: &DamageContext, log: &mut ModifierLog) -> u32 {
    let (source, stat, stage) = if ctx.is_move(SpecialMove::FoulPlay) {
        (ctx.defender, BattleStat::Atk, ctx.mods.attack_stage)
    } else if ctx.is_move(SpecialMove::BodyPress) {
        (ctx.attacker, BattleStat::Def, 0)
    } else if ctx.is_physical() {
        (ctx.attacker, BattleStat::Atk, ctx.mods.attack_stage)
    } else {
        (ctx.attacker, BattleStat::SpA, ctx.mods.special_attack_stage)
    };

    // Crits ignore the attacker's negative stages
    let stage = if ctx.is_crit { stage.max(0) } else { stage.clamp(-6, 6) };
    let mut value = apply_boost(source.stats.battle(stat) as u32, stage);
    if stage != 0 {
        log.record(Stage::Attack, "Stat stage", stage_multiplier(stage));
    }

    if ruin_lowers(ctx.mods, stat, ctx.attacker_ability, ctx.defender_ability_raw) {
        value = apply_modifier_floor(value, 3, 4);
        log.record(Stage::Attack, ruin_name(stat), Modifier::THREE_QUARTERS);
    }

    let paradox = paradox_boost(
        ctx.attacker,
        ctx.attacker_ability,
        ctx.attacker_item,
        ctx.mods.attacker_booster_energy,
        ctx.mods.attacker_paradox_stat,
        ctx.mods,
    );
    if paradox == Some(stat) && !ctx.is_move(SpecialMove::FoulPlay) {
        value = apply_modifier_floor(value, 13, 10);
        log.record(Stage::Attack, paradox_name(ctx.attacker_ability), Modifier::ONE_POINT_THREE);
    }

    if ctx.mods.commander {
        value *= 2;
        log.record(Stage::Attack, "Commander", Modifier::DOUBLE);
    }

    // Body Press reads Defense, which offensive stat boosters leave alone
    if !ctx.is_move(SpecialMove::BodyPress) {
        if let Some((name, m)) = fire_ability(ctx, ctx.attacker_ability, |h| h.on_modify_attack) {
            value = apply_modifier(value, m.val());
            log.record(Stage::Attack, name, m);
        }
        if let Some((name, m)) = fire_item(ctx, ctx.attacker_item, |h| h.on_modify_attack) {
            value = apply_modifier(value, m.val());
            log.record(Stage::Attack, name, m);
        }
    }

    value
}

/// Defensive stat after stages, Ruin, Paradox, Commander and Assault Vest.
/// Never below 1.
pub fn defense_stat(ctx: &DamageContext, log: &mut ModifierLog) -> u32 {
    let (stat, stage) = if ctx.is_physical() || ctx.is_move(SpecialMove::Psyshock) {
        (BattleStat::Def, ctx.mods.defense_stage)
    } else {
        (BattleStat::SpD, ctx.mods.special_defense_stage)
    };

    // Crits ignore the defender's positive stages
    let stage = if ctx.is_crit { stage.min(0) } else { stage.clamp(-6, 6) };
    let mut value = apply_boost(ctx.defender.stats.battle(stat) as u32, stage);
    if stage != 0 {
        log.record(Stage::Defense, "Stat stage", stage_multiplier(stage));
    }

    if ruin_lowers(ctx.mods, stat, ctx.defender_ability_raw, ctx.attacker_ability) {
        value = apply_modifier_floor(value, 3, 4);
        log.record(Stage::Defense, ruin_name(stat), Modifier::THREE_QUARTERS);
    }

    let paradox = paradox_boost(
        ctx.defender,
        ctx.defender_ability,
        ctx.defender_item,
        ctx.mods.defender_booster_energy,
        ctx.mods.defender_paradox_stat,
        ctx.mods,
    );
    if paradox == Some(stat) {
        value = apply_modifier_floor(value, 13, 10);
        log.record(Stage::Defense, paradox_name(ctx.defender_ability), Modifier::ONE_POINT_THREE);
    }

    if ctx.mods.defender_commander {
        value *= 2;
        log.record(Stage::Defense, "Commander", Modifier::DOUBLE);
    }

    if let Some((name, m)) = fire_item(ctx, ctx.defender_item, |h| h.on_modify_defense) {
        value = apply_modifier(value, m.val());
        log.record(Stage::Defense, name, m);
    }

    value.max(1)
}

fn ruin_name(stat: BattleStat) -> &'static str {
    match stat {
        BattleStat::Atk => "Tablets of Ruin",
        BattleStat::SpA => "Vessel of Ruin",
        BattleStat::Def => "Sword of Ruin",
        BattleStat::SpD => "Beads of Ruin",
        BattleStat::Spe => "Ruin",
    }
}

fn paradox_name(ability: Option<AbilityId>) -> &'static str {
    match ability {
        Some(AbilityId::QuarkDrive) => "Quark Drive",
        _ => "Protosynthesis",
    }
}

// ============================================================================
// Phase 4: Base power
// ============================================================================

/// Effective base power. Updates `ctx.base_power` to the variable power so
/// that hooks such as Technician see it.
pub fn base_power(ctx: &mut DamageContext, log: &mut ModifierLog) -> u32 {
    let mut bp = ctx.mv.power as u32;

    let doubled = if ctx.is_move(SpecialMove::WeatherBall) {
        (ctx.weather() != Weather::None).then_some("Weather Ball")
    } else if ctx.is_move(SpecialMove::Facade) {
        ctx.attacker_statused().then_some("Facade")
    } else if ctx.is_move(SpecialMove::Acrobatics) {
        ctx.attacker_item.is_none().then_some("Acrobatics")
    } else {
        None
    };
    if let Some(name) = doubled {
        bp *= 2;
        log.record(Stage::BasePower, name, Modifier::DOUBLE);
    }
    ctx.base_power = bp.min(u16::MAX as u32) as u16;

    let ctx = &*ctx;
    if let Some((name, m)) = fire_ability(ctx, ctx.attacker_ability, |h| h.on_modify_base_power) {
        bp = apply_modifier(bp, m.val());
        log.record(Stage::BasePower, name, m);
    }

    if ctx.mods.ally_steely_spirit && ctx.move_type == Type::Steel {
        bp = apply_modifier(bp, Modifier::ONE_POINT_FIVE.val());
        log.record(Stage::BasePower, "Steely Spirit (ally)", Modifier::ONE_POINT_FIVE);
    }

    if ctx.ate_boosted {
        bp = apply_modifier(bp, Modifier::ONE_POINT_TWO.val());
        let name = ctx.attacker_ability.map_or("-ate", AbilityId::name);
        log.record(Stage::BasePower, name, Modifier::ONE_POINT_TWO);
    }

    let tera_floor = ctx.attacker_tera == Some(ctx.move_type)
        && bp < 60
        && ctx.mv.priority <= 0
        && !ctx.mv.is_multi_hit();
    if tera_floor {
        trace!(from = bp, "tera base power floor");
        bp = 60;
    }

    if let Some(item) = ctx.attacker_item {
        if item_hooks(Some(item)).and_then(|h| h.boosts_type) == Some(ctx.move_type) {
            bp = apply_modifier(bp, Modifier::ONE_POINT_TWO.val());
            log.record(Stage::BasePower, item.name(), Modifier::ONE_POINT_TWO);
        }
    }
    if let Some((name, m)) = fire_item(ctx, ctx.attacker_item, |h| h.on_modify_base_power) {
        bp = apply_modifier(bp, m.val());
        log.record(Stage::BasePower, name, m);
    }

    bp.max(1)
}

// ============================================================================
// Phase 5: Base damage
// ============================================================================

fn weather_modifier(weather: Weather, move_type: Type) -> Option<Modifier> {
    match (move_type, weather.is_sun(), weather.is_rain()) {
        (Type::Fire, true, _) | (Type::Water, _, true) => Some(Modifier::ONE_POINT_FIVE),
        (Type::Water, true, _) | (Type::Fire, _, true) => Some(Modifier::HALF),
        _ => None,
    }
}

fn terrain_modifier(ctx: &DamageContext) -> Option<(&'static str, Modifier)> {
    let terrain = ctx.terrain();
    if ctx.is_move(SpecialMove::Psyblade) && terrain == Terrain::Psychic {
        return Some(("Psyblade", Modifier::ONE_POINT_FIVE));
    }
    if ctx.mods.attacker_grounded && terrain.boosted_type() == Some(ctx.move_type) {
        return Some(("Terrain", Modifier::ONE_POINT_THREE));
    }
    if terrain == Terrain::Misty && ctx.move_type == Type::Dragon && ctx.mods.defender_grounded {
        return Some(("Misty Terrain", Modifier::HALF));
    }
    None
}

/// Formula output with spread, weather, terrain and crit applied in order.
pub fn base_damage(
    ctx: &DamageContext,
    base_power: u32,
    attack: u32,
    defense: u32,
    log: &mut ModifierLog,
) -> Result<u32> {
    let mut damage = get_base_damage(ctx.attacker.level as u32, base_power, attack, defense)?;

    if ctx.mv.is_spread() && ctx.mods.doubles && ctx.mods.multiple_targets {
        damage = apply_modifier(damage, Modifier::THREE_QUARTERS.val());
        log.record(Stage::BaseDamage, "Spread", Modifier::THREE_QUARTERS);
    }

    if let Some(m) = weather_modifier(ctx.weather(), ctx.move_type) {
        damage = apply_modifier(damage, m.val());
        log.record(Stage::BaseDamage, "Weather", m);
    }

    if let Some((name, m)) = terrain_modifier(ctx) {
        damage = apply_modifier(damage, m.val());
        log.record(Stage::BaseDamage, name, m);
    }

    if ctx.is_crit {
        damage = apply_modifier(damage, Modifier::ONE_POINT_FIVE.val());
        log.record(Stage::BaseDamage, "Critical hit", Modifier::ONE_POINT_FIVE);
    }

    Ok(damage)
}

// ============================================================================
// Phase 6: STAB and final modifiers
// ============================================================================

/// Same-type attack bonus on the 4096 scale.
pub fn stab_modifier(ctx: &DamageContext) -> Modifier {
    let adaptability = ctx.attacker_ability == Some(AbilityId::Adaptability);
    let original = ctx.attacker.has_type(ctx.move_type);

    match ctx.attacker_tera {
        Some(tera) if tera == ctx.move_type => match (original, adaptability) {
            (true, true) => Modifier::TWO_POINT_TWO_FIVE,
            (true, false) | (false, true) => Modifier::DOUBLE,
            (false, false) => Modifier::ONE_POINT_FIVE,
        },
        Some(_) if original => Modifier::ONE_POINT_FIVE,
        Some(_) => Modifier::ONE,
        None if original && adaptability => Modifier::DOUBLE,
        None if original => Modifier::ONE_POINT_FIVE,
        None => Modifier::ONE,
    }
}

/// Chained final modifier (burn, screens, items, allies, abilities, berries).
pub fn final_modifier(ctx: &DamageContext, log: &mut ModifierLog) -> u32 {
    let mut chain: Vec<u16> = Vec::new();
    let mut push = |name: &'static str, m: Modifier| {
        log.record(Stage::Final, name, m);
        chain.push(m.val());
    };

    let ignores_burn = ctx.attacker_ability == Some(AbilityId::Guts)
        || ctx.is_move(SpecialMove::Facade);
    if ctx.mods.attacker_burned && ctx.is_physical() && !ignores_burn {
        push("Burn", Modifier::HALF);
    }

    if !ctx.is_crit {
        let screen = if ctx.mods.aurora_veil {
            Some("Aurora Veil")
        } else if ctx.mods.reflect && ctx.is_physical() {
            Some("Reflect")
        } else if ctx.mods.light_screen && ctx.is_special() {
            Some("Light Screen")
        } else {
            None
        };
        if let Some(name) = screen {
            let m = if ctx.mods.doubles {
                Modifier::SCREENS_DOUBLES
            } else {
                Modifier::HALF
            };
            push(name, m);
        }
    }

    if let Some((name, m)) = fire_item(ctx, ctx.attacker_item, |h| h.on_attacker_final_mod) {
        push(name, m);
    }

    if ctx.mods.helping_hand {
        push("Helping Hand", Modifier::ONE_POINT_FIVE);
    }
    if ctx.mods.friend_guard {
        push("Friend Guard", Modifier::THREE_QUARTERS);
    }

    if let Some((name, m)) = fire_ability(ctx, ctx.attacker_ability, |h| h.on_attacker_final_mod) {
        push(name, m);
    }
    if let Some((name, m)) = fire_ability(ctx, ctx.defender_ability, |h| h.on_defender_final_mod) {
        push(name, m);
    }

    if let Some(item) = ctx.defender_item {
        let berry = item_hooks(Some(item)).and_then(|h| h.resist_berry);
        let triggers = berry == Some(ctx.move_type)
            && (ctx.is_super_effective() || ctx.move_type == Type::Normal);
        if triggers {
            push(item.name(), Modifier::HALF);
        }
    }

    chain_mods(&chain)
}
