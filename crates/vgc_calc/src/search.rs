//! Minimal EV investment searches.
//!
//! Both searches are pure sweeps over the legal EV grid in steps of 4. An
//! unreachable target is an ordinary [`OffensiveSearch::NotAchievable`] or
//! [`DefensiveSearch::NotAchievable`] value, never an error.

use serde::Serialize;
use tracing::{debug, info};

use crate::analysis::{n_hit_ko_chance, MAX_ANALYZED_HITS};
use crate::damage::{calculate_damage, DamageModifiers};
use crate::entities::PokemonBuild;
use crate::error::{CalcError, Result};
use crate::moves::{Move, MoveCategory, SpecialMove};
use crate::natures::StatId;
use crate::stats::{MAX_STAT_EVS, MAX_TOTAL_EVS};

/// EVs only matter in multiples of 4.
pub const EV_STEP: u16 = 4;

/// Outcome of an offensive search.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum OffensiveSearch {
    Found {
        stat: StatId,
        evs: u16,
        stat_value: u16,
        /// KO chance within `hits` uses, in percent
        ko_chance: f64,
        hits: u8,
    },
    NotAchievable {
        stat: StatId,
        /// Largest legal investment tried
        max_evs: u16,
        best_ko_chance: f64,
        hits: u8,
    },
}

/// One HP / defense investment and how the attack fares against it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DefensiveSpread {
    pub defense_stat: StatId,
    pub hp_evs: u16,
    pub defense_evs: u16,
    pub hp: u16,
    pub max_damage: u32,
    pub max_percent: f64,
}

impl DefensiveSpread {
    pub fn total_evs(&self) -> u16 {
        self.hp_evs + self.defense_evs
    }
}

/// Outcome of a defensive search.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DefensiveSearch {
    Found { spread: DefensiveSpread, hits: u8 },
    /// `best` is the figure at the maximum legal investment.
    NotAchievable { best: DefensiveSpread, hits: u8 },
}

/// Stat the attacker invests in for this move.
///
/// Foul Play reads the target's Attack, so it has no such stat and
/// [`find_offensive_evs`] rejects it.
pub fn offensive_stat(mv: &Move, category: MoveCategory) -> StatId {
    if mv.is(SpecialMove::BodyPress) {
        StatId::Def
    } else if category == MoveCategory::Physical {
        StatId::Atk
    } else {
        StatId::SpA
    }
}

/// Minimum EVs in the attacking stat reaching `target_percent` KO chance
/// within `hits` uses (1..=4).
///
/// The attacker's other EVs are kept; the sweep ends where the total would
/// pass 508.
pub fn find_offensive_evs(
    attacker: &PokemonBuild,
    defender: &PokemonBuild,
    mv: &Move,
    mods: &DamageModifiers,
    target_percent: f64,
    hits: u8,
) -> Result<OffensiveSearch> {
    if hits == 0 || hits > MAX_ANALYZED_HITS {
        return Err(CalcError::InvalidHitCount(hits));
    }
    if mv.is(SpecialMove::FoulPlay) {
        return Err(CalcError::NoOffensiveStat(mv.name.clone()));
    }

    let baseline = calculate_damage(attacker, defender, mv, mods)?;
    let stat = offensive_stat(mv, baseline.category);
    info!(
        attacker = %attacker.name,
        defender = %defender.name,
        move_name = %mv.name,
        %stat,
        target_percent,
        hits,
        "offensive EV search started"
    );

    let others = attacker.evs.with(stat, 0).total();
    let mut tried = 0u32;
    let mut best = (0u16, 0.0f64);

    for evs in (0..=MAX_STAT_EVS).step_by(EV_STEP as usize) {
        if others + evs > MAX_TOTAL_EVS {
            break;
        }
        let build = attacker.to_builder().evs(attacker.evs.with(stat, evs)).build()?;
        let result = calculate_damage(&build, defender, mv, mods)?;
        let chance = n_hit_ko_chance(&result.rolls, hits, result.defender_hp)?;
        tried += 1;
        debug!(evs, chance, "offensive candidate");
        best = (evs, chance);

        if chance >= target_percent {
            info!(evs, chance, tried, "offensive EV search found a spread");
            return Ok(OffensiveSearch::Found {
                stat,
                evs,
                stat_value: build.stats.get(stat),
                ko_chance: chance,
                hits,
            });
        }
    }

    info!(tried, best_chance = best.1, "offensive EV search not achievable");
    Ok(OffensiveSearch::NotAchievable {
        stat,
        max_evs: best.0,
        best_ko_chance: best.1,
        hits,
    })
}

/// Minimum HP + defense EVs so that `hits` maximum rolls leave the defender
/// standing (`max_damage * hits < hp`).
///
/// Candidates are tried by increasing EV sum, fewer HP EVs first, so the
/// first survivor is the answer. The defender's other EVs are kept.
pub fn find_defensive_evs(
    attacker: &PokemonBuild,
    defender: &PokemonBuild,
    mv: &Move,
    mods: &DamageModifiers,
    hits: u8,
) -> Result<DefensiveSearch> {
    if hits == 0 {
        return Err(CalcError::InvalidHitCount(hits));
    }

    let baseline = calculate_damage(attacker, defender, mv, mods)?;
    let defense_stat =
        if baseline.category == MoveCategory::Physical || mv.is(SpecialMove::Psyshock) {
            StatId::Def
        } else {
            StatId::SpD
        };
    info!(
        attacker = %attacker.name,
        defender = %defender.name,
        move_name = %mv.name,
        %defense_stat,
        hits,
        "defensive EV search started"
    );

    let evaluate = |hp_evs: u16, defense_evs: u16| -> Result<DefensiveSpread> {
        let evs = defender
            .evs
            .with(StatId::Hp, hp_evs)
            .with(defense_stat, defense_evs);
        let build = defender.to_builder().evs(evs).build()?;
        let result = calculate_damage(attacker, &build, mv, mods)?;
        Ok(DefensiveSpread {
            defense_stat,
            hp_evs,
            defense_evs,
            hp: result.defender_hp,
            max_damage: result.max_damage,
            max_percent: result.max_percent,
        })
    };

    let others = defender
        .evs
        .with(StatId::Hp, 0)
        .with(defense_stat, 0)
        .total();
    let room = MAX_TOTAL_EVS.saturating_sub(others);
    let mut tried = 0u32;

    for total in (0..=room.min(2 * MAX_STAT_EVS)).step_by(EV_STEP as usize) {
        for hp_evs in (0..=total.min(MAX_STAT_EVS)).step_by(EV_STEP as usize) {
            let defense_evs = total - hp_evs;
            if defense_evs > MAX_STAT_EVS {
                continue;
            }
            let spread = evaluate(hp_evs, defense_evs)?;
            tried += 1;
            if (spread.max_damage * hits as u32) < spread.hp as u32 {
                info!(hp_evs, defense_evs, tried, "defensive EV search found a spread");
                return Ok(DefensiveSearch::Found { spread, hits });
            }
        }
    }

    let max_hp = MAX_STAT_EVS.min(room) / EV_STEP * EV_STEP;
    let max_defense = MAX_STAT_EVS.min(room - max_hp) / EV_STEP * EV_STEP;
    let best = evaluate(max_hp, max_defense)?;
    info!(tried, max_percent = best.max_percent, "defensive EV search not achievable");
    Ok(DefensiveSearch::NotAchievable { best, hits })
}
