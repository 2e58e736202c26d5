//! Bulk calculations: one attacker against many defenders, moves and
//! scenarios.
//!
//! Every (defender, move, scenario) triple is independent, so the fan-out
//! runs on a rayon pool. Results are sorted afterwards by defender, move and
//! scenario name; completion order never leaks into the report.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::KoAnalysis;
use crate::damage::{calculate_damage, DamageModifiers, DamageResult, Weather};
use crate::entities::PokemonBuild;
use crate::error::{CalcError, Result};
use crate::moves::Move;
use crate::types::Type;

/// A named set of battle conditions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub modifiers: DamageModifiers,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        modifiers: DamageModifiers,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            modifiers,
        }
    }

    /// Label for reports; falls back to the name.
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }

    /// The eight standard presets.
    pub fn defaults() -> Vec<Scenario> {
        let base = DamageModifiers::default;
        vec![
            Scenario::new("normal", "No modifiers", base()),
            Scenario::new("tera", "Terastallized", base().with_tera()),
            Scenario::new("rain", "Rain", base().with_weather(Weather::Rain)),
            Scenario::new("sun", "Sun", base().with_weather(Weather::Sun)),
            Scenario::new(
                "rain_tera",
                "Rain + Tera",
                base().with_weather(Weather::Rain).with_tera(),
            ),
            Scenario::new(
                "sun_tera",
                "Sun + Tera",
                base().with_weather(Weather::Sun).with_tera(),
            ),
            Scenario::new(
                "intimidate",
                "After Intimidate (-1 Atk)",
                DamageModifiers {
                    attack_stage: -1,
                    ..base()
                },
            ),
            Scenario::new(
                "helping_hand",
                "Helping Hand",
                DamageModifiers {
                    helping_hand: true,
                    ..base()
                },
            ),
        ]
    }
}

/// Input to a bulk run.
#[derive(Clone, Debug)]
pub struct BulkRequest {
    pub attacker: PokemonBuild,
    pub moves: Vec<Move>,
    pub defenders: Vec<PokemonBuild>,
    pub scenarios: Vec<Scenario>,
    /// Defenders (by name) that Terastallize in every scenario
    pub defender_tera: HashMap<String, Type>,
}

impl BulkRequest {
    /// Request with the default scenarios and no defender Tera.
    pub fn new(attacker: PokemonBuild, moves: Vec<Move>, defenders: Vec<PokemonBuild>) -> Self {
        Self {
            attacker,
            moves,
            defenders,
            scenarios: Scenario::defaults(),
            defender_tera: HashMap::new(),
        }
    }

    pub fn with_scenarios(mut self, scenarios: Vec<Scenario>) -> Self {
        self.scenarios = scenarios;
        self
    }

    pub fn with_defender_tera(mut self, defender: impl Into<String>, tera: Type) -> Self {
        self.defender_tera.insert(defender.into(), tera);
        self
    }

    /// Modifiers for one defender under one scenario.
    fn modifiers_for(&self, defender: &PokemonBuild, scenario: &Scenario) -> DamageModifiers {
        let mut mods = scenario.modifiers.clone();
        if let Some(&tera) = self.defender_tera.get(&defender.name) {
            mods.defender_tera_active = true;
            mods.defender_tera_type = Some(tera);
        }
        mods
    }
}

/// Worker pool sizing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BulkOptions {
    /// `None` uses the global pool (one thread per core).
    pub threads: Option<usize>,
}

/// One (defender, move, scenario) result.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BulkEntry {
    pub defender: String,
    pub move_name: String,
    pub scenario: String,
    pub scenario_display: String,
    pub min_damage: u32,
    pub max_damage: u32,
    pub min_percent: f64,
    pub max_percent: f64,
    pub defender_hp: u16,
    pub ko_chance: String,
    pub result: DamageResult,
}

/// Per-scenario KO counts, one vote per defender.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScenarioSummary {
    pub scenario: String,
    pub display_name: String,
    /// Defenders some move guarantees to OHKO
    pub ohko: usize,
    /// Defenders some move guarantees to 2HKO, not already counted as OHKO
    pub two_hko: usize,
    pub defenders: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BulkReport {
    pub attacker: String,
    pub moves: Vec<String>,
    pub scenarios: Vec<String>,
    pub total_calcs: usize,
    pub entries: Vec<BulkEntry>,
    pub summaries: Vec<ScenarioSummary>,
}

impl BulkReport {
    pub fn for_defender<'a>(&'a self, defender: &'a str) -> impl Iterator<Item = &'a BulkEntry> {
        self.entries.iter().filter(move |e| e.defender == defender)
    }

    pub fn for_scenario<'a>(&'a self, scenario: &'a str) -> impl Iterator<Item = &'a BulkEntry> {
        self.entries.iter().filter(move |e| e.scenario == scenario)
    }

    /// Highest max-percent move per defender under `scenario`, by defender name.
    pub fn best_move_per_defender<'a>(&'a self, scenario: &str) -> Vec<&'a BulkEntry> {
        let mut best: BTreeMap<&'a str, &'a BulkEntry> = BTreeMap::new();
        for entry in self.entries.iter().filter(|e| e.scenario == scenario) {
            best.entry(entry.defender.as_str())
                .and_modify(|current| {
                    if entry.max_percent > current.max_percent {
                        *current = entry;
                    }
                })
                .or_insert(entry);
        }
        best.into_values().collect()
    }

    pub fn summary(&self, scenario: &str) -> Option<&ScenarioSummary> {
        self.summaries.iter().find(|s| s.scenario == scenario)
    }
}

fn summarize(scenarios: &[Scenario], entries: &[BulkEntry]) -> Vec<ScenarioSummary> {
    scenarios
        .iter()
        .map(|scenario| {
            let mut defenders = BTreeSet::new();
            let mut ohko = BTreeSet::new();
            let mut two_hko = BTreeSet::new();
            for entry in entries.iter().filter(|e| e.scenario == scenario.name) {
                defenders.insert(entry.defender.as_str());
                let analysis: KoAnalysis = entry.result.ko_analysis();
                match analysis.guaranteed_hits {
                    Some(1) => {
                        ohko.insert(entry.defender.as_str());
                    }
                    Some(2) => {
                        two_hko.insert(entry.defender.as_str());
                    }
                    _ => {}
                }
            }
            ScenarioSummary {
                scenario: scenario.name.clone(),
                display_name: scenario.label().to_string(),
                ohko: ohko.len(),
                two_hko: two_hko.difference(&ohko).count(),
                defenders: defenders.len(),
            }
        })
        .collect()
}

/// Run every (defender, move, scenario) calculation.
pub fn run_bulk(request: &BulkRequest, options: &BulkOptions) -> Result<BulkReport> {
    let tasks: Vec<(&PokemonBuild, &Move, &Scenario)> = request
        .defenders
        .iter()
        .flat_map(|d| {
            request
                .moves
                .iter()
                .flat_map(move |m| request.scenarios.iter().map(move |s| (d, m, s)))
        })
        .collect();

    info!(
        attacker = %request.attacker.name,
        defenders = request.defenders.len(),
        moves = request.moves.len(),
        scenarios = request.scenarios.len(),
        calcs = tasks.len(),
        threads = ?options.threads,
        "bulk run started"
    );

    let compute = || -> Result<Vec<BulkEntry>> {
        tasks
            .par_iter()
            .map(|&(defender, mv, scenario)| {
                let mods = request.modifiers_for(defender, scenario);
                let result = calculate_damage(&request.attacker, defender, mv, &mods)?;
                Ok(BulkEntry {
                    defender: defender.name.clone(),
                    move_name: mv.name.clone(),
                    scenario: scenario.name.clone(),
                    scenario_display: scenario.label().to_string(),
                    min_damage: result.min_damage,
                    max_damage: result.max_damage,
                    min_percent: result.min_percent,
                    max_percent: result.max_percent,
                    defender_hp: result.defender_hp,
                    ko_chance: result.ko_chance.text.clone(),
                    result,
                })
            })
            .collect()
    };

    let mut entries = match options.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| CalcError::WorkerPool(e.to_string()))?
            .install(compute)?,
        None => compute()?,
    };

    entries.sort_by(|a, b| {
        (&a.defender, &a.move_name, &a.scenario).cmp(&(&b.defender, &b.move_name, &b.scenario))
    });

    let summaries = summarize(&request.scenarios, &entries);
    info!(calcs = entries.len(), "bulk run finished");

    Ok(BulkReport {
        attacker: request.attacker.name.clone(),
        moves: request.moves.iter().map(|m| m.name.clone()).collect(),
        scenarios: request.scenarios.iter().map(|s| s.name.clone()).collect(),
        total_calcs: entries.len(),
        entries,
        summaries,
    })
}
