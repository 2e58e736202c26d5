//! Request bodies and their conversion into core types.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::warn;

use vgc_calc::{
    AbilityId, BaseStats, DamageModifiers, EvSpread, ItemId, IvSpread, Move, MoveCategory,
    NatureId, PokemonBuild, Scenario, Type,
};

/// Read a JSON request from `path`, or stdin when absent or "-".
pub fn read_request<T: DeserializeOwned>(path: Option<&Path>) -> Result<T> {
    match path {
        Some(p) if p != Path::new("-") => {
            let file = File::open(p).with_context(|| format!("failed to open {}", p.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to parse {}", p.display()))
        }
        _ => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read stdin")?;
            serde_json::from_str(&raw).context("failed to parse request from stdin")
        }
    }
}

/// A Pokemon as it appears in a request.
#[derive(Deserialize, Debug, Clone)]
pub struct BuildSpec {
    pub name: String,
    pub base_stats: BaseStats,
    pub types: Vec<String>,
    pub nature: Option<String>,
    pub evs: Option<EvSpread>,
    pub ivs: Option<IvSpread>,
    pub item: Option<String>,
    pub ability: Option<String>,
    pub tera_type: Option<String>,
    pub level: Option<u8>,
}

impl BuildSpec {
    pub fn to_build(&self) -> Result<PokemonBuild> {
        let types = self
            .types
            .iter()
            .map(|t| Type::parse(t))
            .collect::<vgc_calc::Result<Vec<_>>>()
            .with_context(|| format!("invalid types for {}", self.name))?;

        let mut builder = PokemonBuild::builder(&self.name, self.base_stats, &types)
            .item(lenient(self.item.as_deref(), "item", ItemId::from_str))
            .ability(lenient(self.ability.as_deref(), "ability", AbilityId::from_str));

        if let Some(ref nature) = self.nature {
            let nature = NatureId::parse(nature)
                .with_context(|| format!("invalid nature for {}", self.name))?;
            builder = builder.nature(nature);
        }
        if let Some(evs) = self.evs {
            builder = builder.evs(evs);
        }
        if let Some(ivs) = self.ivs {
            builder = builder.ivs(ivs);
        }
        if let Some(ref tera) = self.tera_type {
            let tera =
                Type::parse(tera).with_context(|| format!("invalid tera type for {}", self.name))?;
            builder = builder.tera_type(Some(tera));
        }
        if let Some(level) = self.level {
            builder = builder.level(level);
        }

        builder
            .build()
            .with_context(|| format!("invalid build for {}", self.name))
    }
}

fn lenient<T>(name: Option<&str>, kind: &str, parse: fn(&str) -> Option<T>) -> Option<T> {
    let name = name?.trim();
    if name.is_empty() {
        return None;
    }
    let parsed = parse(name);
    if parsed.is_none() {
        warn!(kind, name, "unrecognized name ignored");
    }
    parsed
}

/// A move as it appears in a request.
#[derive(Deserialize, Debug, Clone)]
pub struct MoveSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: String,
    pub category: String,
    pub power: i32,
    pub spread: Option<bool>,
    pub contact: Option<bool>,
    pub priority: Option<i8>,
    pub min_hits: Option<u8>,
    pub max_hits: Option<u8>,
}

impl MoveSpec {
    pub fn to_move(&self) -> Result<Move> {
        let move_type = Type::parse(&self.move_type)
            .with_context(|| format!("invalid type for move {}", self.name))?;
        let category = MoveCategory::from_str(&self.category).with_context(|| {
            format!("unknown category {:?} for move {}", self.category, self.name)
        })?;

        let mut mv = Move::new(&self.name, move_type, category, self.power)?;
        if let Some(spread) = self.spread {
            mv = mv.spread(spread);
        }
        if let Some(contact) = self.contact {
            mv = mv.contact(contact);
        }
        if let Some(priority) = self.priority {
            mv = mv.priority(priority);
        }
        if self.min_hits.is_some() || self.max_hits.is_some() {
            let min = self.min_hits.unwrap_or(mv.min_hits);
            let max = self.max_hits.unwrap_or(min.max(mv.max_hits));
            mv = mv
                .hits(min, max)
                .with_context(|| format!("invalid hit range for move {}", self.name))?;
        }
        Ok(mv)
    }
}

#[derive(Deserialize, Debug)]
pub struct CalcRequest {
    pub attacker: BuildSpec,
    pub defender: BuildSpec,
    #[serde(rename = "move")]
    pub move_spec: MoveSpec,
    #[serde(default)]
    pub modifiers: DamageModifiers,
}

#[derive(Deserialize, Debug)]
pub struct BulkRequestSpec {
    pub attacker: BuildSpec,
    pub moves: Vec<MoveSpec>,
    pub defenders: Vec<BuildSpec>,
    pub scenarios: Option<Vec<Scenario>>,
    /// Defender name to Tera type
    #[serde(default)]
    pub defender_tera: HashMap<String, String>,
}

#[derive(Deserialize, Debug)]
pub struct SearchRequest {
    pub attacker: BuildSpec,
    pub defender: BuildSpec,
    #[serde(rename = "move")]
    pub move_spec: MoveSpec,
    #[serde(default)]
    pub modifiers: DamageModifiers,
    #[serde(default = "default_target_percent")]
    pub target_percent: f64,
    #[serde(default = "default_hits")]
    pub hits: u8,
}

fn default_target_percent() -> f64 {
    100.0
}

fn default_hits() -> u8 {
    1
}
