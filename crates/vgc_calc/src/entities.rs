//! Pokemon builds.
//!
//! A `PokemonBuild` is what the caller hands in: species data already
//! resolved (base stats and types), plus the competitive spread. Builds are
//! validated once on construction and then treated as read-only. Stat stages
//! are not part of a build; they travel with each calculation's modifiers.

use serde::Serialize;

use crate::abilities::AbilityId;
use crate::error::{CalcError, Result};
use crate::items::ItemId;
use crate::natures::NatureId;
use crate::stats::{compute_stats, BaseStats, EvSpread, FinalStats, IvSpread, DEFAULT_LEVEL};
use crate::types::Type;

/// A validated Pokemon build.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PokemonBuild {
    pub name: String,
    pub base: BaseStats,
    /// One or two types.
    pub types: Vec<Type>,
    pub nature: NatureId,
    pub evs: EvSpread,
    pub ivs: IvSpread,
    pub item: Option<ItemId>,
    pub ability: Option<AbilityId>,
    pub tera_type: Option<Type>,
    pub level: u8,
    /// Cached final stats.
    pub stats: FinalStats,
}

impl PokemonBuild {
    /// Start a build. Defaults: neutral nature, 0 EVs, 31 IVs, level 50.
    pub fn builder(name: impl Into<String>, base: BaseStats, types: &[Type]) -> PokemonBuilder {
        PokemonBuilder {
            name: name.into(),
            base,
            types: types.to_vec(),
            nature: NatureId::default(),
            evs: EvSpread::default(),
            ivs: IvSpread::default(),
            item: None,
            ability: None,
            tera_type: None,
            level: DEFAULT_LEVEL,
        }
    }

    /// Reopen this build for edits (the result is validated again).
    pub fn to_builder(&self) -> PokemonBuilder {
        PokemonBuilder {
            name: self.name.clone(),
            base: self.base,
            types: self.types.clone(),
            nature: self.nature,
            evs: self.evs,
            ivs: self.ivs,
            item: self.item,
            ability: self.ability,
            tera_type: self.tera_type,
            level: self.level,
        }
    }

    #[inline]
    pub fn primary_type(&self) -> Type {
        self.types[0]
    }

    #[inline]
    pub fn secondary_type(&self) -> Option<Type> {
        self.types.get(1).copied()
    }

    #[inline]
    pub fn has_type(&self, t: Type) -> bool {
        self.types.contains(&t)
    }

    #[inline]
    pub fn max_hp(&self) -> u16 {
        self.stats.hp
    }
}

/// Builder for [`PokemonBuild`].
#[derive(Clone, Debug)]
pub struct PokemonBuilder {
    name: String,
    base: BaseStats,
    types: Vec<Type>,
    nature: NatureId,
    evs: EvSpread,
    ivs: IvSpread,
    item: Option<ItemId>,
    ability: Option<AbilityId>,
    tera_type: Option<Type>,
    level: u8,
}

impl PokemonBuilder {
    pub fn nature(mut self, nature: NatureId) -> Self {
        self.nature = nature;
        self
    }

    pub fn evs(mut self, evs: EvSpread) -> Self {
        self.evs = evs;
        self
    }

    pub fn ivs(mut self, ivs: IvSpread) -> Self {
        self.ivs = ivs;
        self
    }

    pub fn item(mut self, item: Option<ItemId>) -> Self {
        self.item = item;
        self
    }

    pub fn ability(mut self, ability: Option<AbilityId>) -> Self {
        self.ability = ability;
        self
    }

    pub fn tera_type(mut self, tera_type: Option<Type>) -> Self {
        self.tera_type = tera_type;
        self
    }

    pub fn level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    /// Validate and compute stats.
    pub fn build(self) -> Result<PokemonBuild> {
        if self.types.is_empty() || self.types.len() > 2 {
            return Err(CalcError::InvalidTypeCount(self.types.len()));
        }
        if !(1..=100).contains(&self.level) {
            return Err(CalcError::LevelOutOfRange(self.level));
        }
        self.evs.validate()?;
        self.ivs.validate()?;

        let stats = compute_stats(&self.base, &self.ivs, &self.evs, self.level, self.nature);
        Ok(PokemonBuild {
            name: self.name,
            base: self.base,
            types: self.types,
            nature: self.nature,
            evs: self.evs,
            ivs: self.ivs,
            item: self.item,
            ability: self.ability,
            tera_type: self.tera_type,
            level: self.level,
            stats,
        })
    }
}
