//! Battle conditions for one calculation.
//!
//! [`DamageModifiers`] is a flat, exhaustively typed configuration record.
//! It is built fresh for every call and never mutated by the calculator.
//! Weather, terrain, item and ability names deserialize leniently: an
//! unrecognized name means "no effect" and is logged at `warn`.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::abilities::AbilityId;
use crate::items::ItemId;
use crate::macros::{lenient_option, lookup_key};
use crate::natures::BattleStat;
use crate::types::Type;

/// Active weather.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    #[default]
    None,
    Sun,
    Rain,
    Sand,
    Snow,
    HarshSun,
    HeavyRain,
}

impl Weather {
    /// Lenient parse: unknown names are `Weather::None`.
    pub fn parse_lenient(s: &str) -> Self {
        match lookup_key(s).as_str() {
            "" | "none" | "clear" => Weather::None,
            "sun" | "sunnyday" | "harshsunlight" => Weather::Sun,
            "rain" | "raindance" => Weather::Rain,
            "sand" | "sandstorm" => Weather::Sand,
            "snow" | "snowscape" | "hail" => Weather::Snow,
            "harshsun" | "desolateland" | "extremelyharshsunlight" => Weather::HarshSun,
            "heavyrain" | "primordialsea" => Weather::HeavyRain,
            other => {
                warn!(weather = other, "unrecognized weather ignored");
                Weather::None
            }
        }
    }

    #[inline]
    pub fn is_sun(self) -> bool {
        matches!(self, Weather::Sun | Weather::HarshSun)
    }

    #[inline]
    pub fn is_rain(self) -> bool {
        matches!(self, Weather::Rain | Weather::HeavyRain)
    }
}

impl<'de> Deserialize<'de> for Weather {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.map(|s| Weather::parse_lenient(&s)).unwrap_or_default())
    }
}

/// Active terrain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    #[default]
    None,
    Electric,
    Grassy,
    Psychic,
    Misty,
}

impl Terrain {
    /// Lenient parse: unknown names are `Terrain::None`.
    pub fn parse_lenient(s: &str) -> Self {
        let key = lookup_key(s);
        let key = key.strip_suffix("terrain").unwrap_or(&key);
        match key {
            "" | "none" => Terrain::None,
            "electric" => Terrain::Electric,
            "grassy" => Terrain::Grassy,
            "psychic" => Terrain::Psychic,
            "misty" => Terrain::Misty,
            other => {
                warn!(terrain = other, "unrecognized terrain ignored");
                Terrain::None
            }
        }
    }

    /// Type boosted 1.3x for grounded attackers.
    pub fn boosted_type(self) -> Option<Type> {
        match self {
            Terrain::Electric => Some(Type::Electric),
            Terrain::Grassy => Some(Type::Grass),
            Terrain::Psychic => Some(Type::Psychic),
            Terrain::Misty | Terrain::None => None,
        }
    }
}

impl<'de> Deserialize<'de> for Terrain {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.map(|s| Terrain::parse_lenient(&s)).unwrap_or_default())
    }
}

/// Every battle condition the calculator understands.
///
/// Defaults: doubles, both sides grounded, defender at full HP, everything
/// else off. Stages are clamped to -6..=6 when applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DamageModifiers {
    // Format
    pub doubles: bool,
    /// The spread move is actually hitting more than one target.
    pub multiple_targets: bool,

    // Field
    pub weather: Weather,
    pub terrain: Terrain,
    pub attacker_grounded: bool,
    pub defender_grounded: bool,
    pub reflect: bool,
    pub light_screen: bool,
    pub aurora_veil: bool,

    // Hit
    pub critical_hit: bool,
    /// Hit count for multi-hit moves; `None` uses the move's max.
    pub hits: Option<u8>,

    // Status
    pub attacker_burned: bool,
    /// Any major status (burn, poison, paralysis, sleep) for Guts and Facade.
    pub attacker_statused: bool,

    // Stages
    pub attack_stage: i8,
    pub special_attack_stage: i8,
    pub defense_stage: i8,
    pub special_defense_stage: i8,

    // Overrides for the builds' held items and abilities
    #[serde(deserialize_with = "lenient_option")]
    pub attacker_item: Option<ItemId>,
    #[serde(deserialize_with = "lenient_option")]
    pub defender_item: Option<ItemId>,
    #[serde(deserialize_with = "lenient_option")]
    pub attacker_ability: Option<AbilityId>,
    #[serde(deserialize_with = "lenient_option")]
    pub defender_ability: Option<AbilityId>,

    // Terastallization
    pub tera_active: bool,
    /// Overrides the attacker build's tera type.
    pub tera_type: Option<Type>,
    pub defender_tera_active: bool,
    pub defender_tera_type: Option<Type>,

    // Partners
    pub helping_hand: bool,
    /// The defender's ally has Friend Guard.
    pub friend_guard: bool,
    /// An ally attacker has Steely Spirit.
    pub ally_steely_spirit: bool,
    pub commander: bool,
    pub defender_commander: bool,

    // Ruin auras present on the field
    pub tablets_of_ruin: bool,
    pub vessel_of_ruin: bool,
    pub sword_of_ruin: bool,
    pub beads_of_ruin: bool,

    // Paradox
    pub attacker_booster_energy: bool,
    pub defender_booster_energy: bool,
    pub attacker_paradox_stat: Option<BattleStat>,
    pub defender_paradox_stat: Option<BattleStat>,

    // Misc
    pub defender_at_full_hp: bool,
    /// Fainted allies for Supreme Overlord (capped at 5).
    pub supreme_overlord_allies: u8,
    /// The attacker moves after the target (Analytic).
    pub moving_last: bool,
}

impl Default for DamageModifiers {
    fn default() -> Self {
        Self {
            doubles: true,
            multiple_targets: false,
            weather: Weather::None,
            terrain: Terrain::None,
            attacker_grounded: true,
            defender_grounded: true,
            reflect: false,
            light_screen: false,
            aurora_veil: false,
            critical_hit: false,
            hits: None,
            attacker_burned: false,
            attacker_statused: false,
            attack_stage: 0,
            special_attack_stage: 0,
            defense_stage: 0,
            special_defense_stage: 0,
            attacker_item: None,
            defender_item: None,
            attacker_ability: None,
            defender_ability: None,
            tera_active: false,
            tera_type: None,
            defender_tera_active: false,
            defender_tera_type: None,
            helping_hand: false,
            friend_guard: false,
            ally_steely_spirit: false,
            commander: false,
            defender_commander: false,
            tablets_of_ruin: false,
            vessel_of_ruin: false,
            sword_of_ruin: false,
            beads_of_ruin: false,
            attacker_booster_energy: false,
            defender_booster_energy: false,
            attacker_paradox_stat: None,
            defender_paradox_stat: None,
            defender_at_full_hp: true,
            supreme_overlord_allies: 0,
            moving_last: false,
        }
    }
}

impl DamageModifiers {
    /// Singles format.
    pub fn singles() -> Self {
        Self {
            doubles: false,
            ..Self::default()
        }
    }

    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.weather = weather;
        self
    }

    pub fn with_terrain(mut self, terrain: Terrain) -> Self {
        self.terrain = terrain;
        self
    }

    pub fn with_tera(mut self) -> Self {
        self.tera_active = true;
        self
    }

    pub fn with_crit(mut self) -> Self {
        self.critical_hit = true;
        self
    }

    pub fn is_statused(&self) -> bool {
        self.attacker_burned || self.attacker_statused
    }
}
