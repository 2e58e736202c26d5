//! vgc_calc - Generation 9 doubles damage calculator
//!
//! Exact integer damage rolls for one attacker, one defender and one move
//! under a set of battle conditions, plus the analyses built on them: KO
//! chances, multi-hit survival, minimal EV searches and parallel bulk runs.
//!
//! ```ignore
//! use vgc_calc::{calculate_damage, DamageModifiers, Move, PokemonBuild, Type};
//!
//! let result = calculate_damage(&attacker, &defender, &move_, &DamageModifiers::default())?;
//! println!("{} ({})", result.display_range(), result.ko_chance.text);
//! ```

mod macros;

/// Error type shared by every operation
pub mod error;

/// Type definitions and type chart
pub mod types;

/// Nature definitions and stat modifiers
pub mod natures;

/// Stat formula and EV / IV spreads
pub mod stats;

/// Validated Pokemon builds
pub mod entities;

/// Ability identifiers and damage hooks
pub mod abilities;

/// Item identifiers and damage hooks
pub mod items;

/// Move descriptions
pub mod moves;

/// Damage formula and modifier pipeline
pub mod damage;

/// KO and survival analysis
pub mod analysis;

/// Minimal EV searches
pub mod search;

/// Parallel bulk calculations
pub mod bulk;

// Re-export commonly used types
pub use abilities::AbilityId;
pub use analysis::{KoAnalysis, KoClass, Precision, Survival};
pub use bulk::{run_bulk, BulkOptions, BulkReport, BulkRequest, Scenario};
pub use damage::{calculate_damage, DamageModifiers, DamageResult, Terrain, Weather};
pub use entities::{PokemonBuild, PokemonBuilder};
pub use error::{CalcError, Result};
pub use items::ItemId;
pub use moves::{Move, MoveCategory, MoveFlags, SpecialMove};
pub use natures::{BattleStat, NatureId, StatId};
pub use search::{find_defensive_evs, find_offensive_evs, DefensiveSearch, OffensiveSearch};
pub use stats::{BaseStats, EvSpread, FinalStats, IvSpread};
pub use types::Type;
