//! KO and survival analysis over the 16 discrete damage rolls.

pub mod distribution;
pub mod ko;
pub mod survival;

pub use distribution::DamageDistribution;
pub use ko::{n_hit_ko_chance, KoAnalysis, KoClass, GUARANTEED_PERCENT, MAX_ANALYZED_HITS};
pub use survival::{
    combined_survival, exact_repeated_survival, repeated_hit_survival, Precision, Survival,
    MAX_EXACT_HITS,
};
