//! Error taxonomy for the calculator.
//!
//! Only malformed input and broken preconditions are errors. Expected domain
//! outcomes (immunity, 0% KO, an unreachable EV target) are ordinary values.

use thiserror::Error;

use crate::natures::StatId;

/// Errors raised while building inputs or running a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("{stat} EVs must be within 0..=252, got {value}")]
    EvOutOfRange { stat: StatId, value: u16 },

    #[error("EV total must not exceed 508, got {total}")]
    EvTotalExceeded { total: u16 },

    #[error("{stat} IV must be within 0..=31, got {value}")]
    IvOutOfRange { stat: StatId, value: u16 },

    #[error("level must be within 1..=100, got {0}")]
    LevelOutOfRange(u8),

    #[error("a build needs one or two types, got {0}")]
    InvalidTypeCount(usize),

    #[error("unknown nature: {0}")]
    UnknownNature(String),

    #[error("unknown type: {0}")]
    UnknownType(String),

    #[error("move {name} has negative base power {power}")]
    NegativeBasePower { name: String, power: i32 },

    #[error("defense stat reached zero before the damage formula")]
    ZeroDefense,

    #[error("{0} does not use the attacker's own offensive stat")]
    NoOffensiveStat(String),

    #[error("invalid hit count {0}")]
    InvalidHitCount(u8),

    #[error("failed to start worker pool: {0}")]
    WorkerPool(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CalcError>;
