//! Fixed-point damage multipliers.
//!
//! Every in-game multiplier is an integer over 4096. Values that read as the
//! same decimal can differ by one (Life Orb is 5324, the usual 1.3x is 5325),
//! so the named constants below are the values the games use, not roundings.

use serde::Serialize;

/// A multiplier on the 4096 scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Serialize)]
#[serde(transparent)]
pub struct Modifier(pub u16);

impl Modifier {
    // ------------------------------------------------------------------
    // Plain fractions
    // ------------------------------------------------------------------

    pub const ONE: Self = Self(4096);
    pub const HALF: Self = Self(2048);
    /// Spread moves, Friend Guard.
    pub const THREE_QUARTERS: Self = Self(3072);
    pub const ONE_POINT_FIVE: Self = Self(6144);
    pub const DOUBLE: Self = Self(8192);
    /// Tera STAB into an original type with Adaptability.
    pub const TWO_POINT_TWO_FIVE: Self = Self(9216);

    // ------------------------------------------------------------------
    // Rounded game values
    // ------------------------------------------------------------------

    /// Muscle Band, Wise Glasses, Punching Glove.
    pub const ONE_POINT_ONE: Self = Self(4506);
    /// Type-boosting items, -ate abilities, Expert Belt.
    pub const ONE_POINT_TWO: Self = Self(4915);
    pub const ONE_POINT_TWO_FIVE: Self = Self(5120);
    /// Sheer Force, Tough Claws, terrain boosts.
    pub const ONE_POINT_THREE: Self = Self(5325);
    pub const LIFE_ORB: Self = Self(5324);
    /// Orichalcum Pulse, Hadron Engine, Collision Course.
    pub const FOUR_THIRDS: Self = Self(5461);
    /// Reflect, Light Screen and Aurora Veil with two defenders on the field.
    pub const SCREENS_DOUBLES: Self = Self(2732);
    /// Filter, Solid Rock and Prism Armor.
    pub const FILTER: Self = Self(3072);

    pub const fn new(val: u16) -> Self {
        Self(val)
    }

    pub const fn val(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn is_neutral(self) -> bool {
        self.0 == Self::ONE.0
    }
}
