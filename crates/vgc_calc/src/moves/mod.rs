//! Move records.
//!
//! A [`Move`] is built from caller-supplied data (name, type, category, base
//! power). Flags, multi-hit ranges and special mechanics are filled from the
//! built-in name tables and can be overridden with the builder methods.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};
use crate::macros::lookup_key;
use crate::types::Type;

pub mod tables;

bitflags! {
    /// Move properties that abilities and items react to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct MoveFlags: u16 {
        const CONTACT = 1 << 0;
        /// Hits multiple targets (0.75x in doubles when it does).
        const SPREAD = 1 << 1;
        const PUNCH = 1 << 2;
        const SLICING = 1 << 3;
        const BITING = 1 << 4;
        const SOUND = 1 << 5;
        const PULSE = 1 << 6;
        const RECOIL = 1 << 7;
        /// Ball and bomb moves.
        const BULLET = 1 << 8;
        const WIND = 1 << 9;
        const SECONDARY_EFFECT = 1 << 10;
    }
}

impl Serialize for MoveFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.iter().count()))?;
        for (name, _) in self.iter_names() {
            seq.serialize_element(&name.to_ascii_lowercase())?;
        }
        seq.end()
    }
}

/// Move damage category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

impl MoveCategory {
    pub fn from_str(s: &str) -> Option<Self> {
        match lookup_key(s).as_str() {
            "physical" => Some(MoveCategory::Physical),
            "special" => Some(MoveCategory::Special),
            "status" => Some(MoveCategory::Status),
            _ => None,
        }
    }
}

/// Moves whose damage rules differ from the plain formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SpecialMove {
    /// Tera type when Terastallized; physical if Atk > SpA.
    TeraBlast,
    /// Doubles in weather and takes the weather's type.
    WeatherBall,
    /// Uses the target's Attack.
    FoulPlay,
    /// Uses the user's Defense.
    BodyPress,
    /// Special move that hits physical Defense.
    Psyshock,
    /// 1.5x in Psychic Terrain.
    Psyblade,
    /// 5461/4096 on super-effective hits.
    CollisionCourse,
    /// 2x when statused, ignores burn.
    Facade,
    /// 2x without a held item.
    Acrobatics,
}

/// A move as seen by the damage calculator.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Move {
    pub name: String,
    pub move_type: Type,
    pub category: MoveCategory,
    pub power: u16,
    pub priority: i8,
    pub flags: MoveFlags,
    pub min_hits: u8,
    pub max_hits: u8,
    pub always_crit: bool,
    pub special: Option<SpecialMove>,
}

impl Move {
    /// Build a move, filling known properties from the name tables.
    ///
    /// Negative base power is a data error upstream and is rejected.
    pub fn new(name: &str, move_type: Type, category: MoveCategory, power: i32) -> Result<Self> {
        if power < 0 {
            return Err(CalcError::NegativeBasePower {
                name: name.to_string(),
                power,
            });
        }
        let key = lookup_key(name);

        let mut flags = MoveFlags::empty();
        let tagged = [
            (&tables::PUNCH_MOVES, MoveFlags::PUNCH),
            (&tables::SLICING_MOVES, MoveFlags::SLICING),
            (&tables::BITING_MOVES, MoveFlags::BITING),
            (&tables::SOUND_MOVES, MoveFlags::SOUND),
            (&tables::PULSE_MOVES, MoveFlags::PULSE),
            (&tables::RECOIL_MOVES, MoveFlags::RECOIL),
            (&tables::BULLET_MOVES, MoveFlags::BULLET),
            (&tables::WIND_MOVES, MoveFlags::WIND),
            (&tables::SPREAD_MOVES, MoveFlags::SPREAD),
            (&tables::SECONDARY_EFFECT_MOVES, MoveFlags::SECONDARY_EFFECT),
        ];
        for (set, flag) in tagged {
            if set.contains(key.as_str()) {
                flags |= flag;
            }
        }

        let (min_hits, max_hits) = tables::MULTI_HIT_MOVES
            .get(key.as_str())
            .copied()
            .unwrap_or((1, 1));

        Ok(Self {
            name: name.to_string(),
            move_type,
            category,
            power: power.min(u16::MAX as i32) as u16,
            priority: tables::PRIORITY_MOVES.get(key.as_str()).copied().unwrap_or(0),
            flags,
            min_hits,
            max_hits,
            always_crit: tables::ALWAYS_CRIT_MOVES.contains(key.as_str()),
            special: tables::SPECIAL_MOVES.get(key.as_str()).copied(),
        })
    }

    pub fn physical(name: &str, move_type: Type, power: i32) -> Result<Self> {
        Self::new(name, move_type, MoveCategory::Physical, power)
    }

    pub fn special(name: &str, move_type: Type, power: i32) -> Result<Self> {
        Self::new(name, move_type, MoveCategory::Special, power)
    }

    // ------------------------------------------------------------------
    // Builder overrides
    // ------------------------------------------------------------------

    pub fn spread(mut self, spread: bool) -> Self {
        self.flags.set(MoveFlags::SPREAD, spread);
        self
    }

    pub fn contact(mut self, contact: bool) -> Self {
        self.flags.set(MoveFlags::CONTACT, contact);
        self
    }

    pub fn secondary_effect(mut self, has_effect: bool) -> Self {
        self.flags.set(MoveFlags::SECONDARY_EFFECT, has_effect);
        self
    }

    pub fn with_flags(mut self, flags: MoveFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn priority(mut self, priority: i8) -> Self {
        self.priority = priority;
        self
    }

    /// Hit range; a zero or inverted range is rejected.
    pub fn hits(mut self, min: u8, max: u8) -> Result<Self> {
        if min == 0 || max < min {
            return Err(CalcError::InvalidHitCount(min.min(max)));
        }
        self.min_hits = min;
        self.max_hits = max;
        Ok(self)
    }

    pub fn always_crit(mut self, always: bool) -> Self {
        self.always_crit = always;
        self
    }

    pub fn special_move(mut self, special: Option<SpecialMove>) -> Self {
        self.special = special;
        self
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    #[inline]
    pub fn has(&self, flag: MoveFlags) -> bool {
        self.flags.contains(flag)
    }

    #[inline]
    pub fn is_spread(&self) -> bool {
        self.has(MoveFlags::SPREAD)
    }

    #[inline]
    pub fn is_multi_hit(&self) -> bool {
        self.max_hits > 1
    }

    #[inline]
    pub fn is_status(&self) -> bool {
        self.category == MoveCategory::Status
    }

    #[inline]
    pub fn is(&self, special: SpecialMove) -> bool {
        self.special == Some(special)
    }
}
