//! Identifier enums with phf name lookup.
//!
//! Ability and item identifiers are declared through [`identifiers!`], which
//! emits the enum, a `phf` map from lookup keys to variants, display names and
//! serde support. Keys are lowercase ASCII alphanumerics, so "Choice Band",
//! "choice-band" and "choiceband" all resolve to the same variant.

use serde::{Deserialize, Deserializer};
use tracing::warn;

/// Normalize a display or slug name into a lookup key.
pub fn lookup_key(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Identifier types whose unknown names mean "no effect" rather than an error.
pub trait LenientName: Sized {
    /// What kind of name this is, for log messages.
    const KIND: &'static str;

    fn from_name(name: &str) -> Option<Self>;
}

/// Deserialize an optional identifier, dropping names that do not resolve.
pub fn lenient_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: LenientName,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|name| {
        let parsed = T::from_name(&name);
        if parsed.is_none() && !name.trim().is_empty() {
            warn!(kind = T::KIND, name = %name, "unrecognized name ignored");
        }
        parsed
    }))
}

macro_rules! identifiers {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident (kind = $kind:literal, lookup = $lookup:ident) {
            $($variant:ident => $key:literal, $display:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        $vis enum $name {
            $($variant,)+
        }

        static $lookup: phf::Map<&'static str, $name> = phf::phf_map! {
            $($key => $name::$variant,)+
        };

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Total number of variants.
            pub const COUNT: usize = Self::ALL.len();

            /// Look up by name (case, spaces and punctuation ignored).
            #[inline]
            pub fn from_str(s: &str) -> Option<Self> {
                $lookup.get($crate::macros::lookup_key(s).as_str()).copied()
            }

            /// Display name.
            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $display,)+
                }
            }
        }

        impl $crate::macros::LenientName for $name {
            const KIND: &'static str = $kind;

            fn from_name(name: &str) -> Option<Self> {
                Self::from_str(name)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.name())
            }
        }
    };
}

pub(crate) use identifiers;
