//! Static game content for the realm rules engine.
//!
//! Reference tables (buildings, trade goods, idea groups, nations, provinces,
//! rebel factions, AI personalities, ages, policies, subject types, peace
//! demands, map modes, terrain) plus the numeric [`defines`] every formula in
//! `realmsim-core` reads. Nothing in this crate mutates or performs I/O.

use thiserror::Error;

/// Declares a fieldless enum keyed by a snake_case string.
///
/// Generates `ALL`, `key()`, `Display` and `FromStr` so table keys can come
/// from JSON or the command line without string-indexed lookups elsewhere.
macro_rules! keyed_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $key:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(rename_all = "snake_case")]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable snake_case key.
            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.key())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok($name::$variant),)+
                    _ => Err($crate::ParseIdError::new(stringify!($name), s)),
                }
            }
        }
    };
}

pub mod ages;
pub mod ai_personalities;
pub mod buildings;
pub mod defines;
pub mod ideas;
pub mod map_modes;
pub mod modifiers;
pub mod nations;
pub mod peace_demands;
pub mod policies;
pub mod provinces;
pub mod rebels;
pub mod subject_types;
pub mod terrain;
pub mod tradegoods;

pub use ages::{age_for_year, AgeDef, AgeId};
pub use ai_personalities::{AiPersonalityDef, AiPersonalityId};
pub use buildings::{BuildingCategory, BuildingDef, BuildingId};
pub use ideas::{IdeaCategory, IdeaDef, IdeaGroupDef, IdeaGroupId};
pub use map_modes::{MapMode, MapModeDef};
pub use modifiers::{Modifier, ModifierKey};
pub use nations::{NationDef, Rgb, TechGroup};
pub use peace_demands::{PeaceDemandDef, PeaceDemandKind, ScalingFactor};
pub use policies::{PolicyDef, PolicyId};
pub use provinces::ProvinceDef;
pub use rebels::{RebelDef, RebelKind};
pub use subject_types::{SubjectKind, SubjectTypeDef};
pub use terrain::{Climate, Season, Terrain};
pub use tradegoods::{TradeGoodCategory, TradeGoodDef, TradeGoodId};

/// An identifier that does not name any entry of its table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} '{value}'")]
pub struct ParseIdError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseIdError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
