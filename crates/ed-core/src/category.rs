//! Emergency categories and responder station kinds.
//!
//! The two enums share names but are deliberately distinct types: which kind
//! of unit may serve which category is configuration (see
//! [`CapabilityTable`][crate::CapabilityTable]), not an identity mapping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::EdError;

// ── Category ──────────────────────────────────────────────────────────────────

/// What kind of emergency an event is.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fire,
    Medical,
    Police,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Fire, Category::Medical, Category::Police];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Fire    => "fire",
            Category::Medical => "medical",
            Category::Police  => "police",
        }
    }

    /// Bit used by [`CategorySet`][crate::CategorySet].
    #[inline]
    pub(crate) fn bit(self) -> u8 {
        match self {
            Category::Fire    => 0b001,
            Category::Medical => 0b010,
            Category::Police  => 0b100,
        }
    }
}

impl FromStr for Category {
    type Err = EdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fire"    => Ok(Category::Fire),
            "medical" => Ok(Category::Medical),
            "police"  => Ok(Category::Police),
            other => Err(EdError::Parse(format!(
                "unknown emergency category {other:?}: expected fire, medical, or police"
            ))),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── UnitKind ──────────────────────────────────────────────────────────────────

/// The type of a station, inherited by every unit it houses.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Fire,
    Police,
    /// Paramedic / hospital units.
    #[serde(alias = "paramedic", alias = "hospital")]
    Medical,
}

impl UnitKind {
    pub const ALL: [UnitKind; 3] = [UnitKind::Fire, UnitKind::Police, UnitKind::Medical];

    pub fn as_str(self) -> &'static str {
        match self {
            UnitKind::Fire    => "fire",
            UnitKind::Police  => "police",
            UnitKind::Medical => "medical",
        }
    }

    /// One-letter prefix used when naming proposed stations (`F1`, `P2`, …).
    pub fn letter(self) -> char {
        match self {
            UnitKind::Fire    => 'F',
            UnitKind::Police  => 'P',
            UnitKind::Medical => 'M',
        }
    }
}

impl FromStr for UnitKind {
    type Err = EdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fire"                              => Ok(UnitKind::Fire),
            "police"                            => Ok(UnitKind::Police),
            "medical" | "paramedic" | "hospital" => Ok(UnitKind::Medical),
            other => Err(EdError::Parse(format!(
                "unknown station type {other:?}: expected fire, police, or medical"
            ))),
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
