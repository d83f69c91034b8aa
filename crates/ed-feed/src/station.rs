use serde::{Deserialize, Serialize};

use ed_core::{Point, UnitKind};

/// Static description of one station: where it is, what kind, how many units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationSpec {
    /// Human-readable id, e.g. `F1`.
    pub name:       String,
    pub kind:       UnitKind,
    pub location:   Point,
    pub unit_count: u32,
}

impl StationSpec {
    pub fn new(name: impl Into<String>, kind: UnitKind, location: Point, unit_count: u32) -> Self {
        Self { name: name.into(), kind, location, unit_count }
    }
}
