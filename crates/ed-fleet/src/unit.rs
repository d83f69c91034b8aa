//! Stations and the responder units they house.

use serde::Serialize;

use ed_core::{EmergencyId, NodeId, Point, SimTime, StationId, UnitId, UnitKind};

// ── Station ───────────────────────────────────────────────────────────────────

/// A placed station.  Its kind is inherited by every unit it houses.
#[derive(Clone, Debug, Serialize)]
pub struct Station {
    pub id:       StationId,
    pub name:     String,
    pub kind:     UnitKind,
    pub location: Point,
    pub node:     NodeId,
    /// Units based here, ascending id.
    pub units:    Vec<UnitId>,
}

// ── UnitStatus ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitStatus {
    Idle,
    /// Driving to an emergency.
    Enroute,
    /// On scene (handle-and-return model only).
    Servicing,
    /// Driving back to the home station.
    Returning,
}

// ── Responder ─────────────────────────────────────────────────────────────────

/// One responder unit.
#[derive(Clone, Debug, Serialize)]
pub struct Responder {
    pub id:              UnitId,
    pub station:         StationId,
    pub kind:            UnitKind,
    /// The home station's node.
    pub home:            NodeId,
    /// Current node.  While travelling this is the departure node.
    pub location:        NodeId,
    /// Total distance traveled so far.  Never decreases.
    pub cumulative_cost: f64,
    /// Reward credited for on-time arrivals.
    pub points:          f64,
    /// Instant the unit's current activity ends (arrival or end of service).
    pub busy_until:      SimTime,
    /// Emergency the unit is driving to or servicing.
    pub commitment:      Option<EmergencyId>,
    pub status:          UnitStatus,
}

impl Responder {
    pub(crate) fn new(id: UnitId, station: StationId, kind: UnitKind, home: NodeId) -> Self {
        Self {
            id,
            station,
            kind,
            home,
            location:        home,
            cumulative_cost: 0.0,
            points:          0.0,
            busy_until:      SimTime::ZERO,
            commitment:      None,
            status:          UnitStatus::Idle,
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.status == UnitStatus::Idle
    }

    #[inline]
    pub fn at_home(&self) -> bool {
        self.location == self.home
    }
}
