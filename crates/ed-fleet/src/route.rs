use serde::Serialize;

use ed_core::{EmergencyId, NodeId, SimTime, UnitId};

/// What a route leads to.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
pub enum RouteTarget {
    Emergency(EmergencyId),
    /// The unit's home station.
    Station,
}

/// An in-flight journey.  Exists from commit until arrival resolution.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteRecord {
    pub unit:        UnitId,
    pub origin:      NodeId,
    pub destination: NodeId,
    pub target:      RouteTarget,
    pub departure:   SimTime,
    pub arrival:     SimTime,
    /// Distance charged to the unit on arrival.
    pub distance:    f64,
}

impl RouteRecord {
    #[inline]
    pub fn travel_secs(&self) -> f64 {
        self.arrival - self.departure
    }

    pub fn emergency(&self) -> Option<EmergencyId> {
        match self.target {
            RouteTarget::Emergency(id) => Some(id),
            RouteTarget::Station => None,
        }
    }
}
