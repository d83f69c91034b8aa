//! Plain data row types written by output backends.

use ed_core::UnitKind;
use ed_fleet::{RouteRecord, RouteTarget};
use ed_sim::{Outcome, ResponderTotals};

/// Final state of one emergency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutcomeRow {
    pub emergency_id:   u32,
    pub responded:      bool,
    pub response_time:  f64,
    pub travel_time:    f64,
    pub time_remaining: f64,
    /// `None` when no unit was ever sent.
    pub unit_id:        Option<u32>,
    pub score:          f64,
}

impl From<&Outcome> for OutcomeRow {
    fn from(o: &Outcome) -> Self {
        Self {
            emergency_id:   o.id.0,
            responded:      o.responded,
            response_time:  o.response_time,
            travel_time:    o.travel_time,
            time_remaining: o.time_remaining,
            unit_id:        o.unit_id.map(|u| u.0),
            score:          o.score,
        }
    }
}

/// One committed journey.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRow {
    pub unit_id:      u32,
    /// `None` for a return to the home station.
    pub emergency_id: Option<u32>,
    pub departure:    f64,
    pub arrival:      f64,
    pub distance:     f64,
}

impl From<&RouteRecord> for RouteRow {
    fn from(r: &RouteRecord) -> Self {
        Self {
            unit_id:      r.unit.0,
            emergency_id: match r.target {
                RouteTarget::Emergency(id) => Some(id.0),
                RouteTarget::Station => None,
            },
            departure:    r.departure.secs(),
            arrival:      r.arrival.secs(),
            distance:     r.distance,
        }
    }
}

/// Points and cost accumulated by one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponderRow {
    pub unit_id: u32,
    pub station: String,
    pub kind:    UnitKind,
    pub points:  f64,
    pub cost:    f64,
}

impl From<&ResponderTotals> for ResponderRow {
    fn from(t: &ResponderTotals) -> Self {
        Self {
            unit_id: t.unit.0,
            station: t.station.clone(),
            kind:    t.kind,
            points:  t.points,
            cost:    t.cost,
        }
    }
}
