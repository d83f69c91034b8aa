//! Per-emergency outcomes and the run summary.

use serde::Serialize;

use ed_core::{EmergencyId, UnitId, UnitKind};
use ed_feed::Emergency;
use ed_fleet::{Fleet, RouteRecord};

/// Score of a late, expired, or unserved emergency.
pub const MISS_SCORE: f64 = -2.0;

/// Seconds of slack worth one point.
const SECS_PER_POINT: f64 = 60.0;

// ── Outcome ───────────────────────────────────────────────────────────────────

/// Final record for one emergency.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Outcome {
    pub id:             EmergencyId,
    /// A unit arrived no later than the deadline.
    pub responded:      bool,
    /// Arrival instant in seconds; the deadline when no unit ever came.
    pub response_time:  f64,
    pub travel_time:    f64,
    /// Slack at arrival; `0` unless responded.
    pub time_remaining: f64,
    pub unit_id:        Option<UnitId>,
    pub score:          f64,
}

impl Outcome {
    /// A unit reached `emergency` via `route`.  On time → responded.
    pub(crate) fn arrival(emergency: &Emergency, route: &RouteRecord) -> Self {
        let slack = emergency.deadline - route.arrival;
        let on_time = route.arrival <= emergency.deadline;
        Self {
            id:             emergency.id,
            responded:      on_time,
            response_time:  route.arrival.secs(),
            travel_time:    route.travel_secs(),
            time_remaining: if on_time { slack } else { 0.0 },
            unit_id:        Some(route.unit),
            score:          if on_time { slack / SECS_PER_POINT } else { MISS_SCORE },
        }
    }

    /// No unit ever reached `emergency`.
    pub(crate) fn unserved(emergency: &Emergency) -> Self {
        Self {
            id:             emergency.id,
            responded:      false,
            response_time:  emergency.deadline.secs(),
            travel_time:    0.0,
            time_remaining: 0.0,
            unit_id:        None,
            score:          MISS_SCORE,
        }
    }
}

// ── Summary ───────────────────────────────────────────────────────────────────

/// Points and cost accumulated by one unit.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResponderTotals {
    pub unit:    UnitId,
    pub station: String,
    pub kind:    UnitKind,
    pub points:  f64,
    pub cost:    f64,
}

/// Aggregate results of one run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub total_score:        f64,
    pub handled_count:      usize,
    pub failed_count:       usize,
    pub success_rate:       f64,
    /// Mean travel time of responded emergencies.
    pub avg_response_time:  f64,
    pub avg_time_remaining: f64,
    pub total_points:       f64,
    pub total_cost:         f64,
    /// `total_points − total_cost`.
    pub net_score:          f64,
    pub events:             u64,
    pub end_time:           f64,
    pub per_responder:      Vec<ResponderTotals>,
}

impl Summary {
    pub(crate) fn build(outcomes: &[Outcome], fleet: &Fleet, events: u64, end_time: f64) -> Self {
        let handled: Vec<&Outcome> = outcomes.iter().filter(|o| o.responded).collect();
        let handled_count = handled.len();
        let mean = |f: fn(&Outcome) -> f64| {
            if handled_count == 0 {
                0.0
            } else {
                handled.iter().map(|o| f(o)).sum::<f64>() / handled_count as f64
            }
        };

        let per_responder: Vec<ResponderTotals> = fleet
            .responders()
            .iter()
            .map(|r| ResponderTotals {
                unit:    r.id,
                station: fleet.station(r.station).map(|s| s.name.clone()).unwrap_or_default(),
                kind:    r.kind,
                points:  r.points,
                cost:    r.cumulative_cost,
            })
            .collect();
        let total_points: f64 = per_responder.iter().map(|t| t.points).sum();
        let total_cost: f64 = per_responder.iter().map(|t| t.cost).sum();

        Self {
            total_score:        outcomes.iter().map(|o| o.score).sum(),
            handled_count,
            failed_count:       outcomes.len() - handled_count,
            success_rate:       if outcomes.is_empty() { 0.0 } else { handled_count as f64 / outcomes.len() as f64 },
            avg_response_time:  mean(|o| o.travel_time),
            avg_time_remaining: mean(|o| o.time_remaining),
            total_points,
            total_cost,
            net_score:          total_points - total_cost,
            events,
            end_time,
            per_responder,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let total = self.handled_count + self.failed_count;
        writeln!(f, "  handled        {}/{} ({:.1}%)", self.handled_count, total, self.success_rate * 100.0)?;
        writeln!(f, "  total score    {:.2}", self.total_score)?;
        writeln!(f, "  avg travel     {:.1}s", self.avg_response_time)?;
        writeln!(f, "  avg slack      {:.1}s", self.avg_time_remaining)?;
        write!(f, "  points − cost  {:.1} − {:.1} = {:.1}", self.total_points, self.total_cost, self.net_score)
    }
}
