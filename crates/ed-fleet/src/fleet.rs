//! The `Fleet` — every responder plus the sparse route map.

use std::collections::BTreeMap;

use tracing::debug;

use ed_core::{EmergencyId, NodeId, SimTime, StationId, UnitId};

use crate::{FleetError, FleetResult, Responder, RouteRecord, RouteTarget, Station, UnitStatus};

/// Owns per-unit state and active routes.
///
/// `responders` is indexed by `UnitId`.  `routes` is sparse: only units in
/// flight have an entry, and a unit never has more than one.  Entries are
/// removed exactly once, by [`Fleet::arrive`].
pub struct Fleet {
    pub(crate) stations:   Vec<Station>,
    pub(crate) responders: Vec<Responder>,
    pub(crate) routes:     BTreeMap<UnitId, RouteRecord>,
    /// Distance units per second.
    pub(crate) speed:      f64,
}

impl Fleet {
    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.index())
    }

    pub fn responders(&self) -> &[Responder] {
        &self.responders
    }

    pub fn responder(&self, unit: UnitId) -> FleetResult<&Responder> {
        self.responders.get(unit.index()).ok_or(FleetError::UnknownUnit(unit))
    }

    fn responder_mut(&mut self, unit: UnitId) -> FleetResult<&mut Responder> {
        self.responders.get_mut(unit.index()).ok_or(FleetError::UnknownUnit(unit))
    }

    pub fn len(&self) -> usize {
        self.responders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responders.is_empty()
    }

    /// Seconds needed to cover `distance`.
    #[inline]
    pub fn travel_secs(&self, distance: f64) -> f64 {
        distance / self.speed
    }

    pub fn route(&self, unit: UnitId) -> Option<&RouteRecord> {
        self.routes.get(&unit)
    }

    /// Active routes, ascending unit id.
    pub fn routes(&self) -> impl Iterator<Item = &RouteRecord> + '_ {
        self.routes.values()
    }

    pub fn has_routes(&self) -> bool {
        !self.routes.is_empty()
    }

    /// Idle units, ascending id.
    pub fn idle_units(&self) -> impl Iterator<Item = &Responder> + '_ {
        self.responders.iter().filter(|r| r.is_idle())
    }

    // ── Commit ────────────────────────────────────────────────────────────

    /// Send an idle unit to an emergency at `destination`.
    ///
    /// `distance` is the distance from the unit's current node.  Returns the
    /// new route record.
    pub fn commit_to_emergency(
        &mut self,
        unit:        UnitId,
        emergency:   EmergencyId,
        destination: NodeId,
        distance:    f64,
        now:         SimTime,
    ) -> FleetResult<&RouteRecord> {
        self.check_can_depart(unit, UnitStatus::Idle)?;
        self.begin_route(unit, RouteTarget::Emergency(emergency), destination, distance, now)
    }

    /// Send a unit back to its home station.
    ///
    /// Valid from `Idle` (away from home) and from `Servicing` once handling
    /// is done.  The unit enters `Returning`.
    pub fn commit_return(&mut self, unit: UnitId, distance: f64, now: SimTime) -> FleetResult<&RouteRecord> {
        let r = self.responder(unit)?;
        let expected = if r.status == UnitStatus::Servicing { UnitStatus::Servicing } else { UnitStatus::Idle };
        let home = r.home;
        self.check_can_depart(unit, expected)?;
        self.begin_route(unit, RouteTarget::Station, home, distance, now)
    }

    fn check_can_depart(&self, unit: UnitId, expected: UnitStatus) -> FleetResult<()> {
        let r = self.responder(unit)?;
        if self.routes.contains_key(&unit) {
            return Err(FleetError::AlreadyCommitted(unit));
        }
        if r.status != expected {
            return Err(FleetError::WrongStatus { unit, status: r.status, expected });
        }
        Ok(())
    }

    fn begin_route(
        &mut self,
        unit:        UnitId,
        target:      RouteTarget,
        destination: NodeId,
        distance:    f64,
        now:         SimTime,
    ) -> FleetResult<&RouteRecord> {
        debug_assert!(distance >= 0.0, "negative route distance");
        let arrival = now + self.travel_secs(distance);
        let r = self.responder_mut(unit)?;
        let record = RouteRecord {
            unit,
            origin: r.location,
            destination,
            target,
            departure: now,
            arrival,
            distance,
        };
        r.busy_until = arrival;
        match target {
            RouteTarget::Emergency(e) => {
                r.status = UnitStatus::Enroute;
                r.commitment = Some(e);
            }
            RouteTarget::Station => {
                r.status = UnitStatus::Returning;
                r.commitment = None;
            }
        }
        debug!(%unit, ?target, distance, %arrival, "route committed");
        Ok(self.routes.entry(unit).or_insert(record))
    }

    // ── Arrival ───────────────────────────────────────────────────────────

    /// Earliest scheduled arrival, if any unit is in flight.
    pub fn next_arrival(&self) -> Option<SimTime> {
        self.routes.values().map(|r| r.arrival).min()
    }

    /// Units whose route arrives at or before `now`, ordered by arrival time
    /// then unit id.
    pub fn due_arrivals(&self, now: SimTime) -> Vec<UnitId> {
        let mut due: Vec<(SimTime, UnitId)> = self
            .routes
            .values()
            .filter(|r| r.arrival <= now)
            .map(|r| (r.arrival, r.unit))
            .collect();
        due.sort();
        due.into_iter().map(|(_, u)| u).collect()
    }

    /// Complete `unit`'s route: charge the distance, move the unit to the
    /// destination, and make it idle.  Returns the removed record.
    pub fn arrive(&mut self, unit: UnitId) -> FleetResult<RouteRecord> {
        let record = self.routes.remove(&unit).ok_or(FleetError::NoRoute(unit))?;
        let r = self.responder_mut(unit)?;
        r.cumulative_cost += record.distance;
        r.location = record.destination;
        r.busy_until = record.arrival;
        r.status = UnitStatus::Idle;
        r.commitment = None;
        debug!(%unit, target = ?record.target, cost = r.cumulative_cost, "arrived");
        Ok(record)
    }

    /// Credit `points` to `unit`.
    pub fn credit(&mut self, unit: UnitId, points: f64) -> FleetResult<()> {
        self.responder_mut(unit)?.points += points;
        Ok(())
    }

    // ── Service ───────────────────────────────────────────────────────────

    /// Keep an idle unit on scene at `emergency` until `until`.
    pub fn start_service(&mut self, unit: UnitId, emergency: EmergencyId, until: SimTime) -> FleetResult<()> {
        let r = self.responder_mut(unit)?;
        if r.status != UnitStatus::Idle {
            return Err(FleetError::WrongStatus { unit, status: r.status, expected: UnitStatus::Idle });
        }
        r.status = UnitStatus::Servicing;
        r.commitment = Some(emergency);
        r.busy_until = until;
        Ok(())
    }

    /// Earliest end of service among units on scene.
    pub fn next_service_end(&self) -> Option<SimTime> {
        self.responders
            .iter()
            .filter(|r| r.status == UnitStatus::Servicing)
            .map(|r| r.busy_until)
            .min()
    }

    /// Units whose service ends at or before `now`, ordered by end time then
    /// unit id.
    pub fn due_services(&self, now: SimTime) -> Vec<UnitId> {
        let mut due: Vec<(SimTime, UnitId)> = self
            .responders
            .iter()
            .filter(|r| r.status == UnitStatus::Servicing && r.busy_until <= now)
            .map(|r| (r.busy_until, r.id))
            .collect();
        due.sort();
        due.into_iter().map(|(_, u)| u).collect()
    }
}
