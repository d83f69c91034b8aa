//! The `Sim` struct and its event loop.

use tracing::{debug, info, trace};

use ed_core::{DispatchConfig, EmergencyId, ServiceModel, SimClock, SimTime, UnitId};
use ed_dispatch::{DispatchContext, Dispatcher, Move, ScoringRule};
use ed_feed::{Emergency, EmergencyBoard, EmergencyStatus, FeedError, SpawnQueue};
use ed_fleet::{Fleet, RouteRecord, RouteTarget, UnitStatus};
use ed_spatial::DistanceService;

use crate::{Outcome, SimError, SimObserver, SimResult, Summary};

/// The main simulation runner.
///
/// `Sim<S>` owns every piece of run state, so independent runs never share
/// anything and can proceed on different threads.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: ScoringRule> {
    pub config: DispatchConfig,

    /// Current instant and event counter.
    pub clock: SimClock,

    /// Records not yet materialized, bucketed by spawn time.
    pub spawns: SpawnQueue,

    /// Every materialized emergency and the pending set.
    pub board: EmergencyBoard,

    /// Stations, units, and active routes.
    pub fleet: Fleet,

    /// Node locations and the distance cache.
    pub distances: DistanceService,

    pub dispatcher: Dispatcher<S>,

    /// Final outcomes in the order emergencies were finalized.
    pub outcomes: Vec<Outcome>,

    /// Set once the run has ended.
    pub(crate) finished: Option<Summary>,
}

impl<S: ScoringRule> Sim<S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until nothing is left to happen and return the summary.
    ///
    /// Calling `run` again after the end returns the same summary.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Summary> {
        while self.step(observer)? {}
        self.finish(observer)
    }

    /// Process the next event instant.  Returns `false` when there is none.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<bool> {
        if self.finished.is_some() {
            return Ok(false);
        }
        let Some(now) = self.next_event_time() else {
            return Ok(false);
        };
        self.clock.advance_to(now);
        let now = self.clock.now();
        observer.on_event(now);

        // ── ① Spawns ──────────────────────────────────────────────────────
        let mut replan = self.materialize_spawns(now, observer)?;

        // ── ② Arrivals, then services due ─────────────────────────────────
        for unit in self.fleet.due_arrivals(now) {
            replan |= self.resolve_arrival(unit, now, observer)?;
        }
        for unit in self.fleet.due_services(now) {
            let r = self.fleet.responder(unit)?;
            let distance = self.distances.distance(r.location, r.home)?;
            let route = self.fleet.commit_return(unit, distance, now)?;
            observer.on_commit(now, route);
        }

        // ── ③ Expiry ──────────────────────────────────────────────────────
        if self.config.service_model == ServiceModel::HandleAndReturn {
            for id in self.board.expire_before(now) {
                debug!(emergency = %id, %now, "expired before any unit was sent");
                self.record_unserved(id, observer)?;
            }
        }

        // ── ④ Plan ────────────────────────────────────────────────────────
        let stranded = !self.board.has_pending()
            && self.fleet.idle_units().any(|r| !r.at_home());
        if replan || stranded {
            self.plan_and_apply(now, observer)?;
        }

        Ok(true)
    }

    /// Fail everything still pending and build the summary.
    pub fn finish<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Summary> {
        if let Some(summary) = &self.finished {
            return Ok(summary.clone());
        }
        for id in self.board.fail_all_pending() {
            self.record_unserved(id, observer)?;
        }
        let summary = Summary::build(
            &self.outcomes,
            &self.fleet,
            self.clock.events(),
            self.clock.now().secs(),
        );
        observer.on_sim_end(&summary);
        info!(
            handled = summary.handled_count,
            failed = summary.failed_count,
            score = summary.total_score,
            net = summary.net_score,
            events = summary.events,
            distance_pairs = self.distances.cached_pairs(),
            distance_hits = self.distances.cache_hits(),
            "run complete"
        );
        self.finished = Some(summary.clone());
        Ok(summary)
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    /// The instant of the next spawn, arrival, or end of service.
    pub fn next_event_time(&self) -> Option<SimTime> {
        [
            self.spawns.next_time(),
            self.fleet.next_arrival(),
            self.fleet.next_service_end(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Cross-check board, fleet, and routes.
    ///
    /// - every route targets a `Committed` emergency assigned to its unit;
    /// - every `Committed` emergency has exactly one route targeting it;
    /// - enroute and returning units have a route, others have none.
    pub fn check_invariants(&self) -> SimResult<()> {
        let fail = |msg: String| Err(SimError::Invariant(msg));

        for route in self.fleet.routes() {
            if let RouteTarget::Emergency(id) = route.target {
                let Some(e) = self.board.get(id) else {
                    return fail(format!("{} routed to unknown {id}", route.unit));
                };
                if e.status != EmergencyStatus::Committed || e.assigned != Some(route.unit) {
                    return fail(format!("{} routed to {id} in state {:?}", route.unit, e.status));
                }
            }
        }
        for e in self.board.iter().filter(|e| e.status == EmergencyStatus::Committed) {
            let n = self
                .fleet
                .routes()
                .filter(|r| r.target == RouteTarget::Emergency(e.id))
                .count();
            if n != 1 {
                return fail(format!("{} committed but targeted by {n} routes", e.id));
            }
        }
        for r in self.fleet.responders() {
            let in_flight = matches!(r.status, UnitStatus::Enroute | UnitStatus::Returning);
            if in_flight != self.fleet.route(r.id).is_some() {
                return fail(format!("{} is {:?} with route = {}", r.id, r.status, !in_flight));
            }
        }
        Ok(())
    }

    // ── Event handling ────────────────────────────────────────────────────

    fn materialize_spawns<O: SimObserver>(&mut self, now: SimTime, observer: &mut O) -> SimResult<bool> {
        let records = self.spawns.drain_up_to(now);
        let spawned = !records.is_empty();
        for record in records {
            let node = self.distances.add_node(record.location)?;
            let emergency = Emergency::from_record(&record, node, &self.config)?;
            trace!(emergency = %emergency.id, tier = %emergency.tier, %now, "spawned");
            observer.on_spawn(now, &emergency);
            self.board.insert(emergency)?;
        }
        Ok(spawned)
    }

    /// Complete `unit`'s route.  Returns `true` if the unit is now idle.
    fn resolve_arrival<O: SimObserver>(
        &mut self,
        unit:     UnitId,
        now:      SimTime,
        observer: &mut O,
    ) -> SimResult<bool> {
        let route = self.fleet.arrive(unit)?;
        observer.on_arrival(now, &route);

        let RouteTarget::Emergency(id) = route.target else {
            return Ok(true);
        };
        let emergency = self.board.get(id).ok_or(FeedError::UnknownEmergency(id))?;
        let outcome = Outcome::arrival(emergency, &route);
        let responded = outcome.responded;
        let (reward, handling) = (emergency.reward, self.config.handling.handling_secs(emergency.tier));

        if responded {
            self.board.resolve(id)?;
            self.fleet.credit(unit, reward)?;
        } else {
            self.board.fail(id)?;
        }
        debug!(emergency = %id, %unit, responded, score = outcome.score, "arrival resolved");
        self.push_outcome(outcome, observer);

        // A late unit has nothing to handle and is free at once.
        if responded && self.config.service_model == ServiceModel::HandleAndReturn {
            self.fleet.start_service(unit, id, now + handling)?;
            return Ok(false);
        }
        Ok(true)
    }

    fn record_unserved<O: SimObserver>(&mut self, id: EmergencyId, observer: &mut O) -> SimResult<()> {
        let emergency = self.board.get(id).ok_or(FeedError::UnknownEmergency(id))?;
        let outcome = Outcome::unserved(emergency);
        self.push_outcome(outcome, observer);
        Ok(())
    }

    fn push_outcome<O: SimObserver>(&mut self, outcome: Outcome, observer: &mut O) {
        observer.on_outcome(&outcome);
        self.outcomes.push(outcome);
    }

    // ── Planning ──────────────────────────────────────────────────────────

    fn plan_and_apply<O: SimObserver>(&mut self, now: SimTime, observer: &mut O) -> SimResult<()> {
        let moves = {
            let ctx = DispatchContext::new(now, &self.board, &self.fleet, &self.config);
            self.dispatcher.plan_pass(&ctx, &mut self.distances)?
        };
        for mv in moves {
            let route = self.apply_move(mv, now)?;
            observer.on_commit(now, &route);
        }
        Ok(())
    }

    fn apply_move(&mut self, mv: Move, now: SimTime) -> SimResult<RouteRecord> {
        match mv {
            Move::Respond { unit, emergency, destination, distance, .. } => {
                self.board.commit(emergency, unit)?;
                Ok(self.fleet.commit_to_emergency(unit, emergency, destination, distance, now)?.clone())
            }
            Move::ReturnHome { unit, distance } => {
                Ok(self.fleet.commit_return(unit, distance, now)?.clone())
            }
        }
    }
}
