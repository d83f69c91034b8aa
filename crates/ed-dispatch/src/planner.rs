//! The greedy planning pass.

use rustc_hash::FxHashSet;
use tracing::trace;

use ed_core::{EmergencyId, NodeId, UnitId};
use ed_fleet::Responder;
use ed_spatial::DistanceService;

use crate::{Candidate, DispatchContext, DispatchResult, ScoringRule};

/// A decision produced by a planning pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Move {
    /// Send `unit` to `emergency` at `destination`.
    Respond {
        unit:        UnitId,
        emergency:   EmergencyId,
        destination: NodeId,
        distance:    f64,
        score:       f64,
    },
    /// Nothing feasible; drive back to the home station.
    ReturnHome {
        unit:     UnitId,
        distance: f64,
    },
}

/// Greedy dispatcher parameterized by its scoring rule.
pub struct Dispatcher<S: ScoringRule> {
    pub rule: S,
}

impl<S: ScoringRule> Dispatcher<S> {
    pub fn new(rule: S) -> Self {
        Self { rule }
    }

    /// Decide a move for every idle unit.
    ///
    /// Units are visited home-first, then by ascending id.  Each unit takes
    /// the best-scoring feasible pending emergency not already taken in this
    /// pass; pending emergencies are scanned in ascending id order and a tie
    /// keeps the earlier one.  A unit with nothing feasible that is away from
    /// home is sent back; one already home stays idle and gets no move.
    ///
    /// `distances` is only written to fill its cache.
    pub fn plan_pass(
        &self,
        ctx:       &DispatchContext<'_>,
        distances: &mut DistanceService,
    ) -> DispatchResult<Vec<Move>> {
        let mut idle: Vec<&Responder> = ctx.fleet.idle_units().collect();
        idle.sort_by_key(|r| (!r.at_home(), r.id));

        let mut taken: FxHashSet<EmergencyId> = FxHashSet::default();
        let mut moves = Vec::with_capacity(idle.len());

        for r in idle {
            match self.best_for(r, ctx, &taken, distances)? {
                Some(best) => {
                    taken.insert(best.emergency);
                    moves.push(Move::Respond {
                        unit:        r.id,
                        emergency:   best.emergency,
                        destination: best.destination,
                        distance:    best.distance,
                        score:       best.score,
                    });
                }
                None if !r.at_home() => {
                    let distance = distances.distance(r.location, r.home)?;
                    moves.push(Move::ReturnHome { unit: r.id, distance });
                }
                None => {}
            }
        }

        trace!(
            now = %ctx.now,
            pending = ctx.board.pending_len(),
            moves = moves.len(),
            rule = self.rule.name(),
            "planning pass"
        );
        Ok(moves)
    }

    fn best_for(
        &self,
        r:         &Responder,
        ctx:       &DispatchContext<'_>,
        taken:     &FxHashSet<EmergencyId>,
        distances: &mut DistanceService,
    ) -> DispatchResult<Option<Best>> {
        let config = ctx.config;
        let mut best: Option<Best> = None;

        for e in ctx.board.pending() {
            if taken.contains(&e.id)
                || !config.capabilities.can_serve(r.kind, e.category)
                || config.ignores(e.tier)
            {
                continue;
            }

            let distance = distances.distance(r.location, e.node)?;
            let return_distance = distances.distance(e.node, r.home)?;

            if let Some(max) = config.budget.max_route_cost {
                let leg = if config.budget.include_return_leg { return_distance } else { 0.0 };
                if r.cumulative_cost + distance + leg > max {
                    continue;
                }
            }

            let candidate = Candidate {
                unit:        r.id,
                emergency:   e.id,
                tier:        e.tier,
                reward:      e.reward,
                window_secs: e.window_secs,
                deadline:    e.deadline,
                distance,
                return_distance,
                travel_secs: ctx.fleet.travel_secs(distance),
                now:         ctx.now,
            };
            if !self.rule.feasible(&candidate) {
                continue;
            }

            let score = self.rule.score(&candidate);
            if best.as_ref().is_none_or(|b| score > b.score) {
                best = Some(Best { emergency: e.id, destination: e.node, distance, score });
            }
        }
        Ok(best)
    }
}

struct Best {
    emergency:   EmergencyId,
    destination: NodeId,
    distance:    f64,
    score:       f64,
}
