//! Simulation observer trait for progress reporting and data collection.

use ed_core::SimTime;
use ed_feed::Emergency;
use ed_fleet::RouteRecord;

use crate::{Outcome, Summary};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// event loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — miss counter
///
/// ```rust,ignore
/// struct Misses(usize);
///
/// impl SimObserver for Misses {
///     fn on_outcome(&mut self, outcome: &Outcome) {
///         if !outcome.responded {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once per event instant, before any processing.
    fn on_event(&mut self, _now: SimTime) {}

    /// Called when an emergency materializes.
    fn on_spawn(&mut self, _now: SimTime, _emergency: &Emergency) {}

    /// Called for every route committed, including returns home.
    fn on_commit(&mut self, _now: SimTime, _route: &RouteRecord) {}

    /// Called when a route completes, before its outcome is recorded.
    fn on_arrival(&mut self, _now: SimTime, _route: &RouteRecord) {}

    /// Called once per emergency, when it reaches a final state.
    fn on_outcome(&mut self, _outcome: &Outcome) {}

    /// Called once after the loop ends and remaining emergencies are failed.
    fn on_sim_end(&mut self, _summary: &Summary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
