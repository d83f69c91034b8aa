//! Simulation time model.
//!
//! # Design
//!
//! The orchestrator is event-driven: time jumps straight from one event to
//! the next, and travel times are `distance / speed`, so instants are
//! fractional.  `SimTime` is therefore an `f64` count of seconds since the
//! start of the run.
//!
//! `f64` is not `Ord`, but event queues need a total order.  `SimTime`
//! compares with [`f64::total_cmp`], and every constructor rejects NaN in
//! debug builds, so the order agrees with ordinary numeric comparison for
//! every value the simulation produces.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulation instant in seconds.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    #[inline]
    pub fn from_secs(secs: f64) -> Self {
        debug_assert!(!secs.is_nan(), "SimTime must not be NaN");
        SimTime(secs)
    }

    #[inline]
    pub fn secs(self) -> f64 {
        self.0
    }

    /// The instant `secs` seconds after `self`.
    #[inline]
    pub fn after(self, secs: f64) -> SimTime {
        SimTime::from_secs(self.0 + secs)
    }

    /// Seconds elapsed from `earlier` to `self` (negative if `earlier` is later).
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        self.after(rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.since(rhs)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.1}s", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The orchestrator's notion of "now".
///
/// The clock only moves forward; `advance_to` an earlier instant is a no-op
/// so that same-instant events never rewind time.
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    now: SimTime,
    events: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Number of event instants processed so far.
    #[inline]
    pub fn events(&self) -> u64 {
        self.events
    }

    /// Jump to the next event instant.
    pub fn advance_to(&mut self, t: SimTime) {
        if t > self.now {
            self.now = t;
        }
        self.events += 1;
    }
}
