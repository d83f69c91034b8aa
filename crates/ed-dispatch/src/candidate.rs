//! The per-pairing view a scoring rule sees.

use ed_core::{EmergencyId, SimTime, UnitId, UrgencyTier};

/// One (unit, emergency) pairing with every quantity a rule might need.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate {
    pub unit:            UnitId,
    pub emergency:       EmergencyId,
    pub tier:            UrgencyTier,
    pub reward:          f64,
    pub window_secs:     f64,
    pub deadline:        SimTime,
    /// Unit's current node → emergency.
    pub distance:        f64,
    /// Emergency → unit's home node.
    pub return_distance: f64,
    pub travel_secs:     f64,
    pub now:             SimTime,
}

impl Candidate {
    /// When the unit would reach the scene if it left now.
    #[inline]
    pub fn arrival(&self) -> SimTime {
        self.now + self.travel_secs
    }

    /// Seconds between now and the deadline.
    #[inline]
    pub fn time_to_deadline(&self) -> f64 {
        self.deadline - self.now
    }

    /// Seconds to spare on arrival (negative if late).
    #[inline]
    pub fn slack_on_arrival(&self) -> f64 {
        self.deadline - self.arrival()
    }
}
