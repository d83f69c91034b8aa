//! Emergency records and the validated `Emergency` entity.
//!
//! An [`EmergencyRecord`] is a raw feed row.  It becomes an [`Emergency`] only
//! through [`Emergency::from_record`], which validates it and derives the
//! urgency tier, reward, and deadline from the run configuration.

use serde::{Deserialize, Serialize};

use ed_core::{
    Category, DispatchConfig, EmergencyId, NodeId, Point, SimTime, UnitId, UrgencyTier,
};

use crate::{FeedError, FeedResult};

// ── EmergencyRecord ───────────────────────────────────────────────────────────

/// One row of the emergency feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmergencyRecord {
    pub id:          EmergencyId,
    pub spawn_time:  SimTime,
    pub location:    Point,
    pub category:    Category,
    /// Seconds allowed between spawn and deadline.
    pub window_secs: f64,
}

impl EmergencyRecord {
    /// Check the record without building anything.
    ///
    /// Coordinates must be finite and non-negative, the spawn time finite and
    /// non-negative, and the response window finite and positive.
    pub fn validate(&self) -> FeedResult<()> {
        let invalid = |reason: String| FeedError::InvalidRecord { id: self.id, reason };

        if !self.location.is_finite() || self.location.x < 0.0 || self.location.y < 0.0 {
            return Err(invalid(format!("location {} must be finite and non-negative", self.location)));
        }
        if !self.spawn_time.secs().is_finite() || self.spawn_time.secs() < 0.0 {
            return Err(invalid(format!("spawn time {} must be finite and non-negative", self.spawn_time)));
        }
        if !self.window_secs.is_finite() || self.window_secs <= 0.0 {
            return Err(invalid(format!("response window {} must be positive", self.window_secs)));
        }
        Ok(())
    }

    /// `spawn_time + window`.
    #[inline]
    pub fn deadline(&self) -> SimTime {
        self.spawn_time + self.window_secs
    }
}

// ── EmergencyStatus ───────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmergencyStatus {
    /// Spawned, waiting for a unit.
    Pending,
    /// A unit is en route.
    Committed,
    /// A unit arrived on time.
    Resolved,
    /// Missed: arrived late, expired, or never served.
    Failed,
}

// ── Emergency ─────────────────────────────────────────────────────────────────

/// A materialized emergency.
///
/// Fields other than `status` and `assigned` are fixed at construction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Emergency {
    pub id:          EmergencyId,
    pub spawn_time:  SimTime,
    pub location:    Point,
    /// Node registered for `location` in the distance service.
    pub node:        NodeId,
    pub category:    Category,
    pub window_secs: f64,
    pub tier:        UrgencyTier,
    /// Points credited to the responder on an on-time arrival.
    pub reward:      f64,
    pub deadline:    SimTime,
    pub status:      EmergencyStatus,
    /// The unit committed to this emergency, once there is one.
    pub assigned:    Option<UnitId>,
}

impl Emergency {
    /// Validate `record` and build a pending emergency located at `node`.
    pub fn from_record(
        record: &EmergencyRecord,
        node:   NodeId,
        config: &DispatchConfig,
    ) -> FeedResult<Self> {
        record.validate()?;
        Ok(Self {
            id:          record.id,
            spawn_time:  record.spawn_time,
            location:    record.location,
            node,
            category:    record.category,
            window_secs: record.window_secs,
            tier:        config.tiers.tier_for_window(record.window_secs),
            reward:      config.reward.reward(record.window_secs),
            deadline:    record.deadline(),
            status:      EmergencyStatus::Pending,
            assigned:    None,
        })
    }
}
