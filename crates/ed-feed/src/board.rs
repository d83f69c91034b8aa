//! `EmergencyBoard` — every materialized emergency plus the pending set.
//!
//! The board is the single owner of emergency status.  Each emergency is in
//! exactly one of the four states, and only `Pending` emergencies are in the
//! pending set.  Transitions:
//!
//! | From        | To          | Method                     |
//! |-------------|-------------|----------------------------|
//! | `Pending`   | `Committed` | [`EmergencyBoard::commit`] |
//! | `Committed` | `Resolved`  | [`EmergencyBoard::resolve`]|
//! | `Pending` / `Committed` | `Failed` | [`EmergencyBoard::fail`] |
//!
//! Anything else is a `FeedError::InvalidTransition`.

use std::collections::{BTreeMap, BTreeSet};

use ed_core::{EmergencyId, SimTime, UnitId};

use crate::{Emergency, EmergencyStatus, FeedError, FeedResult};

#[derive(Debug, Default)]
pub struct EmergencyBoard {
    emergencies: BTreeMap<EmergencyId, Emergency>,
    /// Ids with status `Pending`, ascending.
    pending:     BTreeSet<EmergencyId>,
}

impl EmergencyBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a freshly spawned emergency.  It must be `Pending`.
    pub fn insert(&mut self, emergency: Emergency) -> FeedResult<()> {
        if self.emergencies.contains_key(&emergency.id) {
            return Err(FeedError::DuplicateId(emergency.id));
        }
        if emergency.status != EmergencyStatus::Pending {
            return Err(FeedError::InvalidTransition {
                id:   emergency.id,
                from: emergency.status,
                to:   EmergencyStatus::Pending,
            });
        }
        self.pending.insert(emergency.id);
        self.emergencies.insert(emergency.id, emergency);
        Ok(())
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn get(&self, id: EmergencyId) -> Option<&Emergency> {
        self.emergencies.get(&id)
    }

    pub fn status(&self, id: EmergencyId) -> Option<EmergencyStatus> {
        self.emergencies.get(&id).map(|e| e.status)
    }

    /// Pending emergencies in ascending id order.
    pub fn pending(&self) -> impl Iterator<Item = &Emergency> + '_ {
        self.pending.iter().filter_map(|id| self.emergencies.get(id))
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Every emergency, ascending id.
    pub fn iter(&self) -> impl Iterator<Item = &Emergency> + '_ {
        self.emergencies.values()
    }

    pub fn len(&self) -> usize {
        self.emergencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emergencies.is_empty()
    }

    /// Number of emergencies currently in `status`.
    pub fn count(&self, status: EmergencyStatus) -> usize {
        self.emergencies.values().filter(|e| e.status == status).count()
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// `Pending → Committed`, recording the unit.
    pub fn commit(&mut self, id: EmergencyId, unit: UnitId) -> FeedResult<&Emergency> {
        let e = self.transition(id, EmergencyStatus::Committed)?;
        e.assigned = Some(unit);
        Ok(e)
    }

    /// `Committed → Resolved`.
    pub fn resolve(&mut self, id: EmergencyId) -> FeedResult<&Emergency> {
        self.transition(id, EmergencyStatus::Resolved).map(|e| &*e)
    }

    /// `Pending | Committed → Failed`.
    pub fn fail(&mut self, id: EmergencyId) -> FeedResult<&Emergency> {
        self.transition(id, EmergencyStatus::Failed).map(|e| &*e)
    }

    /// Fail every pending emergency whose deadline is strictly before `now`.
    /// Returns the expired ids in ascending order.
    pub fn expire_before(&mut self, now: SimTime) -> Vec<EmergencyId> {
        let expired: Vec<EmergencyId> = self
            .pending()
            .filter(|e| e.deadline < now)
            .map(|e| e.id)
            .collect();
        for &id in &expired {
            if let Some(e) = self.emergencies.get_mut(&id) {
                e.status = EmergencyStatus::Failed;
            }
            self.pending.remove(&id);
        }
        expired
    }

    /// Fail everything still pending (end of run).
    pub fn fail_all_pending(&mut self) -> Vec<EmergencyId> {
        let ids: Vec<EmergencyId> = std::mem::take(&mut self.pending).into_iter().collect();
        for id in &ids {
            if let Some(e) = self.emergencies.get_mut(id) {
                e.status = EmergencyStatus::Failed;
            }
        }
        ids
    }

    fn transition(&mut self, id: EmergencyId, to: EmergencyStatus) -> FeedResult<&mut Emergency> {
        let e = self.emergencies.get_mut(&id).ok_or(FeedError::UnknownEmergency(id))?;
        let allowed = matches!(
            (e.status, to),
            (EmergencyStatus::Pending, EmergencyStatus::Committed)
                | (EmergencyStatus::Committed, EmergencyStatus::Resolved)
                | (EmergencyStatus::Pending, EmergencyStatus::Failed)
                | (EmergencyStatus::Committed, EmergencyStatus::Failed)
        );
        if !allowed {
            return Err(FeedError::InvalidTransition { id, from: e.status, to });
        }
        e.status = to;
        self.pending.remove(&id);
        Ok(e)
    }
}
