//! `SpawnQueue` — feed records waiting to materialize.
//!
//! Records are bucketed by spawn instant.  The orchestrator peeks the
//! earliest instant to schedule its next event and drains every bucket up
//! to the current time in one go.  Within one instant, records keep their
//! insertion order.

use std::collections::BTreeMap;

use ed_core::SimTime;

use crate::EmergencyRecord;

#[derive(Debug, Default)]
pub struct SpawnQueue {
    inner: BTreeMap<SimTime, Vec<EmergencyRecord>>,
    /// Cached total record count for O(1) `len()`.
    total: usize,
}

impl SpawnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I: IntoIterator<Item = EmergencyRecord>>(records: I) -> Self {
        let mut queue = Self::new();
        for r in records {
            queue.push(r);
        }
        queue
    }

    pub fn push(&mut self, record: EmergencyRecord) {
        self.inner.entry(record.spawn_time).or_default().push(record);
        self.total += 1;
    }

    /// The earliest pending spawn instant, or `None` if empty.
    pub fn next_time(&self) -> Option<SimTime> {
        self.inner.keys().next().copied()
    }

    /// Remove and return every record with `spawn_time <= now`, in spawn
    /// order.
    pub fn drain_up_to(&mut self, now: SimTime) -> Vec<EmergencyRecord> {
        let mut out = Vec::new();
        while let Some(entry) = self.inner.first_entry() {
            if *entry.key() > now {
                break;
            }
            out.extend(entry.remove());
        }
        self.total -= out.len();
        out
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
