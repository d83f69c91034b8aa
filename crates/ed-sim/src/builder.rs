//! Fluent builder for constructing a [`Sim`].

use std::collections::BTreeSet;

use tracing::warn;

use ed_core::{DispatchConfig, SimClock};
use ed_dispatch::{Dispatcher, ScoringRule, rule_for};
use ed_feed::{EmergencyBoard, EmergencyRecord, FeedError, SpawnQueue, StationSpec};
use ed_fleet::FleetBuilder;
use ed_spatial::{DistanceService, NodeTable};

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim<S>`].
///
/// # Required inputs
///
/// - [`DispatchConfig`]
/// - `S: ScoringRule` — or use [`SimBuilder::from_config`] to pick the rule
///   named by `config.policy`
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default              |
/// |-------------------|----------------------|
/// | `.emergencies(v)` | no emergencies       |
/// | `.stations(v)`    | no stations          |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, DeadlineAware::default())
///     .emergencies(records)
///     .stations(stations)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<S: ScoringRule> {
    config:      DispatchConfig,
    rule:        S,
    emergencies: Vec<EmergencyRecord>,
    stations:    Vec<StationSpec>,
}

impl SimBuilder<Box<dyn ScoringRule>> {
    /// Builder whose rule follows `config.policy`.
    pub fn from_config(config: DispatchConfig) -> Self {
        let rule = rule_for(&config);
        Self::new(config, rule)
    }
}

impl<S: ScoringRule> SimBuilder<S> {
    pub fn new(config: DispatchConfig, rule: S) -> Self {
        Self { config, rule, emergencies: Vec::new(), stations: Vec::new() }
    }

    /// The feed.  Order does not matter; spawns are replayed by time.
    pub fn emergencies(mut self, records: Vec<EmergencyRecord>) -> Self {
        self.emergencies = records;
        self
    }

    pub fn stations(mut self, stations: Vec<StationSpec>) -> Self {
        self.stations = stations;
        self
    }

    /// Validate inputs, place stations, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<S>> {
        // ── Validate ──────────────────────────────────────────────────────
        self.config.validate()?;

        let mut ids = BTreeSet::new();
        for record in &self.emergencies {
            if !ids.insert(record.id) {
                return Err(FeedError::DuplicateId(record.id).into());
            }
            record.validate()?;
        }

        // ── Place stations and units ──────────────────────────────────────
        let mut distances = DistanceService::new(NodeTable::new());
        let fleet = FleetBuilder::new(self.config.unit_speed)
            .stations(self.stations)
            .build(&mut distances)?;
        if fleet.is_empty() && !self.emergencies.is_empty() {
            warn!(emergencies = self.emergencies.len(), "no responder units; every emergency will fail");
        }

        Ok(Sim {
            clock:      SimClock::new(),
            spawns:     SpawnQueue::from_records(self.emergencies),
            board:      EmergencyBoard::new(),
            dispatcher: Dispatcher::new(self.rule),
            config:     self.config,
            distances,
            fleet,
            outcomes:   Vec::new(),
            finished:   None,
        })
    }
}
