//! Fluent builder for a [`Fleet`].
//!
//! ```rust,ignore
//! let fleet = FleetBuilder::new(config.unit_speed)
//!     .stations(specs)
//!     .build(&mut distances)?;
//! ```
//!
//! Each station's location is registered as a node in the distance service,
//! and `unit_count` units are created per station.  Unit ids are dense and
//! follow station order.

use ed_core::{StationId, UnitId};
use ed_feed::StationSpec;
use ed_spatial::DistanceService;

use crate::{Fleet, FleetError, FleetResult, Responder, Station};

pub struct FleetBuilder {
    speed:       f64,
    specs:       Vec<StationSpec>,
    extra_units: Vec<String>,
}

impl FleetBuilder {
    pub fn new(speed: f64) -> Self {
        Self { speed, specs: Vec::new(), extra_units: Vec::new() }
    }

    pub fn station(mut self, spec: StationSpec) -> Self {
        self.specs.push(spec);
        self
    }

    pub fn stations<I: IntoIterator<Item = StationSpec>>(mut self, specs: I) -> Self {
        self.specs.extend(specs);
        self
    }

    /// Add one unit on top of the station's `unit_count`, by station name.
    pub fn unit_at(mut self, station: impl Into<String>) -> Self {
        self.extra_units.push(station.into());
        self
    }

    pub fn build(self, distances: &mut DistanceService) -> FleetResult<Fleet> {
        let mut stations: Vec<Station> = Vec::with_capacity(self.specs.len());
        let mut responders: Vec<Responder> = Vec::new();

        for (i, spec) in self.specs.into_iter().enumerate() {
            if stations.iter().any(|s| s.name == spec.name) {
                return Err(FleetError::DuplicateStation(spec.name));
            }
            let id = StationId(i as u32);
            let node = distances.add_node(spec.location)?;
            let units: Vec<UnitId> = (0..spec.unit_count)
                .map(|_| {
                    let unit = UnitId(responders.len() as u32);
                    responders.push(Responder::new(unit, id, spec.kind, node));
                    unit
                })
                .collect();
            stations.push(Station {
                id,
                name:     spec.name,
                kind:     spec.kind,
                location: spec.location,
                node,
                units,
            });
        }

        for name in self.extra_units {
            let station = stations
                .iter_mut()
                .find(|s| s.name == name)
                .ok_or(FleetError::UnknownStation(name))?;
            let unit = UnitId(responders.len() as u32);
            station.units.push(unit);
            responders.push(Responder::new(unit, station.id, station.kind, station.node));
        }

        Ok(Fleet {
            stations,
            responders,
            routes: Default::default(),
            speed:  self.speed,
        })
    }
}
