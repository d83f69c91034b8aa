//! Station proposals from historical emergencies.

use std::collections::BTreeMap;

use tracing::{info, warn};

use ed_core::{CapabilityTable, PlacementConfig, Point, SimRng, UnitKind};
use ed_feed::{EmergencyRecord, StationSpec};

use crate::{PlacementResult, WeightedPoint, weighted_kmeans};

/// Propose `count` stations for every `(kind, count)` entry of `plan`.
///
/// Each kind clusters only the emergencies its units can serve, weighted by
/// `1 / window` so urgent calls pull harder.  Stations are named by kind
/// letter and a per-kind counter (`F1`, `F2`, `P1`, …) and get
/// `config.units_per_station` units each.  A kind with nothing to serve gets
/// uniformly random sites inside `config.area`.
pub fn propose_stations(
    emergencies:  &[EmergencyRecord],
    plan:         &[(UnitKind, usize)],
    capabilities: &CapabilityTable,
    config:       &PlacementConfig,
    rng:          &mut SimRng,
) -> PlacementResult<Vec<StationSpec>> {
    let mut counters: BTreeMap<UnitKind, usize> = BTreeMap::new();
    let mut out = Vec::new();

    for &(kind, count) in plan {
        if count == 0 {
            continue;
        }
        let points: Vec<WeightedPoint> = emergencies
            .iter()
            .filter(|e| capabilities.can_serve(kind, e.category))
            .map(|e| WeightedPoint::new(e.location, 1.0 / e.window_secs))
            .collect();

        let sites = if points.is_empty() {
            warn!(%kind, count, "no emergencies this kind can serve; placing at random");
            (0..count).map(|_| random_site(config, rng)).collect()
        } else {
            let result = weighted_kmeans(&points, count, config, rng)?;
            info!(
                %kind,
                count,
                points = points.len(),
                iterations = result.iterations,
                converged = result.converged,
                "clustered station sites"
            );
            result.centroids
        };

        let n = counters.entry(kind).or_insert(0);
        for site in sites {
            *n += 1;
            let name = format!("{}{}", kind.letter(), n);
            out.push(StationSpec::new(name, kind, site, config.units_per_station));
        }
    }
    Ok(out)
}

fn random_site(config: &PlacementConfig, rng: &mut SimRng) -> Point {
    let area = config.area;
    Point::new(rng.uniform(area.min.x, area.max.x), rng.uniform(area.min.y, area.max.y))
}
