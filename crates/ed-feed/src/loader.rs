//! CSV loaders for the emergency feed and the station table.
//!
//! # Emergency feed
//!
//! ```csv
//! t,x,y,etype,priority_s,id
//! 0,120.5,33.0,fire,60,1
//! 4.5,10,180,medical,240,2
//! ```
//!
//! | Column       | Meaning                                          |
//! |--------------|--------------------------------------------------|
//! | `t`          | spawn time, seconds                              |
//! | `x`, `y`     | location on the dispatch grid                    |
//! | `etype`      | `fire`, `medical`, or `police`                   |
//! | `priority_s` | response window in seconds (deadline = t + window) |
//! | `id`         | unique emergency id                              |
//!
//! Rows may appear in any order; the result is sorted by spawn time (stable,
//! so same-instant rows keep file order).
//!
//! # Station table
//!
//! ```csv
//! station_id,type,x,y,unit_count
//! F1,fire,20,20,2
//! H1,hospital,100,30,2
//! ```
//!
//! `type` accepts `fire`, `police`, and `medical` (or `paramedic` /
//! `hospital`).  The same table can also be given as a JSON array of
//! [`StationSpec`] objects via [`load_stations_json`].

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use ed_core::{Category, EmergencyId, Point, SimTime, UnitKind};

use crate::{EmergencyRecord, FeedError, FeedResult, StationSpec};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FeedRow {
    t:          f64,
    x:          f64,
    y:          f64,
    etype:      String,
    priority_s: f64,
    id:         u32,
}

#[derive(Deserialize)]
struct StationRow {
    station_id: String,
    #[serde(rename = "type")]
    kind:       String,
    x:          f64,
    y:          f64,
    unit_count: u32,
}

// ── Emergencies ───────────────────────────────────────────────────────────────

/// Load and validate the emergency feed from a CSV file.
pub fn load_emergencies_csv(path: &Path) -> FeedResult<Vec<EmergencyRecord>> {
    let file = std::fs::File::open(path).map_err(FeedError::Io)?;
    load_emergencies_reader(file)
}

/// Like [`load_emergencies_csv`] but accepts any `Read` source.
pub fn load_emergencies_reader<R: Read>(reader: R) -> FeedResult<Vec<EmergencyRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    let mut seen = BTreeSet::new();

    for result in csv_reader.deserialize::<FeedRow>() {
        let row = result.map_err(|e| FeedError::Parse(e.to_string()))?;
        let id = EmergencyId(row.id);
        if !seen.insert(id) {
            return Err(FeedError::DuplicateId(id));
        }
        let category: Category = row.etype.parse()?;
        let record = EmergencyRecord {
            id,
            spawn_time:  SimTime::from_secs(row.t),
            location:    Point::new(row.x, row.y),
            category,
            window_secs: row.priority_s,
        };
        record.validate()?;
        records.push(record);
    }

    records.sort_by_key(|r| r.spawn_time);
    debug!(count = records.len(), "loaded emergency feed");
    Ok(records)
}

// ── Stations ──────────────────────────────────────────────────────────────────

/// Load the station table from a CSV file.
pub fn load_stations_csv(path: &Path) -> FeedResult<Vec<StationSpec>> {
    let file = std::fs::File::open(path).map_err(FeedError::Io)?;
    load_stations_reader(file)
}

/// Like [`load_stations_csv`] but accepts any `Read` source.
pub fn load_stations_reader<R: Read>(reader: R) -> FeedResult<Vec<StationSpec>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut stations = Vec::new();

    for result in csv_reader.deserialize::<StationRow>() {
        let row = result.map_err(|e| FeedError::Parse(e.to_string()))?;
        let kind: UnitKind = row.kind.parse()?;
        stations.push(StationSpec::new(row.station_id, kind, Point::new(row.x, row.y), row.unit_count));
    }

    validate_stations(&stations)?;
    debug!(count = stations.len(), "loaded station table");
    Ok(stations)
}

/// Load the station table from a JSON array of `StationSpec` objects.
pub fn load_stations_json(path: &Path) -> FeedResult<Vec<StationSpec>> {
    let text = std::fs::read_to_string(path)?;
    let stations: Vec<StationSpec> = serde_json::from_str(&text)
        .map_err(|e| FeedError::Parse(e.to_string()))?;
    validate_stations(&stations)?;
    Ok(stations)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn validate_stations(stations: &[StationSpec]) -> FeedResult<()> {
    let mut names = BTreeSet::new();
    for s in stations {
        if !s.location.is_finite() {
            return Err(FeedError::Parse(format!(
                "station {:?}: location {} is not finite", s.name, s.location
            )));
        }
        if !names.insert(s.name.as_str()) {
            return Err(FeedError::Parse(format!("duplicate station id {:?}", s.name)));
        }
    }
    Ok(())
}
