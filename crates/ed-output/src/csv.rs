//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `outcomes.csv`
//! - `routes.csv`
//! - `responders.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutcomeRow, OutputResult, ResponderRow, RouteRow};

fn opt(v: Option<u32>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

/// Writes run output to three CSV files.
pub struct CsvWriter {
    outcomes:   Writer<File>,
    routes:     Writer<File>,
    responders: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the three CSV files, and write headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut outcomes = Writer::from_path(dir.join("outcomes.csv"))?;
        outcomes.write_record([
            "id", "responded", "response_time", "travel_time", "time_remaining", "unit_id", "score",
        ])?;

        let mut routes = Writer::from_path(dir.join("routes.csv"))?;
        routes.write_record(["unit_id", "emergency_id", "departure", "arrival", "distance"])?;

        let mut responders = Writer::from_path(dir.join("responders.csv"))?;
        responders.write_record(["unit_id", "station", "type", "points", "cost"])?;

        Ok(Self { outcomes, routes, responders, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_outcome(&mut self, row: &OutcomeRow) -> OutputResult<()> {
        self.outcomes.write_record(&[
            row.emergency_id.to_string(),
            row.responded.to_string(),
            row.response_time.to_string(),
            row.travel_time.to_string(),
            row.time_remaining.to_string(),
            opt(row.unit_id),
            row.score.to_string(),
        ])?;
        Ok(())
    }

    fn write_route(&mut self, row: &RouteRow) -> OutputResult<()> {
        self.routes.write_record(&[
            row.unit_id.to_string(),
            opt(row.emergency_id),
            row.departure.to_string(),
            row.arrival.to_string(),
            row.distance.to_string(),
        ])?;
        Ok(())
    }

    fn write_responders(&mut self, rows: &[ResponderRow]) -> OutputResult<()> {
        for row in rows {
            self.responders.write_record(&[
                row.unit_id.to_string(),
                row.station.clone(),
                row.kind.as_str().to_owned(),
                row.points.to_string(),
                row.cost.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.outcomes.flush()?;
        self.routes.flush()?;
        self.responders.flush()?;
        Ok(())
    }
}
