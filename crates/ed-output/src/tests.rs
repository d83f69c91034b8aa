//! Integration tests for ed-output.

use tempfile::TempDir;

use crate::csv::CsvWriter;
use crate::writer::OutputWriter;
use crate::{OutcomeRow, OutputError, OutputResult, ResponderRow, RouteRow};

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn read_rows(path: &std::path::Path) -> Vec<csv::StringRecord> {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    rdr.records().map(|r| r.unwrap()).collect()
}

fn outcome_row(id: u32, responded: bool) -> OutcomeRow {
    OutcomeRow {
        emergency_id:   id,
        responded,
        response_time:  40.0,
        travel_time:    if responded { 25.0 } else { 0.0 },
        time_remaining: if responded { 35.0 } else { 0.0 },
        unit_id:        responded.then_some(3),
        score:          if responded { 35.0 / 60.0 } else { -2.0 },
    }
}

/// Collects rows in memory.
#[derive(Default)]
struct MemWriter {
    outcomes:   Vec<OutcomeRow>,
    routes:     Vec<RouteRow>,
    responders: Vec<ResponderRow>,
    finished:   usize,
}

impl OutputWriter for MemWriter {
    fn write_outcome(&mut self, row: &OutcomeRow) -> OutputResult<()> {
        self.outcomes.push(*row);
        Ok(())
    }
    fn write_route(&mut self, row: &RouteRow) -> OutputResult<()> {
        self.routes.push(*row);
        Ok(())
    }
    fn write_responders(&mut self, rows: &[ResponderRow]) -> OutputResult<()> {
        self.responders.extend_from_slice(rows);
        Ok(())
    }
    fn finish(&mut self) -> OutputResult<()> {
        self.finished += 1;
        Ok(())
    }
}

/// Fails every outcome write.
struct BrokenWriter {
    attempts: usize,
}

impl OutputWriter for BrokenWriter {
    fn write_outcome(&mut self, _row: &OutcomeRow) -> OutputResult<()> {
        self.attempts += 1;
        Err(OutputError::Io(std::io::Error::other(format!("disk full #{}", self.attempts))))
    }
    fn write_route(&mut self, _row: &RouteRow) -> OutputResult<()> {
        Ok(())
    }
    fn write_responders(&mut self, _rows: &[ResponderRow]) -> OutputResult<()> {
        Ok(())
    }
    fn finish(&mut self) -> OutputResult<()> {
        Ok(())
    }
}

// ── CsvWriter ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::*;
    use ed_core::UnitKind;

    #[test]
    fn files_and_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let headers = |name: &str| -> Vec<String> {
            let mut rdr = csv::Reader::from_path(dir.path().join(name)).unwrap();
            rdr.headers().unwrap().iter().map(str::to_owned).collect()
        };
        assert_eq!(
            headers("outcomes.csv"),
            ["id", "responded", "response_time", "travel_time", "time_remaining", "unit_id", "score"]
        );
        assert_eq!(headers("routes.csv"), ["unit_id", "emergency_id", "departure", "arrival", "distance"]);
        assert_eq!(headers("responders.csv"), ["unit_id", "station", "type", "points", "cost"]);
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("a").join("b");
        CsvWriter::new(&nested).unwrap();
        assert!(nested.join("outcomes.csv").exists());
    }

    #[test]
    fn outcome_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_outcome(&outcome_row(7, true)).unwrap();
        w.write_outcome(&outcome_row(8, false)).unwrap();
        w.finish().unwrap();

        let rows = read_rows(&dir.path().join("outcomes.csv"));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "7");
        assert_eq!(&rows[0][1], "true");
        assert_eq!(&rows[0][5], "3");
        assert_eq!(&rows[1][1], "false");
        assert_eq!(&rows[1][5], ""); // no unit
        assert_eq!(&rows[1][6], "-2");
    }

    #[test]
    fn route_and_responder_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_route(&RouteRow { unit_id: 1, emergency_id: Some(4), departure: 0.0, arrival: 12.5, distance: 12.5 })
            .unwrap();
        w.write_route(&RouteRow { unit_id: 1, emergency_id: None, departure: 12.5, arrival: 25.0, distance: 12.5 })
            .unwrap();
        w.write_responders(&[ResponderRow {
            unit_id: 1,
            station: "F1".into(),
            kind:    UnitKind::Fire,
            points:  88.0,
            cost:    25.0,
        }])
        .unwrap();
        w.finish().unwrap();

        let routes = read_rows(&dir.path().join("routes.csv"));
        assert_eq!(&routes[0][1], "4");
        assert_eq!(&routes[0][3], "12.5");
        assert_eq!(&routes[1][1], "");

        let units = read_rows(&dir.path().join("responders.csv"));
        assert_eq!(&units[0][1], "F1");
        assert_eq!(&units[0][2], "fire");
        assert_eq!(&units[0][3], "88");
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

// ── SimOutputObserver ─────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;
    use ed_core::{Category, DispatchConfig, EmergencyId, Point, SimTime, UnitKind};
    use ed_feed::{EmergencyRecord, StationSpec};
    use ed_sim::{SimBuilder, SimObserver};

    use crate::observer::SimOutputObserver;

    fn rec(id: u32, t: f64, x: f64, y: f64, category: Category, window: f64) -> EmergencyRecord {
        EmergencyRecord {
            id:          EmergencyId(id),
            spawn_time:  SimTime::from_secs(t),
            location:    Point::new(x, y),
            category,
            window_secs: window,
        }
    }

    fn small_run<O: SimObserver>(obs: &mut O) {
        let mut sim = SimBuilder::from_config(DispatchConfig::default())
            .emergencies(vec![
                rec(1, 0.0, 30.0, 0.0, Category::Fire, 120.0),
                rec(2, 0.0, 0.0, 40.0, Category::Police, 30.0),
            ])
            .stations(vec![StationSpec::new("F1", UnitKind::Fire, Point::new(0.0, 0.0), 1)])
            .build()
            .unwrap();
        sim.run(obs).unwrap();
    }

    #[test]
    fn records_everything() {
        let mut obs = SimOutputObserver::new(MemWriter::default());
        small_run(&mut obs);
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        // The fire unit cannot serve police: one served, one failed.
        assert_eq!(w.outcomes.len(), 2);
        let served = w.outcomes.iter().find(|o| o.emergency_id == 1).unwrap();
        assert!(served.responded);
        assert_eq!(served.unit_id, Some(0));
        let missed = w.outcomes.iter().find(|o| o.emergency_id == 2).unwrap();
        assert_eq!(missed.unit_id, None);

        // Out and home.
        assert_eq!(w.routes.len(), 2);
        assert_eq!(w.routes[0].emergency_id, Some(1));
        assert_eq!(w.routes[1].emergency_id, None);

        assert_eq!(w.responders.len(), 1);
        assert_eq!(w.responders[0].station, "F1");
        assert_eq!(w.responders[0].cost, 60.0);
        assert_eq!(w.finished, 1);
    }

    #[test]
    fn keeps_first_error() {
        let mut obs = SimOutputObserver::new(BrokenWriter { attempts: 0 });
        small_run(&mut obs);
        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("disk full #1"));
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().attempts, 2);
    }

    #[test]
    fn csv_end_to_end() {
        let dir = tmp();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        small_run(&mut obs);
        assert!(obs.take_error().is_none());
        assert_eq!(read_rows(&dir.path().join("outcomes.csv")).len(), 2);
        assert_eq!(read_rows(&dir.path().join("routes.csv")).len(), 2);
        assert_eq!(read_rows(&dir.path().join("responders.csv")).len(), 1);
    }
}
