//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use tracing::warn;

use ed_core::SimTime;
use ed_fleet::RouteRecord;
use ed_sim::{Outcome, SimObserver, Summary};

use crate::writer::OutputWriter;
use crate::{OutcomeRow, OutputError, OutputResult, ResponderRow, RouteRow};

/// A [`SimObserver`] that writes outcomes, routes, and per-unit totals to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_commit(&mut self, _now: SimTime, route: &RouteRecord) {
        let result = self.writer.write_route(&RouteRow::from(route));
        self.store_err(result);
    }

    fn on_outcome(&mut self, outcome: &Outcome) {
        let result = self.writer.write_outcome(&OutcomeRow::from(outcome));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, summary: &Summary) {
        let rows: Vec<ResponderRow> = summary.per_responder.iter().map(ResponderRow::from).collect();
        let result = self.writer.write_responders(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
