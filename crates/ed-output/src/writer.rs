//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutcomeRow, OutputResult, ResponderRow, RouteRow};

/// A sink for run output.
///
/// Errors are stored by [`SimOutputObserver`][crate::SimOutputObserver] and
/// retrieved with its `take_error`.
pub trait OutputWriter {
    /// Write the final record of one emergency.
    fn write_outcome(&mut self, row: &OutcomeRow) -> OutputResult<()>;

    /// Write one committed route.
    fn write_route(&mut self, row: &RouteRow) -> OutputResult<()>;

    /// Write per-unit totals at the end of the run.
    fn write_responders(&mut self, rows: &[ResponderRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
