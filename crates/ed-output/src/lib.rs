//! `ed-output` — run output writers for the emergency dispatch twin.
//!
//! | Backend | Files created                                       |
//! |---------|-----------------------------------------------------|
//! | CSV     | `outcomes.csv`, `routes.csv`, `responders.csv`      |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `ed_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ed_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{OutcomeRow, ResponderRow, RouteRow};
pub use writer::OutputWriter;
