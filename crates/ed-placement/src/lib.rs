//! `ed-placement` — offline station placement for the emergency dispatch twin.
//!
//! Proposes station sites from historical emergency density with a weighted
//! k-means.  Runs once, upstream of a simulation: its output is a list of
//! [`StationSpec`][ed_feed::StationSpec]s handed to `SimBuilder::stations`.
//!
//! | Item                 | Role                                              |
//! |----------------------|---------------------------------------------------|
//! | [`WeightedPoint`]    | A location and its non-negative weight            |
//! | [`weighted_kmeans`]  | Seeded random init, then [`lloyd`]                |
//! | [`lloyd`]            | Lloyd iteration from caller-supplied centroids    |
//! | [`propose_stations`] | Per-type clustering into named station specs      |
//!
//! All randomness comes from the caller's [`SimRng`][ed_core::SimRng], so a
//! fixed seed reproduces the same proposal.

pub mod error;
pub mod kmeans;
pub mod propose;

#[cfg(test)]
mod tests;

pub use error::{PlacementError, PlacementResult};
pub use kmeans::{KMeansResult, WeightedPoint, lloyd, weighted_kmeans};
pub use propose::propose_stations;
