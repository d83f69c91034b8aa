//! `ed-spatial` — located nodes and distance lookups.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`nodes`]    | `NodeTable` (`NodeId → Point`, grows as events spawn) |
//! | [`distance`] | `DistanceService` (lazy symmetric cache)              |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`                    |
//!
//! Every station and every spawned emergency site is registered once as a
//! node.  Responders always sit at (or travel between) nodes, so every
//! distance query is a node-pair query.

pub mod distance;
pub mod error;
pub mod nodes;


pub use distance::DistanceService;
pub use error::{SpatialError, SpatialResult};
pub use nodes::NodeTable;
