//! `ed-feed` — the emergency feed and the entities built from it.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`emergency`]   | `EmergencyRecord`, `Emergency`, `EmergencyStatus`       |
//! | [`board`]       | `EmergencyBoard` (every emergency + the pending set)    |
//! | [`spawn_queue`] | `SpawnQueue` (`BTreeMap<SimTime, Vec<EmergencyRecord>>`) |
//! | [`station`]     | `StationSpec`                                           |
//! | [`loader`]      | `load_emergencies_csv`, `load_stations_csv`, readers    |
//! | [`error`]       | `FeedError`, `FeedResult<T>`                            |
//!
//! # Lifecycle (summary)
//!
//! ```text
//! record ──spawn──► Pending ──commit──► Committed ──arrival──► Resolved | Failed
//!                      └──────────── expiry / end of run ────► Failed
//! ```
//!
//! `Resolved` and `Failed` are final: an emergency in either state never
//! re-enters the pending set.

pub mod board;
pub mod emergency;
pub mod error;
pub mod loader;
pub mod spawn_queue;
pub mod station;


pub use board::EmergencyBoard;
pub use emergency::{Emergency, EmergencyRecord, EmergencyStatus};
pub use error::{FeedError, FeedResult};
pub use loader::{
    load_emergencies_csv, load_emergencies_reader, load_stations_csv, load_stations_json,
    load_stations_reader,
};
pub use spawn_queue::SpawnQueue;
pub use station::StationSpec;
