//! `ed-fleet` — stations, responder units, and in-flight routes.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`unit`]    | `Responder`, `UnitStatus`, `Station`                        |
//! | [`route`]   | `RouteRecord`, `RouteTarget`                                |
//! | [`fleet`]   | `Fleet` — responders + sparse `UnitId → RouteRecord` map    |
//! | [`builder`] | `FleetBuilder` — stations → units, nodes registered         |
//! | [`error`]   | `FleetError`, `FleetResult<T>`                              |
//!
//! # Unit state machine
//!
//! ```text
//!            commit                arrival (instant model)
//! Idle ───────────────► Enroute ─────────────────────────► Idle
//!  ▲                       │ arrival (handle-and-return)
//!  │                       ▼
//!  │ arrival at home   Servicing ──handling done──► Returning
//!  └────────────────────────────────────────────────────┘
//! ```
//!
//! A return-home commit from `Idle` also enters `Returning`.
//!
//! # Movement model
//!
//! Teleport-at-arrival: a unit logically stays at its departure node until
//! the route's arrival time, then appears at the destination.  The traveled
//! distance is charged to the unit's cumulative cost on arrival, so the cost
//! only ever grows.

pub mod builder;
pub mod error;
pub mod fleet;
pub mod route;
pub mod unit;


pub use builder::FleetBuilder;
pub use error::{FleetError, FleetResult};
pub use fleet::Fleet;
pub use route::{RouteRecord, RouteTarget};
pub use unit::{Responder, Station, UnitStatus};

pub use ed_feed::StationSpec;
