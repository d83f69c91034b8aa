//! `ed-core` — foundational types for the emergency dispatch twin.
//!
//! This crate is a dependency of every other `ed-*` crate.  It has no `ed-*`
//! dependencies of its own.
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ids`]         | `EmergencyId`, `UnitId`, `StationId`, `NodeId`            |
//! | [`geo`]         | `Point`, `Bounds`, Euclidean distance                     |
//! | [`time`]        | `SimTime`, `SimClock`                                     |
//! | [`rng`]         | `SimRng` (seeded, reproducible)                           |
//! | [`category`]    | `Category` (emergency kind), `UnitKind` (station kind)    |
//! | [`capability`]  | `CategorySet`, `CapabilityTable`                          |
//! | [`severity`]    | `UrgencyTier`, `TierTable`, `SeverityWeights`, reward and handling rules |
//! | [`config`]      | `DispatchConfig` and its sections                         |
//! | [`error`]       | `EdError`, `EdResult`                                     |

pub mod capability;
pub mod category;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod severity;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use capability::{CapabilityTable, CategorySet};
pub use category::{Category, UnitKind};
pub use config::{
    BlendWeights, BudgetConfig, DispatchConfig, PlacementConfig, PolicyKind, ServiceModel,
};
pub use error::{EdError, EdResult};
pub use geo::{Bounds, Point};
pub use ids::{EmergencyId, NodeId, StationId, UnitId};
pub use rng::SimRng;
pub use severity::{HandlingRule, HandlingStep, RewardRule, SeverityWeights, TierLookup, TierTable, TierThreshold, UrgencyTier};
pub use time::{SimClock, SimTime};
