//! `ed-sim` — event-driven orchestrator for the emergency dispatch twin.
//!
//! # Event loop
//!
//! ```text
//! while something can still happen:
//!   ① Next event — now = min(next spawn, next arrival, next end of service)
//!   ② Spawns     — materialize every record with spawn_time ≤ now
//!   ③ Arrivals   — resolve routes with arrival ≤ now (by arrival, then unit),
//!                  then finish services due (units head home)
//!   ④ Expiry     — handle-and-return model only: pending emergencies whose
//!                  deadline < now fail
//!   ⑤ Plan       — if anything spawned, a unit went idle, or an idle unit
//!                  is away from home with nothing pending: run one pass
//!                  and apply its moves in order
//! end: every emergency still pending fails
//! ```
//!
//! # Scoring
//!
//! | Outcome                       | Score                       |
//! |-------------------------------|-----------------------------|
//! | arrival ≤ deadline            | `(deadline − arrival) / 60` |
//! | late, expired, or never served| `−2.0`                      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ed_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::from_config(config)
//!     .emergencies(records)
//!     .stations(stations)
//!     .build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod outcome;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use outcome::{MISS_SCORE, Outcome, ResponderTotals, Summary};
pub use sim::Sim;
