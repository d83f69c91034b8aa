//! `ed-dispatch` — the planning pass.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                          |
//! |---------------|-------------------------------------------------------------------|
//! | [`candidate`] | `Candidate` — one (unit, emergency) pairing, precomputed          |
//! | [`rule`]      | `ScoringRule` trait, `BenefitPerCost`, `DeadlineAware`, `Nearest` |
//! | [`context`]   | `DispatchContext<'a>` — read-only snapshot for one pass           |
//! | [`planner`]   | `Dispatcher<S>`, `Move`                                           |
//! | [`error`]     | `DispatchError`, `DispatchResult<T>`                              |
//!
//! # Design notes
//!
//! A pass works in two phases, like an intent/apply tick:
//!
//! 1. **Plan**: [`Dispatcher::plan_pass`] reads a [`DispatchContext`] and
//!    returns a `Vec<Move>`.  Nothing in the board or the fleet changes; an
//!    emergency picked by an earlier unit is only excluded through the
//!    pass-local taken set.
//! 2. **Apply**: the orchestrator commits every `Move` in order.
//!
//! The heuristic is greedy and myopic.  It never revisits a decision, never
//! preempts a unit already in flight, and keeps no scores between passes.

pub mod candidate;
pub mod context;
pub mod error;
pub mod planner;
pub mod rule;


pub use candidate::Candidate;
pub use context::DispatchContext;
pub use error::{DispatchError, DispatchResult};
pub use planner::{Dispatcher, Move};
pub use rule::{BenefitPerCost, DeadlineAware, Nearest, ScoringRule, rule_for};
