//! Read-only state passed to a planning pass.

use ed_core::{DispatchConfig, SimTime};
use ed_feed::EmergencyBoard;
use ed_fleet::Fleet;

/// A snapshot of the simulation for one planning pass.
///
/// Built by the orchestrator right before planning; nothing it borrows is
/// mutated until the pass has returned its moves.
pub struct DispatchContext<'a> {
    pub now:    SimTime,
    pub board:  &'a EmergencyBoard,
    pub fleet:  &'a Fleet,
    pub config: &'a DispatchConfig,
}

impl<'a> DispatchContext<'a> {
    #[inline]
    pub fn new(
        now:    SimTime,
        board:  &'a EmergencyBoard,
        fleet:  &'a Fleet,
        config: &'a DispatchConfig,
    ) -> Self {
        Self { now, board, fleet, config }
    }
}
