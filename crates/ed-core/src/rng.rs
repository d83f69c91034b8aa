//! Deterministic simulation-level RNG wrapper.
//!
//! Every random draw in the workspace (k-means initialization, fallback
//! station placement) goes through a `SimRng` built from an explicit seed, so
//! the same seed always reproduces the same station proposals.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG for the offline placement step.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform draw from the closed interval `[lo, hi]`.
    ///
    /// A degenerate interval (`lo == hi`) returns `lo`; reversed bounds are
    /// swapped rather than panicking.
    #[inline]
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        self.0.gen_range(lo..=hi)
    }
}
