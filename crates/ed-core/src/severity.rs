//! Urgency tiers and the rule tables derived from them.
//!
//! An emergency's response window (seconds allowed before the deadline)
//! determines its urgency tier through a [`TierTable`]; the tier then selects
//! a dispatch multiplier ([`SeverityWeights`]) and an on-scene handling time
//! ([`HandlingRule`]).  The window also fixes the reward ([`RewardRule`]).
//!
//! ```text
//! window 30 s  → tier 10 → weight 50.0, handling 30 s
//! window 60 s  → tier  8 → weight 15.0, handling 45 s
//! window 600 s → tier  1 → weight  1.0, handling 60 s
//! window 45 s  → tier  3 → weight  1.5, handling 60 s   (not listed: fallback)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::EdError;

// ── UrgencyTier ───────────────────────────────────────────────────────────────

/// Discrete priority class, 1 (lowest) ..= 10 (disaster).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct UrgencyTier(u8);

impl UrgencyTier {
    pub const MIN: UrgencyTier = UrgencyTier(1);
    pub const MAX: UrgencyTier = UrgencyTier(10);

    /// `None` unless `1 <= tier <= 10`.
    pub const fn new(tier: u8) -> Option<Self> {
        if tier >= 1 && tier <= 10 { Some(UrgencyTier(tier)) } else { None }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for UrgencyTier {
    type Error = EdError;
    fn try_from(v: u8) -> Result<Self, Self::Error> {
        UrgencyTier::new(v)
            .ok_or_else(|| EdError::Config(format!("urgency tier {v} outside 1..=10")))
    }
}

impl From<UrgencyTier> for u8 {
    fn from(t: UrgencyTier) -> u8 {
        t.0
    }
}

impl fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tier {}", self.0)
    }
}

// ── TierTable ─────────────────────────────────────────────────────────────────

/// One row of the window → tier mapping.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TierThreshold {
    #[serde(alias = "max_window_secs")]
    pub window_secs: f64,
    pub tier:        UrgencyTier,
}

/// How a window that is not listed in the table is resolved.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierLookup {
    /// Only listed windows match; anything else gets the fallback tier.
    #[default]
    Exact,
    /// The smallest listed window that is ≥ the query wins; windows past the
    /// largest row take that row's tier.
    Step,
}

/// Mapping from response window to urgency tier.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TierTable {
    rows:         Vec<TierThreshold>,
    pub lookup:   TierLookup,
    pub fallback: UrgencyTier,
}

impl TierTable {
    /// Exact lookup with tier 3 for unlisted windows.
    pub fn new(mut rows: Vec<TierThreshold>) -> Self {
        rows.sort_by(|a, b| a.window_secs.total_cmp(&b.window_secs));
        Self { rows, lookup: TierLookup::Exact, fallback: UrgencyTier(3) }
    }

    pub fn with_lookup(mut self, lookup: TierLookup) -> Self {
        self.lookup = lookup;
        self
    }

    pub fn with_fallback(mut self, fallback: UrgencyTier) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn rows(&self) -> &[TierThreshold] {
        &self.rows
    }

    pub fn tier_for_window(&self, window_secs: f64) -> UrgencyTier {
        match self.lookup {
            TierLookup::Exact => self
                .rows
                .iter()
                .find(|r| r.window_secs == window_secs)
                .map_or(self.fallback, |r| r.tier),
            TierLookup::Step => self
                .rows
                .iter()
                .filter(|r| window_secs <= r.window_secs)
                .min_by(|a, b| a.window_secs.total_cmp(&b.window_secs))
                .or_else(|| self.rows.iter().max_by(|a, b| a.window_secs.total_cmp(&b.window_secs)))
                .map_or(self.fallback, |r| r.tier),
        }
    }
}

impl Default for TierTable {
    fn default() -> Self {
        let row = |secs: f64, tier: u8| TierThreshold { window_secs: secs, tier: UrgencyTier(tier) };
        TierTable::new(vec![row(30.0, 10), row(60.0, 8), row(120.0, 5), row(300.0, 3), row(600.0, 1)])
    }
}

// ── SeverityWeights ───────────────────────────────────────────────────────────

/// Monotone multiplier per tier, used by the benefit-per-cost score.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct SeverityWeights([f64; 10]);

impl SeverityWeights {
    pub fn new(weights: [f64; 10]) -> Self {
        Self(weights)
    }

    #[inline]
    pub fn weight(&self, tier: UrgencyTier) -> f64 {
        self.0[usize::from(tier.get() - 1)]
    }

    /// `true` if no tier weighs less than the tier below it.
    pub fn is_monotone(&self) -> bool {
        self.0.windows(2).all(|w| w[0] <= w[1])
    }
}

impl Default for SeverityWeights {
    /// Tier 10 is fifty times as important as tier 1.
    fn default() -> Self {
        Self([1.0, 1.2, 1.5, 2.0, 3.0, 5.0, 8.0, 15.0, 30.0, 50.0])
    }
}

impl TryFrom<Vec<f64>> for SeverityWeights {
    type Error = EdError;
    fn try_from(v: Vec<f64>) -> Result<Self, Self::Error> {
        let arr: [f64; 10] = v.try_into().map_err(|v: Vec<f64>| {
            EdError::Config(format!("severity weights need 10 entries, got {}", v.len()))
        })?;
        Ok(Self(arr))
    }
}

impl From<SeverityWeights> for Vec<f64> {
    fn from(w: SeverityWeights) -> Self {
        w.0.to_vec()
    }
}

// ── RewardRule ────────────────────────────────────────────────────────────────

/// Base points for serving an emergency: shorter windows pay more.
///
/// `reward = max(base_points - floor(window / window_divisor), floor_points)`
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardRule {
    pub base_points:    f64,
    pub window_divisor: f64,
    pub floor_points:   f64,
}

impl RewardRule {
    pub fn reward(&self, window_secs: f64) -> f64 {
        let penalty = (window_secs / self.window_divisor).floor();
        (self.base_points - penalty).max(self.floor_points)
    }
}

impl Default for RewardRule {
    fn default() -> Self {
        Self { base_points: 100.0, window_divisor: 10.0, floor_points: 10.0 }
    }
}

// ── HandlingRule ──────────────────────────────────────────────────────────────

/// Multiplier applied to the base handling time from `min_tier` upward.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct HandlingStep {
    pub min_tier:   UrgencyTier,
    pub multiplier: f64,
}

/// Time a unit spends on scene before it can head home.
///
/// More urgent tiers are handled faster.  Steps are checked from the highest
/// `min_tier` down; the first step the tier reaches applies, otherwise
/// `default_multiplier`.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlingRule {
    pub base_secs:          f64,
    pub steps:              Vec<HandlingStep>,
    pub default_multiplier: f64,
}

impl HandlingRule {
    pub fn handling_secs(&self, tier: UrgencyTier) -> f64 {
        let multiplier = self
            .steps
            .iter()
            .filter(|s| tier >= s.min_tier)
            .max_by_key(|s| s.min_tier)
            .map_or(self.default_multiplier, |s| s.multiplier);
        self.base_secs * multiplier
    }
}

impl Default for HandlingRule {
    fn default() -> Self {
        Self {
            base_secs: 30.0,
            steps: vec![
                HandlingStep { min_tier: UrgencyTier(10), multiplier: 1.0 },
                HandlingStep { min_tier: UrgencyTier(8),  multiplier: 1.5 },
            ],
            default_multiplier: 2.0,
        }
    }
}
