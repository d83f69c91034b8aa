//! Scenario configuration.
//!
//! One JSON document configures a run.  Every section is `#[serde(default)]`,
//! so a file only has to name what it changes:
//!
//! ```json
//! {
//!   "seed": 7,
//!   "policy": "deadline_aware",
//!   "service_model": "handle_and_return",
//!   "budget": { "max_route_cost": 2000.0 },
//!   "capabilities": { "fire": ["fire"], "medical": ["medical"], "police": ["police"] }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    Bounds, CapabilityTable, EdError, EdResult, HandlingRule, RewardRule, SeverityWeights,
    TierTable, UrgencyTier,
};

// ── Enumerations ──────────────────────────────────────────────────────────────

/// Which candidate scoring rule the dispatcher uses.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// `reward × severity_weight / distance`.
    #[default]
    BenefitPerCost,
    /// Blend of urgency, slack after arrival, and distance; only deadlines
    /// that can still be met are candidates.
    DeadlineAware,
    /// Closest compatible unit, whatever the deadline or reward.
    Nearest,
}

/// What happens to a unit once it reaches an emergency.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceModel {
    /// The unit is idle at the scene as soon as it arrives.
    #[default]
    Instant,
    /// The unit handles the scene for a tier-dependent time, then drives
    /// home and only becomes idle on arrival at its station.
    HandleAndReturn,
}

// ── Sections ──────────────────────────────────────────────────────────────────

/// Route budget applied to every candidate.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    /// Maximum cumulative travel cost per responder.  `None` = unlimited.
    pub max_route_cost: Option<f64>,
    /// Count the leg from the candidate back to the home station.
    pub include_return_leg: bool,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self { max_route_cost: None, include_return_leg: true }
    }
}

/// Coefficients of the deadline-aware blended score.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendWeights {
    pub urgency:        f64,
    pub time_remaining: f64,
    pub distance:       f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self { urgency: 100.0, time_remaining: 0.5, distance: 2.0 }
    }
}

/// Station placement (k-means) settings.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    pub max_iterations:    u32,
    /// Convergence threshold on per-centroid displacement.
    pub tolerance:         f64,
    pub units_per_station: u32,
    /// Area used for random fallback sites.
    pub area:              Bounds,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            max_iterations:    100,
            tolerance:         0.01,
            units_per_station: 2,
            area:              Bounds::default(),
        }
    }
}

// ── DispatchConfig ────────────────────────────────────────────────────────────

/// Top-level run configuration.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Master seed.  The same seed always yields the same station proposals.
    pub seed: u64,

    /// Unit travel speed in distance units per second.
    pub unit_speed: f64,

    pub policy: PolicyKind,
    pub service_model: ServiceModel,
    pub budget: BudgetConfig,

    /// Emergencies at or below this tier are never dispatched to.
    /// `0` disables the filter.
    pub ignore_tier_at_or_below: u8,

    /// Distance floor in the benefit-per-cost denominator.
    pub score_epsilon: f64,

    pub tiers: TierTable,
    pub severity_weights: SeverityWeights,
    pub reward: RewardRule,
    pub handling: HandlingRule,
    pub blend: BlendWeights,
    pub capabilities: CapabilityTable,
    pub placement: PlacementConfig,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            seed:                    42,
            unit_speed:              1.0,
            policy:                  PolicyKind::default(),
            service_model:           ServiceModel::default(),
            budget:                  BudgetConfig::default(),
            ignore_tier_at_or_below: 0,
            score_epsilon:           0.1,
            tiers:                   TierTable::default(),
            severity_weights:        SeverityWeights::default(),
            reward:                  RewardRule::default(),
            handling:                HandlingRule::default(),
            blend:                   BlendWeights::default(),
            capabilities:            CapabilityTable::default(),
            placement:               PlacementConfig::default(),
        }
    }
}

impl DispatchConfig {
    /// Benefit-per-cost scoring with a 2000-unit route budget that never
    /// dispatches to tier-1 calls.
    pub fn benefit_per_cost() -> Self {
        Self {
            policy:                  PolicyKind::BenefitPerCost,
            budget:                  BudgetConfig { max_route_cost: Some(2000.0), ..BudgetConfig::default() },
            ignore_tier_at_or_below: 1,
            ..Self::default()
        }
    }

    /// Deadline-aware scoring paired with the handle-and-return service model.
    pub fn deadline_aware() -> Self {
        Self {
            policy:        PolicyKind::DeadlineAware,
            service_model: ServiceModel::HandleAndReturn,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> EdResult<Self> {
        let config: DispatchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON file.
    pub fn from_json_path(path: &Path) -> EdResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// `true` if `tier` falls under the ignore threshold.
    #[inline]
    pub fn ignores(&self, tier: UrgencyTier) -> bool {
        tier.get() <= self.ignore_tier_at_or_below
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> EdResult<()> {
        if !(self.unit_speed.is_finite() && self.unit_speed > 0.0) {
            return Err(EdError::Config(format!(
                "unit_speed must be positive, got {}", self.unit_speed
            )));
        }
        if let Some(max) = self.budget.max_route_cost {
            if !(max >= 0.0) {
                return Err(EdError::Config(format!("max_route_cost must be >= 0, got {max}")));
            }
        }
        if !(self.score_epsilon > 0.0) {
            return Err(EdError::Config("score_epsilon must be positive".into()));
        }
        if self.tiers.rows().is_empty() {
            return Err(EdError::Config("tier table is empty".into()));
        }
        if !self.severity_weights.is_monotone() {
            return Err(EdError::Config("severity weights must not decrease with tier".into()));
        }
        if !(self.reward.window_divisor > 0.0) {
            return Err(EdError::Config("reward.window_divisor must be positive".into()));
        }
        if self.handling.base_secs < 0.0 {
            return Err(EdError::Config("handling.base_secs must be >= 0".into()));
        }
        if !(self.placement.tolerance > 0.0) {
            return Err(EdError::Config("placement.tolerance must be positive".into()));
        }
        Ok(())
    }
}
