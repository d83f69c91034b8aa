//! Candidate scoring rules.
//!
//! | Rule               | Feasible if               | Score                                          |
//! |--------------------|---------------------------|------------------------------------------------|
//! | [`BenefitPerCost`] | always                    | `reward × weight(tier) / max(distance, ε)`     |
//! | [`DeadlineAware`]  | `arrival ≤ deadline`      | `a·(to_deadline / window) + b·slack − c·distance` |
//! | [`Nearest`]        | always                    | `−distance`                                    |
//!
//! The budget filter is applied by the planner before a rule is consulted,
//! so rules only see candidates that fit the route budget.

use ed_core::{BlendWeights, DispatchConfig, PolicyKind, SeverityWeights};

use crate::Candidate;

/// Pluggable candidate scoring.
///
/// The planner picks the feasible candidate with the highest score; equal
/// scores keep the first candidate seen.  Rules hold only configuration, so
/// they are `Send + Sync` and one rule can serve concurrent runs.
pub trait ScoringRule: Send + Sync {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Rule-specific feasibility on top of capability and budget.
    ///
    /// Default: every candidate is feasible.
    fn feasible(&self, _candidate: &Candidate) -> bool {
        true
    }

    fn score(&self, candidate: &Candidate) -> f64;
}

impl ScoringRule for Box<dyn ScoringRule> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn feasible(&self, candidate: &Candidate) -> bool {
        (**self).feasible(candidate)
    }

    fn score(&self, candidate: &Candidate) -> f64 {
        (**self).score(candidate)
    }
}

/// The rule `config.policy` names.
pub fn rule_for(config: &DispatchConfig) -> Box<dyn ScoringRule> {
    match config.policy {
        PolicyKind::BenefitPerCost => Box::new(BenefitPerCost::from_config(config)),
        PolicyKind::DeadlineAware => Box::new(DeadlineAware::from_config(config)),
        PolicyKind::Nearest => Box::new(Nearest),
    }
}

// ── BenefitPerCost ────────────────────────────────────────────────────────────

/// Reward per unit of distance, scaled by urgency.
#[derive(Clone, Debug)]
pub struct BenefitPerCost {
    pub weights: SeverityWeights,
    /// Distance floor; a unit already on the scene does not divide by zero.
    pub epsilon: f64,
}

impl BenefitPerCost {
    pub fn from_config(config: &DispatchConfig) -> Self {
        Self { weights: config.severity_weights.clone(), epsilon: config.score_epsilon }
    }
}

impl Default for BenefitPerCost {
    fn default() -> Self {
        Self { weights: SeverityWeights::default(), epsilon: 0.1 }
    }
}

impl ScoringRule for BenefitPerCost {
    fn name(&self) -> &'static str {
        "benefit_per_cost"
    }

    fn score(&self, c: &Candidate) -> f64 {
        c.reward * self.weights.weight(c.tier) / c.distance.max(self.epsilon)
    }
}

// ── DeadlineAware ─────────────────────────────────────────────────────────────

/// Prefers urgent, reachable, nearby emergencies; drops unreachable ones.
#[derive(Clone, Debug, Default)]
pub struct DeadlineAware {
    pub blend: BlendWeights,
}

impl DeadlineAware {
    pub fn from_config(config: &DispatchConfig) -> Self {
        Self { blend: config.blend.clone() }
    }
}

impl ScoringRule for DeadlineAware {
    fn name(&self) -> &'static str {
        "deadline_aware"
    }

    fn feasible(&self, c: &Candidate) -> bool {
        c.arrival() <= c.deadline
    }

    fn score(&self, c: &Candidate) -> f64 {
        let urgency = c.time_to_deadline() / c.window_secs;
        self.blend.urgency * urgency
            + self.blend.time_remaining * c.slack_on_arrival()
            - self.blend.distance * c.distance
    }
}

// ── Nearest ───────────────────────────────────────────────────────────────────

/// Closest compatible pair first.  Baseline for comparing the other rules.
#[derive(Copy, Clone, Debug, Default)]
pub struct Nearest;

impl ScoringRule for Nearest {
    fn name(&self) -> &'static str {
        "nearest"
    }

    fn score(&self, c: &Candidate) -> f64 {
        -c.distance
    }
}
