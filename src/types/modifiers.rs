//! Scenario modifier levers and the clamped mutation contract

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// One of the five user-adjustable percentage levers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lever {
    /// Desired revenue growth over baseline
    RevenueTarget,
    /// Change in revenue-per-head efficiency
    Efficiency,
    /// Reduction (positive) or increase (negative) in churn rate
    Retention,
    /// Change in average contract value
    Acv,
    /// Percentage-point shift to profit margin
    Margin,
}

impl Lever {
    /// All five levers, in dashboard display order.
    pub const ALL: [Self; 5] = [
        Self::RevenueTarget,
        Self::Efficiency,
        Self::Retention,
        Self::Acv,
        Self::Margin,
    ];

    /// Declared closed interval for this lever, in percent.
    ///
    /// Mutations outside the interval are clamped at the mutation boundary;
    /// presets carry values inside these ranges by construction.
    #[must_use]
    pub fn range(self) -> RangeInclusive<f64> {
        match self {
            Self::RevenueTarget => -20.0..=150.0,
            Self::Efficiency => -30.0..=50.0,
            Self::Retention => -20.0..=20.0,
            Self::Acv => -20.0..=100.0,
            // Effectively bounded tighter by the margin floor/ceiling clamp
            Self::Margin => -100.0..=100.0,
        }
    }
}

impl std::fmt::Display for Lever {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RevenueTarget => write!(f, "revenue_target"),
            Self::Efficiency => write!(f, "efficiency"),
            Self::Retention => write!(f, "retention"),
            Self::Acv => write!(f, "acv"),
            Self::Margin => write!(f, "margin"),
        }
    }
}

/// The five percentage levers of a scenario, as one immutable bundle.
///
/// Mutation goes through [`ModifierSet::with`], which clamps to the lever's
/// declared range — the projection calculator never sees out-of-range values
/// from the interaction layer and stays free of range-validation concerns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifierSet {
    pub revenue_target: f64,
    pub efficiency: f64,
    pub retention: f64,
    pub acv: f64,
    pub margin: f64,
}

impl Default for ModifierSet {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, 0.0)
    }
}

impl ModifierSet {
    /// Build a modifier set from raw lever values (no clamping — used for
    /// preset constants, which are in range by construction).
    #[must_use]
    pub const fn new(
        revenue_target: f64,
        efficiency: f64,
        retention: f64,
        acv: f64,
        margin: f64,
    ) -> Self {
        Self {
            revenue_target,
            efficiency,
            retention,
            acv,
            margin,
        }
    }

    /// Read a single lever's value.
    #[must_use]
    pub const fn get(&self, lever: Lever) -> f64 {
        match lever {
            Lever::RevenueTarget => self.revenue_target,
            Lever::Efficiency => self.efficiency,
            Lever::Retention => self.retention,
            Lever::Acv => self.acv,
            Lever::Margin => self.margin,
        }
    }

    /// Return a new set with one lever changed, clamped to its range.
    ///
    /// Out-of-range requests are a UX condition, not a fault — they clamp
    /// silently (slider overshoot), so this never fails.
    #[must_use]
    pub fn with(&self, lever: Lever, value: f64) -> Self {
        let range = lever.range();
        let clamped = value.clamp(*range.start(), *range.end());

        let mut next = *self;
        match lever {
            Lever::RevenueTarget => next.revenue_target = clamped,
            Lever::Efficiency => next.efficiency = clamped,
            Lever::Retention => next.retention = clamped,
            Lever::Acv => next.acv = clamped,
            Lever::Margin => next.margin = clamped,
        }
        next
    }
}
