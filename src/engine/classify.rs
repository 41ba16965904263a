//! Status classification — maps derived metrics to three-tier statuses
//!
//! The dashboard colors each KPI card by a fixed warn/danger threshold pair.
//! Thresholds are operator-tunable config values with defaults matching the
//! original dashboard constants.

use serde::{Deserialize, Serialize};

use crate::types::{Projection, Status};

/// Classify a value against a warn/danger threshold pair.
///
/// Non-reversed (higher is worse): `value > danger` → danger,
/// `value > warn` → warning, else good. Reversed (lower is worse) flips the
/// comparisons. Both comparisons are strict, so a value sitting exactly on
/// a threshold stays in the milder tier.
#[must_use]
pub fn classify(value: f64, warn: f64, danger: f64, reversed: bool) -> Status {
    if reversed {
        if value < danger {
            Status::Danger
        } else if value < warn {
            Status::Warning
        } else {
            Status::Good
        }
    } else if value > danger {
        Status::Danger
    } else if value > warn {
        Status::Warning
    } else {
        Status::Good
    }
}

/// Per-metric classification thresholds.
///
/// Defaults match the dashboard: more than 5 new hires warns and more than
/// 10 is danger; more than 3 deals/month warns and more than 5 is danger;
/// margin below 15% warns and below 10% is danger (reversed).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusThresholds {
    /// New hires above this → warning
    pub hiring_warn: f64,
    /// New hires above this → danger
    pub hiring_danger: f64,
    /// Deals per month above this → warning
    pub monthly_deals_warn: f64,
    /// Deals per month above this → danger
    pub monthly_deals_danger: f64,
    /// Margin (%) below this → warning (reversed metric)
    pub margin_percent_warn: f64,
    /// Margin (%) below this → danger (reversed metric)
    pub margin_percent_danger: f64,
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            hiring_warn: 5.0,
            hiring_danger: 10.0,
            monthly_deals_warn: 3.0,
            monthly_deals_danger: 5.0,
            margin_percent_warn: 15.0,
            margin_percent_danger: 10.0,
        }
    }
}

/// Status tags for the three classified dashboard metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricStatuses {
    /// Hiring load (team growth)
    pub hiring: Status,
    /// Sales velocity (monthly deal pace)
    pub sales: Status,
    /// Profit health (target margin)
    pub profit: Status,
}

/// Classify the displayed metrics of a projection.
///
/// Sales pace classifies on the raw monthly figure, not the one-decimal
/// display rounding.
#[must_use]
pub fn statuses(projection: &Projection, thresholds: &StatusThresholds) -> MetricStatuses {
    MetricStatuses {
        hiring: classify(
            projection.team_growth as f64,
            thresholds.hiring_warn,
            thresholds.hiring_danger,
            false,
        ),
        sales: classify(
            projection.monthly_deals,
            thresholds.monthly_deals_warn,
            thresholds.monthly_deals_danger,
            false,
        ),
        profit: classify(
            projection.target_margin * 100.0,
            thresholds.margin_percent_warn,
            thresholds.margin_percent_danger,
            true,
        ),
    }
}
