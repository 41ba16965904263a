//! Baseline-vs-scenario comparison records for the analysis views

use serde::{Deserialize, Serialize};

use crate::engine::Assumptions;
use crate::types::{BaselineMetrics, Projection};

/// One row of the scenario comparison grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Display name of the metric
    pub metric: &'static str,
    /// Value under the current baseline
    pub baseline: f64,
    /// Value under the active scenario
    pub scenario: f64,
}

/// Churn-replacement vs net-growth split of the required new revenue
/// (the "treadmill" view — how much selling just stands still).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreadmillSplit {
    /// Revenue regenerated purely to offset client loss ($)
    pub churn_replacement_dollars: f64,
    /// Revenue above baseline the scenario actually adds ($)
    pub net_growth_dollars: f64,
}

/// Data-grid rows comparing the baseline against a projection.
#[must_use]
pub fn comparison_rows(
    baseline: &BaselineMetrics,
    assumptions: &Assumptions,
    projection: &Projection,
) -> Vec<ComparisonRow> {
    let baseline_margin = assumptions.base_margin_rate;
    vec![
        ComparisonRow {
            metric: "Revenue",
            baseline: baseline.revenue,
            scenario: projection.target_revenue,
        },
        ComparisonRow {
            metric: "Profit Margin %",
            baseline: baseline_margin * 100.0,
            scenario: projection.target_margin * 100.0,
        },
        ComparisonRow {
            metric: "Profit Pool",
            baseline: baseline.revenue * baseline_margin,
            scenario: projection.profit_pool,
        },
        ComparisonRow {
            metric: "Team Size",
            baseline: f64::from(baseline.team_size),
            scenario: f64::from(projection.implied_team_size),
        },
    ]
}

/// Split the required new revenue into churn replacement and net growth.
#[must_use]
pub fn treadmill_split(projection: &Projection) -> TreadmillSplit {
    TreadmillSplit {
        churn_replacement_dollars: projection.churn_replacement_dollars,
        net_growth_dollars: projection.net_new_needed - projection.churn_replacement_dollars,
    }
}
