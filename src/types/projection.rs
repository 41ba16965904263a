//! Derived scenario projection record

use serde::{Deserialize, Serialize};

/// Full derived-metric record for one `(baseline, modifiers)` evaluation.
///
/// Created transiently per computation call and owned by the caller — the
/// engine never stores projections. Intermediates (efficiency, target ACV,
/// churn figures) are exposed because the comparison and treadmill views
/// consume them directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Baseline revenue grown by the revenue-target lever ($)
    pub target_revenue: f64,
    /// Baseline revenue per full-time head ($/FTE)
    pub base_efficiency: f64,
    /// Revenue per head after the efficiency lever ($/FTE)
    pub adjusted_efficiency: f64,
    /// Headcount implied by target revenue at adjusted efficiency (ceil)
    pub implied_team_size: u32,
    /// Implied headcount minus baseline — negative means downsizing
    pub team_growth: i64,
    /// Profit margin after the margin lever, clamped to floor/ceiling
    pub target_margin: f64,
    /// Target revenue × target margin ($)
    pub profit_pool: f64,
    /// Average contract value after the ACV lever ($)
    pub target_acv: f64,
    /// Churn rate after the retention lever, floored
    pub adjusted_churn_rate: f64,
    /// Revenue regenerated purely to offset client loss ($)
    pub churn_replacement_dollars: f64,
    /// Growth delta plus churn replacement — total new revenue required ($)
    pub net_new_needed: f64,
    /// Deals required to close `net_new_needed` at target ACV (ceil)
    pub deals_needed: u32,
    /// Raw deals-per-month pace (deals_needed / 12, unrounded)
    pub monthly_deals: f64,
    /// Composite heuristic penalizing hiring and sales-pace demands.
    /// Floors at 0; deliberately uncapped above 100 when both penalty
    /// terms go negative (downsizing plus slowing sales pace).
    pub impact_score: f64,
}
