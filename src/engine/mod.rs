//! Scenario projection calculator
//!
//! The core of the Growth Velocity tool: pure derived-metric formulas that
//! turn a baseline and a modifier set into a dashboard of KPIs — target
//! revenue, implied headcount, profit pool, churn-replacement load, sales
//! velocity, and a composite impact score.
//!
//! Every function here is synchronous arithmetic with no I/O and no shared
//! state: identical inputs yield bit-identical outputs, so concurrent
//! evaluations (recomputing several saved scenarios at once) need no
//! coordination.

pub mod classify;
pub mod compare;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{BaselineMetrics, InputFault, Lever, ModifierSet, Projection};

// ============================================================================
// Model Assumptions
// ============================================================================

/// Fixed model assumptions behind the projection formulas.
///
/// Configurable constants rather than hard-wired magic so the calculator is
/// testable with alternative economics. Defaults match the dashboard's
/// simple model: 20% baseline margin, $50k ACV, 10% churn.
///
/// Invariant (enforced by config validation): `base_acv > 0`,
/// `margin_floor < margin_ceiling`, `churn_rate_floor <= base_churn_rate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    /// Baseline profit margin (fraction)
    pub base_margin_rate: f64,
    /// Lowest margin any scenario can project (fraction)
    pub margin_floor: f64,
    /// Highest margin any scenario can project (fraction)
    pub margin_ceiling: f64,
    /// Baseline average contract value ($)
    pub base_acv: f64,
    /// Baseline annual client churn rate (fraction)
    pub base_churn_rate: f64,
    /// Lowest churn rate any scenario can project (fraction)
    pub churn_rate_floor: f64,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            base_margin_rate: 0.20,
            margin_floor: 0.05,
            margin_ceiling: 0.60,
            base_acv: 50_000.0,
            base_churn_rate: 0.10,
            churn_rate_floor: 0.02,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// A lever combination that drives a divisor to zero or negative.
///
/// Not locally recoverable — the caller must reject the offending mutation
/// and keep the prior valid state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// The named lever makes the named quantity non-positive
    /// (efficiency ≤ -100% or ACV adjustment ≤ -100%).
    #[error("{lever} modifier of {value:+.1}% drives the {quantity} non-positive")]
    InvalidModifier {
        lever: Lever,
        value: f64,
        quantity: &'static str,
    },
}

impl EngineError {
    /// Which lever caused the failure.
    #[must_use]
    pub const fn lever(&self) -> Lever {
        match self {
            Self::InvalidModifier { lever, .. } => *lever,
        }
    }
}

// ============================================================================
// Projection
// ============================================================================

/// Result of one projection: the derived metrics plus any baseline
/// substitutions that were applied (degenerate inputs are reported, never
/// silently absorbed).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionReport {
    pub projection: Projection,
    pub input_faults: Vec<InputFault>,
}

/// Project a scenario from a baseline and a modifier set.
///
/// Formula chain (all real-valued; integer outputs by explicit ceiling):
///
/// ```text
/// target_revenue   = revenue × (1 + revenue_target/100)
/// adjusted_eff     = (revenue / team_size) × (1 + efficiency/100)
/// implied_team     = ⌈target_revenue / adjusted_eff⌉
/// target_margin    = clamp(base_margin + margin/100, floor, ceiling)
/// adjusted_churn   = max(churn_floor, base_churn - retention/100)
/// net_new_needed   = max(0, target - baseline) + revenue × adjusted_churn
/// deals_needed     = ⌈net_new_needed / (base_acv × (1 + acv/100))⌉
/// impact_score     = max(0, 100 - team_growth×3 - monthly_deals×5)
/// ```
///
/// # Errors
///
/// [`EngineError::InvalidModifier`] when the efficiency or ACV lever sits at
/// or below -100%, which would drive a divisor to zero or negative. The
/// lever factor itself is checked (not the derived product), so a
/// zero-revenue baseline never misreports the efficiency lever.
pub fn project(
    baseline: &BaselineMetrics,
    modifiers: &ModifierSet,
    assumptions: &Assumptions,
) -> Result<ProjectionReport, EngineError> {
    let efficiency_factor = 1.0 + modifiers.efficiency / 100.0;
    if efficiency_factor <= 0.0 {
        return Err(EngineError::InvalidModifier {
            lever: Lever::Efficiency,
            value: modifiers.efficiency,
            quantity: "revenue-per-head efficiency",
        });
    }

    let acv_factor = 1.0 + modifiers.acv / 100.0;
    if acv_factor <= 0.0 {
        return Err(EngineError::InvalidModifier {
            lever: Lever::Acv,
            value: modifiers.acv,
            quantity: "target contract value",
        });
    }

    let (clean, input_faults) = baseline.sanitized();

    let target_revenue = clean.revenue * (1.0 + modifiers.revenue_target / 100.0);

    // clean.team_size >= 1 after sanitization
    let base_efficiency = clean.revenue_per_head();
    let adjusted_efficiency = base_efficiency * efficiency_factor;

    // A zero-revenue baseline has zero efficiency: no revenue, no implied
    // headcount. Skip the division instead of failing.
    let implied_team_size = if adjusted_efficiency > 0.0 {
        (target_revenue / adjusted_efficiency).ceil() as u32
    } else {
        0
    };
    let team_growth = i64::from(implied_team_size) - i64::from(clean.team_size);

    let target_margin = (assumptions.base_margin_rate + modifiers.margin / 100.0)
        .clamp(assumptions.margin_floor, assumptions.margin_ceiling);
    let profit_pool = target_revenue * target_margin;

    let target_acv = assumptions.base_acv * acv_factor;
    let adjusted_churn_rate = (assumptions.base_churn_rate - modifiers.retention / 100.0)
        .max(assumptions.churn_rate_floor);
    let churn_replacement_dollars = clean.revenue * adjusted_churn_rate;
    let net_new_needed = (target_revenue - clean.revenue).max(0.0) + churn_replacement_dollars;
    let deals_needed = (net_new_needed / target_acv).ceil() as u32;
    let monthly_deals = f64::from(deals_needed) / 12.0;

    // Fixed heuristic from the dashboard: penalize hiring and sales pace.
    // Floors at 0; no ceiling, so downsizing scenarios can exceed 100.
    let impact_score = (100.0 - team_growth as f64 * 3.0 - monthly_deals * 5.0).max(0.0);

    Ok(ProjectionReport {
        projection: Projection {
            target_revenue,
            base_efficiency,
            adjusted_efficiency,
            implied_team_size,
            team_growth,
            target_margin,
            profit_pool,
            target_acv,
            adjusted_churn_rate,
            churn_replacement_dollars,
            net_new_needed,
            deals_needed,
            monthly_deals,
            impact_score,
        },
        input_faults,
    })
}

// ============================================================================
// Display formatting
// ============================================================================

/// Compact currency for logs and CLI output: `$2.6M`, `$520k`, `$950`.
#[must_use]
pub fn format_money(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.0}k", value / 1_000.0)
    } else {
        format!("${value:.0}")
    }
}

/// One-decimal deals-per-month pace for display: `1.3`.
///
/// Display-only — the raw `monthly_deals` value feeds the impact score and
/// the sales-status classification.
#[must_use]
pub fn format_monthly_deals(monthly_deals: f64) -> String {
    format!("{monthly_deals:.1}")
}
