//! Baseline business metrics supplied by the snapshot layer

use serde::{Deserialize, Serialize};

/// Current-state business metrics for an engagement.
///
/// Supplied by an external collaborator (the snapshot/intake layer) and
/// treated as read-only by the engine. `revenue` is annualized gross revenue
/// (AGI — revenue net of pass-through costs), `team_size` is full-time
/// equivalent headcount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineMetrics {
    /// Annualized gross revenue ($)
    pub revenue: f64,
    /// Full-time-equivalent headcount
    pub team_size: u32,
    /// Active client count (consumed by collaborators, not by core formulas)
    #[serde(default)]
    pub client_count: u32,
}

/// Degenerate baseline conditions, reported alongside the projection rather
/// than silently absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFault {
    /// `team_size` was 0 — substituted with 1 so revenue-per-head is defined
    ZeroTeamSize,
    /// `revenue` was negative — substituted with 0
    NegativeRevenue,
}

impl std::fmt::Display for InputFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroTeamSize => write!(f, "team size of 0 substituted with 1"),
            Self::NegativeRevenue => write!(f, "negative revenue substituted with 0"),
        }
    }
}

impl BaselineMetrics {
    /// Produce a safe copy for calculation, reporting any substitutions.
    ///
    /// `team_size` is floored at 1 (it is used as a divisor) and negative
    /// revenue is floored at 0. The faults are surfaced to the caller so a
    /// degenerate baseline is never silently projected.
    #[must_use]
    pub fn sanitized(&self) -> (Self, Vec<InputFault>) {
        let mut faults = Vec::new();
        let mut clean = *self;

        if clean.team_size == 0 {
            clean.team_size = 1;
            faults.push(InputFault::ZeroTeamSize);
        }
        if clean.revenue < 0.0 {
            clean.revenue = 0.0;
            faults.push(InputFault::NegativeRevenue);
        }

        (clean, faults)
    }

    /// Revenue per full-time head ($/FTE), the baseline efficiency figure.
    #[must_use]
    pub fn revenue_per_head(&self) -> f64 {
        self.revenue / f64::from(self.team_size.max(1))
    }
}
