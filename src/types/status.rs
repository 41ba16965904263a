//! Three-tier metric status for dashboard emphasis

use serde::{Deserialize, Serialize};

/// Classification tier for a displayed metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Good,
    Warning,
    Danger,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => write!(f, "GOOD"),
            Self::Warning => write!(f, "WARNING"),
            Self::Danger => write!(f, "DANGER"),
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::Good
    }
}
