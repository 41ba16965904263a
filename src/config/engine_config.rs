//! Engine configuration — assumptions and thresholds as TOML values
//!
//! Each section implements `Default` with values matching the engine's
//! built-in constants, ensuring zero-change behavior with no config file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::engine::classify::StatusThresholds;
use crate::engine::Assumptions;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for an engagement deployment.
///
/// Load with [`EngineConfig::load`], which searches:
/// 1. `$VELOCITY_CONFIG` env var
/// 2. `./velocity_config.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Engagement identification
    #[serde(default)]
    pub engagement: EngagementInfo,

    /// Projection model assumptions
    #[serde(default)]
    pub assumptions: Assumptions,

    /// Status classification thresholds
    #[serde(default)]
    pub status_thresholds: StatusThresholds,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Scenario snapshot persistence
    #[serde(default)]
    pub scenarios: ScenarioStoreConfig,
}

/// Engagement / client identification for logs and API metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementInfo {
    /// Engagement display name
    #[serde(default = "default_engagement_name")]
    pub name: String,
    /// Client organization
    #[serde(default)]
    pub client: String,
}

fn default_engagement_name() -> String {
    "Unnamed Engagement".to_string()
}

impl Default for EngagementInfo {
    fn default() -> Self {
        Self {
            name: default_engagement_name(),
            client: String::new(),
        }
    }
}

/// HTTP server binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address, `host:port`
    #[serde(default = "default_addr")]
    pub addr: String,
}

fn default_addr() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
        }
    }
}

/// Scenario snapshot store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioStoreConfig {
    /// JSON file backing the store; `None` keeps snapshots in memory only
    #[serde(default = "default_scenario_path")]
    pub path: Option<PathBuf>,
    /// Cap on saved snapshots before oldest-first eviction
    #[serde(default = "default_max_saved")]
    pub max_saved: usize,
}

fn default_scenario_path() -> Option<PathBuf> {
    Some(PathBuf::from("scenarios.json"))
}

const fn default_max_saved() -> usize {
    crate::scenario::DEFAULT_MAX_SNAPSHOTS
}

impl Default for ScenarioStoreConfig {
    fn default() -> Self {
        Self {
            path: default_scenario_path(),
            max_saved: default_max_saved(),
        }
    }
}

// ============================================================================
// Loading & Validation
// ============================================================================

impl EngineConfig {
    /// Load configuration using the standard search order:
    /// 1. `$VELOCITY_CONFIG` environment variable
    /// 2. `./velocity_config.toml` in the current working directory
    /// 3. Built-in defaults
    #[must_use]
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("VELOCITY_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), engagement = %config.engagement.name, "Loaded config from VELOCITY_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from VELOCITY_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "VELOCITY_CONFIG points to non-existent file, falling back");
            }
        }

        let local = PathBuf::from("velocity_config.toml");
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(engagement = %config.engagement.name, "Loaded config from ./velocity_config.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./velocity_config.toml, using defaults");
                }
            }
        }

        info!("No velocity_config.toml found — using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] on unreadable file, malformed TOML, or a config that
    /// fails validation.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: Self =
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate assumptions and thresholds for internal consistency.
    ///
    /// Rules:
    /// - `base_acv` must be positive (it is a divisor)
    /// - margin floor/ceiling must be ordered fractions in [0, 1]
    /// - churn floor must be positive and not above the base churn rate
    /// - danger thresholds must sit beyond warning thresholds in each
    ///   metric's worsening direction
    ///
    /// # Errors
    ///
    /// [`ConfigError::Validation`] listing every violated rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        let a = &self.assumptions;
        if a.base_acv <= 0.0 {
            errors.push(format!(
                "assumptions.base_acv must be positive, got {:.2}",
                a.base_acv
            ));
        }
        if !(0.0..=1.0).contains(&a.margin_floor) || !(0.0..=1.0).contains(&a.margin_ceiling) {
            errors.push(format!(
                "assumptions margin floor/ceiling must be fractions in [0, 1], got {:.2}/{:.2}",
                a.margin_floor, a.margin_ceiling
            ));
        }
        if a.margin_floor >= a.margin_ceiling {
            errors.push(format!(
                "assumptions.margin_floor ({:.2}) must be less than margin_ceiling ({:.2})",
                a.margin_floor, a.margin_ceiling
            ));
        }
        if !(0.0..=1.0).contains(&a.base_margin_rate) {
            errors.push(format!(
                "assumptions.base_margin_rate must be a fraction in [0, 1], got {:.2}",
                a.base_margin_rate
            ));
        }
        if a.churn_rate_floor <= 0.0 {
            errors.push(format!(
                "assumptions.churn_rate_floor must be positive, got {:.3}",
                a.churn_rate_floor
            ));
        }
        if a.churn_rate_floor > a.base_churn_rate {
            errors.push(format!(
                "assumptions.churn_rate_floor ({:.3}) must not exceed base_churn_rate ({:.3})",
                a.churn_rate_floor, a.base_churn_rate
            ));
        }

        let t = &self.status_thresholds;
        Self::check_escalation(t.hiring_warn, t.hiring_danger, "hiring", &mut errors);
        Self::check_escalation(
            t.monthly_deals_warn,
            t.monthly_deals_danger,
            "monthly_deals",
            &mut errors,
        );
        // Margin is a reversed metric: danger sits below warning
        if t.margin_percent_danger >= t.margin_percent_warn {
            errors.push(format!(
                "status_thresholds.margin_percent_danger ({:.1}) must be less than margin_percent_warn ({:.1})",
                t.margin_percent_danger, t.margin_percent_warn
            ));
        }

        if self.scenarios.max_saved == 0 {
            errors.push("scenarios.max_saved must be > 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    fn check_escalation(warn: f64, danger: f64, name: &str, errors: &mut Vec<String>) {
        if danger <= warn {
            errors.push(format!(
                "status_thresholds.{name}_danger ({danger:.1}) must be greater than {name}_warn ({warn:.1})"
            ));
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "Config I/O error ({}): {}", path.display(), e),
            Self::Parse(path, e) => write!(f, "Config parse error ({}): {}", path.display(), e),
            Self::Validation(errors) => {
                writeln!(f, "Config validation failed:")?;
                for e in errors {
                    writeln!(f, "  - {e}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}
