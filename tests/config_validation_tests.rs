//! Config Validation Tests
//!
//! Exercises the config layer independently from the engine: defaults match
//! the built-in constants, TOML files load and override sections, and
//! inconsistent configs are rejected with every violated rule listed.

use std::io::Write;

use velocity_engine::config::{ConfigError, EngineConfig};
use velocity_engine::Assumptions;

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn default_config_matches_engine_constants() {
    let config = EngineConfig::default();

    assert_eq!(config.assumptions, Assumptions::default());
    assert!((config.assumptions.base_margin_rate - 0.20).abs() < 1e-9);
    assert!((config.assumptions.base_acv - 50_000.0).abs() < 1e-9);
    assert!((config.status_thresholds.hiring_warn - 5.0).abs() < 1e-9);
    assert!((config.status_thresholds.margin_percent_danger - 10.0).abs() < 1e-9);
    assert_eq!(config.server.addr, "0.0.0.0:8080");
}

#[test]
fn default_config_validates() {
    EngineConfig::default().validate().unwrap();
}

// ============================================================================
// File loading
// ============================================================================

#[test]
fn partial_toml_overrides_only_named_sections() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[engagement]
name = "Acme Growth Review"
client = "Acme Agency"

[assumptions]
base_acv = 75000.0
base_churn_rate = 0.08
"#
    )
    .unwrap();

    let config = EngineConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.engagement.name, "Acme Growth Review");
    assert!((config.assumptions.base_acv - 75_000.0).abs() < 1e-9);
    assert!((config.assumptions.base_churn_rate - 0.08).abs() < 1e-9);
    // Untouched sections keep their defaults
    assert!((config.assumptions.base_margin_rate - 0.20).abs() < 1e-9);
    assert!((config.status_thresholds.monthly_deals_warn - 3.0).abs() < 1e-9);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "this is not toml [[[").unwrap();

    let err = EngineConfig::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_, _)), "got: {err}");
}

#[test]
fn missing_file_is_an_io_error() {
    let err =
        EngineConfig::load_from_file(std::path::Path::new("/nonexistent/velocity.toml"))
            .unwrap_err();
    assert!(matches!(err, ConfigError::Io(_, _)), "got: {err}");
}

// ============================================================================
// Validation rules
// ============================================================================

fn validation_errors(config: &EngineConfig) -> Vec<String> {
    match config.validate() {
        Err(ConfigError::Validation(errors)) => errors,
        Ok(()) => Vec::new(),
        Err(other) => panic!("expected validation error, got: {other}"),
    }
}

#[test]
fn zero_acv_is_rejected() {
    let mut config = EngineConfig::default();
    config.assumptions.base_acv = 0.0;

    let errors = validation_errors(&config);
    assert!(
        errors.iter().any(|e| e.contains("base_acv")),
        "errors: {errors:?}"
    );
}

#[test]
fn inverted_margin_bounds_are_rejected() {
    let mut config = EngineConfig::default();
    config.assumptions.margin_floor = 0.70;
    config.assumptions.margin_ceiling = 0.30;

    let errors = validation_errors(&config);
    assert!(
        errors.iter().any(|e| e.contains("margin_floor")),
        "errors: {errors:?}"
    );
}

#[test]
fn churn_floor_above_base_rate_is_rejected() {
    let mut config = EngineConfig::default();
    config.assumptions.churn_rate_floor = 0.15;

    let errors = validation_errors(&config);
    assert!(
        errors.iter().any(|e| e.contains("churn_rate_floor")),
        "errors: {errors:?}"
    );
}

#[test]
fn non_escalating_hiring_thresholds_are_rejected() {
    let mut config = EngineConfig::default();
    config.status_thresholds.hiring_warn = 10.0;
    config.status_thresholds.hiring_danger = 5.0;

    let errors = validation_errors(&config);
    assert!(
        errors.iter().any(|e| e.contains("hiring_danger")),
        "errors: {errors:?}"
    );
}

#[test]
fn reversed_margin_thresholds_must_descend() {
    let mut config = EngineConfig::default();
    config.status_thresholds.margin_percent_warn = 10.0;
    config.status_thresholds.margin_percent_danger = 15.0;

    let errors = validation_errors(&config);
    assert!(
        errors.iter().any(|e| e.contains("margin_percent_danger")),
        "errors: {errors:?}"
    );
}

#[test]
fn multiple_violations_are_all_listed() {
    let mut config = EngineConfig::default();
    config.assumptions.base_acv = -1.0;
    config.scenarios.max_saved = 0;
    config.status_thresholds.monthly_deals_danger = 1.0;

    let errors = validation_errors(&config);
    assert!(errors.len() >= 3, "expected 3+ errors, got: {errors:?}");
}

#[test]
fn invalid_file_fails_load_with_all_rules() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[assumptions]
base_acv = 0.0
margin_floor = 0.9
margin_ceiling = 0.1
"#
    )
    .unwrap();

    let err = EngineConfig::load_from_file(file.path()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("base_acv"), "message: {message}");
    assert!(message.contains("margin_floor"), "message: {message}");
}
