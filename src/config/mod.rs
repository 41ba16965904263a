//! Engine Configuration Module
//!
//! Operator-tunable configuration loaded from TOML files. Every model
//! assumption and classification threshold that would otherwise be a
//! hardcoded constant is a config field whose default matches that
//! constant, so behavior is unchanged when no config file is present.
//!
//! ## Loading Order
//!
//! 1. `VELOCITY_CONFIG` environment variable (path to TOML file)
//! 2. `velocity_config.toml` in the current working directory
//! 3. Built-in defaults

mod engine_config;

pub use engine_config::*;
