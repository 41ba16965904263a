//! velocity-engine — Growth Velocity scenario modeling server
//!
//! Serves the scenario projection API consumed by the Architect OS
//! dashboard.
//!
//! # Usage
//!
//! ```bash
//! # Run with built-in defaults
//! cargo run --release
//!
//! # Run with an explicit config file and address
//! cargo run --release -- --config engagement.toml --addr 127.0.0.1:9090
//! ```
//!
//! # Environment Variables
//!
//! - `VELOCITY_CONFIG`: path to a TOML config file
//! - `RUST_LOG`: logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use velocity_engine::api::{create_app, ApiState};
use velocity_engine::config::EngineConfig;
use velocity_engine::scenario::ScenarioStore;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "velocity-engine")]
#[command(about = "Architect OS Growth Velocity scenario modeling server")]
#[command(version)]
struct CliArgs {
    /// Path to a TOML config file (takes precedence over $VELOCITY_CONFIG
    /// and ./velocity_config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the server address (default from config, "0.0.0.0:8080")
    #[arg(short, long)]
    addr: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::load_from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::load(),
    };
    info!(
        engagement = %config.engagement.name,
        base_acv = config.assumptions.base_acv,
        base_churn = config.assumptions.base_churn_rate,
        "Engine configuration loaded"
    );

    let store = match &config.scenarios.path {
        Some(path) => ScenarioStore::with_file(path, config.scenarios.max_saved),
        None => ScenarioStore::in_memory(),
    };

    let addr = args.addr.unwrap_or_else(|| config.server.addr.clone());
    let state = ApiState::new(&config, store);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "Scenario API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for shutdown signal"),
    }
}
