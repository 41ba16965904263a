//! velocity-engine: Growth Velocity Scenario Modeling
//!
//! Pure derived-metric engine behind the Architect OS "Growth Velocity"
//! tool: a small pipeline that turns baseline business metrics (revenue,
//! team size, churn, margin, ACV) and five percentage levers into a
//! dashboard of projected KPIs, classified into good/warning/danger tiers.
//!
//! ## Architecture
//!
//! - **Projection Calculator**: pure formulas from `(baseline, modifiers,
//!   assumptions)` to a [`types::Projection`]
//! - **Status Classifier**: fixed warn/danger thresholds per displayed metric
//! - **Preset Library**: named modifier bundles applied atomically
//! - **Scenario Store**: saved `(baseline, modifiers, projection)` snapshots
//! - **API**: axum boundary consumed by the dashboard

pub mod api;
pub mod config;
pub mod engine;
pub mod presets;
pub mod scenario;
pub mod types;

// Re-export configuration
pub use config::EngineConfig;

// Re-export the core calculator surface
pub use engine::{
    format_money, format_monthly_deals, project, Assumptions, EngineError, ProjectionReport,
};

// Re-export classification
pub use engine::classify::{classify, statuses, MetricStatuses, StatusThresholds};

// Re-export commonly used types
pub use types::{BaselineMetrics, InputFault, Lever, ModifierSet, Projection, Status};

// Re-export presets and snapshots
pub use presets::Preset;
pub use scenario::{ScenarioSnapshot, ScenarioStore, StoreError};
