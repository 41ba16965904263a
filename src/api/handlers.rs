//! Scenario API handlers — consistent envelope, typed responses.
//!
//! All handlers return `Response` via [`ApiResponse::ok`] or
//! [`ApiErrorResponse`]. A modifier set arriving in a request body is an
//! atomic whole-set application (like a preset) and may sit outside the
//! UI slider ranges; per-lever clamping belongs to the interaction layer's
//! mutation path. Lever combinations that invalidate a divisor are
//! rejected with 422 and never committed.

use axum::extract::{Path, State};
use axum::response::Response;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};
use uuid::Uuid;

use super::envelope::{ApiErrorResponse, ApiResponse};
use crate::config::EngineConfig;
use crate::engine::classify::{statuses, MetricStatuses, StatusThresholds};
use crate::engine::compare::{comparison_rows, treadmill_split, ComparisonRow, TreadmillSplit};
use crate::engine::{project, Assumptions, EngineError};
use crate::presets;
use crate::scenario::{ScenarioSnapshot, ScenarioStore};
use crate::types::{BaselineMetrics, InputFault, ModifierSet, Projection};

/// Shared state behind the scenario API.
#[derive(Clone)]
pub struct ApiState {
    pub assumptions: Assumptions,
    pub thresholds: StatusThresholds,
    pub store: Arc<RwLock<ScenarioStore>>,
}

impl ApiState {
    /// Build state from a validated config plus a scenario store.
    #[must_use]
    pub fn new(config: &EngineConfig, store: ScenarioStore) -> Self {
        Self {
            assumptions: config.assumptions,
            thresholds: config.status_thresholds,
            store: Arc::new(RwLock::new(store)),
        }
    }
}

// ============================================================================
// Request / response types
// ============================================================================

/// Body for `POST /api/v1/project`.
#[derive(Debug, Deserialize)]
pub struct ProjectRequest {
    pub baseline: BaselineMetrics,
    pub modifiers: ModifierSet,
}

/// Body for `POST /api/v1/scenarios`.
#[derive(Debug, Deserialize)]
pub struct SaveScenarioRequest {
    pub name: String,
    pub baseline: BaselineMetrics,
    pub modifiers: ModifierSet,
}

/// Full evaluation payload: projection, per-metric statuses, degeneracy
/// faults, and the comparison/treadmill views.
#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    /// Modifier set actually evaluated
    pub modifiers: ModifierSet,
    pub projection: Projection,
    pub statuses: MetricStatuses,
    pub input_faults: Vec<InputFault>,
    pub comparison: Vec<ComparisonRow>,
    pub treadmill: TreadmillSplit,
}

// ============================================================================
// Handlers
// ============================================================================

/// `GET /api/v1/health`
pub async fn health() -> Response {
    ApiResponse::ok(serde_json::json!({
        "status": "ok",
        "engine": env!("CARGO_PKG_VERSION"),
    }))
}

/// `GET /api/v1/presets`
pub async fn preset_library() -> Response {
    ApiResponse::ok(presets::library())
}

/// `GET /api/v1/assumptions`
pub async fn active_assumptions(State(state): State<ApiState>) -> Response {
    ApiResponse::ok(state.assumptions)
}

/// `POST /api/v1/project` — evaluate a scenario without saving it.
pub async fn project_scenario(
    State(state): State<ApiState>,
    axum::Json(req): axum::Json<ProjectRequest>,
) -> Response {
    match evaluate(&state, &req.baseline, &req.modifiers) {
        Ok(response) => {
            debug!(
                target_revenue = response.projection.target_revenue,
                impact_score = response.projection.impact_score,
                "Scenario projected"
            );
            ApiResponse::ok(response)
        }
        Err(e) => ApiErrorResponse::unprocessable(e.to_string()),
    }
}

/// `GET /api/v1/scenarios`
pub async fn list_scenarios(State(state): State<ApiState>) -> Response {
    let store = state.store.read().await;
    ApiResponse::ok(store.list().to_vec())
}

/// `POST /api/v1/scenarios` — project and persist a named snapshot.
pub async fn save_scenario(
    State(state): State<ApiState>,
    axum::Json(req): axum::Json<SaveScenarioRequest>,
) -> Response {
    if req.name.trim().is_empty() {
        return ApiErrorResponse::bad_request("scenario name must not be empty");
    }

    let evaluation = match evaluate(&state, &req.baseline, &req.modifiers) {
        Ok(evaluation) => evaluation,
        Err(e) => return ApiErrorResponse::unprocessable(e.to_string()),
    };

    let snapshot = ScenarioSnapshot::capture(
        req.name.trim(),
        req.baseline,
        evaluation.modifiers,
        evaluation.projection,
    );

    let mut store = state.store.write().await;
    match store.save(snapshot.clone()) {
        Ok(()) => {
            info!(id = %snapshot.id, name = %snapshot.name, "Scenario saved");
            ApiResponse::ok(snapshot)
        }
        Err(e) => {
            error!(error = %e, "Failed to persist scenario");
            ApiErrorResponse::internal(e.to_string())
        }
    }
}

/// `GET /api/v1/scenarios/:id`
pub async fn get_scenario(State(state): State<ApiState>, Path(id): Path<String>) -> Response {
    let Ok(id) = Uuid::parse_str(&id) else {
        return ApiErrorResponse::bad_request("scenario id must be a UUID");
    };

    let store = state.store.read().await;
    match store.get(id) {
        Some(snapshot) => ApiResponse::ok(snapshot.clone()),
        None => ApiErrorResponse::not_found(format!("no scenario with id {id}")),
    }
}

/// `DELETE /api/v1/scenarios/:id`
pub async fn delete_scenario(State(state): State<ApiState>, Path(id): Path<String>) -> Response {
    let Ok(id) = Uuid::parse_str(&id) else {
        return ApiErrorResponse::bad_request("scenario id must be a UUID");
    };

    let mut store = state.store.write().await;
    match store.delete(id) {
        Ok(true) => ApiResponse::ok(serde_json::json!({ "deleted": true })),
        Ok(false) => ApiErrorResponse::not_found(format!("no scenario with id {id}")),
        Err(e) => {
            error!(error = %e, "Failed to delete scenario");
            ApiErrorResponse::internal(e.to_string())
        }
    }
}

// ============================================================================
// Shared evaluation path
// ============================================================================

fn evaluate(
    state: &ApiState,
    baseline: &BaselineMetrics,
    modifiers: &ModifierSet,
) -> Result<EvaluationResponse, EngineError> {
    let report = project(baseline, modifiers, &state.assumptions)?;

    Ok(EvaluationResponse {
        modifiers: *modifiers,
        statuses: statuses(&report.projection, &state.thresholds),
        comparison: comparison_rows(baseline, &state.assumptions, &report.projection),
        treadmill: treadmill_split(&report.projection),
        projection: report.projection,
        input_faults: report.input_faults,
    })
}
