//! REST API module using Axum
//!
//! HTTP boundary for the scenario modeling engine, consumed by the
//! Architect OS dashboard:
//! - `GET  /api/v1/health` — liveness
//! - `GET  /api/v1/presets` — preset library
//! - `GET  /api/v1/assumptions` — active model assumptions
//! - `POST /api/v1/project` — evaluate a scenario (nothing persisted)
//! - `GET/POST /api/v1/scenarios`, `GET/DELETE /api/v1/scenarios/:id` —
//!   saved snapshot store

pub mod envelope;
pub mod handlers;

pub use handlers::ApiState;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the scenario API router.
pub fn create_app(state: ApiState) -> Router {
    Router::new()
        .route("/api/v1/health", get(handlers::health))
        .route("/api/v1/presets", get(handlers::preset_library))
        .route("/api/v1/assumptions", get(handlers::active_assumptions))
        .route(
            "/api/v1/project",
            axum::routing::post(handlers::project_scenario),
        )
        .route(
            "/api/v1/scenarios",
            get(handlers::list_scenarios).post(handlers::save_scenario),
        )
        .route(
            "/api/v1/scenarios/:id",
            get(handlers::get_scenario).delete(handlers::delete_scenario),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
