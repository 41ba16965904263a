//! API Regression Tests
//!
//! In-process tests that build the Axum app via `create_app()` and exercise
//! the /api/v1/* endpoints using `tower::ServiceExt::oneshot()`.
//! No binary spawn, no network port — runs in CI without `#[ignore]`.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use velocity_engine::api::{create_app, ApiState};
use velocity_engine::config::EngineConfig;
use velocity_engine::scenario::ScenarioStore;

fn test_state() -> ApiState {
    ApiState::new(&EngineConfig::default(), ScenarioStore::in_memory())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn reference_request_body() -> serde_json::Value {
    serde_json::json!({
        "baseline": { "revenue": 2_000_000.0, "team_size": 10, "client_count": 40 },
        "modifiers": { "revenue_target": 30.0 }
    })
}

/// All GET endpoints return 200 with the envelope shape.
#[tokio::test]
async fn get_endpoints_return_200_with_envelope() {
    for endpoint in ["/api/v1/health", "/api/v1/presets", "/api/v1/assumptions"] {
        let app = create_app(test_state());
        let resp = app.oneshot(get(endpoint)).await.unwrap();
        assert!(
            resp.status().is_success(),
            "GET {endpoint} returned {}",
            resp.status()
        );
        let v = body_json(resp).await;
        assert!(v.get("data").is_some(), "{endpoint} missing data");
        assert_eq!(v["meta"]["version"], "1", "{endpoint} missing meta");
    }
}

#[tokio::test]
async fn presets_carry_the_four_archetypes() {
    let app = create_app(test_state());
    let resp = app.oneshot(get("/api/v1/presets")).await.unwrap();
    let v = body_json(resp).await;

    let ids: Vec<&str> = v["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["steady", "rocket", "profit", "pivot"]);
    assert_eq!(v["data"][1]["name"], "Rocket Ship");
    assert_eq!(v["data"][1]["modifiers"]["revenue_target"], 100.0);
}

#[tokio::test]
async fn project_returns_reference_scenario_numbers() {
    let app = create_app(test_state());
    let resp = app
        .oneshot(post_json("/api/v1/project", reference_request_body()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let v = body_json(resp).await;
    let p = &v["data"]["projection"];
    assert_eq!(p["target_revenue"], 2_600_000.0);
    assert_eq!(p["implied_team_size"], 13);
    assert_eq!(p["team_growth"], 3);
    assert_eq!(p["deals_needed"], 16);
    assert_eq!(v["data"]["statuses"]["hiring"], "good");
    assert_eq!(v["data"]["statuses"]["sales"], "good");
    assert_eq!(v["data"]["statuses"]["profit"], "good");
    assert_eq!(v["data"]["input_faults"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn project_applies_whole_sets_atomically_beyond_slider_ranges() {
    // A posted set is a preset-style atomic application, not a slider
    // mutation — values beyond the UI ranges still project.
    let body = serde_json::json!({
        "baseline": { "revenue": 2_000_000.0, "team_size": 10 },
        "modifiers": { "revenue_target": 200.0 }
    });
    let app = create_app(test_state());
    let resp = app.oneshot(post_json("/api/v1/project", body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let v = body_json(resp).await;
    assert_eq!(v["data"]["modifiers"]["revenue_target"], 200.0);
    assert_eq!(v["data"]["projection"]["target_revenue"], 6_000_000.0);
}

#[tokio::test]
async fn project_rejects_divisor_killing_efficiency_with_422() {
    let body = serde_json::json!({
        "baseline": { "revenue": 2_000_000.0, "team_size": 10 },
        "modifiers": { "efficiency": -150.0 }
    });
    let app = create_app(test_state());
    let resp = app.oneshot(post_json("/api/v1/project", body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let v = body_json(resp).await;
    assert_eq!(v["error"]["code"], "VALIDATION_FAILED");
    assert!(
        v["error"]["message"].as_str().unwrap().contains("efficiency"),
        "message: {}",
        v["error"]["message"]
    );
}

#[tokio::test]
async fn save_rejects_invalid_levers_without_committing() {
    let state = test_state();
    let body = serde_json::json!({
        "name": "Broken",
        "baseline": { "revenue": 2_000_000.0, "team_size": 10 },
        "modifiers": { "acv": -120.0 }
    });
    let resp = create_app(state.clone())
        .oneshot(post_json("/api/v1/scenarios", body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Prior valid state is untouched — nothing was saved
    let resp = create_app(state)
        .oneshot(get("/api/v1/scenarios"))
        .await
        .unwrap();
    let v = body_json(resp).await;
    assert_eq!(v["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn degenerate_baseline_reports_input_faults() {
    let body = serde_json::json!({
        "baseline": { "revenue": 2_000_000.0, "team_size": 0 },
        "modifiers": { "revenue_target": 30.0 }
    });
    let app = create_app(test_state());
    let resp = app.oneshot(post_json("/api/v1/project", body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let v = body_json(resp).await;
    assert_eq!(v["data"]["input_faults"][0], "zero_team_size");
}

#[tokio::test]
async fn scenario_save_list_get_delete_flow() {
    let state = test_state();

    // Save
    let save_body = serde_json::json!({
        "name": "Conservative",
        "baseline": { "revenue": 2_000_000.0, "team_size": 10 },
        "modifiers": { "revenue_target": 15.0, "margin": 5.0 }
    });
    let resp = create_app(state.clone())
        .oneshot(post_json("/api/v1/scenarios", save_body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let saved = body_json(resp).await;
    let id = saved["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(saved["data"]["name"], "Conservative");

    // List
    let resp = create_app(state.clone())
        .oneshot(get("/api/v1/scenarios"))
        .await
        .unwrap();
    let listed = body_json(resp).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);

    // Get by id
    let resp = create_app(state.clone())
        .oneshot(get(&format!("/api/v1/scenarios/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // Delete
    let resp = create_app(state.clone())
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/v1/scenarios/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // Gone
    let resp = create_app(state)
        .oneshot(get(&format!("/api/v1/scenarios/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_scenario_name_is_a_bad_request() {
    let body = serde_json::json!({
        "name": "   ",
        "baseline": { "revenue": 2_000_000.0, "team_size": 10 },
        "modifiers": {}
    });
    let app = create_app(test_state());
    let resp = app
        .oneshot(post_json("/api/v1/scenarios", body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_scenario_id_is_a_bad_request() {
    let app = create_app(test_state());
    let resp = app
        .oneshot(get("/api/v1/scenarios/not-a-uuid"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let v = body_json(resp).await;
    assert_eq!(v["error"]["code"], "BAD_REQUEST");
}
