#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use teampicker_api::config::{CorsPolicy, ServerConfig};
use teampicker_api::router::{build_app_router, build_picker_router};
use teampicker_api::state::{AppState, PickerState};
use teampicker_core::picker::TeamPicker;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors: CorsPolicy::Any,
        request_timeout_secs: 30,
        picker_teams: vec![
            "Team A".to_string(),
            "Team B".to_string(),
            "Team C".to_string(),
            "Team D".to_string(),
        ],
    }
}

/// Build the persisted service router exactly as `main.rs` does.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

/// Build the in-memory picker router over a shared state handle.
pub fn build_picker_app(state: PickerState) -> Router {
    build_picker_router(state, &test_config())
}

/// Fresh picker state holding the given teams.
pub fn picker_state(teams: &[&str]) -> PickerState {
    PickerState::new(TeamPicker::new(teams.iter().copied()))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response {
    send(app, Method::POST, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a project through the API and return its id.
pub async fn create_project(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/projects",
        serde_json::json!({ "name": name }),
    )
    .await;
    body_json(response).await["project"]["id"].as_i64().unwrap()
}

/// Add teams to a project's permanent roster through the API.
pub async fn add_permanent_teams(pool: &PgPool, project_id: i64, teams: &[&str]) {
    for team in teams {
        post_json(
            build_test_app(pool.clone()),
            &format!("/projects/{project_id}/permanent-teams"),
            serde_json::json!({ "teamName": team }),
        )
        .await;
    }
}

/// Extract a JSON array of strings.
pub fn strings(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}
