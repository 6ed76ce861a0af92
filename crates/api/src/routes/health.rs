//! Liveness endpoints for both services.
//!
//! The persisted service also reports whether PostgreSQL answers; the
//! in-memory picker has no store, so its report omits that field.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::{AppState, PickerState};

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// Which binary answered (`projects` or `picker`).
    pub service: &'static str,
    /// `ok`, or `degraded` when the database is unreachable.
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_healthy: Option<bool>,
}

impl HealthReport {
    fn new(service: &'static str, db_healthy: Option<bool>) -> Self {
        let status = match db_healthy {
            Some(false) => "degraded",
            _ => "ok",
        };
        Self {
            service,
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

async fn projects_health(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = match teampicker_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            false
        }
    };
    Json(HealthReport::new("projects", Some(db_healthy)))
}

async fn picker_health() -> Json<HealthReport> {
    Json(HealthReport::new("picker", None))
}

/// `GET /health` for the persisted service.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(projects_health))
}

/// `GET /health` for the in-memory picker service.
pub fn picker_router() -> Router<PickerState> {
    Router::new().route("/health", get(picker_health))
}
