//! Handlers for a project's selection history.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use teampicker_core::roster::normalize_name;
use teampicker_core::types::DbId;
use teampicker_db::models::history::{HistoryItem, HISTORY_LIMIT};
use teampicker_db::repositories::HistoryRepo;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Body of `POST /projects/{id}/history`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSelectionRequest {
    pub team_name: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryItem>,
}

/// POST /projects/{id}/history
pub async fn record(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<RecordSelectionRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let team_name = normalize_name("Team name", &input.team_name)?;
    let entry = HistoryRepo::append(&state.pool, project_id, &team_name).await?;
    tracing::info!(project_id, team = %entry.team_name, "Selection recorded");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("History recorded successfully")),
    ))
}

/// GET /projects/{id}/history
pub async fn list(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<HistoryResponse>> {
    let history = HistoryRepo::recent(&state.pool, project_id, HISTORY_LIMIT).await?;
    Ok(Json(HistoryResponse { history }))
}
