//! Presenter handoff: finalize a meeting and read the resulting state.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use teampicker_core::error::CoreError;
use teampicker_core::roster::normalize_name;
use teampicker_core::schedule::next_presentation_date;
use teampicker_core::types::{Date, DbId};
use teampicker_db::models::project::{FinalizeProject, ProjectState};
use teampicker_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body of `POST /projects/{id}/finalize`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeRequest {
    pub last_presenter: String,
    pub next_presenter: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeResponse {
    pub message: String,
    pub next_presentation_date: Date,
}

/// POST /projects/{id}/finalize
///
/// The next presentation is scheduled one week after today (UTC date).
pub async fn finalize(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<FinalizeRequest>,
) -> AppResult<Json<FinalizeResponse>> {
    let handoff = FinalizeProject {
        last_presenter: normalize_name("Last presenter", &input.last_presenter)?,
        next_presenter: normalize_name("Next presenter", &input.next_presenter)?,
        next_presentation_date: next_presentation_date(Utc::now().date_naive()),
    };

    ProjectRepo::finalize(&state.pool, project_id, &handoff)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    tracing::info!(
        project_id,
        next_presenter = %handoff.next_presenter,
        date = %handoff.next_presentation_date,
        "Presentation finalized"
    );

    Ok(Json(FinalizeResponse {
        message: "Presentation finalized successfully".to_string(),
        next_presentation_date: handoff.next_presentation_date,
    }))
}

/// GET /projects/{id}/state
pub async fn state(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<ProjectState>> {
    let project_state = ProjectRepo::state(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;
    Ok(Json(project_state))
}
