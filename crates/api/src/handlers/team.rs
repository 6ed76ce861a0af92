//! Handlers for a project's permanent roster and temporary pool.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use teampicker_core::roster::normalize_name;
use teampicker_core::types::DbId;
use teampicker_db::models::team::TeamRow;
use teampicker_db::repositories::TeamRosterRepo;

use crate::error::{AppError, AppResult};
use crate::response::{MessageResponse, TeamsResponse};
use crate::state::AppState;

/// Body of `POST /projects/{id}/update-teams`.
#[derive(Debug, Deserialize)]
pub struct UpdateTeamsRequest {
    pub teams: Vec<String>,
}

/// Body of `POST /projects/{id}/permanent-teams`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTeamRequest {
    pub team_name: String,
}

#[derive(Debug, Serialize)]
pub struct ResetTeamsResponse {
    pub message: String,
    pub teams: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TeamAddedResponse {
    pub message: String,
    pub team: TeamRow,
}

// ---------------------------------------------------------------------------
// Temporary pool
// ---------------------------------------------------------------------------

/// GET /projects/{id}/teams
pub async fn list_temporary(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<TeamsResponse>> {
    let teams = TeamRosterRepo::list_temporary(&state.pool, project_id).await?;
    Ok(Json(TeamsResponse { teams }))
}

/// POST /projects/{id}/populate-teams
pub async fn populate(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<TeamsResponse>> {
    let teams = TeamRosterRepo::populate(&state.pool, project_id).await?;
    Ok(Json(TeamsResponse { teams }))
}

/// POST /projects/{id}/reset-teams
pub async fn reset(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<ResetTeamsResponse>> {
    let teams = TeamRosterRepo::reset(&state.pool, project_id).await?;
    tracing::info!(project_id, count = teams.len(), "Temporary pool reset");
    Ok(Json(ResetTeamsResponse {
        message: "Teams reset successfully".to_string(),
        teams,
    }))
}

/// POST /projects/{id}/update-teams
///
/// The list is stored as sent: names are neither trimmed nor checked
/// against the permanent roster.
pub async fn update(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<UpdateTeamsRequest>,
) -> AppResult<Json<MessageResponse>> {
    TeamRosterRepo::replace_temporary(&state.pool, project_id, &input.teams).await?;
    Ok(Json(MessageResponse::new("Teams updated successfully")))
}

/// DELETE /projects/{id}/teams/{team_name}
///
/// Succeeds whether or not the team was in the pool.
pub async fn remove_temporary(
    State(state): State<AppState>,
    Path((project_id, team_name)): Path<(DbId, String)>,
) -> AppResult<Json<MessageResponse>> {
    let removed = TeamRosterRepo::remove_temporary(&state.pool, project_id, &team_name).await?;
    let message = if removed {
        format!("Team '{team_name}' removed successfully")
    } else {
        format!("Team '{team_name}' was not in the pool")
    };
    Ok(Json(MessageResponse::new(message)))
}

// ---------------------------------------------------------------------------
// Permanent roster
// ---------------------------------------------------------------------------

/// GET /projects/{id}/permanent-teams
pub async fn list_permanent(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<TeamsResponse>> {
    let teams = TeamRosterRepo::list_permanent(&state.pool, project_id).await?;
    Ok(Json(TeamsResponse { teams }))
}

/// POST /projects/{id}/permanent-teams
pub async fn add_permanent(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<AddTeamRequest>,
) -> AppResult<(StatusCode, Json<TeamAddedResponse>)> {
    let team_name = normalize_name("Team name", &input.team_name)?;
    let team = TeamRosterRepo::add_permanent(&state.pool, project_id, &team_name)
        .await
        .map_err(AppError::client_input)?;
    Ok((
        StatusCode::CREATED,
        Json(TeamAddedResponse {
            message: "Team added successfully".to_string(),
            team,
        }),
    ))
}

/// DELETE /projects/{id}/permanent-teams/{team_name}
pub async fn remove_permanent(
    State(state): State<AppState>,
    Path((project_id, team_name)): Path<(DbId, String)>,
) -> AppResult<Json<MessageResponse>> {
    let removed = TeamRosterRepo::remove_permanent(&state.pool, project_id, &team_name).await?;
    let message = if removed {
        format!("Team '{team_name}' removed from roster")
    } else {
        format!("Team '{team_name}' was not in the roster")
    };
    Ok(Json(MessageResponse::new(message)))
}
