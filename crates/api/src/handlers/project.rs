//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use teampicker_core::error::CoreError;
use teampicker_core::roster::normalize_name;
use teampicker_core::types::DbId;
use teampicker_db::models::project::{CreateProject, Project};
use teampicker_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Body of `POST /projects`.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
}

#[derive(Debug, Serialize)]
pub struct ProjectCreatedResponse {
    pub message: String,
    pub project: Project,
}

/// GET /projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ProjectListResponse>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(ProjectListResponse { projects }))
}

/// POST /projects
///
/// Any store failure here (typically a duplicate name) is reported as 400.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<ProjectCreatedResponse>)> {
    let name = normalize_name("Project name", &input.name)?;
    let project = ProjectRepo::create(&state.pool, &CreateProject { name })
        .await
        .map_err(AppError::client_input)?;

    tracing::info!(project_id = project.id, name = %project.name, "Project created");

    Ok((
        StatusCode::CREATED,
        Json(ProjectCreatedResponse {
            message: "Project created successfully".to_string(),
            project,
        }),
    ))
}

/// DELETE /projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }
    tracing::info!(project_id = id, "Project deleted");
    Ok(Json(MessageResponse::new("Project deleted successfully")))
}
