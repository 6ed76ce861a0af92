//! Handlers for the in-memory picker service.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::PickerState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamsOverview {
    pub active_teams: Vec<String>,
    pub selected_teams: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomPick {
    pub selected_team: String,
    pub remaining_teams: Vec<String>,
}

/// GET /teams
pub async fn teams(State(state): State<PickerState>) -> Json<TeamsOverview> {
    let picker = state.picker.lock().await;
    Json(TeamsOverview {
        active_teams: picker.remaining().to_vec(),
        selected_teams: picker.chosen().to_vec(),
    })
}

/// POST /random
pub async fn random(State(state): State<PickerState>) -> AppResult<Json<RandomPick>> {
    let draw = state.picker.lock().await.draw()?;
    tracing::debug!(team = %draw.selected, remaining = draw.remaining.len(), "Team drawn");
    Ok(Json(RandomPick {
        selected_team: draw.selected,
        remaining_teams: draw.remaining,
    }))
}
