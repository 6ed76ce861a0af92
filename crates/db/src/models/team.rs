//! Roster rows shared by the permanent and temporary team tables.

use serde::Serialize;
use sqlx::FromRow;
use teampicker_core::types::DbId;

/// A row from `project_teams_permanent` or `project_teams_temporary`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamRow {
    pub id: DbId,
    pub project_id: DbId,
    pub team_name: String,
}
