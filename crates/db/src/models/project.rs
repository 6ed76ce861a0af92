//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use teampicker_core::types::{Date, DbId};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub last_presenter: Option<String>,
    pub next_presenter: Option<String>,
    pub next_presentation_date: Option<Date>,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
}

/// Presenter handoff fields of a project.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ProjectState {
    pub last_presenter: Option<String>,
    pub next_presenter: Option<String>,
    pub next_presentation_date: Option<Date>,
}

/// DTO for recording a presenter handoff.
#[derive(Debug, Clone)]
pub struct FinalizeProject {
    pub last_presenter: String,
    pub next_presenter: String,
    pub next_presentation_date: Date,
}
