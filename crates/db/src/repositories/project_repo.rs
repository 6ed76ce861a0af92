//! Repository for the `projects` table.

use sqlx::PgPool;
use teampicker_core::types::DbId;

use crate::models::project::{CreateProject, FinalizeProject, Project, ProjectState};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, last_presenter, next_presenter, next_presentation_date";

/// Provides CRUD and presenter-state operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// A duplicate name surfaces as a unique-violation database error.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!("INSERT INTO projects (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// List all projects in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Record a presenter handoff on the project row.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn finalize(
        pool: &PgPool,
        id: DbId,
        input: &FinalizeProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                last_presenter = $2,
                next_presenter = $3,
                next_presentation_date = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.last_presenter)
            .bind(&input.next_presenter)
            .bind(input.next_presentation_date)
            .fetch_optional(pool)
            .await
    }

    /// Read the presenter handoff fields of a project.
    pub async fn state(pool: &PgPool, id: DbId) -> Result<Option<ProjectState>, sqlx::Error> {
        sqlx::query_as::<_, ProjectState>(
            "SELECT last_presenter, next_presenter, next_presentation_date
             FROM projects WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Delete a project and, through cascade, all of its rosters and history.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
