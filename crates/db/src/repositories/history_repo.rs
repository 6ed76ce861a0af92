//! Repository for the append-only `history` table.

use sqlx::PgPool;
use teampicker_core::types::DbId;

use crate::models::history::{HistoryEntry, HistoryItem, HISTORY_LIMIT};

/// Append and read selection history. Rows are never updated or deleted here.
pub struct HistoryRepo;

impl HistoryRepo {
    /// Record a selection stamped with the current time.
    pub async fn append(
        pool: &PgPool,
        project_id: DbId,
        team_name: &str,
    ) -> Result<HistoryEntry, sqlx::Error> {
        sqlx::query_as::<_, HistoryEntry>(
            "INSERT INTO history (project_id, team_name)
             VALUES ($1, $2)
             RETURNING id, project_id, team_name, selected_at",
        )
        .bind(project_id)
        .bind(team_name)
        .fetch_one(pool)
        .await
    }

    /// Most recent selections for a project, newest first.
    ///
    /// `limit` is clamped to `1..=HISTORY_LIMIT`.
    pub async fn recent(
        pool: &PgPool,
        project_id: DbId,
        limit: i64,
    ) -> Result<Vec<HistoryItem>, sqlx::Error> {
        sqlx::query_as::<_, HistoryItem>(
            "SELECT team_name, selected_at
             FROM history
             WHERE project_id = $1
             ORDER BY selected_at DESC, id DESC
             LIMIT $2",
        )
        .bind(project_id)
        .bind(limit.clamp(1, HISTORY_LIMIT))
        .fetch_all(pool)
        .await
    }
}
