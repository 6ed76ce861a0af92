//! Repository for the `project_teams_permanent` and `project_teams_temporary`
//! tables.
//!
//! The permanent table is the canonical roster of a project. The temporary
//! table holds the teams not yet picked in the current draw cycle and is
//! always derived from the permanent one (populate, reset) or overwritten by
//! the caller (replace).

use sqlx::{PgExecutor, PgPool};
use teampicker_core::types::DbId;

use crate::models::team::TeamRow;

const PERMANENT: &str = "project_teams_permanent";
const TEMPORARY: &str = "project_teams_temporary";

/// Roster operations for both team tables.
pub struct TeamRosterRepo;

impl TeamRosterRepo {
    // -----------------------------------------------------------------------
    // Permanent roster
    // -----------------------------------------------------------------------

    /// Team names in the permanent roster, in insertion order.
    pub async fn list_permanent(pool: &PgPool, project_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        team_names(pool, PERMANENT, project_id).await
    }

    /// Add a team to the permanent roster.
    ///
    /// A duplicate name or unknown project surfaces as a database error.
    pub async fn add_permanent(
        pool: &PgPool,
        project_id: DbId,
        team_name: &str,
    ) -> Result<TeamRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO {PERMANENT} (project_id, team_name)
             VALUES ($1, $2)
             RETURNING id, project_id, team_name"
        );
        sqlx::query_as::<_, TeamRow>(&query)
            .bind(project_id)
            .bind(team_name)
            .fetch_one(pool)
            .await
    }

    /// Remove a team from the permanent roster. Returns `true` if a row was
    /// removed. The temporary pool is left alone until the next reset.
    pub async fn remove_permanent(
        pool: &PgPool,
        project_id: DbId,
        team_name: &str,
    ) -> Result<bool, sqlx::Error> {
        delete_team(pool, PERMANENT, project_id, team_name).await
    }

    // -----------------------------------------------------------------------
    // Temporary pool
    // -----------------------------------------------------------------------

    /// Team names in the temporary pool, in insertion order.
    pub async fn list_temporary(pool: &PgPool, project_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        team_names(pool, TEMPORARY, project_id).await
    }

    /// Seed the temporary pool from the permanent roster if it is empty.
    ///
    /// A non-empty pool is returned unchanged. Otherwise every permanent team
    /// is copied in and the permanent list is returned. Rows already present
    /// (from a concurrent caller) are skipped rather than failing the
    /// uniqueness constraint.
    pub async fn populate(pool: &PgPool, project_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let existing = team_names(&mut *tx, TEMPORARY, project_id).await?;
        if !existing.is_empty() {
            tx.commit().await?;
            return Ok(existing);
        }

        let permanent = team_names(&mut *tx, PERMANENT, project_id).await?;
        copy_permanent_to_temporary(&mut *tx, project_id).await?;
        tx.commit().await?;

        tracing::debug!(project_id, count = permanent.len(), "Populated temporary pool");
        Ok(permanent)
    }

    /// Discard the temporary pool and rebuild it from the permanent roster.
    ///
    /// Runs in one transaction, so a failure leaves the previous pool intact.
    pub async fn reset(pool: &PgPool, project_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        clear_temporary(&mut *tx, project_id).await?;
        copy_permanent_to_temporary(&mut *tx, project_id).await?;
        let teams = team_names(&mut *tx, TEMPORARY, project_id).await?;

        tx.commit().await?;

        tracing::debug!(project_id, count = teams.len(), "Reset temporary pool");
        Ok(teams)
    }

    /// Overwrite the temporary pool with the given names.
    ///
    /// Names are not checked against the permanent roster. Repeated names
    /// collapse into one row.
    pub async fn replace_temporary(
        pool: &PgPool,
        project_id: DbId,
        teams: &[String],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        clear_temporary(&mut *tx, project_id).await?;
        let query = format!(
            "INSERT INTO {TEMPORARY} (project_id, team_name)
             SELECT $1, u.team_name
             FROM UNNEST($2::text[]) WITH ORDINALITY AS u(team_name, ord)
             ORDER BY u.ord
             ON CONFLICT (project_id, team_name) DO NOTHING"
        );
        sqlx::query(&query)
            .bind(project_id)
            .bind(teams)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Remove one team from the temporary pool.
    ///
    /// Returns `true` if a row was removed; a missing team is not an error.
    pub async fn remove_temporary(
        pool: &PgPool,
        project_id: DbId,
        team_name: &str,
    ) -> Result<bool, sqlx::Error> {
        delete_team(pool, TEMPORARY, project_id, team_name).await
    }
}

async fn team_names<'e, E: PgExecutor<'e>>(
    executor: E,
    table: &str,
    project_id: DbId,
) -> Result<Vec<String>, sqlx::Error> {
    let query = format!("SELECT team_name FROM {table} WHERE project_id = $1 ORDER BY id");
    sqlx::query_scalar::<_, String>(&query)
        .bind(project_id)
        .fetch_all(executor)
        .await
}

async fn delete_team<'e, E: PgExecutor<'e>>(
    executor: E,
    table: &str,
    project_id: DbId,
    team_name: &str,
) -> Result<bool, sqlx::Error> {
    let query = format!("DELETE FROM {table} WHERE project_id = $1 AND team_name = $2");
    let result = sqlx::query(&query)
        .bind(project_id)
        .bind(team_name)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}

async fn clear_temporary<'e, E: PgExecutor<'e>>(
    executor: E,
    project_id: DbId,
) -> Result<u64, sqlx::Error> {
    let query = format!("DELETE FROM {TEMPORARY} WHERE project_id = $1");
    let result = sqlx::query(&query).bind(project_id).execute(executor).await?;
    Ok(result.rows_affected())
}

async fn copy_permanent_to_temporary<'e, E: PgExecutor<'e>>(
    executor: E,
    project_id: DbId,
) -> Result<u64, sqlx::Error> {
    let query = format!(
        "INSERT INTO {TEMPORARY} (project_id, team_name)
         SELECT project_id, team_name FROM {PERMANENT}
         WHERE project_id = $1
         ORDER BY id
         ON CONFLICT (project_id, team_name) DO NOTHING"
    );
    let result = sqlx::query(&query).bind(project_id).execute(executor).await?;
    Ok(result.rows_affected())
}
