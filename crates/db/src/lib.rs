//! PostgreSQL persistence for the team picker.
//!
//! Exposes pool construction, schema provisioning, row models and one
//! repository per table family.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the picker tables if they do not exist yet.
///
/// Safe against a database provisioned by hand: tables are created with
/// `IF NOT EXISTS`, and a schema from the older setup script is widened to
/// 64-bit keys, zoned timestamps and the presenter columns.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
