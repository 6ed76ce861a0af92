//! One-shot schema provisioning.
//!
//! Connects to `DATABASE_URL` and creates the picker tables if they are
//! missing. Safe to run repeatedly.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "teampicker_db=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = teampicker_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connection pool created");

    teampicker_db::health_check(&pool)
        .await
        .context("Database health check failed")?;

    teampicker_db::run_migrations(&pool)
        .await
        .context("Failed to create tables")?;
    tracing::info!("Tables provisioned");

    pool.close().await;
    Ok(())
}
