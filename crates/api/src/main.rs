use anyhow::Context;

use teampicker_api::config::ServerConfig;
use teampicker_api::router::build_app_router;
use teampicker_api::server;
use teampicker_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    server::init_tracing();

    // --- Configuration ---
    let config = ServerConfig::from_env()?;
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = teampicker_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connection pool created");

    teampicker_db::health_check(&pool)
        .await
        .context("Database health check failed")?;
    tracing::info!("Database health check passed");

    teampicker_db::run_migrations(&pool)
        .await
        .context("Failed to provision database tables")?;
    tracing::info!("Database tables provisioned");

    // --- App state ---
    let state = AppState { pool: pool.clone() };

    // --- Start server ---
    let app = build_app_router(state, &config);
    server::serve(app, &config).await?;

    pool.close().await;
    tracing::info!("Database pool closed");
    Ok(())
}
