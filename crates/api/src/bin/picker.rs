//! In-memory round-robin picker for a single implicit project.
//!
//! State lives only in this process; a restart begins a fresh cycle.

use teampicker_api::config::ServerConfig;
use teampicker_api::router::build_picker_router;
use teampicker_api::server;
use teampicker_api::state::PickerState;
use teampicker_core::picker::TeamPicker;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    server::init_tracing();

    let config = ServerConfig::from_env()?;
    if config.picker_teams.is_empty() {
        tracing::warn!("PICKER_TEAMS is empty; every draw will fail");
    }
    tracing::info!(teams = ?config.picker_teams, "Loaded picker configuration");

    let state = PickerState::new(TeamPicker::new(config.picker_teams.clone()));
    let app = build_picker_router(state, &config);
    server::serve(app, &config).await
}
