//! Route definitions for the `/projects` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{history, presenter, project, team};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                   -> project::list
/// POST   /                                   -> project::create
/// DELETE /{id}                               -> project::delete
///
/// GET    /{id}/permanent-teams               -> team::list_permanent
/// POST   /{id}/permanent-teams               -> team::add_permanent
/// DELETE /{id}/permanent-teams/{team_name}   -> team::remove_permanent
///
/// GET    /{id}/teams                         -> team::list_temporary
/// DELETE /{id}/teams/{team_name}             -> team::remove_temporary
/// POST   /{id}/populate-teams                -> team::populate
/// POST   /{id}/reset-teams                   -> team::reset
/// POST   /{id}/update-teams                  -> team::update
///
/// GET    /{id}/history                       -> history::list
/// POST   /{id}/history                       -> history::record
///
/// POST   /{id}/finalize                      -> presenter::finalize
/// GET    /{id}/state                         -> presenter::state
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/{id}", delete(project::delete))
        .route(
            "/{id}/permanent-teams",
            get(team::list_permanent).post(team::add_permanent),
        )
        .route(
            "/{id}/permanent-teams/{team_name}",
            delete(team::remove_permanent),
        )
        .route("/{id}/teams", get(team::list_temporary))
        .route("/{id}/teams/{team_name}", delete(team::remove_temporary))
        .route("/{id}/populate-teams", post(team::populate))
        .route("/{id}/reset-teams", post(team::reset))
        .route("/{id}/update-teams", post(team::update))
        .route("/{id}/history", get(history::list).post(history::record))
        .route("/{id}/finalize", post(presenter::finalize))
        .route("/{id}/state", get(presenter::state))
}
