pub mod health;
pub mod picker;
pub mod projects;

use axum::Router;

use crate::state::AppState;

/// Build the persisted service's route tree.
///
/// Routes are mounted at the root so existing clients keep working:
///
/// ```text
/// /projects                                        list, create
/// /projects/{id}                                   delete
/// /projects/{id}/permanent-teams                   list, add
/// /projects/{id}/permanent-teams/{team_name}       remove
/// /projects/{id}/teams                             temporary pool
/// /projects/{id}/teams/{team_name}                 remove from pool
/// /projects/{id}/populate-teams                    seed pool if empty
/// /projects/{id}/reset-teams                       rebuild pool
/// /projects/{id}/update-teams                      overwrite pool
/// /projects/{id}/history                           list, record
/// /projects/{id}/finalize                          presenter handoff
/// /projects/{id}/state                             presenter state
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/projects", projects::router())
}
