//! Routes for the in-memory picker service.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::picker;
use crate::state::PickerState;

/// ```text
/// GET  /teams    -> picker::teams
/// POST /random   -> picker::random
/// ```
pub fn router() -> Router<PickerState> {
    Router::new()
        .route("/teams", get(picker::teams))
        .route("/random", post(picker::random))
}
