use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use teampicker_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `teampicker_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Treat a store failure as a problem with the caller's input.
    ///
    /// Used where the only realistic failure is a constraint the client
    /// tripped (duplicate project name, duplicate roster entry, unknown
    /// project). The store's own message is passed through.
    pub fn client_input(err: sqlx::Error) -> Self {
        AppError::BadRequest(store_message(&err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    let msg = format!("{entity} with id {id} not found");
                    tracing::warn!(error = %msg, "Lookup failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "NOT_FOUND",
                        "Internal server error".to_string(),
                        Some(msg),
                    )
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone(), None)
                }
                CoreError::EmptyRoster => (
                    StatusCode::CONFLICT,
                    "EMPTY_ROSTER",
                    core.to_string(),
                    None,
                ),
            },

            // --- Database errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal(store_message(err))
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone(), None),
        };

        let body = match details {
            Some(details) => json!({
                "error": message,
                "code": code,
                "details": details,
            }),
            None => json!({
                "error": message,
                "code": code,
            }),
        };

        (status, axum::Json(body)).into_response()
    }
}

fn internal(details: String) -> (StatusCode, &'static str, String, Option<String>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "Internal server error".to_string(),
        Some(details),
    )
}

/// The most specific human-readable text for a sqlx error.
///
/// Database errors expose the server's own message (e.g. the violated
/// constraint); everything else falls back to the error's `Display`.
fn store_message(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db_err) => db_err.message().to_string(),
        other => other.to_string(),
    }
}
