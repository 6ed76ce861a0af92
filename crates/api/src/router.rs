//! Shared application router builders.
//!
//! Both binaries and the integration tests build their routers here so they
//! run behind the exact same middleware stack.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::{CorsPolicy, ServerConfig};
use crate::routes;
use crate::state::{AppState, PickerState};

/// Build the persisted multi-project service.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::api_routes())
        .with_state(state);
    with_middleware(app, config)
}

/// Build the in-memory picker service.
pub fn build_picker_router(state: PickerState, config: &ServerConfig) -> Router {
    let app = Router::new()
        .merge(routes::health::picker_router())
        .merge(routes::picker::router())
        .with_state(state);
    with_middleware(app, config)
}

/// Wrap a router in the common middleware stack.
///
/// Layers are applied bottom-up:
///
/// 1. CORS
/// 2. Set request ID on incoming requests
/// 3. Structured request/response tracing
/// 4. Propagate request ID to response
/// 5. Request timeout
/// 6. Panic recovery (catch panics, return 500)
fn with_middleware(app: Router, config: &ServerConfig) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    app.layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(build_cors_layer(&config.cors))
}

/// Build the CORS middleware layer from the configured policy.
pub fn build_cors_layer(policy: &CorsPolicy) -> CorsLayer {
    let origin = match policy {
        CorsPolicy::Any => AllowOrigin::from(Any),
        CorsPolicy::List(origins) => AllowOrigin::list(origins.iter().cloned()),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}
