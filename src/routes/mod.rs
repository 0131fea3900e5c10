//! API routes

pub mod diagnostics;
pub mod health;
pub mod mcp;

use axum::{
    http::{header, Method},
    routing::{any, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create all API routes
///
/// The CORS layer answers OPTIONS preflights before auth or business logic
/// runs, and allows any origin with the Authorization header.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    Router::new()
        .route("/discovery", get(mcp::discovery))
        .route("/invoke", post(mcp::invoke))
        .route("/diagnostics", any(diagnostics::echo))
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
