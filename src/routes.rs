//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST   /`         - Create a mapping
//! - `GET    /{code}`   - Redirect to the stored URL
//! - `DELETE /{code}`   - Delete a mapping
//! - `GET    /health`   - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Request-scoped deadline

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{timeout, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::time::Duration;

/// Constructs the application router with all routes and middleware.
///
/// `request_timeout` bounds the total time spent on a single request,
/// including the store call.
pub fn app_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::mapping_routes())
        .with_state(state)
        .layer(timeout::layer(request_timeout))
        .layer(tracing::layer())
}
