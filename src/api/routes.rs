//! Mapping route configuration.

use crate::api::handlers::{create_mapping_handler, delete_mapping_handler, redirect_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Mapping routes.
///
/// # Endpoints
///
/// - `POST   /`        - Create a mapping
/// - `GET    /{code}`  - Redirect to the stored URL (301)
/// - `DELETE /{code}`  - Delete a mapping
pub fn mapping_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_mapping_handler))
        .route(
            "/{code}",
            get(redirect_handler).delete(delete_mapping_handler),
        )
}
