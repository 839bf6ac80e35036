//! Handlers for creating, resolving and deleting mappings.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::api::dto::mapping::{CreateMappingRequest, MappingResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a mapping for a long URL.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```json
/// { "url": "https://news.ycombinator.com" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "code": "67e55044-10b1-426f-9247-bb680e5fe0c8", "url": "https://news.ycombinator.com" }
/// ```
///
/// # Errors
///
/// Returns 409 Conflict for an unreadable body, an invalid URL or a storage
/// failure.
pub async fn create_mapping_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateMappingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MappingResponse>), AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::conflict(rejection.body_text()))?;

    let mapping = state
        .mapping_service
        .create_mapping(&request.url)
        .await
        .map_err(AppError::from_create)?;

    Ok((StatusCode::CREATED, Json(mapping.into())))
}

/// Redirects a code to its stored URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Errors
///
/// Returns 404 Not Found for a malformed or unknown code.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let mapping = state.mapping_service.resolve_mapping(&code).await?;

    let location = HeaderValue::from_str(&mapping.url)
        .map_err(|_| AppError::internal("Stored URL is not a valid Location header"))?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}

/// Deletes a mapping.
///
/// # Endpoint
///
/// `DELETE /{code}`
///
/// # Errors
///
/// Returns 404 Not Found for a malformed or unknown code.
pub async fn delete_mapping_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.mapping_service.deactivate_mapping(&code).await?;

    Ok(StatusCode::NO_CONTENT)
}
