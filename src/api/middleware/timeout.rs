//! Request deadline middleware.

use axum::http::StatusCode;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

/// Aborts requests running longer than `timeout` with `408 Request Timeout`.
///
/// The in-flight store call is dropped with the request future.
pub fn layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}
