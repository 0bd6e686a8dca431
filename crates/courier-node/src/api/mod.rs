//! HTTP API handlers.

use axum::http::StatusCode;
use courier_core::CourierError;

pub mod health;
pub mod routes;
pub mod simulate;

/// Map a planner error onto an HTTP status.
pub(crate) fn error_response(err: CourierError) -> (StatusCode, String) {
    let status = match &err {
        CourierError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
        CourierError::NotFound { .. } => StatusCode::NOT_FOUND,
    };
    (status, err.to_string())
}
