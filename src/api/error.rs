//! HTTP error mapping.
//!
//! Error taxonomy:
//! - client input validation → 400 with an explanatory JSON body
//! - request conflicting with the current sound selection → 409
//! - missing server credential → 500
//! - upstream third-party failure → 502 carrying the upstream diagnostic
//! - unexpected handler failure → 500 with the stringified error

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the HTTP layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client sent an invalid or incomplete request
    #[error("{0}")]
    BadRequest(String),

    /// Request conflicts with the current sound selection
    #[error("{0}")]
    Conflict(String),

    /// A required server credential is not configured
    #[error("Missing {0}")]
    MissingCredential(&'static str),

    /// The upstream service answered with a failure
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Anything unexpected inside a handler
    #[error("Unexpected server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, json!({ "error": message })),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, json!({ "error": message })),
            ApiError::MissingCredential(name) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": format!("Missing {}", name) }),
            ),
            ApiError::Upstream(details) => (
                StatusCode::BAD_GATEWAY,
                json!({ "error": "Upstream error", "details": details }),
            ),
            ApiError::Internal(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Unexpected server error", "details": details }),
            ),
        };
        (status, Json(body)).into_response()
    }
}
