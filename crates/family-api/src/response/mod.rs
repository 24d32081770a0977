//! Response types and error handling for API endpoints
//!
//! Provides unified error handling and JSON response formatting.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use family_service::ServiceError;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    /// Lookup miss on GET /members/{id}; rendered with the `error` body
    /// shape that endpoint's contract requires
    #[error("Member not found")]
    MemberNotFound,

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    InvalidBody(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MemberNotFound => StatusCode::NOT_FOUND,
            Self::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Validation(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Create an invalid body error
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Generic error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log server errors
        if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
        }

        // The GET-one-member miss keeps its historical body shape; every
        // other failure uses the generic message shape.
        match self {
            Self::MemberNotFound => {
                (status, Json(json!({"error": "Member not found"}))).into_response()
            }
            other => {
                let body = ErrorBody {
                    message: other.to_string(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
