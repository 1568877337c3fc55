//! API error types and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use slack_verifier_core::VerifyError;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed request - required headers absent or unreadable body.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Credentials were presented but did not verify.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Only the configured method is accepted.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl ApiError {
    /// HTTP status this error maps to.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match self {
            Self::BadRequest(msg) => ("bad_request", msg),
            Self::Unauthorized(msg) => ("unauthorized", msg),
            Self::MethodNotAllowed => ("method_not_allowed", "method not allowed".to_string()),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                ("internal_error", "An internal error occurred".to_string())
            }
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<VerifyError> for ApiError {
    fn from(err: VerifyError) -> Self {
        match err {
            VerifyError::Signing(msg) => Self::Internal(msg),
            VerifyError::InvalidSignature => Self::Unauthorized("invalid signature".into()),
            VerifyError::InvalidTimestamp(_) => Self::Unauthorized("invalid timestamp".into()),
            VerifyError::MaxAllowedAgeExceeded { .. } => {
                Self::Unauthorized("request timestamp too old".into())
            }
        }
    }
}
