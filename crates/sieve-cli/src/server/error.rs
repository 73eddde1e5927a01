//! API error types and handling.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// The request envelope could not be read (bad JSON, bad base64).
    InvalidPayload(String),
    /// Internal server error.
    Internal(String),
    /// Error from the sieve library.
    Sieve(sieve::SieveError),
}

#[derive(Serialize)]
struct ErrorResponse {
    status: &'static str,
    error: String,
    message: String,
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::InvalidPayload(_) => (StatusCode::BAD_REQUEST, "invalid_payload"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
            ApiError::Sieve(e) if e.is_input_error() => (StatusCode::BAD_REQUEST, "invalid_input"),
            ApiError::Sieve(_) => (StatusCode::INTERNAL_SERVER_ERROR, "processing_failed"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.parts();
        let message = match self {
            ApiError::InvalidPayload(msg) | ApiError::Internal(msg) => msg,
            ApiError::Sieve(e) => e.to_string(),
        };

        if status.is_server_error() {
            error!(error = code, %message, "request failed");
        }

        (
            status,
            Json(ErrorResponse {
                status: "ERROR",
                error: code.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<sieve::SieveError> for ApiError {
    fn from(err: sieve::SieveError) -> Self {
        ApiError::Sieve(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidPayload(rejection.body_text())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::InvalidPayload(msg) => write!(f, "Invalid payload: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
            ApiError::Sieve(e) => write!(f, "Sieve error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let input = ApiError::Sieve(sieve::SieveError::EmptyData("no columns".to_string()));
        assert_eq!(input.parts(), (StatusCode::BAD_REQUEST, "invalid_input"));

        let payload = ApiError::InvalidPayload("bad base64".to_string());
        assert_eq!(payload.parts(), (StatusCode::BAD_REQUEST, "invalid_payload"));

        let internal = ApiError::Sieve(sieve::SieveError::Config("oops".to_string()));
        assert_eq!(internal.parts().0, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
