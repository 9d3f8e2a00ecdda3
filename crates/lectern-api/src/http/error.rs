//! Application error type mapping to HTTP status codes.
//!
//! Pre-stream rejections are the only errors that surface as HTTP
//! statuses; once streaming starts, failures degrade to in-band
//! terminal frames (see `relay`). The body shape `{"detail": ...}` is
//! the wire contract the existing frontend matches on.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use lectern_types::error::ValidationError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Authentication failure outside the validation layer
    /// (placeholder auth endpoints).
    Unauthenticated(String),
    /// Request validation failure.
    Validation(ValidationError),
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Unauthenticated(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::Validation(err) if err.is_unauthenticated() => {
                (StatusCode::UNAUTHORIZED, err.to_string())
            }
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_maps_to_401() {
        let response = AppError::from(ValidationError::MissingToken).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_malformed_input_maps_to_400() {
        let response = AppError::from(ValidationError::InvalidPageId).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::from(ValidationError::SummaryContentTooShort).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unauthenticated_maps_to_401() {
        let response = AppError::Unauthenticated("Token required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
