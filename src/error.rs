//! Unified error types for the greeting service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Process-level error type covering startup and serving failures.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// Metrics recorder installation error.
    #[error("metrics error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServerError>;

/// Request-level errors surfaced to HTTP clients.
///
/// Each variant maps to a status code and a fixed `{"error": …}` body.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The greeting-update body is missing the `greeting` key.
    #[error("No greeting provided")]
    MissingGreeting,

    /// Login credentials matched no stored record.
    #[error("Username or Password is wrong!")]
    InvalidCredentials,
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingGreeting => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_greeting_maps_to_400() {
        assert_eq!(ApiError::MissingGreeting.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::MissingGreeting.to_string(),
            "No greeting provided"
        );
    }

    #[test]
    fn invalid_credentials_maps_to_401() {
        assert_eq!(
            ApiError::InvalidCredentials.status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
