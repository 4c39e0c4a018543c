//! Error types for the restaurants REST API.
//!
//! This module defines all error types used throughout the REST API layer,
//! with automatic conversion to JSON error responses.
//!
//! # Error Mapping
//!
//! Storage errors from the persistence layer are automatically mapped to
//! appropriate HTTP status codes and error codes:
//!
//! | Storage Error | HTTP Status | Error Code |
//! |--------------|-------------|------------|
//! | NotFound | 404 | not-found |
//! | AlreadyExists | 500 | exception |
//! | ValidationError | 400 | invalid |
//! | Unavailable / ConnectionFailed | 503 | unavailable |
//! | other BackendError | 500 | exception |
//!
//! Routing and middleware failures use the same body: an unsupported method
//! on a known path is 405 `method-not-allowed` and an expired request is 408
//! `timeout`.
//!
//! Every error body has the shape `{"code": "...", "message": "..."}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use restaurants_persistence::error::{
    BackendError, ResourceError, StorageError, ValidationError,
};
use serde::Serialize;
use std::fmt;

/// The primary error type for REST API operations.
///
/// This enum provides semantic error types that map cleanly to HTTP status
/// codes and error codes.
#[derive(Debug)]
pub enum RestError {
    /// Restaurant not found (HTTP 404).
    NotFound {
        /// The restaurant ID.
        id: String,
    },

    /// No route matches the request path (HTTP 404).
    RouteNotFound {
        /// The requested path.
        path: String,
    },

    /// The path exists but not for this method (HTTP 405).
    MethodNotAllowed {
        /// The request method.
        method: String,
        /// The requested path.
        path: String,
    },

    /// The request did not finish within the configured timeout (HTTP 408).
    RequestTimeout,

    /// Bad request - validation error (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Request body exceeds the configured limit (HTTP 413).
    PayloadTooLarge {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },

    /// The store cannot serve requests right now (HTTP 503).
    ServiceUnavailable {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } | RestError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            RestError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            RestError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            RestError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Returns the machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            RestError::NotFound { .. } | RestError::RouteNotFound { .. } => "not-found",
            RestError::MethodNotAllowed { .. } => "method-not-allowed",
            RestError::RequestTimeout => "timeout",
            RestError::BadRequest { .. } => "invalid",
            RestError::PayloadTooLarge { .. } => "payload-too-large",
            RestError::InternalError { .. } => "exception",
            RestError::ServiceUnavailable { .. } => "unavailable",
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { id } => write!(f, "Restaurant not found: {}", id),
            RestError::RouteNotFound { path } => write!(f, "No route for {}", path),
            RestError::MethodNotAllowed { method, path } => {
                write!(f, "Method {} not allowed on {}", method, path)
            }
            RestError::RequestTimeout => write!(f, "Request timed out"),
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::PayloadTooLarge { message } => write!(f, "Payload too large: {}", message),
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
            RestError::ServiceUnavailable { message } => {
                write!(f, "Service unavailable: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub code: &'static str,
    /// Human-readable description.
    pub message: String,
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();
        let message = match self {
            RestError::NotFound { id } => format!("Restaurant {} not found", id),
            RestError::RouteNotFound { path } => format!("No route matches {}", path),
            RestError::MethodNotAllowed { method, path } => {
                format!("Method {} is not supported on {}", method, path)
            }
            RestError::RequestTimeout => "Request did not complete in time".to_string(),
            RestError::BadRequest { message }
            | RestError::PayloadTooLarge { message }
            | RestError::ServiceUnavailable { message } => message,
            RestError::InternalError { message } => {
                tracing::error!(error = %message, "Request failed with an internal error");
                message
            }
        };

        (status, Json(ErrorBody { code, message })).into_response()
    }
}

// Implement conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Resource(e) => e.into(),
            StorageError::Validation(e) => e.into(),
            StorageError::Backend(e) => e.into(),
        }
    }
}

impl From<ResourceError> for RestError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound { id } => RestError::NotFound { id },
            // Ids are store-assigned, so a collision is a store fault
            ResourceError::AlreadyExists { .. } => RestError::InternalError {
                message: err.to_string(),
            },
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        RestError::BadRequest {
            message: err.to_string(),
        }
    }
}

impl From<BackendError> for RestError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Unavailable { .. } | BackendError::ConnectionFailed { .. } => {
                RestError::ServiceUnavailable {
                    message: err.to_string(),
                }
            }
            _ => RestError::InternalError {
                message: err.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for RestError {
    fn from(err: serde_json::Error) -> Self {
        RestError::BadRequest {
            message: format!("Invalid JSON: {}", err),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = RestError::NotFound {
            id: "123".to_string(),
        };
        assert_eq!(err.to_string(), "Restaurant not found: 123");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "not-found");
    }

    #[test]
    fn test_routing_errors() {
        let err = RestError::MethodNotAllowed {
            method: "PATCH".to_string(),
            path: "/restaurants".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.code(), "method-not-allowed");

        assert_eq!(
            RestError::RequestTimeout.status_code(),
            StatusCode::REQUEST_TIMEOUT
        );
        assert_eq!(RestError::RequestTimeout.code(), "timeout");
    }

    #[test]
    fn test_storage_not_found_maps_to_404() {
        let err: RestError = StorageError::not_found("abc").into();
        assert!(matches!(err, RestError::NotFound { ref id } if id == "abc"));
    }

    #[test]
    fn test_validation_maps_to_400() {
        let err: RestError = StorageError::from(ValidationError::MissingRequiredField {
            field: "borough".to_string(),
        })
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("borough"));
    }

    #[test]
    fn test_closed_backend_maps_to_503() {
        let err: RestError = BackendError::Unavailable {
            backend_name: "sqlite".to_string(),
            message: "backend has been closed".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.code(), "unavailable");
    }

    #[test]
    fn test_internal_backend_maps_to_500() {
        let err: RestError = BackendError::SerializationError {
            message: "bad blob".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "exception");
    }

    #[test]
    fn test_serde_error_maps_to_400() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: RestError = json_err.into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("Invalid JSON"));
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = RestError::BadRequest {
            message: "missing required field: name".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"code": "invalid", "message": "missing required field: name"})
        );
    }
}
