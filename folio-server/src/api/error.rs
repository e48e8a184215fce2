//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use folio_auth::AuthError;
use folio_db::DbError;
use folio_session::SessionError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "TOKEN_EXPIRED")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field or claim name if the error is about a specific one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Authentication failed (401); `code` carries the auth error code
    #[error("Unauthorized ({code}): {message} {location}")]
    Unauthorized {
        code: String,
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Store refused the operation (403)
    #[error("Permission denied: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Store unreachable (503)
    #[error("Service unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::Unauthorized {
                code,
                message,
                field,
                ..
            } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code,
                    message,
                    field,
                },
            ),
            ApiError::Forbidden { message, .. } => (
                StatusCode::FORBIDDEN,
                ApiErrorBody {
                    code: "PERMISSION_DENIED".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Unavailable { message, .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiErrorBody {
                    code: "STORE_UNAVAILABLE".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        log::error!("Database error: {}", e);

        let location = ErrorLocation::from(Location::caller());
        match e {
            DbError::NotFound { message, .. } => ApiError::NotFound { message, location },
            DbError::PermissionDenied { .. } => ApiError::Forbidden {
                message: "The document store refused the operation".to_string(),
                location,
            },
            DbError::Unavailable { .. } => ApiError::Unavailable {
                message: "The document store is unreachable".to_string(),
                location,
            },
            // Don't expose internal database details to clients
            DbError::Corrupt { .. } | DbError::Migration { .. } | DbError::Sqlx { .. } => {
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location,
                }
            }
        }
    }
}

/// Convert auth errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match &e {
            AuthError::JwtEncode { .. } => ApiError::Internal {
                message: "Failed to issue session token".to_string(),
                location,
            },
            _ => ApiError::Unauthorized {
                code: e.error_code().to_string(),
                message: e.to_string(),
                field: e.field(),
                location,
            },
        }
    }
}

/// Convert session bridge errors to API errors
impl From<SessionError> for ApiError {
    #[track_caller]
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::Auth(e) => e.into(),
            SessionError::Db(e) => e.into(),
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert photo storage IO errors to API errors
impl From<std::io::Error> for ApiError {
    #[track_caller]
    fn from(e: std::io::Error) -> Self {
        log::error!("Photo storage error: {}", e);
        ApiError::Internal {
            message: "Photo storage operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
