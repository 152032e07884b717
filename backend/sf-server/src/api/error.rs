//! REST API error types
//!
//! Every error renders as `{"message": ...}`; internal errors add an
//! `error` field with the (already sanitized) detail.

use sf_auth::AuthError;
use sf_core::{CoreError, StoreError};
use sf_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const AUTHENTICATION_REQUIRED: &str = "Authentication required";
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const MALFORMED_BODY: &str = "Malformed request body";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
pub const DATABASE_FAILURE: &str = "Database operation failed";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// No usable session (401)
    #[error("Unauthenticated: {message} {location}")]
    Unauthenticated {
        message: String,
        location: ErrorLocation,
    },

    /// Field validation failed (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Body is not the JSON we expect (400)
    #[error("Malformed body: {detail} {location}")]
    MalformedBody {
        detail: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Uniqueness conflict (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {detail} {location}")]
    Internal {
        detail: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthenticated() -> Self {
        ApiError::Unauthenticated {
            message: AUTHENTICATION_REQUIRED.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        ApiError::Unauthenticated {
            message: INVALID_CREDENTIALS.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        ApiError::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(detail: S) -> Self {
        ApiError::Internal {
            detail: detail.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn malformed_body<S: Into<String>>(detail: S) -> Self {
        ApiError::MalformedBody {
            detail: detail.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Validation { .. }
            | ApiError::MalformedBody { .. }
            | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = match self {
            ApiError::Unauthenticated { message, .. }
            | ApiError::Validation { message, .. }
            | ApiError::BadRequest { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Conflict { message, .. } => ApiErrorResponse {
                message,
                error: None,
            },
            ApiError::MalformedBody { .. } => ApiErrorResponse {
                message: MALFORMED_BODY.to_string(),
                error: None,
            },
            ApiError::Internal { detail, .. } => ApiErrorResponse {
                message: INTERNAL_SERVER_ERROR.to_string(),
                error: Some(detail),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert domain validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::Validation {
            message: e.message(),
            field: e.field().map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert address store failures to API errors
impl From<StoreError> for ApiError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            StoreError::InvalidSession { .. } => ApiError::Unauthenticated {
                message: AUTHENTICATION_REQUIRED.to_string(),
                location,
            },
            StoreError::Rejected { message, .. } => ApiError::BadRequest { message, location },
            StoreError::Internal { message, .. } => ApiError::Internal {
                detail: message,
                location,
            },
        }
    }
}

/// Convert auth errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            AuthError::MissingToken { .. } => ApiError::Unauthenticated {
                message: AUTHENTICATION_REQUIRED.to_string(),
                location,
            },
            AuthError::InvalidCredentials { .. } => ApiError::Unauthenticated {
                message: INVALID_CREDENTIALS.to_string(),
                location,
            },
            AuthError::PasswordHash { message, .. } => {
                log::error!("Password hashing error: {}", message);
                ApiError::Internal {
                    detail: "Password processing failed".to_string(),
                    location,
                }
            }
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            DbError::Conflict { .. } => ApiError::Conflict {
                message: "Resource already exists".to_string(),
                location,
            },
            other => {
                // Don't expose internal database details to clients
                log::error!("Database error: {}", other);
                ApiError::Internal {
                    detail: DATABASE_FAILURE.to_string(),
                    location,
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
