//! Unified error handling.
//!
//! A closed set of named failure kinds, each with a fixed client-facing
//! message. Storage failures carry the underlying detail for logging only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{
    DomainError, MSG_DECODE_FAILURE, MSG_DELETE_FAILURE, MSG_ENCODE_FAILURE, MSG_FETCH_FAILURE,
    MSG_INVALID_EMAIL, MSG_INVALID_USER_DATA, MSG_METHOD_NOT_ALLOWED, MSG_USER_ALREADY_EXISTS,
    MSG_USER_DOES_NOT_EXIST, MSG_WRITE_FAILURE,
};
use serde::Serialize;
use thiserror::Error;

/// Application error kinds.
#[derive(Error, Debug)]
pub enum AppError {
    // Storage reads
    #[error("{}", MSG_FETCH_FAILURE)]
    FetchFailure(String),

    #[error("{}", MSG_DECODE_FAILURE)]
    DecodeFailure(String),

    // Request input
    #[error("{}", MSG_INVALID_USER_DATA)]
    InvalidUserData(String),

    #[error("{}", MSG_INVALID_EMAIL)]
    InvalidEmail,

    // Storage writes
    #[error("{}", MSG_ENCODE_FAILURE)]
    EncodeFailure(String),

    #[error("{}", MSG_WRITE_FAILURE)]
    WriteFailure(String),

    #[error("{}", MSG_DELETE_FAILURE)]
    DeleteFailure(String),

    // Business rules
    #[error("{}", MSG_USER_ALREADY_EXISTS)]
    UserAlreadyExists,

    #[error("{}", MSG_USER_DOES_NOT_EXIST)]
    UserDoesNotExist,

    // Routing
    #[error("{}", MSG_METHOD_NOT_ALLOWED)]
    MethodNotAllowed,
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl AppError {
    /// Stable identifier used in log fields
    pub fn code(&self) -> &'static str {
        match self {
            AppError::FetchFailure(_) => "FETCH_FAILURE",
            AppError::DecodeFailure(_) => "DECODE_FAILURE",
            AppError::InvalidUserData(_) => "INVALID_USER_DATA",
            AppError::InvalidEmail => "INVALID_EMAIL",
            AppError::EncodeFailure(_) => "ENCODE_FAILURE",
            AppError::WriteFailure(_) => "WRITE_FAILURE",
            AppError::DeleteFailure(_) => "DELETE_FAILURE",
            AppError::UserAlreadyExists => "USER_ALREADY_EXISTS",
            AppError::UserDoesNotExist => "USER_DOES_NOT_EXIST",
            AppError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
        }
    }

    /// Get HTTP status code.
    ///
    /// Every application failure is a client error; only the unhandled
    /// method sentinel gets its own status.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Internal detail attached to the failure, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            AppError::FetchFailure(detail)
            | AppError::DecodeFailure(detail)
            | AppError::InvalidUserData(detail)
            | AppError::EncodeFailure(detail)
            | AppError::WriteFailure(detail)
            | AppError::DeleteFailure(detail) => Some(detail.as_str()),
            _ => None,
        }
    }

    /// Get user-facing message (never includes internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::FetchFailure(detail)
            | AppError::DecodeFailure(detail)
            | AppError::EncodeFailure(detail)
            | AppError::WriteFailure(detail)
            | AppError::DeleteFailure(detail) => {
                tracing::error!(code = self.code(), "Storage error: {}", detail);
            }
            AppError::InvalidUserData(detail) => {
                tracing::debug!(code = self.code(), "Rejected request body: {}", detail);
            }
            _ => {}
        }

        self.to_string()
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidUserData(detail) => AppError::InvalidUserData(detail),
            DomainError::InvalidEmail => AppError::InvalidEmail,
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn fetch(detail: impl ToString) -> Self {
        AppError::FetchFailure(detail.to_string())
    }

    pub fn decode(detail: impl ToString) -> Self {
        AppError::DecodeFailure(detail.to_string())
    }

    pub fn encode(detail: impl ToString) -> Self {
        AppError::EncodeFailure(detail.to_string())
    }

    pub fn write(detail: impl ToString) -> Self {
        AppError::WriteFailure(detail.to_string())
    }

    pub fn delete(detail: impl ToString) -> Self {
        AppError::DeleteFailure(detail.to_string())
    }
}
