//! Domain-level errors.
//!
//! These errors represent business rule violations detected before any
//! storage is touched. They are independent of HTTP and DynamoDB.

use thiserror::Error;

use crate::constants::{MSG_INVALID_EMAIL, MSG_INVALID_USER_DATA};

/// Domain-specific errors for rejected user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Request body could not be read as a user record
    #[error("{}", MSG_INVALID_USER_DATA)]
    InvalidUserData(String),

    /// Email does not have a valid address syntax
    #[error("{}", MSG_INVALID_EMAIL)]
    InvalidEmail,
}

impl DomainError {
    /// Create an invalid user data error carrying the parser detail
    pub fn invalid_user_data(detail: impl Into<String>) -> Self {
        DomainError::InvalidUserData(detail.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
