//! User domain entity.

use serde::{Deserialize, Serialize};

use crate::email::is_email_valid;
use crate::error::{DomainError, DomainResult};

/// User record, keyed by email.
///
/// Omitted name fields deserialize as empty strings, so a request body
/// always describes the complete record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Email address (primary key)
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "user@example.com"))]
    pub email: String,
    /// Given name
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "Jane"))]
    pub first_name: String,
    /// Family name
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "Doe"))]
    pub last_name: String,
}

impl User {
    /// Create a new user record
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Parse a request body into a user record.
    pub fn from_json(body: &[u8]) -> DomainResult<Self> {
        serde_json::from_slice(body).map_err(|e| DomainError::invalid_user_data(e.to_string()))
    }

    /// Reject the record unless its email is a valid address.
    pub fn ensure_valid_email(&self) -> DomainResult<()> {
        if is_email_valid(&self.email) {
            Ok(())
        } else {
            Err(DomainError::InvalidEmail)
        }
    }

    /// A stored record counts as present only when its key is non-empty
    pub fn is_present(&self) -> bool {
        !self.email.is_empty()
    }
}
