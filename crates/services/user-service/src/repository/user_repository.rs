//! User repository contract.

use async_trait::async_trait;

use common::{AppError, AppResult};
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Precondition attached to a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteCondition {
    /// Overwrite whatever is stored under the key
    Always,
    /// Only write when no record holds the key
    IfAbsent,
    /// Only write when a record already holds the key
    IfPresent,
}

impl WriteCondition {
    /// DynamoDB condition expression, with `#pk` bound to the key attribute
    pub fn expression(self) -> Option<&'static str> {
        match self {
            WriteCondition::Always => None,
            WriteCondition::IfAbsent => Some("attribute_not_exists(#pk)"),
            WriteCondition::IfPresent => Some("attribute_exists(#pk)"),
        }
    }

    /// Error reported when the store rejects the write on this condition
    pub fn violation(self) -> AppError {
        match self {
            WriteCondition::IfAbsent => AppError::UserAlreadyExists,
            WriteCondition::IfPresent => AppError::UserDoesNotExist,
            WriteCondition::Always => AppError::write("unconditional put failed a condition check"),
        }
    }
}

/// Storage adapter for the users table, keyed by email.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Point lookup. `Ok(None)` when nothing is stored under the key.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Every record in the table, across all scan pages
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Encode and write a record under the given precondition
    async fn put(&self, user: &User, condition: WriteCondition) -> AppResult<()>;

    /// Remove a record. Absent keys are not an error.
    async fn delete(&self, email: &str) -> AppResult<()>;

    /// Check that the table is reachable
    async fn ping(&self) -> AppResult<()>;
}
