//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use common::{AppError, AppResult, LookupFailurePolicy};
use domain::User;

use crate::repository::{UserRepository, WriteCondition};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by email. `None` when no record holds the key.
    async fn fetch_user(&self, email: &str) -> AppResult<Option<User>>;

    /// List every user
    async fn fetch_users(&self) -> AppResult<Vec<User>>;

    /// Create a user from a JSON request body
    async fn create_user(&self, body: &[u8]) -> AppResult<User>;

    /// Replace an existing user from a JSON request body
    async fn update_user(&self, body: &[u8]) -> AppResult<User>;

    /// Delete user by email (no existence check)
    async fn delete_user(&self, email: &str) -> AppResult<()>;
}

/// Outcome of the existence check ahead of a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Existence {
    Present,
    Absent,
    /// The lookup failed and the policy says to carry on
    Unknown,
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    lookup_policy: LookupFailurePolicy,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self::with_lookup_policy(repo, LookupFailurePolicy::default())
    }

    /// Create new user service with an explicit existence-check policy
    pub fn with_lookup_policy(
        repo: Arc<dyn UserRepository>,
        lookup_policy: LookupFailurePolicy,
    ) -> Self {
        Self {
            repo,
            lookup_policy,
        }
    }

    /// Existence check ahead of a write.
    ///
    /// A stored record with an empty email counts as absent.
    async fn existence(&self, email: &str) -> AppResult<Existence> {
        match self.repo.find_by_email(email).await {
            Ok(user) if user.as_ref().is_some_and(User::is_present) => Ok(Existence::Present),
            Ok(_) => Ok(Existence::Absent),
            Err(err) => match self.lookup_policy {
                LookupFailurePolicy::TreatAsAbsent => {
                    warn!(
                        email,
                        code = err.code(),
                        detail = err.detail().unwrap_or_default(),
                        "Existence check failed, leaving it to the conditional write"
                    );
                    Ok(Existence::Unknown)
                }
                LookupFailurePolicy::Abort => Err(err),
            },
        }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn fetch_user(&self, email: &str) -> AppResult<Option<User>> {
        debug!(email, "Fetching user");
        self.repo.find_by_email(email).await
    }

    async fn fetch_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn create_user(&self, body: &[u8]) -> AppResult<User> {
        let user = User::from_json(body)?;
        user.ensure_valid_email()?;

        if self.existence(&user.email).await? == Existence::Present {
            return Err(AppError::UserAlreadyExists);
        }

        // conditional put closes the gap between the check and the write
        self.repo.put(&user, WriteCondition::IfAbsent).await?;

        info!(email = %user.email, "User created");
        Ok(user)
    }

    async fn update_user(&self, body: &[u8]) -> AppResult<User> {
        let user = User::from_json(body)?;

        if self.existence(&user.email).await? == Existence::Absent {
            return Err(AppError::UserDoesNotExist);
        }

        self.repo.put(&user, WriteCondition::IfPresent).await?;

        info!(email = %user.email, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, email: &str) -> AppResult<()> {
        if email.is_empty() {
            return Err(AppError::delete("no email given for delete"));
        }

        self.repo.delete(email).await?;

        info!(email, "User deleted");
        Ok(())
    }
}
