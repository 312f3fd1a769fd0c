//! In-process user repository.
//!
//! Mirrors the DynamoDB store's semantics, including conditional writes and
//! the empty-key encode failure, without any network access.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::{AppError, AppResult};
use domain::User;

use super::conversions::to_item;
use super::user_repository::{UserRepository, WriteCondition};

/// User repository backed by a map guarded by a lock
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.email.clone(), user))
            .collect();

        Self {
            users: RwLock::new(users),
        }
    }

    /// Number of stored records
    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn put(&self, user: &User, condition: WriteCondition) -> AppResult<()> {
        to_item(user)?;

        // condition check and write happen under one lock, like a conditional put
        let mut users = self.users.write().await;
        let exists = users.contains_key(&user.email);

        match condition {
            WriteCondition::IfAbsent if exists => Err(AppError::UserAlreadyExists),
            WriteCondition::IfPresent if !exists => Err(AppError::UserDoesNotExist),
            _ => {
                users.insert(user.email.clone(), user.clone());
                Ok(())
            }
        }
    }

    async fn delete(&self, email: &str) -> AppResult<()> {
        self.users.write().await.remove(email);
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
