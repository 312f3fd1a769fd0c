//! User Service Library
//!
//! This crate provides user storage and business rules. The gateway embeds
//! it in-process; the `user-service` binary manages the backing table.

pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use common::{StorageBackend, StorageConfig};

use crate::infra::Database;
use crate::repository::{DynamoUserStore, InMemoryUserStore, UserRepository};
use crate::service::{UserManager, UserService};

/// Build the repository selected by configuration.
///
/// Called once per process; the returned handle is shared by every request.
pub async fn build_repository(config: &StorageConfig) -> Arc<dyn UserRepository> {
    match config.backend {
        StorageBackend::DynamoDb => {
            let db = Database::connect(config).await;
            info!(table = %config.table_name, "Using DynamoDB user store");
            Arc::new(DynamoUserStore::new(db.get_client(), &config.table_name))
        }
        StorageBackend::Memory => {
            info!("Using in-memory user store");
            Arc::new(InMemoryUserStore::new())
        }
    }
}

/// Wrap a repository in the user service.
pub fn build_service(
    repo: Arc<dyn UserRepository>,
    config: &StorageConfig,
) -> Arc<dyn UserService> {
    Arc::new(UserManager::with_lookup_policy(
        repo,
        config.lookup_failure_policy,
    ))
}

/// Run table management commands (for CLI commands).
pub async fn run_table_command(action: TableAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorageConfig::from_env();
    let db = Database::connect(&config).await;

    match action {
        TableAction::Create => {
            db.create_table(&config.table_name).await?;
            info!(table = %config.table_name, "Table created");
        }
        TableAction::Status => match db.table_status(&config.table_name).await? {
            Some(status) => println!("[x] {} ({})", config.table_name, status),
            None => println!("[ ] {} (missing)", config.table_name),
        },
    }

    Ok(())
}

/// Table action type.
#[derive(Debug, Clone, Copy)]
pub enum TableAction {
    Create,
    Status,
}
