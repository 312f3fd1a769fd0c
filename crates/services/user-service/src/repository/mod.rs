//! Repository layer for data access.

pub mod conversions;
mod dynamo_store;
mod memory_store;
mod user_repository;

pub use dynamo_store::DynamoUserStore;
pub use memory_store::InMemoryUserStore;
pub use user_repository::{UserRepository, WriteCondition};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
