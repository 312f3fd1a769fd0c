//! Application state for dependency injection.

use std::sync::Arc;

use user_service_lib::repository::UserRepository;
use user_service_lib::service::UserService;

/// Application state shared across handlers.
///
/// Built once at startup; every request borrows the same storage handle.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    /// Used directly only by the health check
    pub user_repository: Arc<dyn UserRepository>,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        user_service: Arc<dyn UserService>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            user_service,
            user_repository,
        }
    }
}
