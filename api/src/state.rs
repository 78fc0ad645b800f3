//! Application state shared across handlers.

use std::sync::Arc;

use hotelier_core::repositories::{PropertyRepository, UserRepository};
use hotelier_core::services::storage::ImageStore;
use hotelier_core::services::{AuthService, PropertyService, UserService};
use hotelier_shared::config::StorageConfig;

/// Dependency container handed to every handler. Generic over the port
/// traits so tests can wire the in-memory mocks where production wires
/// MySQL and the local disk.
pub struct AppState<U, P, S>
where
    U: UserRepository,
    P: PropertyRepository,
    S: ImageStore,
{
    pub auth_service: Arc<AuthService<U>>,
    pub user_service: Arc<UserService<U>>,
    pub property_service: Arc<PropertyService<P, U>>,
    pub image_store: Arc<S>,
    pub storage: StorageConfig,
}
