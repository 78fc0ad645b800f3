//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;

use crate::domain::entities::{NewUser, User};
use crate::errors::DomainError;

/// Repository contract for [`User`] persistence.
///
/// Implementations handle the actual database operations while keeping
/// the abstraction boundary between domain and infrastructure. Users are
/// created on registration and mutated only through the chain-name
/// update; no in-scope path deletes one.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their login email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Check whether a user exists with the given email.
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Persist a new user and return the stored record with its
    /// database-generated id.
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Replace the user's chain name and return the updated record.
    ///
    /// # Errors
    /// `DomainError::NotFound` if no user exists with the given id.
    async fn update_chain_name(&self, id: i64, chain_name: &str) -> Result<User, DomainError>;
}
