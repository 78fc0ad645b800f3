//! Registration and chain-name management.

use std::sync::Arc;

use crate::domain::entities::NewUser;
use crate::domain::value_objects::AuthenticatedUser;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;

/// Account management: registration and the chain-name update. Format
/// checks on email and password length happen at the API boundary; this
/// service owns uniqueness and hashing.
pub struct UserService<U: UserRepository> {
    user_repository: Arc<U>,
    bcrypt_cost: u32,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(user_repository: Arc<U>, bcrypt_cost: u32) -> Self {
        Self {
            user_repository,
            bcrypt_cost,
        }
    }

    /// Register a new account. The raw password never leaves this
    /// function; only its bcrypt digest is persisted.
    pub async fn register(&self, email: &str, password: &str) -> DomainResult<AuthenticatedUser> {
        if self.user_repository.exists_by_email(email).await? {
            return Err(ValidationError::EmailTaken.into());
        }

        let password_hash =
            bcrypt::hash(password, self.bcrypt_cost).map_err(|e| DomainError::Internal {
                message: format!("password hashing failed: {e}"),
            })?;

        let user = self
            .user_repository
            .create(NewUser {
                email: email.to_string(),
                password_hash,
            })
            .await?;
        tracing::info!(user_id = user.id, "user registered");

        Ok(AuthenticatedUser::from(user))
    }

    /// Set the label grouping this user's properties. Display names are
    /// composed as `"{chain_name} - {property name}"` by the clients, and
    /// property creation is refused until this is set.
    pub async fn update_chain_name(
        &self,
        user_id: i64,
        chain_name: &str,
    ) -> DomainResult<AuthenticatedUser> {
        let user = self
            .user_repository
            .update_chain_name(user_id, chain_name)
            .await?;
        Ok(AuthenticatedUser::from(user))
    }
}
