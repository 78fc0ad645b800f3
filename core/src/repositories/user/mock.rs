//! Mock implementation of UserRepository for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUser, User};
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// In-memory user repository for testing. Ids are handed out from an
/// atomic counter standing in for MySQL auto-increment.
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
    next_id: AtomicI64,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email == email))
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::Database {
                message: "duplicate email".to_string(),
            });
        }

        let now = Utc::now();
        let stored = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            email: user.email,
            password_hash: user.password_hash,
            chain_name: None,
            created_at: now,
            updated_at: now,
        };
        users.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update_chain_name(&self, id: i64, chain_name: &str) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        let user = users.get_mut(&id).ok_or(DomainError::NotFound {
            resource: "User".to_string(),
        })?;
        user.chain_name = Some(chain_name.to_string());
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}
