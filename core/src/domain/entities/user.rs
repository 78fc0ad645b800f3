//! User entity representing a registered account in the Hotelier system.

use chrono::{DateTime, Utc};

/// A registered user owning a portfolio of properties.
///
/// The password hash is opaque to the domain; comparison and hashing are
/// delegated to bcrypt in the services. It is never serialized — user data
/// leaves the core as [`crate::domain::value_objects::AuthenticatedUser`],
/// which carries no credential material.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Database-generated identifier.
    pub id: i64,

    /// Unique login email.
    pub email: String,

    /// bcrypt digest of the password.
    pub password_hash: String,

    /// Display label grouping all of this user's properties. Must be set
    /// before the user can create a property.
    pub chain_name: Option<String>,

    /// Timestamp when the user registered.
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether a non-empty chain name has been set.
    pub fn has_chain_name(&self) -> bool {
        self.chain_name
            .as_deref()
            .map_or(false, |name| !name.trim().is_empty())
    }
}

/// Data required to persist a new user. The id and timestamps are
/// assigned by the repository.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_chain(chain_name: Option<&str>) -> User {
        let now = Utc::now();
        User {
            id: 1,
            email: "owner@example.com".to_string(),
            password_hash: "$2b$10$hash".to_string(),
            chain_name: chain_name.map(|s| s.to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn has_chain_name_when_set() {
        assert!(user_with_chain(Some("Acme")).has_chain_name());
    }

    #[test]
    fn no_chain_name_when_unset() {
        assert!(!user_with_chain(None).has_chain_name());
    }

    #[test]
    fn blank_chain_name_counts_as_unset() {
        assert!(!user_with_chain(Some("")).has_chain_name());
        assert!(!user_with_chain(Some("   ")).has_chain_name());
    }
}
