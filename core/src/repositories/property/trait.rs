//! Property repository trait defining the interface for property persistence.

use async_trait::async_trait;

use crate::domain::entities::{NewProperty, Property};
use crate::errors::DomainError;

/// Repository contract for [`Property`] persistence.
///
/// Every read and delete is scoped to an owner; nothing in this contract
/// can cross user boundaries. Return order of listings is whatever the
/// store yields — insertion order is not guaranteed.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Persist a new property and return the stored record with its
    /// database-generated id.
    async fn create(&self, property: NewProperty) -> Result<Property, DomainError>;

    /// All properties owned by `owner_id`.
    async fn find_by_owner(&self, owner_id: i64) -> Result<Vec<Property>, DomainError>;

    /// Delete the property matching both `id` and `owner_id`. Returns the
    /// number of rows removed; a non-matching owner simply matches
    /// nothing and returns 0.
    async fn delete_by_owner(&self, id: i64, owner_id: i64) -> Result<u64, DomainError>;
}
