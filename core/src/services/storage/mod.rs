//! Image storage port.
//!
//! Uploaded property images are written through this trait so the API
//! layer never touches a filesystem directly; the infrastructure crate
//! provides the local-disk implementation.

pub mod mock;

use async_trait::async_trait;

use crate::errors::DomainError;

/// Stores uploaded image bytes and returns the public path clients use
/// to fetch them back.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist one image. `filename` is the client-supplied name, used
    /// only as a hint (e.g. for the extension); implementations choose
    /// their own collision-free storage name.
    async fn store(&self, filename: &str, bytes: Vec<u8>) -> Result<String, DomainError>;
}

pub use mock::MockImageStore;
