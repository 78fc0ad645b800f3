//! Local-disk implementation of the ImageStore port.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use uuid::Uuid;

use hotelier_core::errors::DomainError;
use hotelier_core::services::storage::ImageStore;

/// Writes uploaded images under a local directory with collision-free
/// UUID names, keeping the client extension. The returned path matches
/// the route the API serves the directory under.
pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn store(&self, filename: &str, bytes: Vec<u8>) -> Result<String, DomainError> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("failed to create upload directory: {e}"),
            })?;

        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("jpg");
        let stored_name = format!("{}.{}", Uuid::new_v4(), extension);

        let path = self.root.join(&stored_name);
        fs::write(&path, &bytes)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("failed to store image: {e}"),
            })?;
        tracing::debug!(path = %path.display(), size = bytes.len(), "stored image");

        Ok(format!("/uploads/{stored_name}"))
    }
}
