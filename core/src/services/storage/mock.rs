//! Mock implementation of ImageStore for testing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::DomainError;

use super::ImageStore;

/// In-memory image store. Records each stored file's hint and size and
/// hands back deterministic paths.
#[derive(Default)]
pub struct MockImageStore {
    stored: Mutex<Vec<(String, usize)>>,
    counter: AtomicU64,
}

impl MockImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filenames and byte counts of everything stored, in order.
    pub fn stored(&self) -> Vec<(String, usize)> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStore for MockImageStore {
    async fn store(&self, filename: &str, bytes: Vec<u8>) -> Result<String, DomainError> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        self.stored
            .lock()
            .unwrap()
            .push((filename.to_string(), bytes.len()));
        Ok(format!("/uploads/{n}-{filename}"))
    }
}
