//! In-memory storage for tests and ephemeral previews.

use super::{BoxFuture, Storage, StorageError, StorageResult};
use crate::document::DesignDocument;
use std::collections::HashMap;
use std::sync::RwLock;

/// Keeps designs in a process-local map.
#[derive(Default)]
pub struct MemoryStorage {
    designs: RwLock<HashMap<String, DesignDocument>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_err<E: std::fmt::Display>(err: E) -> StorageError {
        StorageError::Other(format!("lock poisoned: {err}"))
    }
}

impl Storage for MemoryStorage {
    fn save(&self, id: &str, document: &DesignDocument) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        let document = document.clone();
        Box::pin(async move {
            let mut designs = self.designs.write().map_err(Self::lock_err)?;
            designs.insert(id, document);
            Ok(())
        })
    }

    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<DesignDocument>> {
        let id = id.to_string();
        Box::pin(async move {
            let designs = self.designs.read().map_err(Self::lock_err)?;
            designs
                .get(&id)
                .cloned()
                .ok_or(StorageError::NotFound(id))
        })
    }

    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        Box::pin(async move {
            let mut designs = self.designs.write().map_err(Self::lock_err)?;
            designs.remove(&id);
            Ok(())
        })
    }

    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>> {
        Box::pin(async move {
            let designs = self.designs.read().map_err(Self::lock_err)?;
            Ok(designs.keys().cloned().collect())
        })
    }

    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let id = id.to_string();
        Box::pin(async move {
            let designs = self.designs.read().map_err(Self::lock_err)?;
            Ok(designs.contains_key(&id))
        })
    }
}
