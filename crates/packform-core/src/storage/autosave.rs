//! Periodic autosave over any storage backend.

use super::{Storage, StorageResult};
use crate::document::DesignDocument;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default autosave interval in seconds.
pub const DEFAULT_AUTOSAVE_INTERVAL_SECS: u64 = 30;

/// Reserved key holding the most recently edited design for reopen.
pub const LAST_DESIGN_KEY: &str = "__last_design__";

/// Tracks the dirty flag and save cadence for one open design.
///
/// The editor marks the manager dirty after mutations and drives
/// `maybe_save` from its idle tick; the manager decides whether the
/// interval has elapsed.
pub struct AutoSaveManager<S: Storage> {
    storage: Arc<S>,
    interval: Duration,
    last_save: Option<Instant>,
    dirty: bool,
    design_id: Option<String>,
}

impl<S: Storage> AutoSaveManager<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            storage,
            interval: Duration::from_secs(DEFAULT_AUTOSAVE_INTERVAL_SECS),
            last_save: None,
            dirty: false,
            design_id: None,
        }
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_design_id(&mut self, id: Option<String>) {
        self.design_id = id;
    }

    pub fn design_id(&self) -> Option<&str> {
        self.design_id.as_deref()
    }

    /// True when there are unsaved changes and the interval has elapsed
    /// (or nothing was ever saved).
    pub fn should_save(&self) -> bool {
        if !self.dirty {
            return false;
        }
        match self.last_save {
            Some(last) => last.elapsed() >= self.interval,
            None => true,
        }
    }

    /// Save if due. Returns whether a save happened.
    pub async fn maybe_save(&mut self, document: &DesignDocument) -> StorageResult<bool> {
        if !self.should_save() {
            return Ok(false);
        }
        self.save(document).await?;
        Ok(true)
    }

    /// Save immediately, also updating the last-design slot for reopen.
    pub async fn save(&mut self, document: &DesignDocument) -> StorageResult<()> {
        let id = self
            .design_id
            .clone()
            .unwrap_or_else(|| document.id.clone());
        self.storage.save(&id, document).await?;
        self.storage.save(LAST_DESIGN_KEY, document).await?;
        self.last_save = Some(Instant::now());
        self.dirty = false;
        Ok(())
    }

    /// Load a design and reset the save cadence to it.
    pub async fn load(&mut self, id: &str) -> StorageResult<DesignDocument> {
        let document = self.storage.load(id).await?;
        self.design_id = Some(id.to_string());
        self.dirty = false;
        self.last_save = Some(Instant::now());
        Ok(document)
    }

    /// Reopen the most recently edited design, if one was saved.
    pub async fn load_last(&mut self) -> Option<DesignDocument> {
        let document = self.storage.load(LAST_DESIGN_KEY).await.ok()?;
        self.design_id = Some(document.id.clone());
        self.dirty = false;
        self.last_save = Some(Instant::now());
        Some(document)
    }

    /// Stored design IDs, with the reserved last-design slot filtered out.
    pub async fn list_designs(&self) -> StorageResult<Vec<String>> {
        let mut ids = self.storage.list().await?;
        ids.retain(|id| id != LAST_DESIGN_KEY);
        Ok(ids)
    }

    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }
}
