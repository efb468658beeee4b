//! Snapshot-based undo/redo history.
//!
//! Every mutating editor action records a complete serialized copy of the
//! document. Undo and redo replay those snapshots wholesale; nothing is
//! diffed. That is O(document size) per action, which is fine at packaging
//! scale — designs hold tens of objects, not thousands.

use crate::document::DesignDocument;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use uuid::Uuid;

/// Maximum number of history entries kept; the oldest entry is evicted
/// beyond this.
pub const MAX_HISTORY: usize = 100;

/// What kind of action produced a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    Load,
    Add,
    Delete,
    Move,
    Resize,
    Rotate,
    Restyle,
    EditText,
    Reorder,
    Group,
    Ungroup,
    Paste,
    Duplicate,
    Visibility,
    Lock,
    Align,
    Distribute,
}

impl ActionKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Load => "Load",
            ActionKind::Add => "Add",
            ActionKind::Delete => "Delete",
            ActionKind::Move => "Move",
            ActionKind::Resize => "Resize",
            ActionKind::Rotate => "Rotate",
            ActionKind::Restyle => "Restyle",
            ActionKind::EditText => "Edit text",
            ActionKind::Reorder => "Reorder",
            ActionKind::Group => "Group",
            ActionKind::Ungroup => "Ungroup",
            ActionKind::Paste => "Paste",
            ActionKind::Duplicate => "Duplicate",
            ActionKind::Visibility => "Visibility",
            ActionKind::Lock => "Lock",
            ActionKind::Align => "Align",
            ActionKind::Distribute => "Distribute",
        }
    }
}

/// One recorded state. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub kind: ActionKind,
    /// Human-readable description for a history panel ("Add Text", ...).
    pub description: String,
    /// Complete document JSON — a self-sufficient snapshot, not a diff.
    snapshot: String,
    pub recorded_at: SystemTime,
}

impl HistoryEntry {
    /// Reconstruct the document recorded in this entry.
    fn restore(&self) -> Result<DesignDocument, serde_json::Error> {
        DesignDocument::from_json(&self.snapshot)
    }
}

/// Ordered history entries plus a cursor pointing at the current one.
///
/// Invariants: the cursor is `None` exactly when the list is empty; undo is
/// available iff the cursor is past the first entry; redo iff it is before
/// the last.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    entries: Vec<HistoryEntry>,
    cursor: Option<usize>,
    limit: usize,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::with_limit(MAX_HISTORY)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
            limit: limit.max(1),
        }
    }

    /// Record the current document state.
    ///
    /// Truncates any stale redo branch past the cursor, appends a new entry
    /// and moves the cursor onto it. Fire-and-forget: a snapshot that fails
    /// to serialize is logged and dropped rather than surfaced, so a broken
    /// entry can never enter the list.
    pub fn record(
        &mut self,
        kind: ActionKind,
        description: impl Into<String>,
        document: &DesignDocument,
    ) {
        let snapshot = match serde_json::to_string(document) {
            Ok(json) => json,
            Err(err) => {
                log::error!("history snapshot failed, entry dropped: {err}");
                return;
            }
        };

        if let Some(cursor) = self.cursor {
            self.entries.truncate(cursor + 1);
        } else {
            self.entries.clear();
        }

        self.entries.push(HistoryEntry {
            id: Uuid::new_v4(),
            kind,
            description: description.into(),
            snapshot,
            recorded_at: SystemTime::now(),
        });

        if self.entries.len() > self.limit {
            self.entries.remove(0);
        }
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Step back one entry and reconstruct its document.
    ///
    /// No-op (`None`) when already at the oldest entry or the list is empty.
    pub fn undo(&mut self) -> Option<DesignDocument> {
        let cursor = self.cursor?;
        if cursor == 0 {
            return None;
        }
        match self.entries[cursor - 1].restore() {
            Ok(document) => {
                self.cursor = Some(cursor - 1);
                Some(document)
            }
            Err(err) => {
                log::error!("undo failed to restore snapshot: {err}");
                None
            }
        }
    }

    /// Step forward one entry and reconstruct its document.
    ///
    /// No-op (`None`) when already at the newest entry or the list is empty.
    pub fn redo(&mut self) -> Option<DesignDocument> {
        let cursor = self.cursor?;
        if cursor + 1 >= self.entries.len() {
            return None;
        }
        match self.entries[cursor + 1].restore() {
            Ok(document) => {
                self.cursor = Some(cursor + 1);
                Some(document)
            }
            Err(err) => {
                log::error!("redo failed to restore snapshot: {err}");
                None
            }
        }
    }

    /// Drop every entry. Called when a different design is loaded so history
    /// never leaks across documents.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the current entry, if any.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Entries oldest first, for a history panel.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{CanvasObject, RectangleObject};
    use kurbo::Point;

    fn doc_with_rects(count: usize) -> DesignDocument {
        let mut doc = DesignDocument::new();
        for i in 0..count {
            doc.add_object(CanvasObject::Rectangle(RectangleObject::new(
                Point::new(i as f64 * 10.0, 0.0),
                50.0,
                50.0,
            )));
        }
        doc
    }

    fn record_state(history: &mut HistoryManager, doc: &DesignDocument) {
        history.record(ActionKind::Add, "Add Rectangle", doc);
    }

    #[test]
    fn empty_history_has_no_undo_or_redo() {
        let mut history = HistoryManager::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
        assert!(history.cursor().is_none());
    }

    #[test]
    fn single_entry_cannot_undo() {
        let mut history = HistoryManager::new();
        record_state(&mut history, &doc_with_rects(0));
        // Cursor sits on the only entry: nothing before it, nothing after.
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn n_undos_restore_state_before_first_action() {
        let mut history = HistoryManager::new();
        let baseline = doc_with_rects(0);
        history.record(ActionKind::Load, "New design", &baseline);

        let mut doc = baseline.clone();
        for n in 1..=3 {
            doc = doc_with_rects(n);
            record_state(&mut history, &doc);
        }

        let mut restored = None;
        for _ in 0..3 {
            restored = history.undo();
            assert!(restored.is_some());
        }
        assert_eq!(restored.unwrap().len(), baseline.len());
        assert!(!history.can_undo());
    }

    #[test]
    fn undo_then_redo_restores_pre_undo_state() {
        let mut history = HistoryManager::new();
        history.record(ActionKind::Load, "New design", &doc_with_rects(0));
        record_state(&mut history, &doc_with_rects(1));
        record_state(&mut history, &doc_with_rects(2));

        let undone = history.undo().unwrap();
        assert_eq!(undone.len(), 1);

        let redone = history.redo().unwrap();
        assert_eq!(redone.len(), 2);
        assert!(!history.can_redo());
    }

    #[test]
    fn recording_after_undo_discards_redo_branch() {
        let mut history = HistoryManager::new();
        // History [A, B, C], cursor at C.
        history.record(ActionKind::Load, "A", &doc_with_rects(0));
        record_state(&mut history, &doc_with_rects(1));
        record_state(&mut history, &doc_with_rects(2));
        assert_eq!(history.len(), 3);

        // Undo to B, then record D: history becomes [A, B, D].
        history.undo().unwrap();
        history.record(ActionKind::Delete, "D", &doc_with_rects(5));
        assert_eq!(history.len(), 3);
        assert_eq!(history.entries()[2].description, "D");

        // Redo is now a no-op.
        assert!(!history.can_redo());
        assert!(history.redo().is_none());
    }

    #[test]
    fn can_undo_iff_cursor_past_first_and_can_redo_iff_before_last() {
        let mut history = HistoryManager::new();
        history.record(ActionKind::Load, "A", &doc_with_rects(0));
        record_state(&mut history, &doc_with_rects(1));
        record_state(&mut history, &doc_with_rects(2));

        assert_eq!(history.cursor(), Some(2));
        assert!(history.can_undo());
        assert!(!history.can_redo());

        history.undo().unwrap();
        assert_eq!(history.cursor(), Some(1));
        assert!(history.can_undo());
        assert!(history.can_redo());

        history.undo().unwrap();
        assert_eq!(history.cursor(), Some(0));
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn limit_evicts_oldest_entry() {
        let mut history = HistoryManager::with_limit(3);
        history.record(ActionKind::Load, "A", &doc_with_rects(0));
        record_state(&mut history, &doc_with_rects(1));
        record_state(&mut history, &doc_with_rects(2));
        record_state(&mut history, &doc_with_rects(3));

        assert_eq!(history.len(), 3);
        assert_eq!(history.entries()[0].description, "Add Rectangle");
        assert_eq!(history.cursor(), Some(2));
    }

    #[test]
    fn clear_resets_cursor() {
        let mut history = HistoryManager::new();
        record_state(&mut history, &doc_with_rects(1));
        history.clear();
        assert!(history.is_empty());
        assert!(history.cursor().is_none());
        assert!(!history.can_undo());
    }

    #[test]
    fn entries_are_immutable_records_with_metadata() {
        let mut history = HistoryManager::new();
        history.record(ActionKind::Group, "Group 2 objects", &doc_with_rects(2));

        let entry = &history.entries()[0];
        assert_eq!(entry.kind, ActionKind::Group);
        assert_eq!(entry.description, "Group 2 objects");
        assert!(entry.recorded_at.elapsed().is_ok());
    }
}
