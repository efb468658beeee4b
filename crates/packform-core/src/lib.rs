//! PackForm Core Library
//!
//! Document model and editing logic for the PackForm packaging-design
//! editor: canvas objects, snapshot-based undo/redo, selection, layer
//! derivation, property sheets, export and local persistence. Rendering is
//! intentionally absent; the core hands paths and serialized documents to
//! whatever surface draws them.

pub mod align;
pub mod document;
pub mod export;
pub mod history;
pub mod layers;
pub mod objects;
pub mod properties;
pub mod session;
pub mod shortcuts;
pub mod snap;
pub mod storage;

pub use align::{Alignment, Distribution};
pub use document::DesignDocument;
pub use export::{ExportFormat, export_document};
pub use history::{ActionKind, HistoryEntry, HistoryManager};
pub use layers::{LayerMove, LayerRow, LayerView};
pub use objects::{CanvasObject, ObjectId, ObjectKind, SerializableColor};
pub use properties::{PropertyEdit, PropertySheet};
pub use session::{EditorSession, Selection, ViewSettings};
pub use shortcuts::{EditorCommand, Shortcut, ShortcutRegistry};
pub use storage::{AutoSaveManager, FileStorage, MemoryStorage, Storage, StorageError};
