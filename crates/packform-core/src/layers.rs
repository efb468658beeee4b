//! Layer view: a derived, reorderable list over the document's draw order.
//!
//! The layer panel owns no state of its own. It re-derives rows from the
//! document after every relevant change; mutation goes through the editor
//! session, never through the rows.

use crate::document::DesignDocument;
use crate::objects::{CanvasObject, ObjectId, ObjectKind};

/// Direction for a layer reorder.
///
/// The list displays topmost first, so "up" in the panel means toward the
/// front of the draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerMove {
    Up,
    Down,
    ToFront,
    ToBack,
}

/// One row in the layer list.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerRow {
    pub id: ObjectId,
    pub name: String,
    pub kind: ObjectKind,
    pub visible: bool,
    pub locked: bool,
    /// Child rows for groups, topmost first; display-only subtree.
    pub children: Vec<LayerRow>,
}

impl LayerRow {
    fn from_object(object: &CanvasObject) -> Self {
        let children = match object {
            CanvasObject::Group(group) => group
                .children
                .iter()
                .rev()
                .map(LayerRow::from_object)
                .collect(),
            _ => Vec::new(),
        };
        Self {
            id: object.id(),
            name: object.name().to_string(),
            kind: object.kind(),
            visible: object.base().visible,
            locked: object.base().locks.is_locked(),
            children,
        }
    }
}

/// The derived layer list, topmost object first.
#[derive(Debug, Clone, Default)]
pub struct LayerView {
    pub rows: Vec<LayerRow>,
}

impl LayerView {
    /// Derive the list from the document's current draw order.
    pub fn from_document(document: &DesignDocument) -> Self {
        Self {
            rows: document
                .z_order
                .iter()
                .rev()
                .filter_map(|id| document.get(*id))
                .map(LayerRow::from_object)
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find a top-level row by object ID.
    pub fn find(&self, id: ObjectId) -> Option<&LayerRow> {
        self.rows.iter().find(|row| row.id == id)
    }
}

/// Whether a child inside a group can be selected from the layer panel.
///
/// Child rows are display-only; selecting one is meaningful only when the
/// parent group itself is not locked.
pub fn child_selectable(document: &DesignDocument, group_id: ObjectId) -> bool {
    document
        .get(group_id)
        .and_then(|o| o.as_group().map(|_| !o.base().locks.is_locked()))
        .unwrap_or(false)
}
