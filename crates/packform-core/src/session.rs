//! Editor session: the single owner of the live document.
//!
//! Every mutation flows through the session, which records a history entry
//! after each one — undo capture is structural, not a call-site discipline.
//! Other components (layer panel, property panels) read via getters and send
//! typed commands back; they never hold a mutable handle to the document.

use crate::align::{self, Alignment, Distribution};
use crate::document::{DUPLICATE_OFFSET, DesignDocument};
use crate::history::{ActionKind, HistoryManager};
use crate::layers::{LayerMove, LayerView};
use crate::objects::{
    CanvasObject, EllipseObject, ImageObject, ImageSource, ObjectId, RectangleObject, TextObject,
};
use crate::properties::{PropertyEdit, PropertySheet, apply_edit};
use crate::shortcuts::{EditorCommand, ShortcutRegistry};
use crate::snap::{DEFAULT_GRID_SIZE, DEFAULT_SNAP_TOLERANCE};
use kurbo::{Point, Vec2};

/// View controls for the canvas viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSettings {
    /// Zoom level, clamped to [`Self::MIN_ZOOM`]..=[`Self::MAX_ZOOM`].
    pub zoom: f64,
    pub grid_visible: bool,
    pub guides_visible: bool,
    pub grid_size: f64,
    pub snap_tolerance: f64,
}

impl ViewSettings {
    /// One zoom bound for every call site.
    pub const MIN_ZOOM: f64 = 0.1;
    pub const MAX_ZOOM: f64 = 5.0;

    /// Multiplicative step for zoom in/out.
    const ZOOM_STEP: f64 = 1.25;

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * Self::ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / Self::ZOOM_STEP);
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            grid_visible: true,
            guides_visible: true,
            grid_size: DEFAULT_GRID_SIZE,
            snap_tolerance: DEFAULT_SNAP_TOLERANCE,
        }
    }
}

/// Current selection: nothing, one object, or a multi-object active
/// selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Single(ObjectId),
    Multiple(Vec<ObjectId>),
}

impl Selection {
    /// Normalize a list of IDs into a selection, dropping duplicates.
    pub fn from_ids(ids: Vec<ObjectId>) -> Self {
        let mut unique: Vec<ObjectId> = Vec::with_capacity(ids.len());
        for id in ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        match unique.len() {
            0 => Selection::None,
            1 => Selection::Single(unique[0]),
            _ => Selection::Multiple(unique),
        }
    }

    pub fn ids(&self) -> Vec<ObjectId> {
        match self {
            Selection::None => Vec::new(),
            Selection::Single(id) => vec![*id],
            Selection::Multiple(ids) => ids.clone(),
        }
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        match self {
            Selection::None => false,
            Selection::Single(s) => *s == id,
            Selection::Multiple(ids) => ids.contains(&id),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Selection::None => 0,
            Selection::Single(_) => 1,
            Selection::Multiple(ids) => ids.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::None)
    }

    /// The single active object, when exactly one is selected.
    pub fn single(&self) -> Option<ObjectId> {
        match self {
            Selection::Single(id) => Some(*id),
            _ => None,
        }
    }
}

/// Transient state for one open editor.
pub struct EditorSession {
    document: DesignDocument,
    history: HistoryManager,
    selection: Selection,
    clipboard: Vec<CanvasObject>,
    shortcuts: ShortcutRegistry,
    /// View controls; free to mutate, not part of history.
    pub view: ViewSettings,
    design_id: Option<String>,
    dirty: bool,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Create a session over a fresh empty document.
    pub fn new() -> Self {
        Self::with_document(DesignDocument::new(), None)
    }

    /// Create a session over an existing document.
    ///
    /// A baseline entry is recorded immediately so the state before the
    /// first action is always reachable by undo.
    pub fn with_document(document: DesignDocument, design_id: Option<String>) -> Self {
        let mut history = HistoryManager::new();
        history.record(ActionKind::Load, "Load design", &document);
        Self {
            document,
            history,
            selection: Selection::None,
            clipboard: Vec::new(),
            shortcuts: ShortcutRegistry::standard(),
            view: ViewSettings::default(),
            design_id,
            dirty: false,
        }
    }

    /// Replace the open document, e.g. after fetching a saved design.
    ///
    /// History is cleared first so entries never leak across documents, then
    /// a fresh baseline is recorded.
    pub fn load_document(&mut self, document: DesignDocument, design_id: Option<String>) {
        self.history.clear();
        self.history
            .record(ActionKind::Load, "Load design", &document);
        self.document = document;
        self.design_id = design_id;
        self.selection = Selection::None;
        self.dirty = false;
    }

    /// Load a document from serialized JSON.
    pub fn load_json(
        &mut self,
        json: &str,
        design_id: Option<String>,
    ) -> Result<(), serde_json::Error> {
        let document = DesignDocument::from_json(json)?;
        self.load_document(document, design_id);
        Ok(())
    }

    pub fn document(&self) -> &DesignDocument {
        &self.document
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn shortcuts(&self) -> &ShortcutRegistry {
        &self.shortcuts
    }

    pub fn design_id(&self) -> Option<&str> {
        self.design_id.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag after a successful save.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Record the current document state and mark the session dirty.
    fn record(&mut self, kind: ActionKind, description: impl Into<String>) {
        self.history.record(kind, description, &self.document);
        self.dirty = true;
    }

    // ----- selection ------------------------------------------------------

    /// The active object when exactly one is selected.
    pub fn active_object(&self) -> Option<&CanvasObject> {
        self.selection.single().and_then(|id| self.document.get(id))
    }

    /// Property sheet for the active object.
    pub fn property_sheet(&self) -> Option<PropertySheet> {
        self.active_object().map(PropertySheet::read)
    }

    /// Select a single object. Fails for unknown or non-selectable (locked)
    /// objects.
    pub fn set_active_object(&mut self, id: ObjectId) -> bool {
        match self.document.get(id) {
            Some(object) if object.base().locks.selectable => {
                self.selection = Selection::Single(id);
                true
            }
            _ => false,
        }
    }

    /// Extend the selection with another object.
    pub fn add_to_selection(&mut self, id: ObjectId) -> bool {
        match self.document.get(id) {
            Some(object) if object.base().locks.selectable => {
                if !self.selection.contains(id) {
                    let mut ids = self.selection.ids();
                    ids.push(id);
                    self.selection = Selection::from_ids(ids);
                }
                true
            }
            _ => false,
        }
    }

    /// Clear the selection.
    pub fn discard_active_object(&mut self) {
        self.selection = Selection::None;
    }

    /// Select every selectable object.
    pub fn select_all(&mut self) {
        let ids: Vec<ObjectId> = self
            .document
            .z_order
            .iter()
            .copied()
            .filter(|id| {
                self.document
                    .get(*id)
                    .map(|o| o.base().locks.selectable)
                    .unwrap_or(false)
            })
            .collect();
        self.selection = Selection::from_ids(ids);
    }

    /// Select the frontmost object under a point, or clear the selection
    /// when the point hits nothing.
    pub fn select_at(&mut self, point: Point) -> Option<ObjectId> {
        let hit = self
            .document
            .objects_at_point(point, self.view.snap_tolerance)
            .into_iter()
            .next();
        match hit {
            Some(id) => {
                self.selection = Selection::Single(id);
                Some(id)
            }
            None => {
                self.selection = Selection::None;
                None
            }
        }
    }

    // ----- object creation ------------------------------------------------

    pub fn add_text(&mut self, position: Point, content: impl Into<String>) -> ObjectId {
        let id = self
            .document
            .add_object(CanvasObject::Text(TextObject::new(position, content)));
        self.selection = Selection::Single(id);
        self.record(ActionKind::Add, "Add Text");
        id
    }

    pub fn add_rectangle(&mut self, position: Point, width: f64, height: f64) -> ObjectId {
        let id = self.document.add_object(CanvasObject::Rectangle(
            RectangleObject::new(position, width, height),
        ));
        self.selection = Selection::Single(id);
        self.record(ActionKind::Add, "Add Rectangle");
        id
    }

    pub fn add_ellipse(&mut self, position: Point, radius_x: f64, radius_y: f64) -> ObjectId {
        let id = self.document.add_object(CanvasObject::Ellipse(
            EllipseObject::new(position, radius_x, radius_y),
        ));
        self.selection = Selection::Single(id);
        self.record(ActionKind::Add, "Add Ellipse");
        id
    }

    pub fn add_image(
        &mut self,
        position: Point,
        source: ImageSource,
        natural_width: u32,
        natural_height: u32,
    ) -> ObjectId {
        let id = self.document.add_object(CanvasObject::Image(ImageObject::new(
            position,
            source,
            natural_width,
            natural_height,
        )));
        self.selection = Selection::Single(id);
        self.record(ActionKind::Add, "Add Image");
        id
    }

    // ----- mutations ------------------------------------------------------

    /// Delete every selected object. Returns the number removed.
    pub fn delete_selected(&mut self) -> usize {
        let ids = self.selection.ids();
        if ids.is_empty() {
            return 0;
        }
        let mut removed = 0;
        for id in ids {
            if self.document.remove_object(id).is_some() {
                removed += 1;
            }
        }
        self.selection = Selection::None;
        if removed > 0 {
            self.record(ActionKind::Delete, format!("Delete {removed} object(s)"));
        }
        removed
    }

    /// Delete one object (layer panel row action).
    pub fn delete_object(&mut self, id: ObjectId) -> bool {
        if self.document.remove_object(id).is_none() {
            return false;
        }
        if self.selection.contains(id) {
            self.selection = Selection::from_ids(
                self.selection.ids().into_iter().filter(|&i| i != id).collect(),
            );
        }
        self.record(ActionKind::Delete, "Delete object");
        true
    }

    /// Move the selection by a delta, honoring per-axis movement locks.
    pub fn move_selected(&mut self, delta: Vec2) -> usize {
        let mut moved = 0;
        for id in self.selection.ids() {
            if let Some(object) = self.document.get_mut(id) {
                let locks = object.base().locks;
                let applied = Vec2::new(
                    if locks.lock_movement_x { 0.0 } else { delta.x },
                    if locks.lock_movement_y { 0.0 } else { delta.y },
                );
                if applied.hypot2() > 0.0 {
                    object.translate(applied);
                    moved += 1;
                }
            }
        }
        if moved > 0 {
            self.record(ActionKind::Move, format!("Move {moved} object(s)"));
        }
        moved
    }

    /// Apply a property edit to the active object and record it.
    ///
    /// Returns false when nothing is active or the edit does not fit the
    /// object's kind.
    pub fn edit_active(&mut self, edit: PropertyEdit) -> bool {
        let Some(id) = self.selection.single() else {
            return false;
        };
        let Some(object) = self.document.get_mut(id) else {
            return false;
        };
        if !apply_edit(object, &edit) {
            return false;
        }
        self.record(edit.action_kind(), edit.describe());
        true
    }

    /// Group the current multi-selection into one object.
    pub fn group_selected(&mut self) -> Option<ObjectId> {
        let ids = self.selection.ids();
        if ids.len() < 2 {
            return None;
        }
        let group_id = self.document.group_objects(&ids)?;
        self.selection = Selection::Single(group_id);
        self.record(ActionKind::Group, format!("Group {} objects", ids.len()));
        Some(group_id)
    }

    /// Ungroup every selected group, selecting the released children.
    pub fn ungroup_selected(&mut self) -> Vec<ObjectId> {
        let groups: Vec<ObjectId> = self
            .selection
            .ids()
            .into_iter()
            .filter(|&id| self.document.get(id).map(|o| o.is_group()).unwrap_or(false))
            .collect();
        if groups.is_empty() {
            return Vec::new();
        }

        let mut released = Vec::new();
        for group_id in groups {
            if let Some(children) = self.document.ungroup_object(group_id) {
                released.extend(children);
            }
        }
        self.selection = Selection::from_ids(released.clone());
        self.record(ActionKind::Ungroup, "Ungroup");
        released
    }

    // ----- clipboard ------------------------------------------------------

    /// Copy the selection into the session clipboard.
    pub fn copy_selection(&mut self) -> usize {
        self.clipboard = self
            .selection
            .ids()
            .into_iter()
            .filter_map(|id| self.document.get(id).cloned())
            .collect();
        self.clipboard.len()
    }

    /// Copy, then delete, the selection.
    pub fn cut_selection(&mut self) -> usize {
        let copied = self.copy_selection();
        if copied > 0 {
            self.delete_selected();
        }
        copied
    }

    /// Paste clipboard contents, re-keyed and nudged, and select the copies.
    pub fn paste(&mut self) -> Vec<ObjectId> {
        if self.clipboard.is_empty() {
            return Vec::new();
        }
        let mut pasted = Vec::with_capacity(self.clipboard.len());
        for mut copy in self.clipboard.clone() {
            copy.regenerate_id();
            copy.translate(Vec2::new(DUPLICATE_OFFSET, DUPLICATE_OFFSET));
            pasted.push(self.document.add_object(copy));
        }
        self.selection = Selection::from_ids(pasted.clone());
        self.record(ActionKind::Paste, format!("Paste {} object(s)", pasted.len()));
        pasted
    }

    /// Duplicate the selection in place.
    pub fn duplicate_selected(&mut self) -> Vec<ObjectId> {
        let copies: Vec<ObjectId> = self
            .selection
            .ids()
            .into_iter()
            .filter_map(|id| self.document.duplicate_object(id))
            .collect();
        if !copies.is_empty() {
            self.selection = Selection::from_ids(copies.clone());
            self.record(ActionKind::Duplicate, "Duplicate");
        }
        copies
    }

    // ----- layer panel operations ----------------------------------------

    /// Derive the current layer list.
    pub fn layer_view(&self) -> LayerView {
        LayerView::from_document(&self.document)
    }

    /// Duplicate one object (layer panel row action) and select the copy.
    pub fn duplicate_object(&mut self, id: ObjectId) -> Option<ObjectId> {
        let copy = self.document.duplicate_object(id)?;
        self.selection = Selection::Single(copy);
        self.record(ActionKind::Duplicate, "Duplicate object");
        Some(copy)
    }

    /// Toggle or set object visibility.
    pub fn set_visible(&mut self, id: ObjectId, visible: bool) -> bool {
        let Some(object) = self.document.get_mut(id) else {
            return false;
        };
        if object.base().visible == visible {
            return true;
        }
        object.base_mut().visible = visible;
        let desc = if visible { "Show object" } else { "Hide object" };
        self.record(ActionKind::Visibility, desc);
        true
    }

    /// Lock or unlock an object. Locking drops it from the selection.
    pub fn set_locked(&mut self, id: ObjectId, locked: bool) -> bool {
        let Some(object) = self.document.get_mut(id) else {
            return false;
        };
        if locked {
            object.base_mut().locks.lock();
            if self.selection.contains(id) {
                self.selection = Selection::from_ids(
                    self.selection.ids().into_iter().filter(|&i| i != id).collect(),
                );
            }
        } else {
            object.base_mut().locks.unlock();
        }
        let desc = if locked { "Lock object" } else { "Unlock object" };
        self.record(ActionKind::Lock, desc);
        true
    }

    /// Reorder an object in the draw order.
    ///
    /// The layer list shows topmost first, so `Up` maps to bring-forward in
    /// draw order.
    pub fn move_layer(&mut self, id: ObjectId, direction: LayerMove) -> bool {
        let changed = match direction {
            LayerMove::Up => self.document.bring_forward(id),
            LayerMove::Down => self.document.send_backward(id),
            LayerMove::ToFront => {
                let was_front = self.document.z_order.last() == Some(&id);
                self.document.bring_to_front(id);
                !was_front && self.document.z_index(id).is_some()
            }
            LayerMove::ToBack => {
                let was_back = self.document.z_order.first() == Some(&id);
                self.document.send_to_back(id);
                !was_back && self.document.z_index(id).is_some()
            }
        };
        if changed {
            self.record(ActionKind::Reorder, "Reorder layers");
        }
        changed
    }

    // ----- alignment ------------------------------------------------------

    pub fn align_selected(&mut self, alignment: Alignment) -> usize {
        let ids = self.selection.ids();
        let moved = align::align_objects(&mut self.document, &ids, alignment);
        if moved > 0 {
            self.record(ActionKind::Align, "Align objects");
        }
        moved
    }

    pub fn distribute_selected(&mut self, axis: Distribution) -> usize {
        let ids = self.selection.ids();
        let moved = align::distribute_objects(&mut self.document, &ids, axis);
        if moved > 0 {
            self.record(ActionKind::Distribute, "Distribute objects");
        }
        moved
    }

    // ----- undo / redo ----------------------------------------------------

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Step back one history entry. The restored document replaces the live
    /// one wholesale; the selection is discarded because the objects it
    /// referenced may not exist in the restored state.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(document) => {
                self.document = document;
                self.selection = Selection::None;
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Step forward one history entry.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(document) => {
                self.document = document;
                self.selection = Selection::None;
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    // ----- command dispatch ----------------------------------------------

    /// Resolve a key chord against the session's bindings.
    pub fn resolve_shortcut(&self, key: &str, ctrl: bool, shift: bool) -> Option<EditorCommand> {
        self.shortcuts.resolve(key, ctrl, shift)
    }

    /// Execute an editor command. Returns whether anything happened.
    pub fn execute(&mut self, command: EditorCommand) -> bool {
        match command {
            EditorCommand::Undo => self.undo(),
            EditorCommand::Redo => self.redo(),
            EditorCommand::Copy => self.copy_selection() > 0,
            EditorCommand::Cut => self.cut_selection() > 0,
            EditorCommand::Paste => !self.paste().is_empty(),
            EditorCommand::Duplicate => !self.duplicate_selected().is_empty(),
            EditorCommand::SelectAll => {
                self.select_all();
                !self.selection.is_empty()
            }
            EditorCommand::Deselect => {
                let had = !self.selection.is_empty();
                self.discard_active_object();
                had
            }
            EditorCommand::DeleteSelection => self.delete_selected() > 0,
            EditorCommand::GroupSelection => self.group_selected().is_some(),
            EditorCommand::UngroupSelection => !self.ungroup_selected().is_empty(),
            EditorCommand::ZoomIn => {
                self.view.zoom_in();
                true
            }
            EditorCommand::ZoomOut => {
                self.view.zoom_out();
                true
            }
            EditorCommand::ZoomReset => {
                self.view.set_zoom(1.0);
                true
            }
            EditorCommand::ToggleGrid => {
                self.view.grid_visible = !self.view.grid_visible;
                true
            }
            EditorCommand::ToggleGuides => {
                self.view.guides_visible = !self.view.guides_visible;
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::FontWeight;

    #[test]
    fn fresh_session_is_clean_with_baseline_history() {
        let session = EditorSession::new();
        assert!(!session.is_dirty());
        assert_eq!(session.history().len(), 1);
        assert!(!session.can_undo());
        assert!(!session.can_redo());
    }

    #[test]
    fn adding_an_object_records_history_automatically() {
        let mut session = EditorSession::new();
        session.add_rectangle(Point::ZERO, 100.0, 100.0);

        assert!(session.is_dirty());
        assert!(session.can_undo());
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn undo_restores_document_and_clears_selection() {
        let mut session = EditorSession::new();
        session.add_rectangle(Point::ZERO, 100.0, 100.0);
        assert_eq!(session.document().len(), 1);
        assert!(!session.selection().is_empty());

        assert!(session.undo());
        assert!(session.document().is_empty());
        assert!(session.selection().is_empty());
        assert!(session.can_redo());
    }

    #[test]
    fn font_size_change_round_trips_through_undo_redo() {
        // Add text (defaults to 16), change the size to 32, undo, redo.
        let mut session = EditorSession::new();
        let id = session.add_text(Point::ZERO, "Brand name");
        assert!(session.edit_active(PropertyEdit::FontSize(32.0)));

        let font_size = |s: &EditorSession| match s.document().get(id) {
            Some(CanvasObject::Text(t)) => t.font_size,
            _ => panic!("text object missing"),
        };
        assert!((font_size(&session) - 32.0).abs() < f64::EPSILON);

        assert!(session.undo());
        assert!((font_size(&session) - 16.0).abs() < f64::EPSILON);

        assert!(session.redo());
        assert!((font_size(&session) - 32.0).abs() < f64::EPSILON);
    }

    #[test]
    fn new_action_after_undo_discards_redo() {
        let mut session = EditorSession::new();
        session.add_rectangle(Point::ZERO, 10.0, 10.0);
        session.add_ellipse(Point::new(50.0, 50.0), 10.0, 10.0);

        session.undo();
        assert!(session.can_redo());

        session.add_text(Point::new(100.0, 100.0), "fresh branch");
        assert!(!session.can_redo());
        assert!(!session.redo());
    }

    #[test]
    fn n_undos_return_to_the_empty_document() {
        let mut session = EditorSession::new();
        session.add_rectangle(Point::ZERO, 10.0, 10.0);
        session.add_rectangle(Point::new(20.0, 0.0), 10.0, 10.0);
        session.add_rectangle(Point::new(40.0, 0.0), 10.0, 10.0);

        assert!(session.undo());
        assert!(session.undo());
        assert!(session.undo());
        assert!(session.document().is_empty());
        assert!(!session.can_undo());
    }

    #[test]
    fn locked_objects_cannot_become_active() {
        let mut session = EditorSession::new();
        let id = session.add_rectangle(Point::ZERO, 10.0, 10.0);
        session.set_locked(id, true);

        assert!(session.selection().is_empty());
        assert!(!session.set_active_object(id));

        session.set_locked(id, false);
        assert!(session.set_active_object(id));
    }

    #[test]
    fn movement_locks_suppress_the_locked_axis() {
        let mut session = EditorSession::new();
        let id = session.add_rectangle(Point::ZERO, 10.0, 10.0);
        session
            .document
            .get_mut(id)
            .unwrap()
            .base_mut()
            .locks
            .lock_movement_x = true;
        session.set_active_object(id);

        session.move_selected(Vec2::new(30.0, 40.0));
        let position = session.document().get(id).unwrap().base().position();
        assert!((position.x - 0.0).abs() < f64::EPSILON);
        assert!((position.y - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn copy_paste_rekeys_and_offsets() {
        let mut session = EditorSession::new();
        let id = session.add_rectangle(Point::new(10.0, 10.0), 50.0, 50.0);
        session.copy_selection();
        let pasted = session.paste();

        assert_eq!(pasted.len(), 1);
        assert_ne!(pasted[0], id);
        let copy = session.document().get(pasted[0]).unwrap();
        assert_eq!(
            copy.base().position(),
            Point::new(10.0 + DUPLICATE_OFFSET, 10.0 + DUPLICATE_OFFSET)
        );
        // Paste selects the copies.
        assert!(session.selection().contains(pasted[0]));
    }

    #[test]
    fn group_and_ungroup_via_session_update_selection() {
        let mut session = EditorSession::new();
        let a = session.add_rectangle(Point::ZERO, 10.0, 10.0);
        let b = session.add_rectangle(Point::new(30.0, 0.0), 10.0, 10.0);
        session.set_active_object(a);
        session.add_to_selection(b);

        let group_id = session.group_selected().expect("group");
        assert_eq!(session.selection().single(), Some(group_id));
        assert_eq!(session.document().len(), 1);

        let released = session.ungroup_selected();
        assert_eq!(released.len(), 2);
        assert_eq!(session.selection().len(), 2);
    }

    #[test]
    fn zoom_is_clamped_to_a_single_range() {
        let mut session = EditorSession::new();
        session.view.set_zoom(100.0);
        assert!((session.view.zoom - ViewSettings::MAX_ZOOM).abs() < f64::EPSILON);

        session.view.set_zoom(0.0001);
        assert!((session.view.zoom - ViewSettings::MIN_ZOOM).abs() < f64::EPSILON);
    }

    #[test]
    fn load_document_clears_history() {
        let mut session = EditorSession::new();
        session.add_rectangle(Point::ZERO, 10.0, 10.0);
        assert!(session.can_undo());

        session.load_document(DesignDocument::new(), Some("design-7".into()));
        assert!(!session.can_undo());
        assert!(!session.is_dirty());
        assert_eq!(session.design_id(), Some("design-7"));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn shortcut_chords_drive_commands() {
        let mut session = EditorSession::new();
        session.add_rectangle(Point::ZERO, 10.0, 10.0);

        let undo = session.resolve_shortcut("z", true, false).unwrap();
        assert!(session.execute(undo));
        assert!(session.document().is_empty());

        let redo = session.resolve_shortcut("Z", true, true).unwrap();
        assert!(session.execute(redo));
        assert_eq!(session.document().len(), 1);
    }

    #[test]
    fn select_at_picks_frontmost_hit() {
        let mut session = EditorSession::new();
        let back = session.add_rectangle(Point::ZERO, 100.0, 100.0);
        let front = session.add_rectangle(Point::new(50.0, 50.0), 100.0, 100.0);

        assert_eq!(session.select_at(Point::new(75.0, 75.0)), Some(front));
        assert_eq!(session.select_at(Point::new(25.0, 25.0)), Some(back));
        assert_eq!(session.select_at(Point::new(500.0, 500.0)), None);
        assert!(session.selection().is_empty());
    }

    #[test]
    fn layer_operations_record_history_and_rederive() {
        let mut session = EditorSession::new();
        let back = session.add_rectangle(Point::ZERO, 10.0, 10.0);
        let front = session.add_rectangle(Point::new(30.0, 0.0), 10.0, 10.0);
        let before = session.history().len();

        // Hide, then raise the back object to the top.
        assert!(session.set_visible(back, false));
        assert!(session.move_layer(back, LayerMove::ToFront));
        assert_eq!(session.history().len(), before + 2);

        let view = session.layer_view();
        assert_eq!(view.rows[0].id, back);
        assert!(!view.rows[0].visible);
        assert_eq!(view.rows[1].id, front);

        // Undoing the reorder restores the old draw order.
        assert!(session.undo());
        let view = session.layer_view();
        assert_eq!(view.rows[0].id, front);
    }

    #[test]
    fn duplicate_object_selects_the_copy() {
        let mut session = EditorSession::new();
        let id = session.add_rectangle(Point::ZERO, 10.0, 10.0);
        let copy = session.duplicate_object(id).expect("copy");

        assert_ne!(copy, id);
        assert_eq!(session.selection().single(), Some(copy));
        assert_eq!(session.document().len(), 2);
    }

    #[test]
    fn mark_saved_clears_dirty_flag() {
        let mut session = EditorSession::new();
        session.add_rectangle(Point::ZERO, 10.0, 10.0);
        assert!(session.is_dirty());
        session.mark_saved();
        assert!(!session.is_dirty());
    }
}
