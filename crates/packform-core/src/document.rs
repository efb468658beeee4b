//! Design document: the objects on the canvas plus their draw order.

use crate::objects::{CanvasObject, GroupObject, ObjectId};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Offset applied to duplicated objects so copies don't sit on the original.
pub const DUPLICATE_OFFSET: f64 = 12.0;

/// A packaging design document.
///
/// Objects are keyed by ID; `z_order` holds draw order back to front and is
/// also the z-order used for hit-testing. The whole struct serializes to
/// JSON, which is the snapshot format used by history and storage — `id`,
/// `name` and the lock flags of every object ride along by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignDocument {
    /// Unique document identifier.
    pub id: String,
    /// Document name.
    pub name: String,
    /// Template this design was started from, if any.
    #[serde(default)]
    pub template_id: Option<String>,
    /// Artboard width in canvas units.
    pub width: f64,
    /// Artboard height in canvas units.
    pub height: f64,
    /// All objects, keyed by ID.
    pub objects: HashMap<ObjectId, CanvasObject>,
    /// Draw order, back to front.
    pub z_order: Vec<ObjectId>,
}

impl Default for DesignDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignDocument {
    /// Default artboard size for a fresh document.
    pub const DEFAULT_SIZE: (f64, f64) = (800.0, 600.0);

    /// Create a new empty document.
    pub fn new() -> Self {
        Self::with_size(Self::DEFAULT_SIZE.0, Self::DEFAULT_SIZE.1)
    }

    /// Create a new empty document with a specific artboard size.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: "Untitled design".to_string(),
            template_id: None,
            width,
            height,
            objects: HashMap::new(),
            z_order: Vec::new(),
        }
    }

    /// Add an object on top of the draw order.
    pub fn add_object(&mut self, object: CanvasObject) -> ObjectId {
        let id = object.id();
        self.z_order.push(id);
        self.objects.insert(id, object);
        id
    }

    /// Remove an object.
    pub fn remove_object(&mut self, id: ObjectId) -> Option<CanvasObject> {
        self.z_order.retain(|&oid| oid != id);
        self.objects.remove(&id)
    }

    pub fn get(&self, id: ObjectId) -> Option<&CanvasObject> {
        self.objects.get(&id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut CanvasObject> {
        self.objects.get_mut(&id)
    }

    /// Find an object by ID, descending into groups.
    pub fn find_nested(&self, id: ObjectId) -> Option<&CanvasObject> {
        if let Some(object) = self.objects.get(&id) {
            return Some(object);
        }
        self.objects
            .values()
            .filter_map(|o| o.as_group())
            .find_map(|g| g.find_child(id))
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Remove every object.
    pub fn clear_objects(&mut self) {
        self.objects.clear();
        self.z_order.clear();
    }

    /// Objects in draw order (back to front).
    pub fn objects_ordered(&self) -> impl Iterator<Item = &CanvasObject> {
        self.z_order.iter().filter_map(|id| self.objects.get(id))
    }

    /// Index of an object in the draw order.
    pub fn z_index(&self, id: ObjectId) -> Option<usize> {
        self.z_order.iter().position(|&oid| oid == id)
    }

    /// Make an object the topmost.
    pub fn bring_to_front(&mut self, id: ObjectId) {
        if self.objects.contains_key(&id) {
            self.z_order.retain(|&oid| oid != id);
            self.z_order.push(id);
        }
    }

    /// Make an object the bottommost.
    pub fn send_to_back(&mut self, id: ObjectId) {
        if self.objects.contains_key(&id) {
            self.z_order.retain(|&oid| oid != id);
            self.z_order.insert(0, id);
        }
    }

    /// Move an object one step toward the front. Returns false if already
    /// frontmost.
    pub fn bring_forward(&mut self, id: ObjectId) -> bool {
        if let Some(pos) = self.z_index(id) {
            if pos + 1 < self.z_order.len() {
                self.z_order.swap(pos, pos + 1);
                return true;
            }
        }
        false
    }

    /// Move an object one step toward the back. Returns false if already
    /// backmost.
    pub fn send_backward(&mut self, id: ObjectId) -> bool {
        if let Some(pos) = self.z_index(id) {
            if pos > 0 {
                self.z_order.swap(pos, pos - 1);
                return true;
            }
        }
        false
    }

    /// Objects under a point, front to back.
    ///
    /// Invisible objects and objects whose `selectable` flag is cleared
    /// (locked objects) are skipped, so locked artwork stays visible but
    /// out of normal hit-selection.
    pub fn objects_at_point(&self, point: Point, tolerance: f64) -> Vec<ObjectId> {
        self.z_order
            .iter()
            .rev()
            .filter_map(|&id| {
                self.objects
                    .get(&id)
                    .filter(|o| o.base().locks.selectable && o.hit_test(point, tolerance))
                    .map(|_| id)
            })
            .collect()
    }

    /// Objects whose bounds intersect a rectangle (marquee selection).
    pub fn objects_in_rect(&self, rect: Rect) -> Vec<ObjectId> {
        self.z_order
            .iter()
            .filter_map(|&id| {
                self.objects
                    .get(&id)
                    .filter(|o| {
                        o.base().visible
                            && o.base().locks.selectable
                            && rect.intersect(o.bounds()).area() > 0.0
                    })
                    .map(|_| id)
            })
            .collect()
    }

    /// Combined bounds of all objects.
    pub fn bounds(&self) -> Option<Rect> {
        self.objects
            .values()
            .map(|o| o.bounds())
            .reduce(|a, b| a.union(b))
    }

    /// Combine N >= 2 objects into one group.
    ///
    /// The originals are removed and the group is inserted at the frontmost
    /// removed z-slot; children are rebased to group-local coordinates.
    /// Returns the group's ID, or `None` when fewer than two of the given
    /// IDs exist in the document.
    pub fn group_objects(&mut self, ids: &[ObjectId]) -> Option<ObjectId> {
        let member_slots: Vec<usize> = self
            .z_order
            .iter()
            .enumerate()
            .filter(|(_, id)| ids.contains(id))
            .map(|(idx, _)| idx)
            .collect();
        if member_slots.len() < 2 {
            return None;
        }
        let front_slot = *member_slots.last()?;

        // Collect members in draw order so the group preserves stacking.
        let member_ids: Vec<ObjectId> = self
            .z_order
            .iter()
            .copied()
            .filter(|id| ids.contains(id))
            .collect();
        let mut members = Vec::with_capacity(member_ids.len());
        for id in &member_ids {
            if let Some(object) = self.objects.remove(id) {
                members.push(object);
            }
        }
        self.z_order.retain(|id| !member_ids.contains(id));

        let group = GroupObject::group(members);
        let group_id = group.base.id;
        let insert_at = front_slot
            .saturating_sub(member_slots.len() - 1)
            .min(self.z_order.len());
        self.objects.insert(group_id, CanvasObject::Group(group));
        self.z_order.insert(insert_at, group_id);
        Some(group_id)
    }

    /// Dissolve a group back into its children.
    ///
    /// Children return to canvas coordinates (group offset applied) and take
    /// the group's z-slot in their original relative order. Returns the
    /// child IDs, or `None` when the object is not a group.
    pub fn ungroup_object(&mut self, group_id: ObjectId) -> Option<Vec<ObjectId>> {
        if !matches!(self.objects.get(&group_id), Some(CanvasObject::Group(_))) {
            return None;
        }
        let slot = self.z_index(group_id)?;
        let Some(CanvasObject::Group(group)) = self.objects.remove(&group_id) else {
            return None;
        };
        self.z_order.retain(|&id| id != group_id);

        let children = group.ungroup();
        let child_ids: Vec<ObjectId> = children.iter().map(|c| c.id()).collect();
        for (i, child) in children.into_iter().enumerate() {
            let child_id = child.id();
            self.objects.insert(child_id, child);
            self.z_order.insert(slot + i, child_id);
        }
        Some(child_ids)
    }

    /// Clone an object, re-keyed and nudged, inserted just above the source.
    pub fn duplicate_object(&mut self, id: ObjectId) -> Option<ObjectId> {
        let slot = self.z_index(id)?;
        let mut copy = self.objects.get(&id)?.clone();
        copy.regenerate_id();
        copy.translate(Vec2::new(DUPLICATE_OFFSET, DUPLICATE_OFFSET));
        let copy_id = copy.id();
        self.objects.insert(copy_id, copy);
        self.z_order.insert(slot + 1, copy_id);
        Some(copy_id)
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
