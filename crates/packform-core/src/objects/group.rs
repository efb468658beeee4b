//! Group object for manipulating several objects as one unit.

use super::{CanvasObject, ObjectBase, ObjectId, group_to_canvas};
use kurbo::{BezPath, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A compound object whose children live in group-local coordinates.
///
/// The group's position is the canvas-space origin of that local frame:
/// a child at local (10, 10) inside a group at (100, 50) sits at canvas
/// (110, 60). Ungrouping applies exactly that translation (plus any group
/// scale) to every child. Groups may nest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupObject {
    pub base: ObjectBase,
    /// Child objects, positions relative to the group origin, in draw order.
    pub children: Vec<CanvasObject>,
}

impl GroupObject {
    /// Build a group from objects in canvas coordinates.
    ///
    /// The group origin becomes the top-left of the combined bounds and each
    /// child's position is rebased to group-local coordinates, so grouping
    /// then ungrouping is position-exact.
    pub fn group(objects: Vec<CanvasObject>) -> Self {
        let origin = objects
            .iter()
            .map(|o| o.bounds())
            .reduce(|a, b| a.union(b))
            .map(|r| r.origin())
            .unwrap_or(Point::ZERO);

        let mut children = objects;
        for child in &mut children {
            child.translate(Vec2::new(-origin.x, -origin.y));
        }

        Self {
            base: ObjectBase::new("Group", origin),
            children,
        }
    }

    /// Dissolve the group, returning children in canvas coordinates.
    ///
    /// Each child's canvas position is the group position plus its local
    /// position; non-unit group scale is folded into the children first.
    /// Group rotation is intentionally not folded (rotation stays a
    /// render-time concern, matching `bounds`).
    pub fn ungroup(self) -> Vec<CanvasObject> {
        let t = self.base.transform;
        let mut children = self.children;
        for child in &mut children {
            if (t.scale_x - 1.0).abs() > f64::EPSILON || (t.scale_y - 1.0).abs() > f64::EPSILON {
                let ct = &mut child.base_mut().transform;
                ct.position = Point::new(ct.position.x * t.scale_x, ct.position.y * t.scale_y);
                ct.scale_x *= t.scale_x;
                ct.scale_y *= t.scale_y;
            }
            child.translate(t.position.to_vec2());
        }
        children
    }

    /// Combined bounds of the children in group-local coordinates.
    pub fn local_bounds(&self) -> Rect {
        self.children
            .iter()
            .map(|c| c.bounds())
            .reduce(|a, b| a.union(b))
            .unwrap_or(Rect::ZERO)
    }

    /// Bounds in canvas coordinates.
    pub fn bounds(&self) -> Rect {
        let t = &self.base.transform;
        let local = self.local_bounds();
        Rect::new(
            t.position.x + local.x0 * t.scale_x,
            t.position.y + local.y0 * t.scale_y,
            t.position.x + local.x1 * t.scale_x,
            t.position.y + local.y1 * t.scale_y,
        )
    }

    /// Hit when any child is hit, in canvas coordinates.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        if !self.base.visible {
            return false;
        }
        let t = &self.base.transform;
        if t.scale_x.abs() < f64::EPSILON || t.scale_y.abs() < f64::EPSILON {
            return false;
        }
        let local = Point::new(
            (point.x - t.position.x) / t.scale_x,
            (point.y - t.position.y) / t.scale_y,
        );
        self.children
            .iter()
            .any(|child| child.hit_test(local, tolerance))
    }

    /// Combined child paths mapped into canvas coordinates.
    pub fn to_path(&self) -> BezPath {
        let affine = group_to_canvas(&self.base.transform);
        let mut path = BezPath::new();
        for child in &self.children {
            let mut child_path = child.to_path();
            child_path.apply_affine(affine);
            path.extend(child_path);
        }
        path
    }

    /// All object IDs in this group, nested groups included.
    pub fn all_ids(&self) -> Vec<ObjectId> {
        let mut ids = vec![self.base.id];
        for child in &self.children {
            if let CanvasObject::Group(group) = child {
                ids.extend(group.all_ids());
            } else {
                ids.push(child.id());
            }
        }
        ids
    }

    /// Find a child by ID, descending into nested groups.
    pub fn find_child(&self, id: ObjectId) -> Option<&CanvasObject> {
        for child in &self.children {
            if child.id() == id {
                return Some(child);
            }
            if let CanvasObject::Group(group) = child {
                if let Some(found) = group.find_child(id) {
                    return Some(found);
                }
            }
        }
        None
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}
