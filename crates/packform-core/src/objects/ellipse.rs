//! Ellipse object.

use super::ObjectBase;
use kurbo::{BezPath, Point, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// An ellipse. Position is the top-left of its bounding box so the transform
/// model matches every other object kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EllipseObject {
    pub base: ObjectBase,
    /// Intrinsic horizontal radius.
    pub radius_x: f64,
    /// Intrinsic vertical radius.
    pub radius_y: f64,
}

impl EllipseObject {
    pub fn new(position: Point, radius_x: f64, radius_y: f64) -> Self {
        Self {
            base: ObjectBase::new("Ellipse", position),
            radius_x,
            radius_y,
        }
    }

    pub fn circle(position: Point, radius: f64) -> Self {
        Self::new(position, radius, radius)
    }

    /// Center in canvas coordinates.
    pub fn center(&self) -> Point {
        let t = &self.base.transform;
        Point::new(
            t.position.x + self.radius_x * t.scale_x,
            t.position.y + self.radius_y * t.scale_y,
        )
    }

    /// Check a point against the scaled ellipse equation.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        if !self.base.visible {
            return false;
        }
        let t = &self.base.transform;
        let center = self.center();
        let rx = self.radius_x * t.scale_x + tolerance;
        let ry = self.radius_y * t.scale_y + tolerance;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let dx = (point.x - center.x) / rx;
        let dy = (point.y - center.y) / ry;
        dx * dx + dy * dy <= 1.0
    }

    /// Path in canvas coordinates.
    pub fn to_path(&self) -> BezPath {
        let t = &self.base.transform;
        kurbo::Ellipse::new(
            self.center(),
            (self.radius_x * t.scale_x, self.radius_y * t.scale_y),
            0.0,
        )
        .to_path(0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_offset_by_radii() {
        let ellipse = EllipseObject::new(Point::new(10.0, 20.0), 30.0, 40.0);
        let center = ellipse.center();
        assert!((center.x - 40.0).abs() < f64::EPSILON);
        assert!((center.y - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn hit_test_uses_ellipse_equation_not_bounds() {
        let ellipse = EllipseObject::new(Point::ZERO, 50.0, 25.0);
        // Center hits.
        assert!(ellipse.hit_test(Point::new(50.0, 25.0), 0.0));
        // Bounding-box corner misses.
        assert!(!ellipse.hit_test(Point::new(2.0, 2.0), 0.0));
    }

    #[test]
    fn scaled_ellipse_hits_in_scaled_area() {
        let mut ellipse = EllipseObject::circle(Point::ZERO, 10.0);
        ellipse.base.transform.scale_x = 3.0;
        // Past the unscaled radius on X, inside the scaled one.
        assert!(ellipse.hit_test(Point::new(25.0, 10.0), 0.0));
    }
}
