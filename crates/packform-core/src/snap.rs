//! Grid and guide snapping for object placement.

use kurbo::Point;

/// Default grid cell size in canvas units.
pub const DEFAULT_GRID_SIZE: f64 = 20.0;

/// Default snap tolerance in canvas units.
pub const DEFAULT_SNAP_TOLERANCE: f64 = 5.0;

/// Result of a snap attempt.
#[derive(Debug, Clone, Copy)]
pub struct SnapResult {
    pub point: Point,
    pub snapped_x: bool,
    pub snapped_y: bool,
}

impl SnapResult {
    pub fn none(point: Point) -> Self {
        Self {
            point,
            snapped_x: false,
            snapped_y: false,
        }
    }

    pub fn is_snapped(&self) -> bool {
        self.snapped_x || self.snapped_y
    }
}

/// Snap a single value to the nearest grid line.
pub fn snap_value(value: f64, grid_size: f64) -> f64 {
    if grid_size <= 0.0 {
        return value;
    }
    (value / grid_size).round() * grid_size
}

/// Snap a point to the nearest grid intersection.
pub fn snap_to_grid(point: Point, grid_size: f64) -> Point {
    Point::new(snap_value(point.x, grid_size), snap_value(point.y, grid_size))
}

/// Snap a point against guide lines, per axis, within a tolerance.
///
/// The nearest guide on each axis wins; axes farther than `tolerance` from
/// every guide are left alone.
pub fn snap_point(
    point: Point,
    guides_x: &[f64],
    guides_y: &[f64],
    tolerance: f64,
) -> SnapResult {
    let mut result = SnapResult::none(point);

    if let Some(&x) = nearest_within(point.x, guides_x, tolerance) {
        result.point.x = x;
        result.snapped_x = true;
    }
    if let Some(&y) = nearest_within(point.y, guides_y, tolerance) {
        result.point.y = y;
        result.snapped_y = true;
    }
    result
}

fn nearest_within<'a>(value: f64, guides: &'a [f64], tolerance: f64) -> Option<&'a f64> {
    guides
        .iter()
        .filter(|&&g| (g - value).abs() <= tolerance)
        .min_by(|a, b| (*a - value).abs().total_cmp(&(*b - value).abs()))
}
