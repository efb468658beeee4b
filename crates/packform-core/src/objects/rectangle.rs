//! Rectangle object, the workhorse shape for panels and label backgrounds.

use super::ObjectBase;
use kurbo::{BezPath, Point, Rect, RoundedRect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// A rectangle with optional rounded corners.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RectangleObject {
    pub base: ObjectBase,
    /// Intrinsic width (before scale factors).
    pub width: f64,
    /// Intrinsic height (before scale factors).
    pub height: f64,
    /// Corner radius in intrinsic units (0 = sharp corners).
    #[serde(default)]
    pub corner_radius: f64,
}

impl RectangleObject {
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            base: ObjectBase::new("Rectangle", position),
            width,
            height,
            corner_radius: 0.0,
        }
    }

    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// The displayed rectangle in canvas coordinates.
    pub fn display_rect(&self) -> Rect {
        let t = &self.base.transform;
        Rect::new(
            t.position.x,
            t.position.y,
            t.position.x + self.width * t.scale_x,
            t.position.y + self.height * t.scale_y,
        )
    }

    /// Path in canvas coordinates.
    pub fn to_path(&self) -> BezPath {
        let rect = self.display_rect();
        if self.corner_radius > 0.0 {
            let t = &self.base.transform;
            let radius = self.corner_radius * t.scale_x.min(t.scale_y);
            RoundedRect::from_rect(rect, radius).to_path(0.1)
        } else {
            rect.to_path(0.1)
        }
    }
}
