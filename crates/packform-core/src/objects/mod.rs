//! Canvas object definitions for packaging designs.

mod ellipse;
mod group;
mod image;
mod rectangle;
mod text;

pub use ellipse::EllipseObject;
pub use group::GroupObject;
pub use image::{ImageFilter, ImageFormat, ImageObject, ImageSource};
pub use rectangle::RectangleObject;
pub use text::{FontFamily, FontWeight, TextObject};

use kurbo::{Affine, BezPath, Point, Rect, Size, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for canvas objects.
pub type ObjectId = Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// CSS hex form (`#rrggbb`), alpha excluded.
    pub fn to_css_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha channel as a 0.0..=1.0 fraction.
    pub fn alpha_fraction(&self) -> f64 {
        self.a as f64 / 255.0
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Stroke applied around an object's outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: SerializableColor,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: SerializableColor, width: f64) -> Self {
        Self { color, width }
    }
}

/// Drop shadow effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub color: SerializableColor,
    pub blur: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Paint attributes shared by all object kinds.
///
/// Fallback defaults match the panel defaults: fill is black, opacity 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintStyle {
    /// Fill color.
    pub fill: SerializableColor,
    /// Overall opacity (0.0 = fully transparent, 1.0 = fully opaque).
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// Optional outline stroke.
    #[serde(default)]
    pub stroke: Option<Stroke>,
    /// Optional drop shadow.
    #[serde(default)]
    pub shadow: Option<Shadow>,
}

fn default_opacity() -> f64 {
    1.0
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self {
            fill: SerializableColor::black(),
            opacity: 1.0,
            stroke: None,
            shadow: None,
        }
    }
}

impl PaintStyle {
    /// Get the fill as a peniko Color.
    pub fn fill_color(&self) -> Color {
        self.fill.into()
    }

    /// Set the fill from a peniko Color.
    pub fn set_fill_color(&mut self, color: Color) {
        self.fill = color.into();
    }

    /// Combined alpha of the fill channel and the object opacity.
    pub fn effective_alpha(&self) -> f64 {
        (self.fill.alpha_fraction() * self.opacity).clamp(0.0, 1.0)
    }
}

/// Geometric transform of an object.
///
/// `position` is the top-left corner of the untransformed bounding box;
/// displayed size is intrinsic size times the scale factors. Width/height
/// edits go through the scale factors, never through intrinsic dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    pub position: Point,
    #[serde(default = "default_scale")]
    pub scale_x: f64,
    #[serde(default = "default_scale")]
    pub scale_y: f64,
    /// Rotation angle in radians (around center).
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub flip_x: bool,
    #[serde(default)]
    pub flip_y: bool,
}

fn default_scale() -> f64 {
    1.0
}

impl Transform2D {
    pub fn at(position: Point) -> Self {
        Self {
            position,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
            flip_x: false,
            flip_y: false,
        }
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::at(Point::ZERO)
    }
}

/// Lock flags for an object.
///
/// Locking disables movement, rotation and both-axis scaling as a group and
/// removes the object from normal hit-selection while it stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockState {
    #[serde(default)]
    pub lock_movement_x: bool,
    #[serde(default)]
    pub lock_movement_y: bool,
    #[serde(default)]
    pub lock_rotation: bool,
    #[serde(default)]
    pub lock_scaling_x: bool,
    #[serde(default)]
    pub lock_scaling_y: bool,
    #[serde(default = "default_selectable")]
    pub selectable: bool,
}

fn default_selectable() -> bool {
    true
}

impl Default for LockState {
    fn default() -> Self {
        Self {
            lock_movement_x: false,
            lock_movement_y: false,
            lock_rotation: false,
            lock_scaling_x: false,
            lock_scaling_y: false,
            selectable: true,
        }
    }
}

impl LockState {
    /// Set all five lock flags and clear `selectable`.
    pub fn lock(&mut self) {
        self.lock_movement_x = true;
        self.lock_movement_y = true;
        self.lock_rotation = true;
        self.lock_scaling_x = true;
        self.lock_scaling_y = true;
        self.selectable = false;
    }

    /// Clear all five lock flags and restore `selectable`.
    pub fn unlock(&mut self) {
        self.lock_movement_x = false;
        self.lock_movement_y = false;
        self.lock_rotation = false;
        self.lock_scaling_x = false;
        self.lock_scaling_y = false;
        self.selectable = true;
    }

    /// An object counts as locked when all five lock flags are set.
    pub fn is_locked(&self) -> bool {
        self.lock_movement_x
            && self.lock_movement_y
            && self.lock_rotation
            && self.lock_scaling_x
            && self.lock_scaling_y
    }
}

/// Attributes common to every object kind.
///
/// `id`, `name` and the lock flags are persistent custom fields: they must
/// survive every serialize/deserialize round trip, including history
/// snapshots, or undo would silently drop them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectBase {
    pub id: ObjectId,
    pub name: String,
    pub transform: Transform2D,
    pub paint: PaintStyle,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub locks: LockState,
}

fn default_visible() -> bool {
    true
}

impl ObjectBase {
    pub fn new(name: impl Into<String>, position: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            transform: Transform2D::at(position),
            paint: PaintStyle::default(),
            visible: true,
            locks: LockState::default(),
        }
    }

    pub fn position(&self) -> Point {
        self.transform.position
    }
}

/// Discriminant for the object kinds, used for panel dispatch and layer rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    Text,
    Image,
    Rectangle,
    Ellipse,
    Group,
}

impl ObjectKind {
    pub fn label(&self) -> &'static str {
        match self {
            ObjectKind::Text => "Text",
            ObjectKind::Image => "Image",
            ObjectKind::Rectangle => "Rectangle",
            ObjectKind::Ellipse => "Ellipse",
            ObjectKind::Group => "Group",
        }
    }
}

/// Enum wrapper for all object types (for serialization and dispatch).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CanvasObject {
    Text(TextObject),
    Image(ImageObject),
    Rectangle(RectangleObject),
    Ellipse(EllipseObject),
    Group(GroupObject),
}

impl CanvasObject {
    /// Shared attributes of the object.
    pub fn base(&self) -> &ObjectBase {
        match self {
            CanvasObject::Text(o) => &o.base,
            CanvasObject::Image(o) => &o.base,
            CanvasObject::Rectangle(o) => &o.base,
            CanvasObject::Ellipse(o) => &o.base,
            CanvasObject::Group(o) => &o.base,
        }
    }

    /// Mutable shared attributes of the object.
    pub fn base_mut(&mut self) -> &mut ObjectBase {
        match self {
            CanvasObject::Text(o) => &mut o.base,
            CanvasObject::Image(o) => &mut o.base,
            CanvasObject::Rectangle(o) => &mut o.base,
            CanvasObject::Ellipse(o) => &mut o.base,
            CanvasObject::Group(o) => &mut o.base,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.base().id
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            CanvasObject::Text(_) => ObjectKind::Text,
            CanvasObject::Image(_) => ObjectKind::Image,
            CanvasObject::Rectangle(_) => ObjectKind::Rectangle,
            CanvasObject::Ellipse(_) => ObjectKind::Ellipse,
            CanvasObject::Group(_) => ObjectKind::Group,
        }
    }

    /// Untransformed size of the object.
    pub fn intrinsic_size(&self) -> Size {
        match self {
            CanvasObject::Text(o) => o.intrinsic_size(),
            CanvasObject::Image(o) => o.intrinsic_size(),
            CanvasObject::Rectangle(o) => Size::new(o.width, o.height),
            CanvasObject::Ellipse(o) => Size::new(o.radius_x * 2.0, o.radius_y * 2.0),
            CanvasObject::Group(o) => o.local_bounds().size(),
        }
    }

    /// Displayed width (intrinsic width times the X scale factor).
    pub fn width(&self) -> f64 {
        self.intrinsic_size().width * self.base().transform.scale_x
    }

    /// Displayed height (intrinsic height times the Y scale factor).
    pub fn height(&self) -> f64 {
        self.intrinsic_size().height * self.base().transform.scale_y
    }

    /// Resize by adjusting the X scale factor, never the intrinsic width.
    pub fn set_width(&mut self, desired: f64) {
        let intrinsic = self.intrinsic_size().width;
        if intrinsic > f64::EPSILON && desired > 0.0 {
            self.base_mut().transform.scale_x = desired / intrinsic;
        }
    }

    /// Resize by adjusting the Y scale factor, never the intrinsic height.
    pub fn set_height(&mut self, desired: f64) {
        let intrinsic = self.intrinsic_size().height;
        if intrinsic > f64::EPSILON && desired > 0.0 {
            self.base_mut().transform.scale_y = desired / intrinsic;
        }
    }

    /// Axis-aligned bounding box in canvas coordinates.
    ///
    /// Scale factors are applied; rotation is not folded into the box.
    pub fn bounds(&self) -> Rect {
        if let CanvasObject::Group(g) = self {
            return g.bounds();
        }
        let t = &self.base().transform;
        let size = self.intrinsic_size();
        Rect::new(
            t.position.x,
            t.position.y,
            t.position.x + size.width * t.scale_x,
            t.position.y + size.height * t.scale_y,
        )
    }

    /// Check if a canvas-space point hits this object.
    ///
    /// Invisible objects never hit; lock flags are a selection concern and
    /// are evaluated by the caller.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        if !self.base().visible {
            return false;
        }
        match self {
            CanvasObject::Ellipse(o) => o.hit_test(point, tolerance),
            CanvasObject::Group(o) => o.hit_test(point, tolerance),
            _ => self.bounds().inflate(tolerance, tolerance).contains(point),
        }
    }

    /// Path representation in canvas coordinates, used for export.
    pub fn to_path(&self) -> BezPath {
        match self {
            CanvasObject::Rectangle(o) => o.to_path(),
            CanvasObject::Ellipse(o) => o.to_path(),
            CanvasObject::Group(o) => o.to_path(),
            // Text and images contribute their bounding box.
            _ => bounds_path(self.bounds()),
        }
    }

    /// Move the object by a canvas-space delta.
    pub fn translate(&mut self, delta: Vec2) {
        let position = &mut self.base_mut().transform.position;
        *position += delta;
    }

    /// Re-key the object (and any nested children) with fresh identifiers.
    ///
    /// Used when duplicating or pasting so copies never collide.
    pub fn regenerate_id(&mut self) {
        self.base_mut().id = Uuid::new_v4();
        if let CanvasObject::Group(g) = self {
            for child in &mut g.children {
                child.regenerate_id();
            }
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, CanvasObject::Group(_))
    }

    pub fn as_group(&self) -> Option<&GroupObject> {
        match self {
            CanvasObject::Group(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut GroupObject> {
        match self {
            CanvasObject::Group(g) => Some(g),
            _ => None,
        }
    }
}

/// Rectangular outline path for a bounding box.
pub(crate) fn bounds_path(bounds: Rect) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(Point::new(bounds.x0, bounds.y0));
    path.line_to(Point::new(bounds.x1, bounds.y0));
    path.line_to(Point::new(bounds.x1, bounds.y1));
    path.line_to(Point::new(bounds.x0, bounds.y1));
    path.close_path();
    path
}

/// Affine mapping group-local coordinates into canvas coordinates.
pub(crate) fn group_to_canvas(transform: &Transform2D) -> Affine {
    Affine::translate(transform.position.to_vec2())
        * Affine::scale_non_uniform(transform.scale_x, transform.scale_y)
}
