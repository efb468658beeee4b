//! Property sheets: the typed boundary between panels and canvas objects.
//!
//! Panels never poke at object internals. They read a [`PropertySheet`]
//! snapshot of the active object, and write back through [`PropertyEdit`]
//! commands. Object-kind dispatch happens once, here, instead of being
//! scattered through every panel.

use crate::history::ActionKind;
use crate::objects::{
    CanvasObject, FontFamily, FontWeight, ImageFilter, ObjectId, ObjectKind, SerializableColor,
    Shadow, Stroke,
};

/// Geometry attributes common to all object kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryProps {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub rotation_deg: f64,
    pub flip_x: bool,
    pub flip_y: bool,
}

/// Paint attributes common to all object kinds.
#[derive(Debug, Clone, PartialEq)]
pub struct AppearanceProps {
    pub fill: SerializableColor,
    pub opacity: f64,
    pub stroke: Option<Stroke>,
    pub shadow: Option<Shadow>,
}

/// Kind-specific attribute bundle.
#[derive(Debug, Clone, PartialEq)]
pub enum KindProps {
    Text {
        content: String,
        font_family: FontFamily,
        font_size: f64,
        font_weight: FontWeight,
    },
    Image {
        href: String,
        filters: Vec<ImageFilter>,
    },
    Rectangle {
        corner_radius: f64,
    },
    Ellipse,
    Group {
        child_count: usize,
    },
}

/// Snapshot of an object's editable attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySheet {
    pub id: ObjectId,
    pub name: String,
    pub kind: ObjectKind,
    pub geometry: GeometryProps,
    pub appearance: AppearanceProps,
    pub props: KindProps,
    pub visible: bool,
    pub locked: bool,
}

impl PropertySheet {
    /// Read the current attribute values off an object.
    ///
    /// Paint fallbacks (black fill, opacity 1.0) are baked into
    /// `PaintStyle::default`, so a freshly created object already reads with
    /// panel defaults.
    pub fn read(object: &CanvasObject) -> Self {
        let base = object.base();
        let bounds = object.bounds();
        let geometry = GeometryProps {
            left: base.transform.position.x,
            top: base.transform.position.y,
            width: bounds.width(),
            height: bounds.height(),
            rotation_deg: base.transform.rotation.to_degrees(),
            flip_x: base.transform.flip_x,
            flip_y: base.transform.flip_y,
        };
        let appearance = AppearanceProps {
            fill: base.paint.fill,
            opacity: base.paint.opacity,
            stroke: base.paint.stroke,
            shadow: base.paint.shadow,
        };
        let props = match object {
            CanvasObject::Text(t) => KindProps::Text {
                content: t.content.clone(),
                font_family: t.font_family,
                font_size: t.font_size,
                font_weight: t.font_weight,
            },
            CanvasObject::Image(i) => KindProps::Image {
                href: i.source.href(),
                filters: i.filters.clone(),
            },
            CanvasObject::Rectangle(r) => KindProps::Rectangle {
                corner_radius: r.corner_radius,
            },
            CanvasObject::Ellipse(_) => KindProps::Ellipse,
            CanvasObject::Group(g) => KindProps::Group {
                child_count: g.child_count(),
            },
        };
        Self {
            id: base.id,
            name: base.name.clone(),
            kind: object.kind(),
            geometry,
            appearance,
            props,
            visible: base.visible,
            locked: base.locks.is_locked(),
        }
    }
}

/// A single field edit coming back from a panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyEdit {
    Name(String),
    Left(f64),
    Top(f64),
    /// Applied as a scale-factor change against the intrinsic width; with
    /// `keep_aspect` the Y scale follows so the aspect ratio is preserved.
    Width { value: f64, keep_aspect: bool },
    /// Symmetric to `Width`.
    Height { value: f64, keep_aspect: bool },
    RotationDeg(f64),
    FlipX(bool),
    FlipY(bool),
    Fill(SerializableColor),
    Opacity(f64),
    Stroke(Option<Stroke>),
    Shadow(Option<Shadow>),
    TextContent(String),
    FontFamily(FontFamily),
    FontSize(f64),
    FontWeight(FontWeight),
    ImageFilters(Vec<ImageFilter>),
    CornerRadius(f64),
}

impl PropertyEdit {
    /// History classification for this edit.
    pub fn action_kind(&self) -> ActionKind {
        match self {
            PropertyEdit::Left(_) | PropertyEdit::Top(_) => ActionKind::Move,
            PropertyEdit::Width { .. } | PropertyEdit::Height { .. } => ActionKind::Resize,
            PropertyEdit::RotationDeg(_) | PropertyEdit::FlipX(_) | PropertyEdit::FlipY(_) => {
                ActionKind::Rotate
            }
            PropertyEdit::TextContent(_) => ActionKind::EditText,
            _ => ActionKind::Restyle,
        }
    }

    /// History description for this edit.
    pub fn describe(&self) -> &'static str {
        match self {
            PropertyEdit::Name(_) => "Rename",
            PropertyEdit::Left(_) | PropertyEdit::Top(_) => "Move",
            PropertyEdit::Width { .. } | PropertyEdit::Height { .. } => "Resize",
            PropertyEdit::RotationDeg(_) => "Rotate",
            PropertyEdit::FlipX(_) | PropertyEdit::FlipY(_) => "Flip",
            PropertyEdit::Fill(_) => "Change fill",
            PropertyEdit::Opacity(_) => "Change opacity",
            PropertyEdit::Stroke(_) => "Change stroke",
            PropertyEdit::Shadow(_) => "Change shadow",
            PropertyEdit::TextContent(_) => "Edit text",
            PropertyEdit::FontFamily(_) => "Change font",
            PropertyEdit::FontSize(_) => "Change font size",
            PropertyEdit::FontWeight(_) => "Change font weight",
            PropertyEdit::ImageFilters(_) => "Change filters",
            PropertyEdit::CornerRadius(_) => "Change corner radius",
        }
    }
}

/// Write an edit back onto an object.
///
/// Returns `false` when the edit does not apply to this object kind (a font
/// edit on a rectangle, a corner radius on text); the object is untouched in
/// that case.
pub fn apply_edit(object: &mut CanvasObject, edit: &PropertyEdit) -> bool {
    match edit {
        PropertyEdit::Name(name) => {
            object.base_mut().name = name.clone();
        }
        PropertyEdit::Left(left) => {
            object.base_mut().transform.position.x = *left;
        }
        PropertyEdit::Top(top) => {
            object.base_mut().transform.position.y = *top;
        }
        PropertyEdit::Width { value, keep_aspect } => {
            let ratio = aspect_ratio(object);
            object.set_width(*value);
            if *keep_aspect {
                object.set_height(*value / ratio);
            }
        }
        PropertyEdit::Height { value, keep_aspect } => {
            let ratio = aspect_ratio(object);
            object.set_height(*value);
            if *keep_aspect {
                object.set_width(*value * ratio);
            }
        }
        PropertyEdit::RotationDeg(deg) => {
            object.base_mut().transform.rotation = deg.to_radians();
        }
        PropertyEdit::FlipX(flip) => {
            object.base_mut().transform.flip_x = *flip;
        }
        PropertyEdit::FlipY(flip) => {
            object.base_mut().transform.flip_y = *flip;
        }
        PropertyEdit::Fill(fill) => {
            object.base_mut().paint.fill = *fill;
        }
        PropertyEdit::Opacity(opacity) => {
            object.base_mut().paint.opacity = opacity.clamp(0.0, 1.0);
        }
        PropertyEdit::Stroke(stroke) => {
            object.base_mut().paint.stroke = *stroke;
        }
        PropertyEdit::Shadow(shadow) => {
            object.base_mut().paint.shadow = *shadow;
        }
        PropertyEdit::TextContent(content) => {
            let CanvasObject::Text(text) = object else {
                return false;
            };
            text.set_content(content.clone());
        }
        PropertyEdit::FontFamily(family) => {
            let CanvasObject::Text(text) = object else {
                return false;
            };
            text.font_family = *family;
        }
        PropertyEdit::FontSize(size) => {
            let CanvasObject::Text(text) = object else {
                return false;
            };
            text.font_size = *size;
        }
        PropertyEdit::FontWeight(weight) => {
            let CanvasObject::Text(text) = object else {
                return false;
            };
            text.font_weight = *weight;
        }
        PropertyEdit::ImageFilters(filters) => {
            let CanvasObject::Image(image) = object else {
                return false;
            };
            image.filters = filters.clone();
        }
        PropertyEdit::CornerRadius(radius) => {
            let CanvasObject::Rectangle(rect) = object else {
                return false;
            };
            rect.corner_radius = radius.max(0.0);
        }
    }
    true
}

/// Displayed width over height, defaulting to 1.0 for degenerate sizes.
fn aspect_ratio(object: &CanvasObject) -> f64 {
    let width = object.width();
    let height = object.height();
    if width > f64::EPSILON && height > f64::EPSILON {
        width / height
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{RectangleObject, TextObject};
    use kurbo::Point;

    #[test]
    fn sheet_reads_panel_defaults_for_new_objects() {
        let object = CanvasObject::Rectangle(RectangleObject::new(Point::ZERO, 100.0, 50.0));
        let sheet = PropertySheet::read(&object);

        assert_eq!(sheet.appearance.fill, SerializableColor::black());
        assert!((sheet.appearance.opacity - 1.0).abs() < f64::EPSILON);
        assert!(sheet.appearance.stroke.is_none());
        assert!(sheet.visible);
        assert!(!sheet.locked);
        assert_eq!(sheet.kind, ObjectKind::Rectangle);
        assert!((sheet.geometry.width - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn width_edit_becomes_scale_factor() {
        let mut object = CanvasObject::Rectangle(RectangleObject::new(Point::ZERO, 200.0, 100.0));
        assert!(apply_edit(
            &mut object,
            &PropertyEdit::Width {
                value: 300.0,
                keep_aspect: false,
            }
        ));
        assert!((object.base().transform.scale_x - 1.5).abs() < f64::EPSILON);
        // Height untouched without the aspect lock.
        assert!((object.height() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn aspect_lock_couples_both_axes() {
        let mut object = CanvasObject::Rectangle(RectangleObject::new(Point::ZERO, 200.0, 100.0));
        assert!(apply_edit(
            &mut object,
            &PropertyEdit::Width {
                value: 400.0,
                keep_aspect: true,
            }
        ));
        assert!((object.width() - 400.0).abs() < 1e-9);
        assert!((object.height() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn kind_specific_edit_on_wrong_kind_is_rejected() {
        let mut object = CanvasObject::Rectangle(RectangleObject::new(Point::ZERO, 10.0, 10.0));
        assert!(!apply_edit(&mut object, &PropertyEdit::FontSize(32.0)));

        let mut text = CanvasObject::Text(TextObject::new(Point::ZERO, "hi"));
        assert!(!apply_edit(&mut text, &PropertyEdit::CornerRadius(4.0)));
    }

    #[test]
    fn font_edits_apply_to_text() {
        let mut object = CanvasObject::Text(TextObject::new(Point::ZERO, "Label"));
        assert!(apply_edit(&mut object, &PropertyEdit::FontSize(32.0)));
        assert!(apply_edit(
            &mut object,
            &PropertyEdit::FontWeight(FontWeight::Bold)
        ));

        let CanvasObject::Text(text) = &object else {
            unreachable!();
        };
        assert!((text.font_size - 32.0).abs() < f64::EPSILON);
        assert_eq!(text.font_weight, FontWeight::Bold);
    }

    #[test]
    fn opacity_is_clamped() {
        let mut object = CanvasObject::Rectangle(RectangleObject::new(Point::ZERO, 10.0, 10.0));
        apply_edit(&mut object, &PropertyEdit::Opacity(4.0));
        assert!((object.base().paint.opacity - 1.0).abs() < f64::EPSILON);
        apply_edit(&mut object, &PropertyEdit::Opacity(-1.0));
        assert!(object.base().paint.opacity.abs() < f64::EPSILON);
    }

    #[test]
    fn edits_classify_into_action_kinds() {
        assert_eq!(PropertyEdit::Left(1.0).action_kind(), ActionKind::Move);
        assert_eq!(
            PropertyEdit::Width {
                value: 1.0,
                keep_aspect: false
            }
            .action_kind(),
            ActionKind::Resize
        );
        assert_eq!(
            PropertyEdit::Fill(SerializableColor::white()).action_kind(),
            ActionKind::Restyle
        );
        assert_eq!(
            PropertyEdit::TextContent("x".into()).action_kind(),
            ActionKind::EditText
        );
    }
}
