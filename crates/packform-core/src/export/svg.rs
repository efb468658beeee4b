//! SVG markup generation.

use crate::document::DesignDocument;
use crate::objects::{CanvasObject, ImageFilter, PaintStyle};
use std::fmt::Write;

/// Render a document to standalone SVG markup.
///
/// Objects are emitted in draw order; invisible objects (and invisible
/// group children) are skipped.
pub fn document_to_svg(document: &DesignDocument) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt_num(document.width),
        h = fmt_num(document.height),
    );
    out.push('\n');
    for object in document.objects_ordered() {
        render_object(&mut out, object);
    }
    out.push_str("</svg>\n");
    out
}

fn render_object(out: &mut String, object: &CanvasObject) {
    let base = object.base();
    if !base.visible {
        return;
    }
    match object {
        CanvasObject::Rectangle(_) | CanvasObject::Ellipse(_) => {
            let path = object.to_path().to_svg();
            let _ = write!(out, r#"  <path d="{path}""#);
            write_paint(out, &base.paint);
            write_rotation(out, object);
            out.push_str(" />\n");
        }
        CanvasObject::Text(text) => {
            let t = &base.transform;
            // Anchor at the first baseline; displayed size follows scale_y.
            let x = t.position.x;
            let y = t.position.y + text.font_size * t.scale_y;
            let _ = write!(
                out,
                r#"  <text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}""#,
                fmt_num(x),
                fmt_num(y),
                text.font_family.name(),
                fmt_num(text.font_size * t.scale_y),
                text.font_weight.css_weight(),
            );
            write_paint(out, &base.paint);
            write_rotation(out, object);
            let _ = write!(out, ">{}</text>\n", escape_xml(&text.content));
        }
        CanvasObject::Image(image) => {
            let bounds = object.bounds();
            let _ = write!(
                out,
                r#"  <image x="{}" y="{}" width="{}" height="{}" href="{}" preserveAspectRatio="none""#,
                fmt_num(bounds.x0),
                fmt_num(bounds.y0),
                fmt_num(bounds.width()),
                fmt_num(bounds.height()),
                escape_xml(&image.source.href()),
            );
            if base.paint.opacity < 1.0 {
                let _ = write!(out, r#" opacity="{}""#, fmt_num(base.paint.opacity));
            }
            if !image.filters.is_empty() {
                let _ = write!(out, r#" style="filter: {}""#, css_filters(&image.filters));
            }
            write_rotation(out, object);
            out.push_str(" />\n");
        }
        CanvasObject::Group(group) => {
            let t = &base.transform;
            let _ = write!(
                out,
                r#"  <g transform="translate({} {}) scale({} {})""#,
                fmt_num(t.position.x),
                fmt_num(t.position.y),
                fmt_num(t.scale_x),
                fmt_num(t.scale_y),
            );
            if base.paint.opacity < 1.0 {
                let _ = write!(out, r#" opacity="{}""#, fmt_num(base.paint.opacity));
            }
            out.push_str(">\n");
            // Children are group-local; the <g> transform places them.
            for child in &group.children {
                render_object(out, child);
            }
            out.push_str("  </g>\n");
        }
    }
}

fn write_paint(out: &mut String, paint: &PaintStyle) {
    let _ = write!(out, r#" fill="{}""#, paint.fill.to_css_hex());
    let alpha = paint.effective_alpha();
    if alpha < 1.0 {
        let _ = write!(out, r#" fill-opacity="{}""#, fmt_num(alpha));
    }
    if let Some(stroke) = &paint.stroke {
        let _ = write!(
            out,
            r#" stroke="{}" stroke-width="{}""#,
            stroke.color.to_css_hex(),
            fmt_num(stroke.width),
        );
    }
    if let Some(shadow) = &paint.shadow {
        let _ = write!(
            out,
            r#" style="filter: drop-shadow({}px {}px {}px {})""#,
            fmt_num(shadow.offset_x),
            fmt_num(shadow.offset_y),
            fmt_num(shadow.blur),
            shadow.color.to_css_hex(),
        );
    }
}

fn write_rotation(out: &mut String, object: &CanvasObject) {
    let rotation = object.base().transform.rotation;
    if rotation.abs() < f64::EPSILON {
        return;
    }
    let center = object.bounds().center();
    let _ = write!(
        out,
        r#" transform="rotate({} {} {})""#,
        fmt_num(rotation.to_degrees()),
        fmt_num(center.x),
        fmt_num(center.y),
    );
}

fn css_filters(filters: &[ImageFilter]) -> String {
    filters
        .iter()
        .map(|f| match f {
            ImageFilter::Grayscale => "grayscale(1)".to_string(),
            ImageFilter::Sepia => "sepia(1)".to_string(),
            ImageFilter::Invert => "invert(1)".to_string(),
            ImageFilter::Brightness(b) => format!("brightness({})", fmt_num(1.0 + b)),
            ImageFilter::Contrast(c) => format!("contrast({})", fmt_num(1.0 + c)),
            ImageFilter::Blur(radius) => format!("blur({}px)", fmt_num(*radius)),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Trim trailing zeros so markup stays compact ("12" not "12.000000").
fn fmt_num(value: f64) -> String {
    if (value.fract()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        let s = format!("{value:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{
        CanvasObject, EllipseObject, ImageObject, ImageSource, RectangleObject, TextObject,
    };
    use kurbo::Point;

    #[test]
    fn svg_has_document_dimensions() {
        let doc = DesignDocument::with_size(640.0, 480.0);
        let svg = document_to_svg(&doc);
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"width="640""#));
        assert!(svg.contains(r#"height="480""#));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn shapes_emit_paths_with_fill() {
        let mut doc = DesignDocument::new();
        doc.add_object(CanvasObject::Rectangle(RectangleObject::new(
            Point::ZERO,
            100.0,
            50.0,
        )));
        doc.add_object(CanvasObject::Ellipse(EllipseObject::circle(
            Point::new(200.0, 0.0),
            25.0,
        )));

        let svg = document_to_svg(&doc);
        assert_eq!(svg.matches("<path ").count(), 2);
        assert!(svg.contains(r##"fill="#000000""##));
    }

    #[test]
    fn text_content_is_escaped() {
        let mut doc = DesignDocument::new();
        doc.add_object(CanvasObject::Text(TextObject::new(
            Point::ZERO,
            "Salt & Pepper <Mix>",
        )));

        let svg = document_to_svg(&doc);
        assert!(svg.contains("Salt &amp; Pepper &lt;Mix&gt;"));
        assert!(svg.contains(r#"font-family="Inter""#));
    }

    #[test]
    fn invisible_objects_are_skipped() {
        let mut doc = DesignDocument::new();
        let id = doc.add_object(CanvasObject::Rectangle(RectangleObject::new(
            Point::ZERO,
            10.0,
            10.0,
        )));
        doc.get_mut(id).unwrap().base_mut().visible = false;

        let svg = document_to_svg(&doc);
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn image_href_and_filters_are_emitted() {
        let mut doc = DesignDocument::new();
        let mut image = ImageObject::new(
            Point::ZERO,
            ImageSource::Url("https://cdn.example/flat.png".into()),
            400,
            300,
        );
        image.filters.push(ImageFilter::Grayscale);
        image.filters.push(ImageFilter::Blur(2.0));
        doc.add_object(CanvasObject::Image(image));

        let svg = document_to_svg(&doc);
        assert!(svg.contains(r#"href="https://cdn.example/flat.png""#));
        assert!(svg.contains("grayscale(1) blur(2px)"));
    }

    #[test]
    fn groups_emit_translate_scale_wrapper() {
        let mut doc = DesignDocument::new();
        let a = doc.add_object(CanvasObject::Rectangle(RectangleObject::new(
            Point::new(100.0, 50.0),
            10.0,
            10.0,
        )));
        let b = doc.add_object(CanvasObject::Rectangle(RectangleObject::new(
            Point::new(120.0, 60.0),
            10.0,
            10.0,
        )));
        doc.group_objects(&[a, b]).unwrap();

        let svg = document_to_svg(&doc);
        assert!(svg.contains(r#"<g transform="translate(100 50) scale(1 1)""#));
        assert_eq!(svg.matches("<path ").count(), 2);
    }
}
