//! Image object for artwork, logos and dieline reference images.

use super::ObjectBase;
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Raster format of an embedded image payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    Png,
    Jpeg,
    WebP,
}

impl ImageFormat {
    /// MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::WebP => "image/webp",
        }
    }

    /// Detect format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "webp" => Some(ImageFormat::WebP),
            _ => None,
        }
    }

    /// Detect format from magic bytes.
    pub fn from_magic_bytes(data: &[u8]) -> Option<Self> {
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            Some(ImageFormat::Png)
        } else if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(ImageFormat::Jpeg)
        } else if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
            Some(ImageFormat::WebP)
        } else {
            None
        }
    }
}

/// Where the pixels come from.
///
/// Template artwork (flat renders, dielines) is referenced by URL; user
/// uploads are embedded as base64 so documents stay self-sufficient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ImageSource {
    Url(String),
    Embedded {
        format: ImageFormat,
        data_base64: String,
    },
}

impl ImageSource {
    /// `href` value usable in exported markup: the URL itself, or a data URI.
    pub fn href(&self) -> String {
        match self {
            ImageSource::Url(url) => url.clone(),
            ImageSource::Embedded {
                format,
                data_base64,
            } => format!("data:{};base64,{}", format.mime_type(), data_base64),
        }
    }

    /// Decoded bytes for embedded payloads; `None` for URL sources.
    pub fn data(&self) -> Option<Vec<u8>> {
        use base64::{Engine, engine::general_purpose::STANDARD};
        match self {
            ImageSource::Url(_) => None,
            ImageSource::Embedded { data_base64, .. } => STANDARD.decode(data_base64).ok(),
        }
    }
}

/// Non-destructive filters applied at render time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ImageFilter {
    Grayscale,
    Sepia,
    Invert,
    /// -1.0..=1.0, 0 = unchanged.
    Brightness(f64),
    /// -1.0..=1.0, 0 = unchanged.
    Contrast(f64),
    /// Blur radius in canvas units.
    Blur(f64),
}

/// An image object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageObject {
    pub base: ObjectBase,
    pub source: ImageSource,
    /// Original pixel width; the intrinsic width of the object.
    pub natural_width: u32,
    /// Original pixel height; the intrinsic height of the object.
    pub natural_height: u32,
    #[serde(default)]
    pub filters: Vec<ImageFilter>,
}

impl ImageObject {
    pub fn new(position: Point, source: ImageSource, natural_width: u32, natural_height: u32) -> Self {
        Self {
            base: ObjectBase::new("Image", position),
            source,
            natural_width,
            natural_height,
            filters: Vec::new(),
        }
    }

    /// Embed raw bytes, detecting the format from magic bytes.
    ///
    /// Returns `None` when the payload is not a supported raster format.
    pub fn from_bytes(
        position: Point,
        data: &[u8],
        natural_width: u32,
        natural_height: u32,
    ) -> Option<Self> {
        use base64::{Engine, engine::general_purpose::STANDARD};
        let format = ImageFormat::from_magic_bytes(data)?;
        Some(Self::new(
            position,
            ImageSource::Embedded {
                format,
                data_base64: STANDARD.encode(data),
            },
            natural_width,
            natural_height,
        ))
    }

    pub fn intrinsic_size(&self) -> Size {
        Size::new(self.natural_width as f64, self.natural_height as f64)
    }

    /// Adjust scale factors so the displayed image fits inside a box while
    /// preserving aspect ratio.
    pub fn fit_within(&mut self, max_width: f64, max_height: f64) {
        if self.natural_width == 0 || self.natural_height == 0 {
            return;
        }
        let scale = (max_width / self.natural_width as f64)
            .min(max_height / self.natural_height as f64);
        self.base.transform.scale_x = scale;
        self.base.transform.scale_y = scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_detection_from_extension() {
        assert_eq!(ImageFormat::from_extension("PNG"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_extension("jpeg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("webp"), Some(ImageFormat::WebP));
        assert_eq!(ImageFormat::from_extension("gif"), None);
    }

    #[test]
    fn format_detection_from_magic_bytes() {
        assert_eq!(
            ImageFormat::from_magic_bytes(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A]),
            Some(ImageFormat::Png)
        );
        assert_eq!(
            ImageFormat::from_magic_bytes(&[0xFF, 0xD8, 0xFF, 0xE0]),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(ImageFormat::from_magic_bytes(&[0x00, 0x01]), None);
    }

    #[test]
    fn embedded_source_round_trips_bytes() {
        let bytes = [0x89, 0x50, 0x4E, 0x47, 0x01, 0x02, 0x03];
        let image = ImageObject::from_bytes(Point::ZERO, &bytes, 4, 4).unwrap();
        assert_eq!(image.source.data().unwrap(), bytes);
        assert!(image.source.href().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn url_source_has_no_payload() {
        let source = ImageSource::Url("https://cdn.example/dieline.png".into());
        assert!(source.data().is_none());
        assert_eq!(source.href(), "https://cdn.example/dieline.png");
    }

    #[test]
    fn fit_within_preserves_aspect_ratio() {
        let mut image = ImageObject::new(
            Point::ZERO,
            ImageSource::Url("x".into()),
            1000,
            500,
        );
        image.fit_within(400.0, 400.0);
        // 2:1 source into a square box fits to width.
        assert!((image.base.transform.scale_x - 0.4).abs() < 1e-9);
        assert!((image.base.transform.scale_y - 0.4).abs() < 1e-9);
    }
}
