//! Design export with per-format branching.
//!
//! JSON is the document's own serialization; SVG is generated vector markup.
//! Raster output is a renderer concern and is not produced here.

mod svg;

pub use svg::document_to_svg;

use crate::document::DesignDocument;
use thiserror::Error;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Svg,
}

impl ExportFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Svg => "image/svg+xml",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Svg => "svg",
        }
    }
}

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Export a document in the requested format.
pub fn export_document(
    document: &DesignDocument,
    format: ExportFormat,
) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Json => Ok(document.to_json()?.into_bytes()),
        ExportFormat::Svg => Ok(document_to_svg(document).into_bytes()),
    }
}
