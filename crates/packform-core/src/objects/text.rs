//! Text object.

use super::ObjectBase;
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Font family options offered by the text panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontFamily {
    /// Clean sans-serif (default).
    #[default]
    Inter,
    /// Display sans-serif for headlines.
    Montserrat,
    /// Serif for premium labels.
    PlayfairDisplay,
    /// Monospace for ingredient/batch text.
    RobotoMono,
}

impl FontFamily {
    /// Font family name as used in exported markup.
    pub fn name(&self) -> &'static str {
        match self {
            FontFamily::Inter => "Inter",
            FontFamily::Montserrat => "Montserrat",
            FontFamily::PlayfairDisplay => "Playfair Display",
            FontFamily::RobotoMono => "Roboto Mono",
        }
    }

    /// All available font families.
    pub fn all() -> &'static [FontFamily] {
        &[
            FontFamily::Inter,
            FontFamily::Montserrat,
            FontFamily::PlayfairDisplay,
            FontFamily::RobotoMono,
        ]
    }
}

/// Font weight options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Bold,
}

impl FontWeight {
    /// Numeric CSS weight.
    pub fn css_weight(&self) -> u16 {
        match self {
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Bold => 700,
        }
    }

    /// All available font weights.
    pub fn all() -> &'static [FontWeight] {
        &[
            FontWeight::Light,
            FontWeight::Regular,
            FontWeight::Medium,
            FontWeight::Bold,
        ]
    }
}

/// A text object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextObject {
    pub base: ObjectBase,
    /// The text content. May contain newlines.
    pub content: String,
    /// Font size in canvas units.
    pub font_size: f64,
    #[serde(default)]
    pub font_family: FontFamily,
    #[serde(default)]
    pub font_weight: FontWeight,
}

impl TextObject {
    /// Default font size for newly added text.
    pub const DEFAULT_FONT_SIZE: f64 = 16.0;

    /// Line height as a multiple of the font size.
    const LINE_HEIGHT: f64 = 1.2;

    /// Create a new text object at the given position.
    pub fn new(position: Point, content: impl Into<String>) -> Self {
        Self {
            base: ObjectBase::new("Text", position),
            content: content.into(),
            font_size: Self::DEFAULT_FONT_SIZE,
            font_family: FontFamily::default(),
            font_weight: FontWeight::default(),
        }
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_font_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Approximate untransformed size.
    ///
    /// Accurate layout belongs to the delegated renderer; this estimate from
    /// character counts is good enough for bounds, hit tests and export.
    pub fn intrinsic_size(&self) -> Size {
        let longest_line = self
            .content
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        // Empirical average character width per family; heavier weights run
        // slightly wider.
        let char_factor = match self.font_family {
            FontFamily::Inter => 0.52,
            FontFamily::Montserrat => 0.58,
            FontFamily::PlayfairDisplay => 0.55,
            FontFamily::RobotoMono => 0.60,
        };
        let weight_factor = match self.font_weight {
            FontWeight::Light => 0.96,
            FontWeight::Regular => 1.0,
            FontWeight::Medium => 1.03,
            FontWeight::Bold => 1.08,
        };

        let mut line_count = self.content.lines().count().max(1);
        if self.content.ends_with('\n') {
            line_count += 1;
        }

        let width = (longest_line as f64 * self.font_size * char_factor * weight_factor).max(4.0);
        let height = line_count as f64 * self.font_size * Self::LINE_HEIGHT;
        Size::new(width, height)
    }
}
