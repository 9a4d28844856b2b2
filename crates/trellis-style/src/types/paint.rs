//! Composite values: background images, scrollbar palettes and fonts.

use std::fmt;

use super::{Color, ImageRepeat, Length};

/// Reference to an image, turned into a URI by an
/// [`ImageResolver`](crate::render::ImageResolver).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageRef {
    /// Application resource addressed by name.
    Resource(String),
    /// Already absolute URL.
    Url(String),
}

impl ImageRef {
    /// Create a resource reference.
    pub fn resource(name: impl Into<String>) -> Self {
        Self::Resource(name.into())
    }

    /// Create a URL reference.
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }
}

/// A background image with offset and tiling.
#[derive(Debug, Clone, PartialEq)]
pub struct FillImage {
    /// Image to draw.
    pub image: ImageRef,
    /// Horizontal offset.
    pub horizontal_offset: Option<Length>,
    /// Vertical offset.
    pub vertical_offset: Option<Length>,
    /// Tiling mode.
    pub repeat: ImageRepeat,
}

impl FillImage {
    /// Create a tiled image without offsets.
    pub fn new(image: ImageRef) -> Self {
        Self {
            image,
            horizontal_offset: None,
            vertical_offset: None,
            repeat: ImageRepeat::default(),
        }
    }

    /// Set the offsets.
    pub fn with_offset(mut self, horizontal: Length, vertical: Length) -> Self {
        self.horizontal_offset = Some(horizontal);
        self.vertical_offset = Some(vertical);
        self
    }

    /// Set the tiling mode.
    pub fn with_repeat(mut self, repeat: ImageRepeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// The `background-position` value, if any offset is set.
    pub fn position(&self) -> Option<String> {
        if self.horizontal_offset.is_none() && self.vertical_offset.is_none() {
            return None;
        }
        Some(format!(
            "{} {}",
            self.horizontal_offset.unwrap_or(Length::ZERO),
            self.vertical_offset.unwrap_or(Length::ZERO)
        ))
    }
}

/// Named scrollbar colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollbarPalette {
    /// Thumb and button face.
    pub face: Option<Color>,
    /// Top-left highlight.
    pub highlight: Option<Color>,
    /// Inner 3D light edge.
    pub light_3d: Option<Color>,
    /// Outer dark shadow.
    pub dark_shadow: Option<Color>,
    /// Inner shadow.
    pub shadow: Option<Color>,
    /// Arrow glyphs.
    pub arrow: Option<Color>,
    /// Track behind the thumb.
    pub track: Option<Color>,
}

impl ScrollbarPalette {
    /// Attribute names paired with their colours, in emission order.
    pub fn entries(&self) -> [(&'static str, Option<Color>); 7] {
        [
            ("scrollbar-face-color", self.face),
            ("scrollbar-highlight-color", self.highlight),
            ("scrollbar-3dlight-color", self.light_3d),
            ("scrollbar-darkshadow-color", self.dark_shadow),
            ("scrollbar-shadow-color", self.shadow),
            ("scrollbar-arrow-color", self.arrow),
            ("scrollbar-track-color", self.track),
        ]
    }
}

/// Generic family names that are written without quotes.
const GENERIC_FAMILIES: &[&str] = &[
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    "system-ui",
];

/// Font description of the base capability.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Font {
    /// Family names in priority order.
    pub families: Vec<String>,
    /// Font size.
    pub size: Option<Length>,
    /// Bold weight.
    pub bold: bool,
    /// Italic style.
    pub italic: bool,
    /// Underline decoration.
    pub underline: bool,
    /// Strike-through decoration.
    pub line_through: bool,
}

impl Font {
    /// Create a font from a single family and a size.
    pub fn new(family: impl Into<String>, size: Length) -> Self {
        Self {
            families: vec![family.into()],
            size: Some(size),
            ..Default::default()
        }
    }

    /// Make the font bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Make the font italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Underline the text.
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Strike through the text.
    pub fn line_through(mut self) -> Self {
        self.line_through = true;
        self
    }

    /// The `font-family` value, if any family is set.
    pub fn family_list(&self) -> Option<String> {
        if self.families.is_empty() {
            return None;
        }
        let list: Vec<String> = self
            .families
            .iter()
            .map(|family| FamilyName(family).to_string())
            .collect();
        Some(list.join(", "))
    }

    /// The `text-decoration` value, if any decoration is set.
    pub fn decoration(&self) -> Option<&'static str> {
        match (self.underline, self.line_through) {
            (true, true) => Some("underline line-through"),
            (true, false) => Some("underline"),
            (false, true) => Some("line-through"),
            (false, false) => None,
        }
    }
}

struct FamilyName<'a>(&'a str);

impl fmt::Display for FamilyName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.0.trim();
        if GENERIC_FAMILIES.contains(&name) || !name.contains(char::is_whitespace) {
            f.write_str(name)
        } else {
            write!(f, "\"{}\"", name.replace('"', "\\\""))
        }
    }
}
