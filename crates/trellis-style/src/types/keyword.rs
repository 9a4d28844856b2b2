//! Keyword-valued properties.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// z-index value meaning "not set".
///
/// z-index is a primitive integer property, so absence is encoded with a
/// sentinel instead of a missing value.
pub const Z_INDEX_UNSET: i32 = i32::MIN;

keyword_enum! {
    /// Positioning scheme.
    #[derive(Default)]
    pub enum PositionMode as "position" {
        /// Normal flow. Suppresses every positional attribute.
        #[default]
        Static => "static",
        /// Offset relative to the normal position.
        Relative => "relative",
        /// Positioned relative to the nearest positioned ancestor.
        Absolute => "absolute",
        /// Positioned relative to the viewport.
        Fixed => "fixed",
    }
}

keyword_enum! {
    /// Scrollbar policy of a scrollable component.
    #[derive(Default)]
    pub enum ScrollPolicy as "scroll policy" {
        /// Content overflows visibly, no scrollbars.
        Never => "never",
        /// Scrollbars always shown.
        Always => "always",
        /// Scrollbars shown when needed.
        Auto => "auto",
        /// Overflowing content is clipped.
        ClipHide => "clip-hide",
        /// No overflow attribute at all.
        #[default]
        Undefined => "undefined",
    }
}

impl ScrollPolicy {
    const OVERFLOW: &'static [Option<&'static str>] = &[
        Some("visible"),
        Some("scroll"),
        Some("auto"),
        Some("hidden"),
        None,
    ];

    /// The `overflow` keyword, if the policy emits one.
    pub fn overflow(self) -> Option<&'static str> {
        Self::OVERFLOW[self as usize]
    }
}

/// Mouse cursor kind.
///
/// [`MouseCursor::CustomUri`] has no keyword of its own; its image comes from
/// the separate cursor URI property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseCursor {
    /// Platform default arrow.
    #[default]
    Default,
    /// Pointing hand.
    Pointer,
    /// Text I-beam.
    Text,
    /// Move/drag.
    Move,
    /// Prohibition sign.
    NotAllowed,
    /// Crosshair.
    Crosshair,
    /// Busy.
    Wait,
    /// Busy with arrow.
    Progress,
    /// Arrow with question mark.
    Help,
    /// North-south resize.
    ResizeNs,
    /// East-west resize.
    ResizeEw,
    /// Northeast-southwest resize.
    ResizeNesw,
    /// Northwest-southeast resize.
    ResizeNwse,
    /// Image loaded from the cursor URI property.
    CustomUri,
}

impl MouseCursor {
    /// Every member, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::Default,
        Self::Pointer,
        Self::Text,
        Self::Move,
        Self::NotAllowed,
        Self::Crosshair,
        Self::Wait,
        Self::Progress,
        Self::Help,
        Self::ResizeNs,
        Self::ResizeEw,
        Self::ResizeNesw,
        Self::ResizeNwse,
        Self::CustomUri,
    ];

    const KEYWORDS: &'static [Option<&'static str>] = &[
        Some("default"),
        Some("pointer"),
        Some("text"),
        Some("move"),
        Some("not-allowed"),
        Some("crosshair"),
        Some("wait"),
        Some("progress"),
        Some("help"),
        Some("ns-resize"),
        Some("ew-resize"),
        Some("nesw-resize"),
        Some("nwse-resize"),
        None,
    ];

    /// The CSS keyword, or `None` for [`MouseCursor::CustomUri`].
    pub fn keyword(self) -> Option<&'static str> {
        Self::KEYWORDS[self as usize]
    }
}

impl FromStr for MouseCursor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_ascii_lowercase();
        if needle == "custom-uri" {
            return Ok(Self::CustomUri);
        }
        Self::KEYWORDS
            .iter()
            .position(|keyword| *keyword == Some(needle.as_str()))
            .map(|index| Self::ALL[index])
            .ok_or_else(|| Error::unknown_keyword("cursor", s))
    }
}

impl fmt::Display for MouseCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword().unwrap_or("custom-uri"))
    }
}

keyword_enum! {
    /// Horizontal alignment.
    pub enum HorizontalAlign as "horizontal alignment" {
        /// Left edge.
        Left => "left",
        /// Centered.
        Center => "center",
        /// Right edge.
        Right => "right",
        /// Stretched to both edges.
        Justify => "justify",
        /// Start of the layout direction.
        Start => "start",
        /// End of the layout direction.
        End => "end",
    }
}

keyword_enum! {
    /// Vertical alignment.
    pub enum VerticalAlign as "vertical alignment" {
        /// Top edge.
        Top => "top",
        /// Centered.
        Middle => "middle",
        /// Bottom edge.
        Bottom => "bottom",
        /// Text baseline.
        Baseline => "baseline",
    }
}

/// Horizontal and vertical alignment, each independently optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    /// Horizontal component.
    pub horizontal: Option<HorizontalAlign>,
    /// Vertical component.
    pub vertical: Option<VerticalAlign>,
}

impl Alignment {
    /// Create an alignment with both components.
    pub fn new(horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        Self {
            horizontal: Some(horizontal),
            vertical: Some(vertical),
        }
    }

    /// Horizontal alignment only.
    pub fn horizontal(horizontal: HorizontalAlign) -> Self {
        Self {
            horizontal: Some(horizontal),
            vertical: None,
        }
    }

    /// Vertical alignment only.
    pub fn vertical(vertical: VerticalAlign) -> Self {
        Self {
            horizontal: None,
            vertical: Some(vertical),
        }
    }
}

keyword_enum! {
    /// Side a component floats to.
    #[derive(Default)]
    pub enum FloatSide as "float" {
        /// Not floating.
        #[default]
        None => "none",
        /// Float left.
        Left => "left",
        /// Float right.
        Right => "right",
    }
}

keyword_enum! {
    /// Sides on which floating siblings are cleared.
    #[derive(Default)]
    pub enum ClearSide as "clear" {
        /// Nothing cleared.
        #[default]
        None => "none",
        /// Clear left floats.
        Left => "left",
        /// Clear right floats.
        Right => "right",
        /// Clear floats on both sides.
        Both => "both",
    }
}

keyword_enum! {
    /// Background image tiling.
    #[derive(Default)]
    pub enum ImageRepeat as "background repeat" {
        /// Tile in both directions.
        #[default]
        Repeat => "repeat",
        /// Draw once.
        NoRepeat => "no-repeat",
        /// Tile horizontally.
        RepeatX => "repeat-x",
        /// Tile vertically.
        RepeatY => "repeat-y",
    }
}

keyword_enum! {
    /// Layout direction.
    #[derive(Default)]
    pub enum LayoutDirection as "direction" {
        /// Left to right.
        #[default]
        Ltr => "ltr",
        /// Right to left.
        Rtl => "rtl",
    }
}
