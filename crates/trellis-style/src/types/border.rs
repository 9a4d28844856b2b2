//! Four-sided border description.

use super::{Color, Length};

keyword_enum! {
    /// Border line style.
    #[derive(Default)]
    pub enum BorderStyle as "border-style" {
        /// No border. Emitting it explicitly overrides inherited borders.
        #[default]
        None => "none",
        /// Solid line.
        Solid => "solid",
        /// Dotted line.
        Dotted => "dotted",
        /// Dashed line.
        Dashed => "dashed",
        /// Two parallel solid lines.
        Double => "double",
        /// Carved-in look.
        Groove => "groove",
        /// Raised look.
        Ridge => "ridge",
        /// Embedded box look.
        Inset => "inset",
        /// Embossed box look.
        Outset => "outset",
    }
}

/// One side of a border.
///
/// `size` and `color` are optional: an absent value means "not specified",
/// which is different from zero or transparent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BorderSide {
    /// Line width.
    pub size: Option<Length>,
    /// Line colour.
    pub color: Option<Color>,
    /// Line style.
    pub style: BorderStyle,
}

impl BorderSide {
    /// Create a fully specified side.
    pub fn new(size: Length, color: Color, style: BorderStyle) -> Self {
        Self {
            size: Some(size),
            color: Some(color),
            style,
        }
    }

    /// A side that explicitly has no border.
    pub fn none() -> Self {
        Self::default()
    }

    /// Check if the side has a strictly positive width.
    pub fn has_size(&self) -> bool {
        self.size.is_some_and(|size| size.is_positive())
    }
}

/// A border with four independently specified sides.
///
/// A side set to `None` is wholly absent and contributes no attributes.
///
/// # Example
///
/// ```
/// use trellis_style::types::{Border, BorderSide, BorderStyle, Color, Length};
///
/// let border = Border::uniform(BorderSide::new(Length::px(1.0), Color::RED, BorderStyle::Solid));
/// assert!(border.uniform_side().is_some());
///
/// let mut mixed = border;
/// mixed.right = Some(BorderSide::new(Length::px(2.0), Color::BLUE, BorderStyle::Dashed));
/// assert!(mixed.uniform_side().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Border {
    /// Left side.
    pub left: Option<BorderSide>,
    /// Right side.
    pub right: Option<BorderSide>,
    /// Top side.
    pub top: Option<BorderSide>,
    /// Bottom side.
    pub bottom: Option<BorderSide>,
}

impl Border {
    /// Create a border from its four sides.
    pub fn new(left: BorderSide, right: BorderSide, top: BorderSide, bottom: BorderSide) -> Self {
        Self {
            left: Some(left),
            right: Some(right),
            top: Some(top),
            bottom: Some(bottom),
        }
    }

    /// Create a border with the same side on all four edges.
    pub fn uniform(side: BorderSide) -> Self {
        Self::new(side, side, side, side)
    }

    /// The shared side when all four sides are present and agree on size,
    /// colour and style.
    pub fn uniform_side(&self) -> Option<&BorderSide> {
        let first = self.left.as_ref()?;
        [&self.right, &self.top, &self.bottom]
            .iter()
            .all(|side| **side == Some(*first))
            .then_some(first)
    }

    /// Sides in emission order: left, right, top, bottom.
    pub fn sides(&self) -> [Option<&BorderSide>; 4] {
        [
            self.left.as_ref(),
            self.right.as_ref(),
            self.top.as_ref(),
            self.bottom.as_ref(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_style_keywords() {
        assert_eq!(BorderStyle::Groove.keyword(), "groove");
        assert_eq!("DASHED".parse::<BorderStyle>().unwrap(), BorderStyle::Dashed);
        assert!("wavy".parse::<BorderStyle>().is_err());
        assert_eq!(BorderStyle::ALL.len(), 9);
    }

    #[test]
    fn uniform_detection_compares_every_field() {
        let side = BorderSide::new(Length::px(1.0), Color::RED, BorderStyle::Solid);
        let mut border = Border::uniform(side);
        assert_eq!(border.uniform_side(), Some(&side));

        border.bottom = Some(BorderSide { color: None, ..side });
        assert!(border.uniform_side().is_none());

        border.bottom = Some(side);
        border.top = Some(BorderSide { style: BorderStyle::Dotted, ..side });
        assert!(border.uniform_side().is_none());

        border.top = None;
        assert!(border.uniform_side().is_none());
        assert!(Border::default().uniform_side().is_none());
    }

    #[test]
    fn side_sizes() {
        assert!(!BorderSide::none().has_size());
        let zero = BorderSide {
            size: Some(Length::ZERO),
            ..Default::default()
        };
        assert!(!zero.has_size());
    }
}
