//! Length, box-length and colour values.
//!
//! These are the scalar building blocks of every style attribute. Their
//! `Display` implementations produce the exact text written into attribute
//! values.
//!
//! # Example
//!
//! ```
//! use trellis_style::types::{Color, Insets, Length};
//!
//! assert_eq!(Length::px(16.0).to_string(), "16px");
//! assert_eq!(Length::percent(12.5).to_string(), "12.5%");
//!
//! let padding = Insets::symmetric(Length::px(4.0), Length::px(8.0));
//! assert_eq!(padding.to_string(), "4px 8px");
//!
//! assert_eq!(Color::from_hex("#F80").unwrap().to_string(), "#ff8800");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Unit of a [`Length`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthUnit {
    /// Absolute pixels.
    #[default]
    Px,
    /// Percentage of the containing block.
    Percent,
    /// Relative to the element's font size.
    Em,
    /// Relative to the root font size.
    Rem,
    /// Typographic points.
    Pt,
}

impl LengthUnit {
    /// The unit suffix as written in CSS.
    pub fn suffix(self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Percent => "%",
            LengthUnit::Em => "em",
            LengthUnit::Rem => "rem",
            LengthUnit::Pt => "pt",
        }
    }
}

/// A length with a unit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Length {
    /// Magnitude.
    pub value: f32,
    /// Unit of the magnitude.
    pub unit: LengthUnit,
}

impl Length {
    /// Zero pixels.
    pub const ZERO: Self = Self::new(0.0, LengthUnit::Px);

    /// Create a length from a value and unit.
    pub const fn new(value: f32, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Create a pixel length.
    pub const fn px(value: f32) -> Self {
        Self::new(value, LengthUnit::Px)
    }

    /// Create a percentage length.
    pub const fn percent(value: f32) -> Self {
        Self::new(value, LengthUnit::Percent)
    }

    /// Create an em length.
    pub const fn em(value: f32) -> Self {
        Self::new(value, LengthUnit::Em)
    }

    /// Create a rem length.
    pub const fn rem(value: f32) -> Self {
        Self::new(value, LengthUnit::Rem)
    }

    /// Create a point length.
    pub const fn pt(value: f32) -> Self {
        Self::new(value, LengthUnit::Pt)
    }

    /// Check if the magnitude is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.value > 0.0
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_number(f, self.value)?;
        f.write_str(self.unit.suffix())
    }
}

/// Write a number without a trailing `.0` for whole values.
fn write_number(f: &mut fmt::Formatter<'_>, value: f32) -> fmt::Result {
    if value == 0.0 {
        f.write_str("0")
    } else if value.is_finite() && value.fract() == 0.0 {
        write!(f, "{:.0}", value)
    } else {
        write!(f, "{}", value)
    }
}

/// Box lengths for the four sides (padding and margin).
///
/// # Example
///
/// ```
/// use trellis_style::types::{Insets, Length};
///
/// let uniform = Insets::uniform(Length::px(10.0));
/// assert_eq!(uniform.to_string(), "10px");
///
/// let full = Insets::new(Length::px(1.0), Length::px(2.0), Length::px(3.0), Length::px(4.0));
/// assert_eq!(full.to_string(), "1px 2px 3px 4px");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    /// Top side.
    pub top: Length,
    /// Right side.
    pub right: Length,
    /// Bottom side.
    pub bottom: Length,
    /// Left side.
    pub left: Length,
}

impl Insets {
    /// Create from 4 values (top, right, bottom, left).
    pub fn new(top: Length, right: Length, bottom: Length, left: Length) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create uniform insets.
    pub fn uniform(value: Length) -> Self {
        Self::new(value, value, value, value)
    }

    /// Create symmetric insets (vertical, horizontal).
    pub fn symmetric(vertical: Length, horizontal: Length) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }
}

impl fmt::Display for Insets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertical_equal = self.top == self.bottom;
        let horizontal_equal = self.left == self.right;
        if vertical_equal && horizontal_equal && self.top == self.left {
            write!(f, "{}", self.top)
        } else if vertical_equal && horizontal_equal {
            write!(f, "{} {}", self.top, self.left)
        } else {
            write!(
                f,
                "{} {} {} {}",
                self.top, self.right, self.bottom, self.left
            )
        }
    }
}

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Create a colour from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, c) in channels.iter_mut().zip(hex.chars()) {
                    let v = c.to_digit(16)? as u8;
                    *slot = v * 16 + v;
                }
                Some(Self::rgb(channels[0], channels[1], channels[2]))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            _ => None,
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s.trim()).ok_or_else(|| Error::invalid_color(s))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_display() {
        assert_eq!(Length::px(10.0).to_string(), "10px");
        assert_eq!(Length::em(1.5).to_string(), "1.5em");
        assert_eq!(Length::percent(100.0).to_string(), "100%");
        assert_eq!(Length::px(-3.0).to_string(), "-3px");
        assert_eq!(Length::ZERO.to_string(), "0px");
        assert_eq!(Length::px(-0.0).to_string(), "0px");
    }

    #[test]
    fn large_whole_length_keeps_every_digit() {
        // 2^64 is exact in f32 and beyond the range of i64.
        assert_eq!(Length::px(18446744073709551616.0).to_string(), "18446744073709551616px");
        assert_eq!(Length::px(3e9).to_string(), "3000000000px");
        assert_eq!(Length::pt(-4294967296.0).to_string(), "-4294967296pt");
    }

    #[test]
    fn length_positive() {
        assert!(Length::px(1.0).is_positive());
        assert!(!Length::ZERO.is_positive());
        assert!(!Length::px(-1.0).is_positive());
    }

    #[test]
    fn insets_display_forms() {
        let two = Insets::symmetric(Length::px(5.0), Length::px(10.0));
        assert_eq!(two.to_string(), "5px 10px");

        let mixed = Insets::new(Length::px(1.0), Length::px(2.0), Length::px(1.0), Length::px(3.0));
        assert_eq!(mixed.to_string(), "1px 2px 1px 3px");
    }

    #[test]
    fn color_parse() {
        assert_eq!(Color::from_hex("#ff0000"), Some(Color::RED));
        assert_eq!(Color::from_hex("00f"), Some(Color::BLUE));
        assert_eq!(Color::from_hex("#12"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);

        let parsed: Color = "#808080".parse().unwrap();
        assert_eq!(parsed, Color::GRAY);
        assert!("nope".parse::<Color>().is_err());
    }

    #[test]
    fn color_display() {
        assert_eq!(Color::RED.to_string(), "#ff0000");
        assert_eq!(Color::rgb(1, 2, 171).to_string(), "#0102ab");
    }
}
