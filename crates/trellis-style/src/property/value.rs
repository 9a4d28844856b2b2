//! Dynamically typed property values.

use crate::types::{
    Alignment, Border, ClearSide, Color, FillImage, FloatSide, Font, Insets, LayoutDirection,
    Length, MouseCursor, PositionMode, ScrollPolicy, ScrollbarPalette,
};

/// A property value as stored on a component or theme.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Boolean flag.
    Bool(bool),
    /// Integer.
    Int(i32),
    /// Free text.
    Text(String),
    /// Single length.
    Length(Length),
    /// Four box lengths.
    Insets(Insets),
    /// Colour.
    Color(Color),
    /// Four-sided border.
    Border(Border),
    /// Font description.
    Font(Font),
    /// Positioning scheme.
    Position(PositionMode),
    /// Scrollbar policy.
    Scroll(ScrollPolicy),
    /// Cursor kind.
    Cursor(MouseCursor),
    /// Alignment pair.
    Alignment(Alignment),
    /// Float side.
    Float(FloatSide),
    /// Clear side.
    Clear(ClearSide),
    /// Background image.
    FillImage(FillImage),
    /// Scrollbar colours.
    ScrollbarPalette(ScrollbarPalette),
    /// Layout direction.
    Direction(LayoutDirection),
}

/// Conversion from a [`PropertyValue`] into a concrete type.
pub trait FromPropertyValue: Sized {
    /// Type name used in mismatch diagnostics.
    const TYPE_NAME: &'static str;

    /// Convert, returning `None` when the value holds another type.
    fn from_value(value: PropertyValue) -> Option<Self>;
}

macro_rules! property_types {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        impl PropertyValue {
            /// Name of the contained type.
            pub fn type_name(&self) -> &'static str {
                match self {
                    $(PropertyValue::$variant(_) => stringify!($variant),)+
                }
            }
        }

        $(
            impl FromPropertyValue for $ty {
                const TYPE_NAME: &'static str = stringify!($variant);

                fn from_value(value: PropertyValue) -> Option<Self> {
                    match value {
                        PropertyValue::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for PropertyValue {
                fn from(value: $ty) -> Self {
                    PropertyValue::$variant(value)
                }
            }
        )+
    };
}

property_types!(
    Bool(bool),
    Int(i32),
    Text(String),
    Length(Length),
    Insets(Insets),
    Color(Color),
    Border(Border),
    Font(Font),
    Position(PositionMode),
    Scroll(ScrollPolicy),
    Cursor(MouseCursor),
    Alignment(Alignment),
    Float(FloatSide),
    Clear(ClearSide),
    FillImage(FillImage),
    ScrollbarPalette(ScrollbarPalette),
    Direction(LayoutDirection),
);

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_conversion() {
        let value = PropertyValue::from(Color::RED);
        assert_eq!(value.type_name(), "Color");
        assert_eq!(Color::from_value(value.clone()), Some(Color::RED));
        assert_eq!(Length::from_value(value), None);
    }

    #[test]
    fn text_from_str() {
        let value = PropertyValue::from("cursor.png");
        assert_eq!(String::from_value(value).as_deref(), Some("cursor.png"));
    }
}
