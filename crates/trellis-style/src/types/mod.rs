//! Style property value types.
//!
//! Every value a capability renderer reads lives here: lengths and colours,
//! the four-sided [`Border`], keyword enums, and the composite background,
//! scrollbar and font descriptions.

/// Declare a keyword enum backed by a static keyword table.
///
/// Variant order and table order are the same, so the keyword of a value is
/// a single index into the table and parsing is a single scan of it.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $keyword:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            const KEYWORDS: &'static [&'static str] = &[$($keyword),+];

            /// The CSS keyword for this value.
            pub fn keyword(self) -> &'static str {
                Self::KEYWORDS[self as usize]
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::Error;

            fn from_str(s: &str) -> crate::Result<Self> {
                let needle = s.trim().to_ascii_lowercase();
                Self::KEYWORDS
                    .iter()
                    .position(|keyword| *keyword == needle)
                    .map(|index| Self::ALL[index])
                    .ok_or_else(|| crate::Error::unknown_keyword($kind, s))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.keyword())
            }
        }
    };
}

mod border;
mod keyword;
mod paint;
mod value;

pub use border::{Border, BorderSide, BorderStyle};
pub use keyword::{
    Alignment, ClearSide, FloatSide, HorizontalAlign, ImageRepeat, LayoutDirection, MouseCursor,
    PositionMode, ScrollPolicy, VerticalAlign, Z_INDEX_UNSET,
};
pub use paint::{FillImage, Font, ImageRef, ScrollbarPalette};
pub use value::{Color, Insets, Length, LengthUnit};
