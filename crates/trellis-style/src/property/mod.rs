//! Property access for renderable objects.
//!
//! Components are not owned by the renderer. The host exposes them through
//! two small traits:
//!
//! - [`PropertySource`]: named property lookup (`getProperty`)
//! - [`Renderable`]: a property source that also declares its [`Capabilities`]
//!
//! A second [`PropertySource`], usually a theme, can act as the fallback
//! consulted when the component has no value of its own. See [`resolve`].

mod map;
mod resolve;
mod value;

pub use map::{Component, PropertyMap};
pub use resolve::{PropertyLookup, resolve, resolve_as, resolve_or, try_resolve_as};
pub use value::{FromPropertyValue, PropertyValue};

bitflags::bitflags! {
    /// Presentation capabilities a component may support.
    ///
    /// The composer walks these in a fixed order and runs the renderer of
    /// every capability present in the set.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Capabilities: u16 {
        /// Four-sided border.
        const BORDER           = 1 << 0;
        /// Padding and margin.
        const INSETS           = 1 << 1;
        /// Positioning scheme and offsets.
        const POSITION         = 1 << 2;
        /// Overflow policy, size and scrollbar colours.
        const SCROLL           = 1 << 3;
        /// Mouse cursor.
        const MOUSE_CURSOR     = 1 << 4;
        /// Explicit width.
        const WIDTH            = 1 << 5;
        /// Explicit height.
        const HEIGHT           = 1 << 6;
        /// Horizontal/vertical alignment.
        const ALIGN            = 1 << 7;
        /// Float and clear.
        const FLOAT            = 1 << 8;
        /// Background image.
        const BACKGROUND_IMAGE = 1 << 9;

        /// Width and height together.
        const SIZE = Self::WIDTH.bits() | Self::HEIGHT.bits();
    }
}

/// Named property lookup.
pub trait PropertySource {
    /// Get the value of a property, or `None` when it is not set.
    fn property(&self, name: &str) -> Option<PropertyValue>;
}

/// A component that can be rendered to style attributes.
pub trait Renderable: PropertySource {
    /// The capabilities this component supports.
    fn capabilities(&self) -> Capabilities;

    /// Check whether every capability in `capability` is supported.
    fn has_capability(&self, capability: Capabilities) -> bool {
        self.capabilities().contains(capability)
    }
}

impl<T: PropertySource + ?Sized> PropertySource for &T {
    fn property(&self, name: &str) -> Option<PropertyValue> {
        (**self).property(name)
    }
}

/// Property names read by the renderers.
pub mod names {
    /// [`Border`](crate::types::Border).
    pub const BORDER: &str = "border";
    /// Padding, as [`Insets`](crate::types::Insets).
    pub const INSETS: &str = "insets";
    /// Margin, as [`Insets`](crate::types::Insets).
    pub const OUTSETS: &str = "outsets";
    /// [`PositionMode`](crate::types::PositionMode).
    pub const POSITION: &str = "position";
    /// Left offset.
    pub const LEFT: &str = "left";
    /// Top offset.
    pub const TOP: &str = "top";
    /// Right offset.
    pub const RIGHT: &str = "right";
    /// Bottom offset.
    pub const BOTTOM: &str = "bottom";
    /// Integer z-index, [`Z_INDEX_UNSET`](crate::types::Z_INDEX_UNSET) when unset.
    pub const Z_INDEX: &str = "zIndex";
    /// Explicit width.
    pub const WIDTH: &str = "width";
    /// Explicit height.
    pub const HEIGHT: &str = "height";
    /// [`ScrollPolicy`](crate::types::ScrollPolicy).
    pub const SCROLL_POLICY: &str = "scrollPolicy";
    /// Base scrollbar colour.
    pub const SCROLLBAR_BASE_COLOR: &str = "scrollbarBaseColor";
    /// [`ScrollbarPalette`](crate::types::ScrollbarPalette).
    pub const SCROLLBAR_PALETTE: &str = "scrollbarPalette";
    /// [`MouseCursor`](crate::types::MouseCursor).
    pub const MOUSE_CURSOR: &str = "mouseCursor";
    /// Cursor image URI, read when the kind is
    /// [`MouseCursor::CustomUri`](crate::types::MouseCursor::CustomUri).
    pub const MOUSE_CURSOR_URI: &str = "mouseCursorUri";
    /// [`Alignment`](crate::types::Alignment).
    pub const ALIGNMENT: &str = "alignment";
    /// [`FloatSide`](crate::types::FloatSide).
    pub const FLOAT: &str = "float";
    /// [`ClearSide`](crate::types::ClearSide).
    pub const CLEAR: &str = "clear";
    /// [`FillImage`](crate::types::FillImage).
    pub const BACKGROUND_IMAGE: &str = "backgroundImage";
    /// Text colour.
    pub const FOREGROUND: &str = "foreground";
    /// Background colour.
    pub const BACKGROUND: &str = "background";
    /// [`Font`](crate::types::Font).
    pub const FONT: &str = "font";
    /// [`LayoutDirection`](crate::types::LayoutDirection).
    pub const LAYOUT_DIRECTION: &str = "layoutDirection";
    /// Boolean hidden flag.
    pub const HIDDEN: &str = "hidden";
}
