//! Capability-driven style rendering for Trellis components.
//!
//! This crate turns a component's presentation properties into CSS-like
//! style attributes, featuring:
//!
//! - **Capabilities**: components declare which presentation aspects they
//!   support (border, size, position, scroll, cursor, alignment, float,
//!   background image) as a [`Capabilities`](property::Capabilities) set
//! - **Full rendering**: [`StyleComposer`](compose::StyleComposer) renders
//!   every supported capability in a fixed, documented order
//! - **Partial updates**: [`UpdateDispatcher`](update::UpdateDispatcher)
//!   emits minimal SET/REMOVE patches when only some properties changed
//! - **Fallback sources**: a theme or stylesheet can supply any property the
//!   component leaves unset
//!
//! # Example
//!
//! ```
//! use trellis_style::prelude::*;
//!
//! let red = BorderSide::new(Length::px(1.0), Color::RED, BorderStyle::Solid);
//! let mut panel = Component::new(Capabilities::BORDER | Capabilities::SCROLL)
//!     .with(names::BORDER, Border::uniform(red))
//!     .with(names::SCROLL_POLICY, ScrollPolicy::Auto)
//!     .with(names::WIDTH, Length::px(200.0));
//! let theme = PropertyMap::new().with(names::FOREGROUND, Color::BLACK);
//!
//! let style = StyleComposer::new().compose(&panel, Some(&theme));
//! assert_eq!(
//!     style.to_css(),
//!     "border-width: 1px; border-color: #ff0000; border-style: solid; \
//!      overflow: auto; width: 200px; color: #000000"
//! );
//!
//! // Later, only the width changes.
//! panel.set(names::WIDTH, Length::px(240.0));
//! let event = UpdateEvent::new(&panel, [names::WIDTH]);
//! let patch = UpdateDispatcher::new().dispatch(&event, Some(&theme));
//! assert_eq!(patch.len(), 1);
//! ```

pub mod compose;
pub mod logging;
pub mod property;
pub mod render;
pub mod style;
pub mod types;
pub mod update;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::compose::StyleComposer;
    pub use crate::property::{
        Capabilities, Component, PropertyMap, PropertySource, PropertyValue, Renderable, names,
    };
    pub use crate::render::{ImageResolver, ResourceImageResolver};
    pub use crate::style::{RenderOptions, StyleAttribute, StyleAttributes};
    pub use crate::types::{
        Alignment, Border, BorderSide, BorderStyle, ClearSide, Color, FillImage, FloatSide, Font,
        HorizontalAlign, ImageRef, ImageRepeat, Insets, LayoutDirection, Length, MouseCursor,
        PositionMode, ScrollPolicy, ScrollbarPalette, VerticalAlign,
    };
    pub use crate::update::{StyleCommand, StyleCommands, UpdateDispatcher, UpdateEvent};
}
