//! Capability renderers.
//!
//! Each renderer is a pure function that reads the properties of a single
//! capability through a [`RenderContext`] and appends zero or more
//! attributes. Renderers never fail: missing, partial or mistyped values
//! produce fewer attributes, not errors.

mod background;
mod base;
mod border;
mod box_model;
mod cursor;
mod layout;
mod position;
mod scroll;

pub use background::{ImageResolver, ResourceImageResolver, render_background_image};
pub use base::{render_base, render_hidden};
pub use border::{BORDER_ATTRIBUTES, SHORTHAND_ATTRIBUTES, render_border};
pub use box_model::{render_height, render_insets, render_margin, render_padding, render_width};
pub use cursor::render_cursor;
pub use layout::{render_align, render_float};
pub use position::{POSITION_ATTRIBUTES, render_position};
pub use scroll::render_scroll;

use crate::property::{Capabilities, PropertyLookup, PropertySource};
use crate::style::{RenderOptions, StyleAttributes};

/// Signature shared by every capability renderer.
pub type CapabilityRenderer = fn(&RenderContext<'_>, &mut StyleAttributes);

/// Capability renderers in composition order.
///
/// Later renderers may overwrite attributes of earlier ones, so the order is
/// part of the output contract.
pub const CAPABILITY_RENDERERS: &[(Capabilities, CapabilityRenderer)] = &[
    (Capabilities::BORDER, render_border),
    (Capabilities::INSETS, render_insets),
    (Capabilities::POSITION, render_position),
    (Capabilities::SCROLL, render_scroll),
    (Capabilities::WIDTH, render_width),
    (Capabilities::HEIGHT, render_height),
    (Capabilities::MOUSE_CURSOR, render_cursor),
    (Capabilities::ALIGN, render_align),
    (Capabilities::FLOAT, render_float),
    (Capabilities::BACKGROUND_IMAGE, render_background_image),
];

/// Everything a renderer may read during one call.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// Property access with fallback.
    pub props: PropertyLookup<'a>,
    /// Render options.
    pub options: RenderOptions,
    /// Image reference resolution.
    pub images: &'a dyn ImageResolver,
}

impl<'a> RenderContext<'a> {
    /// Create a context.
    pub fn new(
        object: &'a dyn PropertySource,
        fallback: Option<&'a dyn PropertySource>,
        options: RenderOptions,
        images: &'a dyn ImageResolver,
    ) -> Self {
        Self {
            props: PropertyLookup::new(object, fallback),
            options,
            images,
        }
    }
}

impl std::fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("props", &self.props)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Escape a URI for use inside `uri(...)` / `url(...)`.
pub fn escape_uri(uri: &str) -> String {
    let mut escaped = String::with_capacity(uri.len());
    for c in uri.chars() {
        if matches!(c, '\\' | '(' | ')' | '\'' | '"') || c.is_whitespace() {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::property::PropertyMap;

    /// Render one capability of `object` with default options.
    pub(crate) fn render_with(
        renderer: CapabilityRenderer,
        object: &PropertyMap,
        fallback: Option<&PropertyMap>,
    ) -> StyleAttributes {
        let images = ResourceImageResolver::new("/res");
        let fallback = fallback.map(|f| f as &dyn PropertySource);
        let ctx = RenderContext::new(object, fallback, RenderOptions::default(), &images);
        let mut out = StyleAttributes::new();
        renderer(&ctx, &mut out);
        out
    }

    /// Attribute pairs for compact assertions.
    pub(crate) fn pairs(attrs: &StyleAttributes) -> Vec<(&'static str, &str)> {
        attrs.iter().map(|a| (a.name, a.value.as_str())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_escaping() {
        assert_eq!(escape_uri("a.png"), "a.png");
        assert_eq!(escape_uri("my cursor(1).cur"), "my\\ cursor\\(1\\).cur");
        assert_eq!(escape_uri("it's"), "it\\'s");
    }

    #[test]
    fn renderer_table_order() {
        let order: Vec<Capabilities> = CAPABILITY_RENDERERS.iter().map(|(c, _)| *c).collect();
        assert_eq!(order.first(), Some(&Capabilities::BORDER));
        assert_eq!(order.last(), Some(&Capabilities::BACKGROUND_IMAGE));
        assert_eq!(order.len(), 10);
    }
}
