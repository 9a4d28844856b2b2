//! Full style composition.
//!
//! [`StyleComposer`] turns a renderable component into its complete attribute
//! list. Capabilities are visited in the order of
//! [`CAPABILITY_RENDERERS`](crate::render::CAPABILITY_RENDERERS), then the
//! base attributes, then the `hidden` flag.

use std::sync::Arc;

use crate::logging::targets;
use crate::property::{PropertySource, Renderable};
use crate::render::{
    CAPABILITY_RENDERERS, ImageResolver, RenderContext, ResourceImageResolver, render_base,
    render_hidden,
};
use crate::style::{RenderOptions, StyleAttributes};

/// Renders the full style of a component.
///
/// # Example
///
/// ```
/// use trellis_style::prelude::*;
///
/// let label = Component::new(Capabilities::WIDTH | Capabilities::HEIGHT)
///     .with(names::WIDTH, Length::px(120.0))
///     .with(names::HIDDEN, true);
///
/// let style = StyleComposer::new().compose(&label, None);
/// assert_eq!(style.to_css(), "width: 120px; display: none");
/// ```
#[derive(Clone)]
pub struct StyleComposer {
    options: RenderOptions,
    images: Arc<dyn ImageResolver + Send + Sync>,
}

impl StyleComposer {
    /// Create a composer with default options and a [`ResourceImageResolver`]
    /// rooted at the empty path.
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
            images: Arc::new(ResourceImageResolver::default()),
        }
    }

    /// Use the given render options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Use the given image resolver.
    pub fn with_image_resolver(
        mut self,
        images: impl ImageResolver + Send + Sync + 'static,
    ) -> Self {
        self.images = Arc::new(images);
        self
    }

    /// The render options.
    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Render every attribute of `object`.
    ///
    /// `fallback` is consulted for properties the object does not set.
    pub fn compose(
        &self,
        object: &dyn Renderable,
        fallback: Option<&dyn PropertySource>,
    ) -> StyleAttributes {
        let ctx = RenderContext::new(object, fallback, self.options, self.images.as_ref());
        let mut out = StyleAttributes::new();

        for (capability, renderer) in CAPABILITY_RENDERERS {
            if object.has_capability(*capability) {
                renderer(&ctx, &mut out);
            }
        }
        render_base(&ctx, &mut out);
        render_hidden(&ctx, &mut out);

        tracing::debug!(
            target: targets::COMPOSE,
            capabilities = ?object.capabilities(),
            attributes = out.len(),
            "composed style"
        );
        out
    }
}

impl Default for StyleComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StyleComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleComposer")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(StyleComposer: Send, Sync);
