//! Background image renderer and image reference resolution.

use super::{RenderContext, escape_uri};
use crate::logging::targets;
use crate::property::names;
use crate::style::StyleAttributes;
use crate::types::{FillImage, ImageRef};

/// Turns an [`ImageRef`] into a URI the host can load.
///
/// Resolution is owned by the host application; the renderer only asks.
pub trait ImageResolver {
    /// Resolve an image, or `None` when it cannot be located.
    fn resolve_uri(&self, image: &ImageRef) -> Option<String>;
}

impl<F> ImageResolver for F
where
    F: Fn(&ImageRef) -> Option<String>,
{
    fn resolve_uri(&self, image: &ImageRef) -> Option<String> {
        self(image)
    }
}

/// Resolver that places resources under a base path and passes URLs through.
///
/// # Example
///
/// ```
/// use trellis_style::render::{ImageResolver, ResourceImageResolver};
/// use trellis_style::types::ImageRef;
///
/// let images = ResourceImageResolver::new("/static/");
/// assert_eq!(
///     images.resolve_uri(&ImageRef::resource("logo.png")).as_deref(),
///     Some("/static/logo.png")
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceImageResolver {
    base: String,
}

impl ResourceImageResolver {
    /// Create a resolver rooted at `base`.
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// The base path.
    pub fn base(&self) -> &str {
        &self.base
    }
}

impl ImageResolver for ResourceImageResolver {
    fn resolve_uri(&self, image: &ImageRef) -> Option<String> {
        match image {
            ImageRef::Url(url) => Some(url.clone()),
            ImageRef::Resource(name) if name.is_empty() => None,
            ImageRef::Resource(name) if self.base.is_empty() => Some(name.clone()),
            ImageRef::Resource(name) => Some(format!(
                "{}/{}",
                self.base.trim_end_matches('/'),
                name.trim_start_matches('/')
            )),
        }
    }
}

/// Render the background image capability.
pub fn render_background_image(ctx: &RenderContext<'_>, out: &mut StyleAttributes) {
    let Some(fill) = ctx.props.get_as::<FillImage>(names::BACKGROUND_IMAGE) else {
        return;
    };
    let Some(uri) = ctx.images.resolve_uri(&fill.image) else {
        tracing::debug!(
            target: targets::COMPOSE,
            image = ?fill.image,
            "background image did not resolve"
        );
        return;
    };

    out.set("background-image", format!("url({})", escape_uri(&uri)));
    if let Some(position) = fill.position() {
        out.set("background-position", position);
    }
    out.set("background-repeat", fill.repeat.keyword());
}
