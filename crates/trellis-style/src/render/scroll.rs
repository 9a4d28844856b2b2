//! Scroll renderer.

use super::{RenderContext, render_height, render_width};
use crate::property::names;
use crate::style::StyleAttributes;
use crate::types::{Color, ScrollPolicy, ScrollbarPalette};

/// Render the scroll capability: overflow, size, then scrollbar colours.
///
/// Scrollable components are always sizeable, so width and height are
/// rendered here as well.
pub fn render_scroll(ctx: &RenderContext<'_>, out: &mut StyleAttributes) {
    if let Some(overflow) = ctx
        .props
        .get_as::<ScrollPolicy>(names::SCROLL_POLICY)
        .and_then(ScrollPolicy::overflow)
    {
        out.set("overflow", overflow);
    }

    render_width(ctx, out);
    render_height(ctx, out);

    if !ctx.options.scrollbar_colors {
        return;
    }
    if let Some(base) = ctx.props.get_as::<Color>(names::SCROLLBAR_BASE_COLOR) {
        out.set("scrollbar-base-color", base.to_string());
    }
    if let Some(palette) = ctx.props.get_as::<ScrollbarPalette>(names::SCROLLBAR_PALETTE) {
        for (attribute, color) in palette.entries() {
            if let Some(color) = color {
                out.set(attribute, color.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PropertyMap;
    use crate::render::test_support::{pairs, render_with};
    use crate::render::{RenderContext, ResourceImageResolver};
    use crate::style::RenderOptions;
    use crate::types::Length;

    #[test]
    fn overflow_then_size() {
        let object = PropertyMap::new()
            .with(names::HEIGHT, Length::px(100.0))
            .with(names::WIDTH, Length::px(200.0))
            .with(names::SCROLL_POLICY, ScrollPolicy::Auto);

        assert_eq!(
            pairs(&render_with(render_scroll, &object, None)),
            vec![("overflow", "auto"), ("width", "200px"), ("height", "100px")]
        );
    }

    #[test]
    fn undefined_policy_omits_overflow() {
        let object = PropertyMap::new()
            .with(names::SCROLL_POLICY, ScrollPolicy::Undefined)
            .with(names::WIDTH, Length::px(50.0));

        assert_eq!(
            pairs(&render_with(render_scroll, &object, None)),
            vec![("width", "50px")]
        );
    }

    #[test]
    fn scrollbar_palette() {
        let palette = ScrollbarPalette {
            face: Some(Color::GRAY),
            track: Some(Color::WHITE),
            ..Default::default()
        };
        let object = PropertyMap::new()
            .with(names::SCROLL_POLICY, ScrollPolicy::Always)
            .with(names::SCROLLBAR_BASE_COLOR, Color::BLACK)
            .with(names::SCROLLBAR_PALETTE, palette);

        assert_eq!(
            pairs(&render_with(render_scroll, &object, None)),
            vec![
                ("overflow", "scroll"),
                ("scrollbar-base-color", "#000000"),
                ("scrollbar-face-color", "#808080"),
                ("scrollbar-track-color", "#ffffff"),
            ]
        );
    }

    #[test]
    fn scrollbar_colors_disabled() {
        let object = PropertyMap::new()
            .with(names::SCROLL_POLICY, ScrollPolicy::ClipHide)
            .with(names::SCROLLBAR_BASE_COLOR, Color::BLACK);
        let images = ResourceImageResolver::new("");
        let options = RenderOptions::new().with_scrollbar_colors(false);
        let ctx = RenderContext::new(&object, None, options, &images);

        let mut out = StyleAttributes::new();
        render_scroll(&ctx, &mut out);
        assert_eq!(pairs(&out), vec![("overflow", "hidden")]);
    }
}
