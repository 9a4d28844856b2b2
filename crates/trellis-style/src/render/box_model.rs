//! Padding, margin, width and height.

use super::RenderContext;
use crate::property::names;
use crate::style::StyleAttributes;
use crate::types::{Insets, Length};

/// Render padding (`insets`) and margin (`outsets`).
pub fn render_insets(ctx: &RenderContext<'_>, out: &mut StyleAttributes) {
    render_padding(ctx, out);
    render_margin(ctx, out);
}

/// Render padding only.
pub fn render_padding(ctx: &RenderContext<'_>, out: &mut StyleAttributes) {
    if let Some(insets) = ctx.props.get_as::<Insets>(names::INSETS) {
        out.set("padding", insets.to_string());
    }
}

/// Render margin only.
pub fn render_margin(ctx: &RenderContext<'_>, out: &mut StyleAttributes) {
    if let Some(outsets) = ctx.props.get_as::<Insets>(names::OUTSETS) {
        out.set("margin", outsets.to_string());
    }
}

/// Render the explicit width.
pub fn render_width(ctx: &RenderContext<'_>, out: &mut StyleAttributes) {
    if let Some(width) = ctx.props.get_as::<Length>(names::WIDTH) {
        out.set("width", width.to_string());
    }
}

/// Render the explicit height.
pub fn render_height(ctx: &RenderContext<'_>, out: &mut StyleAttributes) {
    if let Some(height) = ctx.props.get_as::<Length>(names::HEIGHT) {
        out.set("height", height.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PropertyMap;
    use crate::render::test_support::{pairs, render_with};

    #[test]
    fn insets_map_to_padding_and_margin() {
        let object = PropertyMap::new()
            .with(names::OUTSETS, Insets::uniform(Length::px(2.0)))
            .with(names::INSETS, Insets::symmetric(Length::px(4.0), Length::px(8.0)));

        assert_eq!(
            pairs(&render_with(render_insets, &object, None)),
            vec![("padding", "4px 8px"), ("margin", "2px")]
        );
    }

    #[test]
    fn insets_independently_optional() {
        let object = PropertyMap::new().with(names::OUTSETS, Insets::uniform(Length::px(2.0)));
        assert_eq!(
            pairs(&render_with(render_insets, &object, None)),
            vec![("margin", "2px")]
        );
    }

    #[test]
    fn size_attributes() {
        let object = PropertyMap::new()
            .with(names::WIDTH, Length::percent(100.0))
            .with(names::HEIGHT, Length::px(30.0));

        assert_eq!(
            pairs(&render_with(render_width, &object, None)),
            vec![("width", "100%")]
        );
        assert_eq!(
            pairs(&render_with(render_height, &object, None)),
            vec![("height", "30px")]
        );
        assert!(render_with(render_width, &PropertyMap::new(), None).is_empty());
    }
}
