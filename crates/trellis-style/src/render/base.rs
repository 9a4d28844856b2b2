//! Always-present base attributes and the trailing `hidden` flag.

use super::RenderContext;
use crate::property::names;
use crate::style::StyleAttributes;
use crate::types::{Color, Font, LayoutDirection};

/// Render colours, font and layout direction.
///
/// Every component has these, so the composer runs this after all
/// capability renderers.
pub fn render_base(ctx: &RenderContext<'_>, out: &mut StyleAttributes) {
    if let Some(foreground) = ctx.props.get_as::<Color>(names::FOREGROUND) {
        out.set("color", foreground.to_string());
    }
    if let Some(background) = ctx.props.get_as::<Color>(names::BACKGROUND) {
        out.set("background-color", background.to_string());
    }
    if let Some(font) = ctx.props.get_as::<Font>(names::FONT) {
        render_font(&font, out);
    }
    if let Some(direction) = ctx.props.get_as::<LayoutDirection>(names::LAYOUT_DIRECTION) {
        out.set("direction", direction.keyword());
    }
}

fn render_font(font: &Font, out: &mut StyleAttributes) {
    if let Some(families) = font.family_list() {
        out.set("font-family", families);
    }
    if let Some(size) = font.size {
        out.set("font-size", size.to_string());
    }
    if font.bold {
        out.set("font-weight", "bold");
    }
    if font.italic {
        out.set("font-style", "italic");
    }
    if let Some(decoration) = font.decoration() {
        out.set("text-decoration", decoration);
    }
}

/// Render `display: none` for hidden components.
///
/// Runs last so no capability can override it.
pub fn render_hidden(ctx: &RenderContext<'_>, out: &mut StyleAttributes) {
    if ctx.props.get_or(names::HIDDEN, false) {
        out.set("display", "none");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PropertyMap;
    use crate::render::test_support::{pairs, render_with};
    use crate::types::Length;

    #[test]
    fn colours_font_direction() {
        let font = Font {
            families: vec!["Open Sans".into(), "sans-serif".into()],
            ..Font::new("unused", Length::pt(12.0))
        }
        .bold()
        .underline()
        .line_through();
        let object = PropertyMap::new()
            .with(names::LAYOUT_DIRECTION, LayoutDirection::Rtl)
            .with(names::FONT, font)
            .with(names::FOREGROUND, Color::WHITE);
        let theme = PropertyMap::new().with(names::BACKGROUND, Color::BLACK);

        assert_eq!(
            pairs(&render_with(render_base, &object, Some(&theme))),
            vec![
                ("color", "#ffffff"),
                ("background-color", "#000000"),
                ("font-family", "\"Open Sans\", sans-serif"),
                ("font-size", "12pt"),
                ("font-weight", "bold"),
                ("text-decoration", "underline line-through"),
                ("direction", "rtl"),
            ]
        );
    }

    #[test]
    fn empty_object_renders_nothing() {
        assert!(render_with(render_base, &PropertyMap::new(), None).is_empty());
        assert!(render_with(render_hidden, &PropertyMap::new(), None).is_empty());
    }

    #[test]
    fn hidden_flag() {
        let object = PropertyMap::new().with(names::HIDDEN, true);
        assert_eq!(
            pairs(&render_with(render_hidden, &object, None)),
            vec![("display", "none")]
        );

        let object = PropertyMap::new().with(names::HIDDEN, false);
        assert!(render_with(render_hidden, &object, None).is_empty());
    }
}
