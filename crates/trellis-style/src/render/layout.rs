//! Alignment and float renderers.

use super::RenderContext;
use crate::property::names;
use crate::style::StyleAttributes;
use crate::types::{Alignment, ClearSide, FloatSide};

/// Render the alignment capability.
pub fn render_align(ctx: &RenderContext<'_>, out: &mut StyleAttributes) {
    let Some(alignment) = ctx.props.get_as::<Alignment>(names::ALIGNMENT) else {
        return;
    };
    if let Some(horizontal) = alignment.horizontal {
        out.set("text-align", horizontal.keyword());
    }
    if let Some(vertical) = alignment.vertical {
        out.set("vertical-align", vertical.keyword());
    }
}

/// Render the float capability. `None` suppresses the attribute.
pub fn render_float(ctx: &RenderContext<'_>, out: &mut StyleAttributes) {
    let float = ctx.props.get_as::<FloatSide>(names::FLOAT);
    if let Some(float) = float.filter(|side| *side != FloatSide::None) {
        out.set("float", float.keyword());
    }
    let clear = ctx.props.get_as::<ClearSide>(names::CLEAR);
    if let Some(clear) = clear.filter(|side| *side != ClearSide::None) {
        out.set("clear", clear.keyword());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PropertyMap;
    use crate::render::test_support::{pairs, render_with};
    use crate::types::{HorizontalAlign, VerticalAlign};

    #[test]
    fn alignment_pair() {
        let object = PropertyMap::new().with(
            names::ALIGNMENT,
            Alignment::new(HorizontalAlign::Center, VerticalAlign::Bottom),
        );
        assert_eq!(
            pairs(&render_with(render_align, &object, None)),
            vec![("text-align", "center"), ("vertical-align", "bottom")]
        );

        let object = PropertyMap::new()
            .with(names::ALIGNMENT, Alignment::vertical(VerticalAlign::Middle));
        assert_eq!(
            pairs(&render_with(render_align, &object, None)),
            vec![("vertical-align", "middle")]
        );
    }

    #[test]
    fn float_and_clear() {
        let object = PropertyMap::new()
            .with(names::FLOAT, FloatSide::Right)
            .with(names::CLEAR, ClearSide::Both);
        assert_eq!(
            pairs(&render_with(render_float, &object, None)),
            vec![("float", "right"), ("clear", "both")]
        );
    }

    #[test]
    fn none_suppresses_each_side() {
        let object = PropertyMap::new()
            .with(names::FLOAT, FloatSide::None)
            .with(names::CLEAR, ClearSide::Left);
        assert_eq!(
            pairs(&render_with(render_float, &object, None)),
            vec![("clear", "left")]
        );
    }
}
