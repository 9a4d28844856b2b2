//! Border renderer.

use super::RenderContext;
use crate::property::names;
use crate::style::StyleAttributes;
use crate::types::{Border, BorderSide, BorderStyle};

/// Shorthand attributes: width, colour, style.
pub const SHORTHAND_ATTRIBUTES: [&str; 3] = ["border-width", "border-color", "border-style"];

/// Every attribute the border renderer can emit: shorthand, then per side.
pub const BORDER_ATTRIBUTES: [&str; 15] = [
    "border-width",
    "border-color",
    "border-style",
    "border-left-width",
    "border-left-color",
    "border-left-style",
    "border-right-width",
    "border-right-color",
    "border-right-style",
    "border-top-width",
    "border-top-color",
    "border-top-style",
    "border-bottom-width",
    "border-bottom-color",
    "border-bottom-style",
];

/// Per-side attributes, in the side order of [`Border::sides`].
const SIDE_ATTRIBUTES: [[&str; 3]; 4] = [
    ["border-left-width", "border-left-color", "border-left-style"],
    ["border-right-width", "border-right-color", "border-right-style"],
    ["border-top-width", "border-top-color", "border-top-style"],
    ["border-bottom-width", "border-bottom-color", "border-bottom-style"],
];

/// Render the border capability.
///
/// All four sides are read together. When they are identical the shorthand
/// triple is emitted; otherwise every present side is emitted on its own and
/// the shorthand never appears.
pub fn render_border(ctx: &RenderContext<'_>, out: &mut StyleAttributes) {
    let Some(border) = ctx.props.get_as::<Border>(names::BORDER) else {
        return;
    };

    if let Some(side) = border.uniform_side() {
        render_side(side, &SHORTHAND_ATTRIBUTES, out);
        return;
    }

    for (side, attributes) in border.sides().into_iter().zip(&SIDE_ATTRIBUTES) {
        if let Some(side) = side {
            render_side(side, attributes, out);
        }
    }
}

fn render_side(
    side: &BorderSide,
    &[width, color, style]: &[&'static str; 3],
    out: &mut StyleAttributes,
) {
    let has_size = side.has_size();
    if let Some(size) = side.size.filter(|_| has_size) {
        out.set(width, size.to_string());
    }
    if let Some(c) = side.color {
        out.set(color, c.to_string());
    }
    // An explicit "none" must still be written to override inherited borders.
    if has_size || side.color.is_some() || side.style == BorderStyle::None {
        out.set(style, side.style.keyword());
    }
}
