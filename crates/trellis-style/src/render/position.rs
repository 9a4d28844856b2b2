//! Position renderer.

use super::RenderContext;
use crate::property::names;
use crate::style::StyleAttributes;
use crate::types::{Length, PositionMode, Z_INDEX_UNSET};

/// Every attribute the position renderer can emit, in emission order.
pub const POSITION_ATTRIBUTES: [&str; 6] =
    ["position", "left", "top", "right", "bottom", "z-index"];

/// Offset properties and the attributes they map to.
const OFFSETS: [(&str, &str); 4] = [
    (names::LEFT, "left"),
    (names::TOP, "top"),
    (names::RIGHT, "right"),
    (names::BOTTOM, "bottom"),
];

/// Render the position capability.
///
/// A static (or unset) position emits nothing at all, including offsets
/// that happen to be set.
pub fn render_position(ctx: &RenderContext<'_>, out: &mut StyleAttributes) {
    let mode = ctx
        .props
        .get_as::<PositionMode>(names::POSITION)
        .unwrap_or_default();
    if mode == PositionMode::Static {
        return;
    }

    out.set("position", mode.keyword());
    for (property, attribute) in OFFSETS {
        if let Some(offset) = ctx.props.get_as::<Length>(property) {
            out.set(attribute, offset.to_string());
        }
    }

    let z_index = ctx.props.get_or(names::Z_INDEX, Z_INDEX_UNSET);
    if z_index != Z_INDEX_UNSET {
        out.set("z-index", z_index.to_string());
    }
}
