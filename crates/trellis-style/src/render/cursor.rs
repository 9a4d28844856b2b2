//! Mouse cursor renderer.

use super::{RenderContext, escape_uri};
use crate::property::names;
use crate::style::StyleAttributes;
use crate::types::MouseCursor;

/// Render the mouse cursor capability.
///
/// The cursor kind is authoritative. Without a kind nothing is emitted, even
/// when a URI is still stored; the URI is only read for
/// [`MouseCursor::CustomUri`].
pub fn render_cursor(ctx: &RenderContext<'_>, out: &mut StyleAttributes) {
    let Some(kind) = ctx.props.get_as::<MouseCursor>(names::MOUSE_CURSOR) else {
        return;
    };

    match kind.keyword() {
        Some(keyword) => out.set("cursor", keyword),
        None => {
            if let Some(uri) = ctx.props.get_as::<String>(names::MOUSE_CURSOR_URI) {
                out.set("cursor", format!("uri({})", escape_uri(&uri)));
            }
        }
    }
}
