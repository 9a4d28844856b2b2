//! Rendered style attributes and render options.

mod attributes;
mod options;

pub use attributes::{StyleAttribute, StyleAttributes};
pub use options::RenderOptions;
