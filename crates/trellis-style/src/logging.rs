//! Tracing targets used by the style renderer.
//!
//! The crate logs through the `tracing` facade and never installs a
//! subscriber. Use these targets with `tracing` directives to filter
//! output per subsystem:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("trellis_style::update=trace")
//!     .init();
//! ```

/// Target names for log filtering.
pub mod targets {
    /// Full style composition.
    pub const COMPOSE: &str = "trellis_style::compose";
    /// Partial update dispatch.
    pub const UPDATE: &str = "trellis_style::update";
    /// Property resolution.
    pub const PROPERTY: &str = "trellis_style::property";
}
