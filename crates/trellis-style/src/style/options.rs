//! Render configuration.

/// Options shared by full renders and partial updates.
///
/// # Example
///
/// ```
/// use trellis_style::style::RenderOptions;
///
/// let options = RenderOptions::new().with_scrollbar_colors(false);
/// assert!(!options.scrollbar_colors);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit `scrollbar-*-color` attributes for scrollable components.
    pub scrollbar_colors: bool,
}

impl RenderOptions {
    /// Create the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable scrollbar colour attributes.
    pub fn with_scrollbar_colors(mut self, enabled: bool) -> Self {
        self.scrollbar_colors = enabled;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scrollbar_colors: true,
        }
    }
}
