//! Rendering options and configuration.

/// Options for rendering the XML documents.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Overview title of the question form, usually the `description`
    /// property of the test
    pub title: String,

    /// Number of spaces per indentation level
    pub indent_size: usize,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overview title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the indentation width.
    pub fn with_indent(mut self, size: usize) -> Self {
        self.indent_size = size;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            indent_size: 2,
        }
    }
}
