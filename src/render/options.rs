//! Rendering options configuration.

use super::labels::Language;

/// Options for rendering reports as text.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Label language
    pub language: Language,

    /// Show values quoted and escaped, so blanks and control characters are visible
    pub quote_values: bool,

    /// Truncate values wider than this many terminal columns
    pub max_value_width: Option<usize>,

    /// Spaces per indentation level
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            language: Language::English,
            quote_values: true,
            max_value_width: None,
            indent: 2,
        }
    }
}

impl RenderOptions {
    /// Create new render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Show values quoted or verbatim.
    pub fn with_quoted_values(mut self, quote: bool) -> Self {
        self.quote_values = quote;
        self
    }

    /// Truncate long values to a display width (minimum 4 columns).
    pub fn with_max_value_width(mut self, width: Option<usize>) -> Self {
        self.max_value_width = width.map(|w| w.max(4));
        self
    }

    /// Set indentation width (at most 8).
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent.min(8);
        self
    }
}
