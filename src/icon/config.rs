//! Configuration for inline icon rendering

/// Options controlling how glyphs are turned into inline SVG
#[derive(Debug, Clone)]
pub struct IconOptions {
    /// Value of the root `width` attribute
    pub width: String,

    /// Value of the root `height` attribute
    pub height: String,

    /// Prefix for regenerated element ids (e.g. "callout-icon-" for "callout-icon-1a")
    pub id_prefix: String,
}

impl Default for IconOptions {
    fn default() -> Self {
        Self {
            width: "1em".to_string(),
            height: "1em".to_string(),
            id_prefix: "callout-icon-".to_string(),
        }
    }
}

impl IconOptions {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both dimensions to the same value
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        let size = size.into();
        self.width = size.clone();
        self.height = size;
        self
    }

    /// Set the prefix used for rewritten element ids
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }
}
