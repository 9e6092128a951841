//! Resolve named glyphs to inline SVG markup

use serde::{Serialize, Serializer};
use thiserror::Error;

use super::catalog::IconCatalog;
use super::svg::{icon_to_html, icon_to_svg, replace_ids, SvgAttributes};
use super::IconOptions;

/// Errors that can occur while resolving icons
#[derive(Debug, Error)]
pub enum IconError {
    /// Glyph name has no entry in the catalog
    #[error("icon not found: {name}")]
    NotFound { name: String },
}

/// A glyph rendered as inline SVG sized to follow the surrounding text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineIcon {
    /// Complete `<svg>` markup
    pub markup: String,
    /// Root element attributes (already present in `markup`)
    pub attributes: SvgAttributes,
}

impl InlineIcon {
    pub fn as_str(&self) -> &str {
        &self.markup
    }
}

impl std::fmt::Display for InlineIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.markup)
    }
}

impl Serialize for InlineIcon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.markup)
    }
}

/// Resolve a glyph at the default 1em inline size
pub fn resolve(catalog: &IconCatalog, name: &str) -> Result<InlineIcon, IconError> {
    resolve_with_options(catalog, name, &IconOptions::default())
}

/// Resolve a glyph with custom rendering options
pub fn resolve_with_options(
    catalog: &IconCatalog,
    name: &str,
    options: &IconOptions,
) -> Result<InlineIcon, IconError> {
    let glyph = catalog.glyph(name).ok_or_else(|| IconError::NotFound {
        name: name.to_string(),
    })?;

    let rendered = icon_to_svg(&glyph.data, options);
    let body = replace_ids(&rendered.body, &options.id_prefix);
    let markup = icon_to_html(&body, &rendered.attributes);

    tracing::trace!(icon = name, prefix = catalog.prefix(), "Resolved inline icon");

    Ok(InlineIcon {
        markup,
        attributes: rendered.attributes,
    })
}
