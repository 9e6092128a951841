//! Icon catalog and inline icon resolution
//!
//! Glyphs come from an Iconify icon set and are rendered once, at
//! configuration-build time, to `<svg>` markup sized 1em so they sit inline
//! with callout titles.

mod catalog;
pub mod config;
mod resolver;
pub mod svg;

pub use catalog::{CatalogError, IconCatalog, IconData, IconGlyph};
pub use config::IconOptions;
pub use resolver::{resolve, resolve_with_options, IconError, InlineIcon};
pub use svg::SvgAttributes;
