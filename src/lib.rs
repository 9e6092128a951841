//! Callout configuration for rehype-based Markdown pipelines
//!
//! This library builds the options for a callout transformer: a closed
//! vocabulary of callout types (note, warning, theorem, proof, ...), each
//! resolved to a title, an inline SVG icon and Tailwind class sets, plus the
//! hook that computes the container attributes of every callout block.
//!
//! # Example
//!
//! ```rust
//! use callout_config::{build_plugin_config, CalloutKind, IconCatalog, IconData};
//!
//! let mut catalog = IconCatalog::new("lucide");
//! for kind in CalloutKind::ALL {
//!     catalog.insert(kind.entry().icon, IconData::new("<path d=\"M4 4h16\"/>", 24.0, 24.0));
//! }
//!
//! let config = build_plugin_config(&catalog).unwrap();
//! let attrs = config.container_props(&(), "warning");
//! assert!(attrs.class().unwrap().contains("border-amber-500"));
//! ```

pub mod callout;
pub mod error;
pub mod icon;
pub mod plugin;

pub use callout::{
    CalloutDefinition, CalloutKind, CalloutRegistry, ContainerAttributes, STRUCTURAL_CLASSES,
};
pub use error::ConfigError;
pub use icon::{
    resolve, resolve_with_options, CatalogError, IconCatalog, IconData, IconError, IconGlyph,
    IconOptions, InlineIcon,
};
pub use plugin::{CalloutOptions, CalloutProps, PluginConfig, Theme, TRANSFORMER};

use std::path::Path;

/// Build the plugin configuration from an icon catalog
///
/// Fails if any callout type references an icon that the catalog lacks.
pub fn build_plugin_config(catalog: &IconCatalog) -> Result<PluginConfig, ConfigError> {
    let registry = CalloutRegistry::build(catalog)?;
    Ok(PluginConfig::new(registry))
}

/// Load an icon catalog (`.json` or `.toml`) and build the plugin configuration
pub fn load_plugin_config(catalog_path: &Path) -> Result<PluginConfig, ConfigError> {
    let catalog = IconCatalog::from_file(catalog_path)?;
    build_plugin_config(&catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_plugin_config_missing_icon() {
        let catalog = IconCatalog::new("empty");
        let result = build_plugin_config(&catalog);
        match result {
            Err(ConfigError::Icon(IconError::NotFound { name })) => assert_eq!(name, "info"),
            other => panic!("expected missing icon error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_load_plugin_config_missing_file() {
        let result = load_plugin_config(Path::new("does/not/exist.json"));
        assert!(matches!(
            result,
            Err(ConfigError::Catalog(CatalogError::IoError(_)))
        ));
    }

    #[test]
    fn test_registry_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CalloutRegistry>();
        assert_send_sync::<PluginConfig>();
    }
}
