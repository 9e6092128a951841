//! Errors raised while building the callout configuration

use thiserror::Error;

use crate::icon::{CatalogError, IconError};

/// Any failure that prevents the configuration from being built
///
/// There is no partial configuration: if one icon is missing the whole
/// build is rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The icon catalog could not be loaded
    #[error("icon catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A callout references an icon the catalog does not have
    #[error("icon error: {0}")]
    Icon(#[from] IconError),
}
