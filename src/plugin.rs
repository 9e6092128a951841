//! Configuration bundle handed to the rehype callout transformer
//!
//! The transformer expects a `[plugin, options]` pair. `options` carries the
//! theme preset, the callout definitions used to build each block header,
//! and a `container_props` hook called once per callout block.

use std::sync::Arc;

use serde::ser::{SerializeStruct, SerializeTuple};
use serde::{Serialize, Serializer};

use crate::callout::{CalloutRegistry, ContainerAttributes};

/// Name of the tree transformer this configuration targets
pub const TRANSFORMER: &str = "rehype-callouts";

/// Style preset selected on the transformer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Obsidian,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Obsidian => "obsidian",
        }
    }
}

/// Per-block hooks invoked by the transformer
#[derive(Debug, Clone)]
pub struct CalloutProps {
    registry: Arc<CalloutRegistry>,
}

impl CalloutProps {
    /// Attributes for the container element of a callout block
    ///
    /// The node is not inspected; only the type key selects the styling.
    pub fn container_props<N: ?Sized>(&self, _node: &N, type_key: &str) -> ContainerAttributes {
        self.registry.synthesize_container_attributes(type_key)
    }
}

/// Options passed alongside the transformer
#[derive(Debug, Clone)]
pub struct CalloutOptions {
    pub theme: Theme,
    pub callouts: Arc<CalloutRegistry>,
    pub props: CalloutProps,
}

impl Serialize for CalloutOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // `props` holds hooks, not data
        let mut state = serializer.serialize_struct("CalloutOptions", 2)?;
        state.serialize_field("theme", &self.theme)?;
        state.serialize_field("callouts", self.callouts.as_ref())?;
        state.end()
    }
}

/// The `[transformer, options]` pair consumed by the document pipeline
#[derive(Debug, Clone)]
pub struct PluginConfig {
    pub transformer: &'static str,
    pub options: CalloutOptions,
}

impl PluginConfig {
    pub fn new(registry: CalloutRegistry) -> Self {
        let registry = Arc::new(registry);
        Self {
            transformer: TRANSFORMER,
            options: CalloutOptions {
                theme: Theme::default(),
                callouts: Arc::clone(&registry),
                props: CalloutProps { registry },
            },
        }
    }

    pub fn registry(&self) -> &CalloutRegistry {
        &self.options.callouts
    }

    /// Shortcut for `options.props.container_props`
    pub fn container_props<N: ?Sized>(&self, node: &N, type_key: &str) -> ContainerAttributes {
        self.options.props.container_props(node, type_key)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for PluginConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(self.transformer)?;
        tuple.serialize_element(&self.options)?;
        tuple.end()
    }
}
