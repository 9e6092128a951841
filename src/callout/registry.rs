//! Callout registry: resolved definitions and container attribute synthesis

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::kind::CalloutKind;
use crate::icon::{resolve_with_options, IconCatalog, IconError, IconOptions, InlineIcon};

/// Classes applied to every callout container, styled or not
pub const STRUCTURAL_CLASSES: &str = "callout border-l-[0.25em]";

/// A fully resolved callout type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalloutDefinition {
    #[serde(skip)]
    pub kind: CalloutKind,
    pub title: String,
    pub indicator: InlineIcon,
    #[serde(rename = "style")]
    pub border_style: String,
    #[serde(rename = "textColor")]
    pub text_color_style: String,
}

impl CalloutDefinition {
    pub fn type_key(&self) -> &'static str {
        self.kind.key()
    }
}

/// Attributes for the element wrapping a rendered callout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContainerAttributes(BTreeMap<String, String>);

impl ContainerAttributes {
    pub fn class(&self) -> Option<&str> {
        self.get("class")
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, name: &str, value: String) {
        self.0.insert(name.to_string(), value);
    }
}

/// Registry of every callout type in the vocabulary
///
/// Built eagerly: every icon is resolved during construction, so a typo in
/// an icon name stops the configuration from being built at all.
#[derive(Debug, Clone)]
pub struct CalloutRegistry {
    // Indexed by `CalloutKind::index`
    definitions: Vec<CalloutDefinition>,
}

impl CalloutRegistry {
    /// Build the registry, resolving icons at the default inline size
    pub fn build(catalog: &IconCatalog) -> Result<Self, IconError> {
        Self::build_with_options(catalog, &IconOptions::default())
    }

    /// Build the registry with custom icon options
    pub fn build_with_options(
        catalog: &IconCatalog,
        options: &IconOptions,
    ) -> Result<Self, IconError> {
        let definitions = CalloutKind::ALL
            .iter()
            .map(|&kind| {
                let entry = kind.entry();
                Ok(CalloutDefinition {
                    kind,
                    title: entry.title.to_string(),
                    indicator: resolve_with_options(catalog, entry.icon, options)?,
                    border_style: entry.border_style.to_string(),
                    text_color_style: entry.text_color_style.to_string(),
                })
            })
            .collect::<Result<Vec<_>, IconError>>()?;

        tracing::debug!(
            entries = definitions.len(),
            catalog = catalog.prefix(),
            "Built callout registry"
        );

        Ok(Self { definitions })
    }

    /// Get the definition for a type key
    pub fn lookup(&self, type_key: &str) -> Option<&CalloutDefinition> {
        CalloutKind::from_key(type_key).and_then(|kind| self.get(kind))
    }

    /// Get the definition for a callout kind
    pub fn get(&self, kind: CalloutKind) -> Option<&CalloutDefinition> {
        self.definitions.get(kind.index())
    }

    /// Check if a type key is registered
    pub fn contains(&self, type_key: &str) -> bool {
        self.lookup(type_key).is_some()
    }

    /// Compute the container attributes for a callout of the given type
    ///
    /// Unknown types get the structural classes only.
    pub fn synthesize_container_attributes(&self, type_key: &str) -> ContainerAttributes {
        let mut class = String::from(STRUCTURAL_CLASSES);
        match self.lookup(type_key) {
            Some(def) => {
                class.push(' ');
                class.push_str(&def.text_color_style);
                class.push(' ');
                class.push_str(&def.border_style);
            }
            None => {
                tracing::trace!(type_key, "No callout definition; using structural classes only");
            }
        }

        let mut attributes = ContainerAttributes::default();
        attributes.insert("class", class);
        attributes
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Definitions in table order
    pub fn iter(&self) -> impl Iterator<Item = &CalloutDefinition> {
        self.definitions.iter()
    }

    /// All registered type keys, in table order
    pub fn type_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.definitions.iter().map(|def| def.type_key())
    }
}

impl Serialize for CalloutRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.definitions.len()))?;
        for def in &self.definitions {
            map.serialize_entry(def.type_key(), def)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::IconData;

    /// Catalog containing every icon the table references
    fn full_catalog() -> IconCatalog {
        let mut catalog = IconCatalog::new("test");
        for kind in CalloutKind::ALL {
            let icon = kind.entry().icon;
            let body = format!("<path d=\"M0 0\" data-icon=\"{}\"/>", icon);
            catalog.insert(icon, IconData::new(body, 24.0, 24.0));
        }
        catalog
    }

    #[test]
    fn test_build_registers_every_kind() {
        let registry = CalloutRegistry::build(&full_catalog()).expect("Should build");
        assert_eq!(registry.len(), CalloutKind::ALL.len());
        assert!(!registry.is_empty());
        for kind in CalloutKind::ALL {
            let def = registry.get(kind).expect("registered");
            assert_eq!(def.kind, kind);
            assert_eq!(def.type_key(), kind.key());
        }
    }

    #[test]
    fn test_build_fails_on_missing_icon() {
        let mut catalog = IconCatalog::new("test");
        catalog.insert("info", IconData::new("<path/>", 24.0, 24.0));

        let result = CalloutRegistry::build(&catalog);
        assert!(matches!(result, Err(IconError::NotFound { .. })));
    }

    #[test]
    fn test_lookup_known_and_unknown() {
        let registry = CalloutRegistry::build(&full_catalog()).unwrap();
        let note = registry.lookup("note").expect("note registered");
        assert_eq!(note.title, "Note");
        assert!(note.indicator.as_str().contains("data-icon=\"info\""));
        assert!(registry.lookup("__unknown__").is_none());
        assert!(!registry.contains("NOTE"));
    }

    #[test]
    fn test_synthesize_known_type() {
        let registry = CalloutRegistry::build(&full_catalog()).unwrap();
        let attrs = registry.synthesize_container_attributes("warning");
        assert_eq!(
            attrs.class(),
            Some(concat!(
                "callout border-l-[0.25em] ",
                "text-amber-700 dark:text-amber-300 ",
                "border-amber-500 dark:bg-amber-950/5"
            ))
        );
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_synthesize_unknown_type_degrades() {
        let registry = CalloutRegistry::build(&full_catalog()).unwrap();
        let attrs = registry.synthesize_container_attributes("__unknown__");
        assert_eq!(attrs.class(), Some(STRUCTURAL_CLASSES));
        assert_eq!(attrs.iter().count(), 1);
    }

    #[test]
    fn test_type_keys_in_table_order() {
        let registry = CalloutRegistry::build(&full_catalog()).unwrap();
        let keys: Vec<&str> = registry.type_keys().collect();
        assert_eq!(keys.first(), Some(&"note"));
        assert_eq!(keys.last(), Some(&"summary"));
    }

    #[test]
    fn test_definition_serializes_engine_fields() {
        let registry = CalloutRegistry::build(&full_catalog()).unwrap();
        let value = serde_json::to_value(registry.lookup("tip").unwrap()).unwrap();
        assert_eq!(value["title"], "Tip");
        assert_eq!(value["style"], "border-green-500 dark:bg-green-950/5");
        assert_eq!(value["textColor"], "text-green-700 dark:text-green-300");
        assert!(value["indicator"].as_str().unwrap().starts_with("<svg"));
        assert!(value.get("kind").is_none());
    }
}
