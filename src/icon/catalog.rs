//! Icon catalog in the Iconify icon-set format
//!
//! A catalog maps glyph names to vector definitions. It is read from an
//! external asset library (JSON, as published by `@iconify-json/*`, or the
//! same schema written as TOML) and never modified afterwards.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Default view box size used by Iconify when an icon set omits it
const DEFAULT_ICON_SIZE: f64 = 16.0;

/// Maximum number of alias hops followed before a glyph is treated as missing
const MAX_ALIAS_DEPTH: usize = 36;

/// Errors that can occur when loading an icon catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read icon catalog file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse icon catalog JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Failed to parse icon catalog TOML: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Vector drawing definition for a single glyph
#[derive(Debug, Clone, PartialEq)]
pub struct IconData {
    /// Inner SVG markup (everything between `<svg>` and `</svg>`)
    pub body: String,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation in quarter turns (0-3)
    pub rotate: u8,
    pub h_flip: bool,
    pub v_flip: bool,
}

impl IconData {
    /// Create icon data with a body and view box size, no transformations
    pub fn new(body: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            body: body.into(),
            left: 0.0,
            top: 0.0,
            width,
            height,
            rotate: 0,
            h_flip: false,
            v_flip: false,
        }
    }

    /// Set the rotation in quarter turns
    pub fn with_rotate(mut self, quarter_turns: u8) -> Self {
        self.rotate = quarter_turns % 4;
        self
    }

    /// Set horizontal and vertical flips
    pub fn with_flip(mut self, horizontal: bool, vertical: bool) -> Self {
        self.h_flip = horizontal;
        self.v_flip = vertical;
        self
    }
}

/// A named glyph resolved from a catalog
#[derive(Debug, Clone, PartialEq)]
pub struct IconGlyph {
    pub name: String,
    pub data: IconData,
}

/// Dimension and transformation overrides carried by an icon or alias entry
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntryProps {
    left: Option<f64>,
    top: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
    rotate: Option<u8>,
    h_flip: Option<bool>,
    v_flip: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
struct IconEntry {
    body: String,
    #[serde(flatten)]
    props: EntryProps,
}

#[derive(Debug, Clone, Deserialize)]
struct AliasEntry {
    parent: String,
    #[serde(flatten)]
    props: EntryProps,
}

/// Serialized icon set document, shared by the JSON and TOML loaders
#[derive(Deserialize)]
struct IconSetDocument {
    prefix: String,
    left: Option<f64>,
    top: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
    #[serde(default)]
    icons: HashMap<String, IconEntry>,
    #[serde(default)]
    aliases: HashMap<String, AliasEntry>,
}

/// Read-only table of glyphs keyed by name
#[derive(Debug, Clone)]
pub struct IconCatalog {
    prefix: String,
    icons: HashMap<String, IconData>,
    aliases: HashMap<String, AliasEntry>,
}

impl IconCatalog {
    /// Create an empty catalog with the given icon-set prefix
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            icons: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// Load a catalog from a file, choosing the format by extension
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let catalog = if is_toml {
            Self::from_toml(&content)?
        } else {
            Self::from_json(&content)?
        };
        tracing::debug!(
            path = %path.display(),
            prefix = %catalog.prefix,
            icons = catalog.icons.len(),
            aliases = catalog.aliases.len(),
            "Loaded icon catalog"
        );
        Ok(catalog)
    }

    /// Parse an Iconify JSON icon set
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let doc: IconSetDocument = serde_json::from_str(content)?;
        Ok(Self::from_document(doc))
    }

    /// Parse an icon set written as TOML
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let doc: IconSetDocument = toml::from_str(content)?;
        Ok(Self::from_document(doc))
    }

    fn from_document(doc: IconSetDocument) -> Self {
        let left = doc.left.unwrap_or(0.0);
        let top = doc.top.unwrap_or(0.0);
        let width = doc.width.unwrap_or(DEFAULT_ICON_SIZE);
        let height = doc.height.unwrap_or(DEFAULT_ICON_SIZE);

        let icons = doc
            .icons
            .into_iter()
            .map(|(name, entry)| {
                let props = entry.props;
                let data = IconData {
                    body: entry.body,
                    left: props.left.unwrap_or(left),
                    top: props.top.unwrap_or(top),
                    width: props.width.unwrap_or(width),
                    height: props.height.unwrap_or(height),
                    rotate: props.rotate.unwrap_or(0) % 4,
                    h_flip: props.h_flip.unwrap_or(false),
                    v_flip: props.v_flip.unwrap_or(false),
                };
                (name, data)
            })
            .collect();

        let aliases = doc
            .aliases
            .into_iter()
            .map(|(name, mut alias)| {
                alias.props.rotate = alias.props.rotate.map(|turns| turns % 4);
                (name, alias)
            })
            .collect();

        Self {
            prefix: doc.prefix,
            icons,
            aliases,
        }
    }

    /// Icon-set prefix (e.g. "lucide")
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Add or replace an icon
    pub fn insert(&mut self, name: impl Into<String>, data: IconData) {
        self.icons.insert(name.into(), data);
    }

    /// Add or replace an alias pointing at another icon or alias
    pub fn insert_alias(&mut self, name: impl Into<String>, parent: impl Into<String>) {
        self.aliases.insert(
            name.into(),
            AliasEntry {
                parent: parent.into(),
                props: EntryProps::default(),
            },
        );
    }

    /// Number of icons, not counting aliases
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Check whether a name resolves to a glyph
    pub fn contains(&self, name: &str) -> bool {
        self.glyph(name).is_some()
    }

    /// Look up a glyph by name, following aliases
    ///
    /// Returns None if the name is unknown, an alias chain is broken or
    /// cyclic, or the chain is deeper than Iconify allows.
    pub fn glyph(&self, name: &str) -> Option<IconGlyph> {
        let mut chain: Vec<&EntryProps> = Vec::new();
        let mut current = name;

        let base = loop {
            if let Some(data) = self.icons.get(current) {
                break data;
            }
            let alias = self.aliases.get(current)?;
            if chain.len() >= MAX_ALIAS_DEPTH {
                return None;
            }
            chain.push(&alias.props);
            current = alias.parent.as_str();
        };

        // Apply overrides from the alias closest to the base icon outwards
        let mut data = base.clone();
        for props in chain.iter().rev() {
            merge_props(&mut data, props);
        }

        Some(IconGlyph {
            name: name.to_string(),
            data,
        })
    }
}

/// Merge alias overrides into resolved icon data
fn merge_props(data: &mut IconData, props: &EntryProps) {
    if let Some(left) = props.left {
        data.left = left;
    }
    if let Some(top) = props.top {
        data.top = top;
    }
    if let Some(width) = props.width {
        data.width = width;
    }
    if let Some(height) = props.height {
        data.height = height;
    }
    data.rotate = (data.rotate % 4 + props.rotate.unwrap_or(0) % 4) % 4;
    data.h_flip ^= props.h_flip.unwrap_or(false);
    data.v_flip ^= props.v_flip.unwrap_or(false);
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JSON: &str = r#"{
        "prefix": "lucide",
        "width": 24,
        "height": 24,
        "icons": {
            "info": { "body": "<circle cx=\"12\" cy=\"12\" r=\"10\"/>" },
            "wide": { "body": "<path d=\"M0 0h32\"/>", "width": 32 }
        },
        "aliases": {
            "information": { "parent": "info" },
            "info-turned": { "parent": "information", "rotate": 1, "hFlip": true },
            "loop-a": { "parent": "loop-b" },
            "loop-b": { "parent": "loop-a" },
            "orphan": { "parent": "missing" }
        }
    }"#;

    #[test]
    fn test_parse_json_icon_set() {
        let catalog = IconCatalog::from_json(SAMPLE_JSON).expect("Should parse");
        assert_eq!(catalog.prefix(), "lucide");
        assert_eq!(catalog.len(), 2);

        let info = catalog.glyph("info").expect("info should exist");
        assert_eq!(info.data.width, 24.0);
        assert_eq!(info.data.height, 24.0);
        assert_eq!(info.data.left, 0.0);
    }

    #[test]
    fn test_icon_dimensions_override_set_defaults() {
        let catalog = IconCatalog::from_json(SAMPLE_JSON).unwrap();
        let wide = catalog.glyph("wide").unwrap();
        assert_eq!(wide.data.width, 32.0);
        assert_eq!(wide.data.height, 24.0);
    }

    #[test]
    fn test_missing_dimensions_default_to_16() {
        let catalog =
            IconCatalog::from_json(r#"{"prefix": "x", "icons": {"dot": {"body": "<g/>"}}}"#)
                .unwrap();
        let dot = catalog.glyph("dot").unwrap();
        assert_eq!((dot.data.width, dot.data.height), (16.0, 16.0));
    }

    #[test]
    fn test_alias_resolves_to_parent_body() {
        let catalog = IconCatalog::from_json(SAMPLE_JSON).unwrap();
        let glyph = catalog.glyph("information").expect("alias should resolve");
        assert_eq!(glyph.name, "information");
        assert_eq!(glyph.data.body, catalog.glyph("info").unwrap().data.body);
    }

    #[test]
    fn test_alias_chain_merges_transformations() {
        let catalog = IconCatalog::from_json(SAMPLE_JSON).unwrap();
        let glyph = catalog.glyph("info-turned").unwrap();
        assert_eq!(glyph.data.rotate, 1);
        assert!(glyph.data.h_flip);
        assert!(!glyph.data.v_flip);
    }

    #[test]
    fn test_broken_aliases_are_absent() {
        let catalog = IconCatalog::from_json(SAMPLE_JSON).unwrap();
        assert!(catalog.glyph("loop-a").is_none());
        assert!(catalog.glyph("orphan").is_none());
        assert!(catalog.glyph("nonexistent").is_none());
    }

    #[test]
    fn test_oversized_alias_rotation_wraps() {
        let json = r#"{
            "prefix": "x",
            "icons": { "a": { "body": "<g/>", "rotate": 3 } },
            "aliases": { "b": { "parent": "a", "rotate": 255 } }
        }"#;
        let catalog = IconCatalog::from_json(json).unwrap();
        let glyph = catalog.glyph("b").expect("alias should resolve");
        // 3 + (255 % 4 = 3) = 6, one half turn past a full turn
        assert_eq!(glyph.data.rotate, 2);
    }

    #[test]
    fn test_alias_rotations_add_modulo_four() {
        let json = r#"{
            "prefix": "x",
            "icons": { "a": { "body": "<g/>", "rotate": 3 } },
            "aliases": { "b": { "parent": "a", "rotate": 2 } }
        }"#;
        let catalog = IconCatalog::from_json(json).unwrap();
        assert_eq!(catalog.glyph("b").unwrap().data.rotate, 1);
    }

    #[test]
    fn test_alias_dimensions_override_parent() {
        let json = r#"{
            "prefix": "x",
            "width": 24,
            "height": 24,
            "icons": { "a": { "body": "<g/>" } },
            "aliases": {
                "cropped": { "parent": "a", "left": 2, "top": 3, "width": 20, "height": 18 }
            }
        }"#;
        let catalog = IconCatalog::from_json(json).unwrap();
        let glyph = catalog.glyph("cropped").unwrap();
        assert_eq!(glyph.data.left, 2.0);
        assert_eq!(glyph.data.top, 3.0);
        assert_eq!(glyph.data.width, 20.0);
        assert_eq!(glyph.data.height, 18.0);

        let base = catalog.glyph("a").unwrap();
        assert_eq!((base.data.width, base.data.height), (24.0, 24.0));
    }

    #[test]
    fn test_alias_chain_depth_limit() {
        let mut catalog = IconCatalog::new("x");
        catalog.insert("base", IconData::new("<g/>", 24.0, 24.0));
        catalog.insert_alias("hop-1", "base");
        for i in 2..=(MAX_ALIAS_DEPTH + 1) {
            catalog.insert_alias(format!("hop-{}", i), format!("hop-{}", i - 1));
        }

        assert!(catalog.glyph(&format!("hop-{}", MAX_ALIAS_DEPTH)).is_some());
        assert!(catalog
            .glyph(&format!("hop-{}", MAX_ALIAS_DEPTH + 1))
            .is_none());
    }

    #[test]
    fn test_parse_toml_icon_set() {
        let toml_str = r#"
prefix = "lucide"
width = 24
height = 24

[icons.check]
body = '<path d="M20 6L9 17l-5-5"/>'

[aliases.tick]
parent = "check"
vFlip = true
"#;
        let catalog = IconCatalog::from_toml(toml_str).expect("Should parse");
        assert!(catalog.contains("check"));
        let tick = catalog.glyph("tick").unwrap();
        assert!(tick.data.v_flip);
        assert_eq!(tick.data.width, 24.0);
    }

    #[test]
    fn test_in_memory_catalog() {
        let mut catalog = IconCatalog::new("test");
        catalog.insert("dot", IconData::new("<circle r=\"1\"/>", 2.0, 2.0));
        catalog.insert_alias("point", "dot");
        assert!(catalog.contains("point"));
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_invalid_json_error() {
        let result = IconCatalog::from_json("{ not json");
        assert!(matches!(result, Err(CatalogError::JsonError(_))));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = IconCatalog::from_toml("this is not valid toml {{{{");
        assert!(matches!(result, Err(CatalogError::TomlError(_))));
    }
}
