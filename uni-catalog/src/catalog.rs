//! Component catalog: tag and attribute definitions.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::{Error, Result, error::SourceContext};

/// Default location of the tag table inside a project.
pub const DEFAULT_TAGS_PATH: &str = "node_modules/@dcloudio/uni-helper-json/dist/tags.json";

/// Default location of the attribute table inside a project.
pub const DEFAULT_ATTRIBUTES_PATH: &str =
    "node_modules/@dcloudio/uni-helper-json/dist/attributes.json";

/// A built-in component entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TagDef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Attribute keys in catalog order. May repeat.
    #[serde(default)]
    pub attributes: Option<Vec<String>>,
}

impl TagDef {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            attributes: None,
        }
    }

    /// Append an attribute key.
    pub fn attribute(mut self, key: impl Into<String>) -> Self {
        self.attributes.get_or_insert_with(Vec::new).push(key.into());
        self
    }

    /// Attribute keys as listed, duplicates included.
    pub fn attribute_keys(&self) -> &[String] {
        self.attributes.as_deref().unwrap_or_default()
    }
}

/// An attribute definition, either global or from the override table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AttributeDef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Raw type string, e.g. `"String|Number"`.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub ty: String,
    #[serde(default)]
    pub options: Option<Vec<String>>,
}

impl AttributeDef {
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            description: String::new(),
            ty: ty.into(),
            options: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The tag table and the global attribute table.
///
/// Both tables keep the insertion order of their source documents; tag
/// order is the order declarations are emitted in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    tags: IndexMap<String, TagDef>,
    attributes: IndexMap<String, AttributeDef>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a tag.
    pub fn with_tag(mut self, name: impl Into<String>, tag: TagDef) -> Self {
        self.tags.insert(name.into(), tag);
        self
    }

    /// Add or replace a global attribute definition.
    pub fn with_attribute(mut self, key: impl Into<String>, attribute: AttributeDef) -> Self {
        self.attributes.insert(key.into(), attribute);
        self
    }

    /// Parse the two JSON documents.
    ///
    /// `tags_name` and `attributes_name` only label error reports.
    pub fn from_json_strs(
        tags_src: &str,
        tags_name: &str,
        attributes_src: &str,
        attributes_name: &str,
    ) -> Result<Self> {
        let tags = parse_json(tags_src, tags_name)?;
        let attributes = parse_json(attributes_src, attributes_name)?;
        Ok(Self { tags, attributes })
    }

    /// Read and parse the tag and attribute tables from disk.
    pub fn load(tags_path: impl AsRef<Path>, attributes_path: impl AsRef<Path>) -> Result<Self> {
        let tags_path = tags_path.as_ref();
        let attributes_path = attributes_path.as_ref();

        let tags_src = read(tags_path)?;
        let attributes_src = read(attributes_path)?;
        let catalog = Self::from_json_strs(
            &tags_src,
            &tags_path.display().to_string(),
            &attributes_src,
            &attributes_path.display().to_string(),
        )?;

        tracing::debug!(
            tags = catalog.tags.len(),
            attributes = catalog.attributes.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Iterate tags in catalog order.
    pub fn tags(&self) -> impl Iterator<Item = (&str, &TagDef)> {
        self.tags.iter().map(|(name, tag)| (name.as_str(), tag))
    }

    /// Look up a tag by name.
    pub fn tag(&self, name: &str) -> Option<&TagDef> {
        self.tags.get(name)
    }

    /// Look up a global attribute definition.
    pub fn attribute(&self, key: &str) -> Option<&AttributeDef> {
        self.attributes.get(key)
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if the catalog has no tags.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

fn parse_json<T>(src: &str, filename: &str) -> Result<IndexMap<String, T>>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_str(src).map_err(|e| SourceContext::new(src, filename).json_error(e))
}
