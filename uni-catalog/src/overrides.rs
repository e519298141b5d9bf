//! Per-tag attribute overrides.
//!
//! The attribute table holds one definition per key, but several components
//! reuse a key with different meanings (`mode` on `picker` is the picker kind,
//! not whatever the shared entry describes). The override table pins the
//! right definition for a specific `(tag, attribute)` pair.

use indexmap::IndexMap;

use crate::{AttributeDef, Catalog};

/// Mapping of `tag -> attribute key -> definition`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideTable {
    entries: IndexMap<String, IndexMap<String, AttributeDef>>,
}

impl OverrideTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The overrides shipped with the generator.
    pub fn builtin() -> Self {
        Self::new().with(
            "picker",
            "mode",
            AttributeDef::new("String")
                .description(
                    "selector 普通选择器, multiSelector 多列选择器, time 时间选择器, date 日期选择器, region 省市区选择器",
                )
                .options(["selector", "multiSelector", "time", "date", "region"]),
        )
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(
        mut self,
        tag: impl Into<String>,
        key: impl Into<String>,
        attribute: AttributeDef,
    ) -> Self {
        self.insert(tag, key, attribute);
        self
    }

    /// Set the override for `(tag, key)`, returning the entry it replaced.
    pub fn insert(
        &mut self,
        tag: impl Into<String>,
        key: impl Into<String>,
        attribute: AttributeDef,
    ) -> Option<AttributeDef> {
        self.entries
            .entry(tag.into())
            .or_default()
            .insert(key.into(), attribute)
    }

    /// Merge `other` into this table. Entries of `other` replace existing
    /// entries for the same `(tag, key)` as a whole.
    pub fn extend(&mut self, other: OverrideTable) {
        for (tag, attributes) in other.entries {
            for (key, attribute) in attributes {
                self.insert(tag.clone(), key, attribute);
            }
        }
    }

    /// Look up the override for `(tag, key)`.
    pub fn lookup(&self, tag: &str, key: &str) -> Option<&AttributeDef> {
        self.entries.get(tag).and_then(|attributes| attributes.get(key))
    }

    /// The definition that applies to `key` on `tag`.
    ///
    /// The override wins when present, otherwise the global definition is
    /// used. Fields are never merged between the two. `None` means the
    /// attribute is defined nowhere and should be left out.
    pub fn effective<'a>(
        &'a self,
        tag: &str,
        key: &str,
        catalog: &'a Catalog,
    ) -> Option<&'a AttributeDef> {
        self.lookup(tag, key).or_else(|| catalog.attribute(key))
    }

    /// Iterate all overrides as `(tag, key, definition)`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &AttributeDef)> {
        self.entries.iter().flat_map(|(tag, attributes)| {
            attributes
                .iter()
                .map(move |(key, attribute)| (tag.as_str(), key.as_str(), attribute))
        })
    }

    /// Total number of `(tag, key)` overrides.
    pub fn len(&self) -> usize {
        self.entries.values().map(IndexMap::len).sum()
    }

    /// Returns true if the table has no overrides.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
