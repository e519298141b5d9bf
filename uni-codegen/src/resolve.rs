//! Per-tag attribute resolution.

use indexmap::IndexSet;
use unidts_catalog::{Catalog, OverrideTable, TagDef};
use unidts_core::{to_camel_case, to_pascal_case};

use crate::{
    ast::{ComponentAlias, Field},
    type_mapper::attribute_type,
};

/// An attribute ready to be emitted as an object type member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAttribute {
    /// Catalog key, e.g. `hover-class`.
    pub key: String,
    /// camelCase member name, e.g. `hoverClass`.
    pub identifier: String,
    pub type_expression: String,
    pub description: String,
}

impl ResolvedAttribute {
    pub fn to_field(&self) -> Field {
        Field::new(&self.identifier, &self.type_expression).doc(&self.description)
    }
}

/// Everything needed to emit one tag's type alias and registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDeclaration {
    /// Catalog tag name, e.g. `picker-view`.
    pub tag: String,
    /// PascalCase component name used as the registry key, e.g. `PickerView`.
    pub component: String,
    /// Prefixed alias name, e.g. `TPickerView`.
    pub identifier: String,
    pub description: String,
    pub attributes: Vec<ResolvedAttribute>,
}

impl TagDeclaration {
    /// Resolve one catalog tag.
    ///
    /// Attribute keys are deduplicated keeping first-occurrence order. Each
    /// key takes its definition from the override table when an entry exists
    /// for this tag, else from the global table; keys found in neither are
    /// left out.
    pub fn resolve(
        name: &str,
        tag: &TagDef,
        catalog: &Catalog,
        overrides: &OverrideTable,
        prefix: &str,
    ) -> Self {
        let keys: IndexSet<&str> = tag.attribute_keys().iter().map(String::as_str).collect();

        let attributes = keys
            .into_iter()
            .filter_map(|key| {
                let def = overrides.effective(name, key, catalog)?;
                Some(ResolvedAttribute {
                    key: key.to_string(),
                    identifier: to_camel_case(key),
                    type_expression: attribute_type(def),
                    description: def.description.clone(),
                })
            })
            .collect();

        let component = to_pascal_case(name);
        Self {
            tag: name.to_string(),
            identifier: format!("{prefix}{component}"),
            component,
            description: tag.description.clone(),
            attributes,
        }
    }

    /// The type alias for this tag, built on the `helper` component type.
    pub fn to_alias(&self, helper: &str) -> ComponentAlias {
        ComponentAlias::new(&self.identifier, helper)
            .doc(&self.description)
            .props(self.attributes.iter().map(ResolvedAttribute::to_field))
    }
}

/// Resolve every tag in catalog order.
pub fn resolve_catalog(
    catalog: &Catalog,
    overrides: &OverrideTable,
    prefix: &str,
) -> Vec<TagDeclaration> {
    catalog
        .tags()
        .map(|(name, tag)| {
            let declaration = TagDeclaration::resolve(name, tag, catalog, overrides, prefix);
            tracing::debug!(
                tag = name,
                identifier = %declaration.identifier,
                attributes = declaration.attributes.len(),
                "resolved tag"
            );
            declaration
        })
        .collect()
}
