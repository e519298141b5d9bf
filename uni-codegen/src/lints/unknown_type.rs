//! Lint for raw types that degrade to `string`.

use indexmap::{IndexMap, IndexSet};
use unidts_catalog::AttributeDef;

use super::{Lint, LintContext};
use crate::{
    Diagnostic,
    type_mapper::{BOOLEAN_MARKER, TypeToken, parse_raw_type},
};

/// Warns about type alternatives that match no base type.
///
/// Each definition is reported once: global definitions at
/// `attributes.<key>`, overrides at `overrides.<tag>.<key>`. Definitions
/// whose options replace the raw type are skipped.
pub struct UnknownTypeLint;

impl Lint for UnknownTypeLint {
    fn name(&self) -> &'static str {
        "unknown-type"
    }

    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: IndexMap<String, &AttributeDef> = IndexMap::new();

        for (name, tag) in ctx.catalog.tags() {
            let keys: IndexSet<&str> = tag.attribute_keys().iter().map(String::as_str).collect();
            for key in keys {
                let (location, def) = match ctx.overrides.lookup(name, key) {
                    Some(def) => (format!("overrides.{name}.{key}"), def),
                    None => match ctx.catalog.attribute(key) {
                        Some(def) => (format!("attributes.{key}"), def),
                        None => continue,
                    },
                };
                seen.entry(location).or_insert(def);
            }
        }

        for (location, def) in seen {
            if uses_options(def) {
                continue;
            }
            for token in parse_raw_type(&def.ty) {
                if let TypeToken::Fallback(raw) = token {
                    diagnostics.push(
                        Diagnostic::warning(
                            self.name(),
                            format!("unknown type '{raw}' mapped to string"),
                        )
                        .at(location.clone()),
                    );
                }
            }
        }
    }
}

fn uses_options(def: &AttributeDef) -> bool {
    def.options.as_ref().is_some_and(|o| !o.is_empty()) && def.ty != BOOLEAN_MARKER
}

#[cfg(test)]
mod tests {
    use unidts_catalog::{Catalog, OverrideTable, TagDef};

    use super::*;
    use crate::lints::test_support::{check, sample_catalog};

    #[test]
    fn test_unknown_type() {
        let diagnostics = check(UnknownTypeLint, &sample_catalog(), &OverrideTable::new());

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "unknown type 'Color' mapped to string");
        assert_eq!(diagnostics[0].location.as_deref(), Some("attributes.hover-class"));
    }

    #[test]
    fn test_shared_definition_reported_once() {
        let catalog = Catalog::new()
            .with_tag("a", TagDef::new("").attribute("cb"))
            .with_tag("b", TagDef::new("").attribute("cb"))
            .with_attribute("cb", AttributeDef::new("Function|Number"));

        let diagnostics = check(UnknownTypeLint, &catalog, &OverrideTable::new());
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_override_is_checked_instead_of_global() {
        let catalog = Catalog::new()
            .with_tag("a", TagDef::new("").attribute("cb"))
            .with_attribute("cb", AttributeDef::new("Function"));
        let overrides = OverrideTable::new().with("a", "cb", AttributeDef::new("ts:() => void"));

        assert!(check(UnknownTypeLint, &catalog, &overrides).is_empty());
    }

    #[test]
    fn test_unused_global_definition_ignored() {
        let catalog = Catalog::new().with_attribute("cb", AttributeDef::new("Function"));
        assert!(check(UnknownTypeLint, &catalog, &OverrideTable::new()).is_empty());
    }
}
