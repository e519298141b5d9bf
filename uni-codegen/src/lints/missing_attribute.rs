//! Lint for attribute keys with no definition.

use indexmap::IndexSet;

use super::{Lint, LintContext};
use crate::Diagnostic;

/// Warns about keys found in neither the override nor the global table.
/// Such attributes are left out of the generated type.
pub struct MissingAttributeLint;

impl Lint for MissingAttributeLint {
    fn name(&self) -> &'static str {
        "missing-attribute"
    }

    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        for (name, tag) in ctx.catalog.tags() {
            let keys: IndexSet<&str> = tag.attribute_keys().iter().map(String::as_str).collect();
            for key in keys {
                if ctx.overrides.effective(name, key, ctx.catalog).is_none() {
                    diagnostics.push(
                        Diagnostic::warning(
                            self.name(),
                            format!("attribute '{key}' of <{name}> has no definition and was dropped"),
                        )
                        .at(format!("tags.{name}.{key}")),
                    );
                }
            }
        }
    }
}
