//! Lint for attribute keys listed twice on one tag.

use indexmap::IndexMap;

use super::{Lint, LintContext};
use crate::Diagnostic;

/// Warns when a tag lists the same attribute key more than once.
pub struct DuplicateAttributeLint;

impl Lint for DuplicateAttributeLint {
    fn name(&self) -> &'static str {
        "duplicate-attribute"
    }

    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        for (name, tag) in ctx.catalog.tags() {
            let mut counts: IndexMap<&str, usize> = IndexMap::new();
            for key in tag.attribute_keys() {
                *counts.entry(key.as_str()).or_default() += 1;
            }

            for (key, count) in counts.into_iter().filter(|(_, count)| *count > 1) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!("<{name}> lists attribute '{key}' {count} times"),
                    )
                    .at(format!("tags.{name}.{key}")),
                );
            }
        }
    }
}
