//! Lint for overrides that never apply.

use super::{Lint, LintContext};
use crate::Diagnostic;

/// Warns about overrides whose tag is not in the catalog or whose tag does
/// not list the overridden key.
pub struct UnusedOverrideLint;

impl Lint for UnusedOverrideLint {
    fn name(&self) -> &'static str {
        "unused-override"
    }

    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        for (name, key, _) in ctx.overrides.iter() {
            let message = match ctx.catalog.tag(name) {
                None => format!("override for '{key}' targets unknown tag <{name}>"),
                Some(tag) if !tag.attribute_keys().iter().any(|k| k == key) => {
                    format!("override for '{key}' is unused, <{name}> does not list it")
                }
                Some(_) => continue,
            };
            diagnostics.push(
                Diagnostic::warning(self.name(), message).at(format!("overrides.{name}.{key}")),
            );
        }
    }
}
