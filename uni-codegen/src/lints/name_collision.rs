//! Lint for generated identifiers that clash.

use indexmap::IndexMap;
use unidts_core::to_pascal_case;

use super::{Lint, LintContext};
use crate::{Diagnostic, emitter::RESERVED_TYPE_NAMES};

/// Errors when two tags normalize to the same type alias, or when an alias
/// shadows one of the preamble's helper types. Either would produce an
/// invalid declaration file.
pub struct NameCollisionLint;

impl Lint for NameCollisionLint {
    fn name(&self) -> &'static str {
        "name-collision"
    }

    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        let prefix = &ctx.typescript.type_prefix;
        let mut owners: IndexMap<String, &str> = IndexMap::new();

        for (name, _) in ctx.catalog.tags() {
            let identifier = format!("{prefix}{}", to_pascal_case(name));

            if RESERVED_TYPE_NAMES.contains(&identifier.as_str()) {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!("<{name}> would generate '{identifier}', which the preamble already declares"),
                    )
                    .at(format!("tags.{name}")),
                );
            }

            if let Some(first) = owners.get(&identifier) {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!("<{name}> and <{first}> both generate '{identifier}'"),
                    )
                    .at(format!("tags.{name}")),
                );
            } else {
                owners.insert(identifier, name);
            }
        }
    }
}
