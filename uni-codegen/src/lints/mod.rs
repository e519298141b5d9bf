//! Catalog lints.
//!
//! Generation is lenient: undefined attributes are dropped and unknown
//! types become `string`. The lints report each of those leniencies so the
//! CLI can print them and `--strict` can refuse to write.

mod duplicate_attribute;
mod missing_attribute;
mod name_collision;
mod unknown_type;
mod unused_override;

pub use duplicate_attribute::DuplicateAttributeLint;
pub use missing_attribute::MissingAttributeLint;
pub use name_collision::NameCollisionLint;
pub use unknown_type::UnknownTypeLint;
pub use unused_override::UnusedOverrideLint;
use unidts_catalog::{Catalog, OverrideTable, TypeScriptConfig};

use crate::Diagnostic;

/// Inputs a lint can inspect.
#[derive(Debug, Clone, Copy)]
pub struct LintContext<'a> {
    pub catalog: &'a Catalog,
    pub overrides: &'a OverrideTable,
    pub typescript: &'a TypeScriptConfig,
}

/// A check over the catalog that reports diagnostics.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// Check the inputs and add any diagnostics.
    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>);
}

/// All lints, in reporting order.
pub fn default_lints() -> Vec<Box<dyn Lint>> {
    vec![
        Box::new(NameCollisionLint),
        Box::new(MissingAttributeLint),
        Box::new(DuplicateAttributeLint),
        Box::new(UnknownTypeLint),
        Box::new(UnusedOverrideLint),
    ]
}

/// Run every default lint.
pub fn run_lints(ctx: &LintContext<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for lint in default_lints() {
        let before = diagnostics.len();
        lint.check(ctx, &mut diagnostics);
        tracing::debug!(
            lint = lint.name(),
            found = diagnostics.len() - before,
            "ran lint"
        );
    }
    diagnostics
}
