use std::path::{Path, PathBuf};

use eyre::{Result, bail};
use unidts_catalog::{Catalog, OverrideTable, TypeScriptConfig};
use unidts_core::{File, WriteResult};

use crate::{
    Diagnostic,
    emitter::render_document,
    lints::{LintContext, run_lints},
    resolve::{TagDeclaration, resolve_catalog},
};

/// Declaration file generator.
///
/// Borrows the catalog and override table; one instance renders the same
/// document every time it is asked.
pub struct Generator<'a> {
    catalog: &'a Catalog,
    overrides: &'a OverrideTable,
    typescript: TypeScriptConfig,
}

/// Summary of a completed generation.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub path: PathBuf,
    pub write: WriteResult,
    /// Number of tag aliases emitted.
    pub tags: usize,
    /// Number of attribute members emitted across all tags.
    pub attributes: usize,
}

impl<'a> Generator<'a> {
    pub fn new(catalog: &'a Catalog, overrides: &'a OverrideTable) -> Self {
        Self {
            catalog,
            overrides,
            typescript: TypeScriptConfig::default(),
        }
    }

    /// Use non-default module names or alias prefix.
    pub fn with_typescript(mut self, typescript: TypeScriptConfig) -> Self {
        self.typescript = typescript;
        self
    }

    /// Resolve every tag in catalog order.
    pub fn declarations(&self) -> Vec<TagDeclaration> {
        resolve_catalog(self.catalog, self.overrides, &self.typescript.type_prefix)
    }

    /// Run the lints over the inputs.
    pub fn check(&self) -> Vec<Diagnostic> {
        run_lints(&LintContext {
            catalog: self.catalog,
            overrides: self.overrides,
            typescript: &self.typescript,
        })
    }

    /// Render the declaration file.
    pub fn render(&self) -> String {
        render_document(&self.declarations(), &self.typescript)
    }

    /// Lint, then render and write the declaration file to `path`.
    ///
    /// Refuses to write when a lint reports an error; warnings do not block.
    pub fn generate(&self, path: &Path) -> Result<GenerateResult> {
        let errors: Vec<_> = self
            .check()
            .into_iter()
            .filter(|d| d.severity.is_error())
            .collect();
        if let Some(first) = errors.first() {
            bail!("{} error(s) in catalog, first: {}", errors.len(), first);
        }

        self.write(path)
    }

    /// Render and write the declaration file to `path` without linting.
    ///
    /// For callers that already ran [`check`](Self::check) themselves.
    pub fn write(&self, path: &Path) -> Result<GenerateResult> {
        let declarations = self.declarations();
        let content = render_document(&declarations, &self.typescript);
        let write = File::new(path, content).write()?;

        let attributes = declarations.iter().map(|d| d.attributes.len()).sum::<usize>();
        tracing::info!(
            path = %path.display(),
            tags = declarations.len(),
            attributes,
            ?write,
            "wrote declarations"
        );

        Ok(GenerateResult {
            path: path.to_path_buf(),
            write,
            tags: declarations.len(),
            attributes,
        })
    }
}
