//! Generation report.

use unidts_codegen::GenerateResult;
use unidts_core::WriteResult;

use super::output::{Output, Report};

/// Outcome of a run.
#[derive(Debug)]
pub enum GenerateReport {
    /// The declaration file was written.
    Written {
        result: GenerateResult,
        warnings: usize,
    },
    /// `--dry-run`: the rendered document.
    Preview(String),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match self {
            GenerateReport::Written { result, warnings } => {
                let status = match result.write {
                    WriteResult::Created => "created",
                    WriteResult::Updated => "updated",
                    WriteResult::Unchanged => "unchanged",
                };
                out.key_value(
                    "Generated",
                    &format!("{} ({})", result.path.display(), status),
                );
                out.key_value(
                    "Components",
                    &format!("{} ({} attributes)", result.tags, result.attributes),
                );
                if *warnings > 0 {
                    out.key_value("Warnings", &warnings.to_string());
                }
            }
            GenerateReport::Preview(document) => out.document(document),
        }
    }
}
