//! Lint diagnostics report.

use unidts_codegen::{Diagnostic, Severity};

use super::output::{Output, Report};

/// Lint results with per-severity counts.
#[derive(Debug)]
pub struct DiagnosticsReport {
    pub diagnostics: Vec<Diagnostic>,
    pub errors: usize,
    pub warnings: usize,
}

impl DiagnosticsReport {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        let errors = diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count();
        Self {
            warnings: diagnostics.len() - errors,
            errors,
            diagnostics,
        }
    }
}

impl Report for DiagnosticsReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            let mut msg = format!("[{}] {}", diag.lint, diag.message);
            if let Some(loc) = &diag.location {
                msg.push_str(&format!(" (at {})", loc));
            }
            match diag.severity {
                Severity::Error => out.error(&msg),
                Severity::Warning => out.warning(&msg),
            }
        }
    }
}
