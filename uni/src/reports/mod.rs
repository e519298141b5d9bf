//! Report data structures for the CLI.
//!
//! The command builds reports, then renders them to an Output target.

mod diagnostics;
mod generate;
mod output;

pub use diagnostics::DiagnosticsReport;
pub use generate::GenerateReport;
#[cfg(test)]
pub use output::RecordingOutput;
pub use output::{Output, Report, TerminalOutput};
