use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result, bail};
use unidts_catalog::{CONFIG_FILE, Catalog, Config};
use unidts_codegen::Generator;

use crate::reports::{DiagnosticsReport, GenerateReport, Output, Report, TerminalOutput};

/// Extension trait for exiting on catalog/config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for unidts_catalog::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "unidts")]
#[command(version)]
#[command(about = "Generate TypeScript declarations for uni-app built-in components")]
pub(crate) struct Cli {
    /// Path to unidts.toml (defaults to ./unidts.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output file (overrides [output].path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the declarations to stdout without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Fail if any lint reports a warning
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let config = match &self.config {
            Some(path) => Config::open(path),
            None => Config::open_or_default(CONFIG_FILE),
        }
        .unwrap_or_exit();

        let catalog =
            Catalog::load(&config.catalog.tags, &config.catalog.attributes).unwrap_or_exit();

        self.execute(&config, &catalog, &mut TerminalOutput::new())
    }

    /// Lint, then preview or write the declarations for a loaded catalog.
    fn execute(&self, config: &Config, catalog: &Catalog, out: &mut dyn Output) -> Result<()> {
        let overrides = config.override_table();
        let generator =
            Generator::new(catalog, &overrides).with_typescript(config.typescript.clone());

        let report = DiagnosticsReport::new(generator.check());
        report.render(out);

        if report.errors > 0 {
            bail!("{} error(s) found, nothing written", report.errors);
        }
        if self.strict && report.warnings > 0 {
            bail!(
                "{} warning(s) found in strict mode, nothing written",
                report.warnings
            );
        }

        if self.dry_run {
            GenerateReport::Preview(generator.render()).render(out);
            return Ok(());
        }

        let path = self
            .output
            .clone()
            .unwrap_or_else(|| config.output.path.clone());
        tracing::debug!(path = %path.display(), "writing declarations");
        let result = generator
            .write(&path)
            .wrap_err_with(|| format!("Failed to generate '{}'", path.display()))?;

        GenerateReport::Written {
            result,
            warnings: report.warnings,
        }
        .render(out);

        Ok(())
    }
}
