//! Export command implementation.
//!
//! Lexes a single source and saves its token table to a file as text, CSV
//! or JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use lumc_lex::{tokenize_with, TokenFilter};

use crate::commands::common::{error_messages, output_messages, read_source, OutputFormat};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{LumtError, Result};
use crate::report::TokenReport;

/// Arguments for the export command.
#[derive(Debug, Clone, Default)]
pub struct ExportArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Source file to lex.
    pub input: PathBuf,
    /// File to write the token table to.
    pub output: PathBuf,
    /// Output format; inferred from the output extension when absent.
    pub format: Option<String>,
    /// Tokens to include.
    pub filter: TokenFilter,
    /// Overwrite an existing output file.
    pub force: bool,
    /// Loaded configuration.
    pub config: Config,
}

/// What an export wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Where the table went.
    pub output: PathBuf,
    /// Format used.
    pub format: OutputFormat,
    /// Tokens in the source, `EndOfInput` included.
    pub tokens: usize,
    /// Diagnostics in the source.
    pub diagnostics: usize,
}

/// Export command handler.
pub struct ExportCommand {
    args: ExportArgs,
}

impl ExportCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<ExportSummary> {
        let format = self.output_format()?;
        self.validate_output()?;

        let source = read_source(&self.args.input)?;
        let lexed = tokenize_with(&source, self.args.config.lexer_config()?);

        let name = self.args.input.display().to_string();
        let report = TokenReport::new(&name, &lexed, self.args.filter);
        self.write_report(&report, format)?;

        info!(
            "{} {}",
            output_messages::EXPORTED_FILE,
            self.args.output.display()
        );
        Ok(ExportSummary {
            output: self.args.output.clone(),
            format,
            tokens: lexed.tokens.len(),
            diagnostics: lexed.diagnostics.len(),
        })
    }

    /// Format for the file. An explicit `--format` wins, then the output
    /// extension, then the configured default. `table` is written as text.
    fn output_format(&self) -> Result<OutputFormat> {
        let format = match (&self.args.format, OutputFormat::from_path(&self.args.output)) {
            (Some(name), _) => OutputFormat::resolve(Some(name.as_str()), "")?,
            (None, Some(inferred)) => inferred,
            (None, None) => OutputFormat::resolve(None, &self.args.config.output.format)?,
        };
        Ok(match format {
            OutputFormat::Table => OutputFormat::Text,
            other => other,
        })
    }

    fn validate_output(&self) -> Result<()> {
        let output = &self.args.output;
        if output.is_dir() {
            return Err(LumtError::Validation(format!(
                "Output path is a directory: {}",
                output.display()
            )));
        }
        if output.exists() && !self.args.force {
            return Err(LumtError::Validation(format!(
                "{} {}",
                error_messages::OUTPUT_FILE_EXISTS,
                output.display()
            )));
        }
        Ok(())
    }

    fn write_report(&self, report: &TokenReport<'_>, format: OutputFormat) -> Result<()> {
        create_parent_dir(&self.args.output)?;
        let file = File::create(&self.args.output).map_err(|e| {
            LumtError::FileOperation(format!(
                "Failed to create {}: {}",
                self.args.output.display(),
                e
            ))
        })?;
        let mut out = BufWriter::new(file);
        report.write(format, &mut out)?;
        out.flush()?;

        debug!(
            output = %self.args.output.display(),
            format = format.extension(),
            verbose = self.args.verbose,
            "token table written"
        );
        Ok(())
    }
}

fn create_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            std::fs::create_dir_all(parent)?;
            Ok(())
        }
        _ => Ok(()),
    }
}

impl Command for ExportCommand {
    type Args = ExportArgs;
    type Output = ExportSummary;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "export"
    }
}

/// Run the export command with the given arguments.
pub fn run_export(args: ExportArgs) -> Result<ExportSummary> {
    debug!(command = ExportCommand::name(), input = %args.input.display(), "running");
    let summary = ExportCommand::new(args).execute()?;
    debug!(
        output = %summary.output.display(),
        format = summary.format.extension(),
        tokens = summary.tokens,
        diagnostics = summary.diagnostics,
        "export finished"
    );
    Ok(summary)
}
