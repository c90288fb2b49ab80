//! Lex command implementation.
//!
//! Tokenizes one or more Lumina sources and prints their token tables to
//! stdout, with diagnostics on stderr. Files are lexed in parallel; output
//! keeps the order they were given in.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use lumc_lex::{tokenize_with, Lexed, LexerConfig, TokenFilter};

use crate::commands::common::{error_messages, output_messages, read_source, OutputFormat};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{LumtError, Result};
use crate::report::{write_many, TokenReport};

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Source files to lex.
    pub files: Vec<PathBuf>,
    /// Tokens to show.
    pub filter: TokenFilter,
    /// Output format, overriding the configured one.
    pub format: Option<String>,
    /// Loaded configuration.
    pub config: Config,
}

/// Totals over one lex run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexSummary {
    /// Files lexed successfully.
    pub files: usize,
    /// Tokens produced, `EndOfInput` included.
    pub tokens: usize,
    /// Diagnostics reported across all files.
    pub diagnostics: usize,
    /// Files that could not be read.
    pub failed: usize,
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
}

impl LexCommand {
    /// Execute the command, printing to the process's stdout and stderr.
    pub fn run(&self) -> Result<LexSummary> {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        let summary = self.run_to(&mut out)?;
        out.flush()?;
        Self::check_summary(summary)
    }

    /// Lex every file and write the reports to `out`.
    fn run_to<W: Write>(&self, out: &mut W) -> Result<LexSummary> {
        let start_time = Instant::now();
        self.validate_inputs()?;

        let format = OutputFormat::resolve(
            self.args.format.as_deref(),
            &self.args.config.output.format,
        )?;
        let lexer_config = self.args.config.lexer_config()?;

        let results: Vec<Result<Lexed>> = self
            .args
            .files
            .par_iter()
            .map(|path| lex_file(path, lexer_config))
            .collect();

        let mut summary = LexSummary::default();
        let mut lexed_files = Vec::with_capacity(results.len());
        for (path, result) in self.args.files.iter().zip(results) {
            let lexed = match result {
                Ok(lexed) => lexed,
                Err(e) => {
                    eprintln!("error: {}", e);
                    summary.failed += 1;
                    continue;
                }
            };
            self.report_diagnostics(path, &lexed);

            summary.files += 1;
            summary.tokens += lexed.tokens.len();
            summary.diagnostics += lexed.diagnostics.len();
            lexed_files.push((path.display().to_string(), lexed));
        }

        let reports: Vec<_> = lexed_files
            .iter()
            .map(|(name, lexed)| TokenReport::new(name, lexed, self.args.filter))
            .collect();
        if self.args.files.len() == 1 {
            for report in &reports {
                report.write(format, out)?;
            }
        } else {
            write_many(&reports, format, out)?;
        }

        debug!(
            files = summary.files,
            tokens = summary.tokens,
            diagnostics = summary.diagnostics,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "lex finished"
        );
        Ok(summary)
    }

    fn validate_inputs(&self) -> Result<()> {
        if self.args.files.is_empty() {
            return Err(LumtError::Validation(
                error_messages::NO_INPUT_FILES.to_string(),
            ));
        }
        Ok(())
    }

    fn report_diagnostics(&self, path: &Path, lexed: &Lexed) {
        for diagnostic in &lexed.diagnostics {
            eprintln!("{}: {}", path.display(), diagnostic);
            match &diagnostic.suggestion {
                Some(suggestion) if self.args.verbose => {
                    eprintln!("  = help: try '{}' ({})", suggestion, diagnostic.code)
                }
                _ => {}
            }
        }
        if self.args.verbose {
            info!(
                "{} {} ({} tokens)",
                output_messages::LEXED_FILE,
                path.display(),
                lexed.tokens.len()
            );
        }
    }

    /// Turn a run with failures or diagnostics into an error so the exit
    /// status is non-zero.
    fn check_summary(summary: LexSummary) -> Result<LexSummary> {
        if summary.failed > 0 {
            return Err(LumtError::CommandExecution(format!(
                "{} {}",
                summary.failed,
                error_messages::FILES_FAILED
            )));
        }
        if summary.diagnostics > 0 {
            return Err(LumtError::CommandExecution(format!(
                "{} {}",
                summary.diagnostics,
                error_messages::LEXICAL_ERRORS
            )));
        }
        Ok(summary)
    }
}

fn lex_file(path: &Path, config: LexerConfig) -> Result<Lexed> {
    let source = read_source(path)?;
    if source.trim().is_empty() {
        warn!("{} {}", output_messages::EMPTY_SOURCE, path.display());
    }
    Ok(tokenize_with(&source, config))
}

impl Command for LexCommand {
    type Args = LexArgs;
    type Output = LexSummary;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "lex"
    }
}

/// Run the lex command with the given arguments.
pub fn run_lex(args: LexArgs) -> Result<LexSummary> {
    let command = LexCommand::new(args);
    debug!(command = LexCommand::name(), files = command.args.files.len(), "running");
    command.execute()
}
