//! Lumt CLI - A command-line front end for the Lumina lexer.
//!
//! This is the main entry point for the lumt CLI application.
//! It uses clap for argument parsing and dispatches to the lex and export
//! command handlers.

mod commands;
mod config;
mod error;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lumc_lex::TokenFilter;

use commands::{run_export, run_lex, ExportArgs, LexArgs};
use config::Config;
use error::{LumtError, Result};

/// Lumt - Lumina token tools
///
/// Lumt runs the Lumina lexer over source files, prints token tables and
/// lexical diagnostics, and exports token tables as text, CSV or JSON.
#[derive(Parser, Debug)]
#[command(name = "lumt")]
#[command(author = "Lumina Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Token tools for the Lumina language", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LUMT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LUMT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LUMT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the lumt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize source files
    ///
    /// Prints the token table of every file to stdout and its lexical
    /// diagnostics to stderr. Exits non-zero if any diagnostic was reported.
    Lex(LexCommand),

    /// Save a token table to a file
    ///
    /// Lexes one source file and writes its token table, statistics and
    /// diagnostics as text, CSV or JSON.
    Export(ExportCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Source files to tokenize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Tokens to show (all, errors, identifiers, keywords, literals, noise, operators, symbols)
    #[arg(short = 'f', long, default_value = "all")]
    filter: TokenFilter,

    /// Output format (table, text, csv, json)
    #[arg(short = 'F', long)]
    format: Option<String>,
}

/// Arguments for the export subcommand.
#[derive(Parser, Debug)]
struct ExportCommand {
    /// Source file to tokenize
    input: PathBuf,

    /// File to write the token table to
    #[arg(short, long)]
    output: PathBuf,

    /// Output format (text, csv, json); defaults to the output extension
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Tokens to include
    #[arg(long, default_value = "all")]
    filter: TokenFilter,

    /// Overwrite an existing output file
    #[arg(long)]
    force: bool,
}

/// Main entry point for the lumt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.no_color)?;

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Execute the selected command
    execute_command(cli.command, cli.verbose, config)
}

/// Initialize the logging system.
///
/// Log lines go to stderr so token tables on stdout stay clean.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| LumtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => execute_lex(args, verbose, config),
        Commands::Export(args) => execute_export(args, verbose, config),
    }
}

/// Execute the lex command.
fn execute_lex(args: LexCommand, verbose: bool, config: Config) -> Result<()> {
    let lex_args = LexArgs {
        verbose,
        files: args.files,
        filter: args.filter,
        format: args.format,
        config,
    };
    run_lex(lex_args).map(|_| ())
}

/// Execute the export command.
fn execute_export(args: ExportCommand, verbose: bool, config: Config) -> Result<()> {
    let export_args = ExportArgs {
        verbose,
        input: args.input,
        output: args.output,
        format: args.format,
        filter: args.filter,
        force: args.force,
        config,
    };
    run_export(export_args).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_lex() {
        let cli = Cli::parse_from(["lumt", "lex", "main.lum"]);
        if let Commands::Lex(args) = cli.command {
            assert_eq!(args.files, vec![PathBuf::from("main.lum")]);
            assert_eq!(args.filter, TokenFilter::All);
            assert_eq!(args.format, None);
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_lex_many_files() {
        let cli = Cli::parse_from(["lumt", "lex", "a.lum", "b.lum", "c.lum"]);
        if let Commands::Lex(args) = cli.command {
            assert_eq!(args.files.len(), 3);
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_lex_requires_files() {
        assert!(Cli::try_parse_from(["lumt", "lex"]).is_err());
    }

    #[test]
    fn test_cli_parse_lex_with_filter() {
        let cli = Cli::parse_from(["lumt", "lex", "main.lum", "--filter", "errors"]);
        if let Commands::Lex(args) = cli.command {
            assert_eq!(args.filter, TokenFilter::Errors);
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_lex_rejects_unknown_filter() {
        assert!(Cli::try_parse_from(["lumt", "lex", "main.lum", "--filter", "comments"]).is_err());
    }

    #[test]
    fn test_cli_parse_lex_with_format() {
        let cli = Cli::parse_from(["lumt", "lex", "main.lum", "-F", "json"]);
        if let Commands::Lex(args) = cli.command {
            assert_eq!(args.format, Some("json".to_string()));
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["lumt", "export", "main.lum", "--output", "tokens.csv"]);
        if let Commands::Export(args) = cli.command {
            assert_eq!(args.input, PathBuf::from("main.lum"));
            assert_eq!(args.output, PathBuf::from("tokens.csv"));
            assert!(!args.force);
        } else {
            panic!("Expected Export command");
        }
    }

    #[test]
    fn test_cli_parse_export_requires_output() {
        assert!(Cli::try_parse_from(["lumt", "export", "main.lum"]).is_err());
    }

    #[test]
    fn test_cli_parse_export_with_force() {
        let cli = Cli::parse_from(["lumt", "export", "main.lum", "-o", "t.txt", "--force"]);
        if let Commands::Export(args) = cli.command {
            assert!(args.force);
        } else {
            panic!("Expected Export command");
        }
    }

    #[test]
    fn test_cli_parse_global_verbose() {
        let cli = Cli::parse_from(["lumt", "--verbose", "lex", "main.lum"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_global_config() {
        let cli = Cli::parse_from(["lumt", "--config", "/path/to/lumt.toml", "lex", "main.lum"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/lumt.toml")));
    }

    #[test]
    fn test_cli_parse_global_no_color() {
        let cli = Cli::parse_from(["lumt", "lex", "main.lum", "--no-color"]);
        assert!(cli.no_color);
    }
}
