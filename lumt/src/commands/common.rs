//! Common types and utilities for lumt commands.

use std::path::Path;

use crate::error::{LumtError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported renderings of a token table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `Line N | KIND | lexeme` row per token
    Table,
    /// Table with a header block and statistics
    Text,
    /// Comma-separated rows with a commented footer
    Csv,
    /// Tokens and diagnostics as a JSON object
    Json,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(Self::Table),
            "text" | "txt" => Some(Self::Text),
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Parse a format given on the command line or in the config file.
    pub fn resolve(cli: Option<&str>, configured: &str) -> Result<Self> {
        match cli {
            Some(name) => Self::parse(name).ok_or_else(|| {
                LumtError::Validation(format!("{} {}", error_messages::UNKNOWN_FORMAT, name))
            }),
            None => Self::parse(configured).ok_or_else(|| {
                LumtError::Config(format!(
                    "{} {}",
                    error_messages::INVALID_CONFIG_FORMAT,
                    configured
                ))
            }),
        }
    }

    /// Infer a file format from an output path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()?.to_str().and_then(Self::parse)
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Table | Self::Text => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

// ============================================================================
// Source Files
// ============================================================================

/// Read a source file, checking that it exists and is a regular file.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(LumtError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(LumtError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }
    std::fs::read_to_string(path).map_err(|e| {
        LumtError::FileOperation(format!(
            "{} {}: {}",
            error_messages::UNREADABLE_SOURCE,
            path.display(),
            e
        ))
    })
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when a source file is not valid UTF-8 or cannot be read.
    pub const UNREADABLE_SOURCE: &str = "Cannot read source file";

    /// Error when output file already exists.
    pub const OUTPUT_FILE_EXISTS: &str = "Output file already exists (use --force):";

    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format:";

    /// Error when config has invalid format.
    pub const INVALID_CONFIG_FORMAT: &str = "Invalid format in configuration:";

    /// Error when sources produced diagnostics.
    pub const LEXICAL_ERRORS: &str = "lexical error(s) found";

    /// Error when some files could not be lexed at all.
    pub const FILES_FAILED: &str = "file(s) could not be lexed";
}

// ============================================================================
// Output Messages
// ============================================================================

/// Standard output message templates.
pub mod output_messages {
    /// Warning for a source with nothing in it.
    pub const EMPTY_SOURCE: &str = "Source is empty:";

    /// Message when a file is lexed.
    pub const LEXED_FILE: &str = "Lexed";

    /// Message when a token table is written.
    pub const EXPORTED_FILE: &str = "Exported token table to";
}
