//! Error types for the lumt CLI.
//!
//! Lexical problems in a source file are not errors here; they are
//! diagnostics reported by the lexer. These variants cover everything that
//! stops the tool itself.

use thiserror::Error;

/// Main error type for the lumt CLI application.
#[derive(Error, Debug)]
pub enum LumtError {
    /// Configuration file missing, unparsable, or out of range.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The command ran but its result counts as a failure, such as a
    /// source file that produced lexical diagnostics.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias using LumtError.
pub type Result<T> = std::result::Result<T, LumtError>;

impl From<lumc_lex::ConfigError> for LumtError {
    fn from(err: lumc_lex::ConfigError) -> Self {
        LumtError::Config(err.to_string())
    }
}
