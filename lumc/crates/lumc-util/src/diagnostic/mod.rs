//! Diagnostic module - Lexical error reporting infrastructure.
//!
//! Diagnostics never stop the lexer: each one records what went wrong and
//! where, and the lexer carries on. There is no severity split, every
//! diagnostic is an error as far as consumers are concerned.
//!
//! # Examples
//!
//! ```
//! use lumc_util::diagnostic::{Diagnostic, DiagnosticCode, Handler};
//!
//! let mut handler = Handler::new();
//! handler.emit_diagnostic(Diagnostic::new(
//!     DiagnosticCode::L_ILLEGAL_CHAR,
//!     2,
//!     "illegal character '@'",
//! ));
//!
//! assert!(handler.has_errors());
//! assert_eq!(
//!     handler.diagnostics()[0].to_string(),
//!     "Lexical Error (Line 2): illegal character '@'"
//! );
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use std::fmt;

/// A line-stamped lexical diagnostic
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Category of the problem
    pub code: DiagnosticCode,
    /// 1-based line where the offending lexeme starts
    pub line: u32,
    /// Human-readable message, displayed verbatim to users
    pub message: String,
    /// Corrected spelling, when the lexer has one to offer
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic without a suggestion
    pub fn new(code: DiagnosticCode, line: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            line,
            message: message.into(),
            suggestion: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lexical Error (Line {}): {}", self.line, self.message)
    }
}

/// Collects diagnostics in detection order
///
/// One handler belongs to one tokenization run; it is never shared between
/// runs.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    /// Create an empty handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic
    pub fn emit_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Start a builder for an error at `line`
    ///
    /// ```
    /// use lumc_util::diagnostic::{DiagnosticCode, Handler};
    ///
    /// let mut handler = Handler::new();
    /// handler
    ///     .build_error(5, "empty character literal")
    ///     .code(DiagnosticCode::L_MALFORMED_CHAR)
    ///     .emit(&mut handler);
    /// assert_eq!(handler.error_count(), 1);
    /// ```
    pub fn build_error(&self, line: u32, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::new(message).line(line)
    }

    /// Check if anything has been reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Number of diagnostics reported so far
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Borrow the collected diagnostics
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Take ownership of the collected diagnostics
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
