//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Handler};

/// Builder for constructing diagnostics with a fluent API
///
/// Unset fields fall back to line 1 and [`DiagnosticCode::L_UNEXPECTED_CHAR`].
///
/// # Examples
///
/// ```
/// use lumc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
///
/// let diag = DiagnosticBuilder::new("did you mean 'while'?")
///     .code(DiagnosticCode::L_KEYWORD_TYPO)
///     .line(4)
///     .suggestion("while")
///     .build();
///
/// assert_eq!(diag.line, 4);
/// assert_eq!(diag.suggestion.as_deref(), Some("while"));
/// ```
#[derive(Debug, Clone)]
pub struct DiagnosticBuilder {
    code: DiagnosticCode,
    line: u32,
    message: String,
    suggestion: Option<String>,
}

impl DiagnosticBuilder {
    /// Start a diagnostic with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: DiagnosticCode::L_UNEXPECTED_CHAR,
            line: 1,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = code;
        self
    }

    /// Set the 1-based line number
    pub fn line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Attach the spelling the user most likely meant
    pub fn suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            code: self.code,
            line: self.line,
            message: self.message,
            suggestion: self.suggestion,
        }
    }

    /// Build the diagnostic and hand it to `handler`
    pub fn emit(self, handler: &mut Handler) {
        handler.emit_diagnostic(self.build());
    }
}
