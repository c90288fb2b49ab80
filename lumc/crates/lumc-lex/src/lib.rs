//! lumc-lex - Lexical Analyzer for the Lumina Programming Language
//!
//! This crate turns Lumina source text into a flat list of line-stamped
//! tokens plus a list of lexical diagnostics. Lexing never aborts: every
//! problem becomes an `Invalid` token and a diagnostic, and scanning
//! resumes right after the offending text.
//!
//! # Example Usage
//!
//! ```
//! use lumc_lex::{tokenize, TokenKind};
//!
//! let lexed = tokenize("int count = 10;\nwhille (count > 0) { }");
//!
//! assert_eq!(lexed.tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(lexed.tokens[1].kind, TokenKind::IdentifierVariable);
//! assert_eq!(lexed.diagnostics.len(), 1);
//! assert_eq!(
//!     lexed.diagnostics[0].to_string(),
//!     "Lexical Error (Line 2): unknown word 'whille', did you mean 'while'?"
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`scanner`] - Ordered pattern matching of raw lexemes
//! - [`classifier`] - Keyword, noise-word and naming-rule resolution of words
//! - [`lexer`] - Driver combining the two into tokens and diagnostics
//! - [`token`] - Token kinds and the token record
//! - [`stats`] - Token filters and per-kind counts
//! - [`cursor`] - Byte cursor with line tracking
//!
//! # Token Categories
//!
//! ## Words
//!
//! Keywords (`func`, `int`, `while`, ...), the literals `true`, `false`
//! and `null`, the noise words `that`, `the` and `is`, and identifiers
//! split into function, type and variable names by the keyword before them.
//!
//! ## Literals
//!
//! - **Integer**: `42`
//! - **Float**: `3.14`
//! - **Character**: `'a'`, `'\n'`
//! - **String**: `"hello\n"`
//!
//! ## Operators
//!
//! `->`, `==`, `!=`, `>=`, `<=`, `&&`, `||`, `++`, `--`, `+=`, `-=`, `*=`,
//! `/=`, `%=`, `<<`, `>>`, `&`, `|`, `^`, `~`. Every other operator and
//! punctuation character is a `Symbol`.

pub mod classifier;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod scanner;
pub mod stats;
pub mod token;

#[cfg(test)]
mod edge_cases;

use lumc_util::{Diagnostic, Handler};
use tracing::debug;

// Re-export main types for convenience
pub use classifier::Classifier;
pub use config::{ConfigError, LexerConfig};
pub use cursor::Cursor;
pub use error::{ScanError, WordError};
pub use lexer::Lexer;
pub use stats::{TokenFilter, TokenStats};
pub use token::{Token, TokenCategory, TokenKind};

/// Result of lexing one buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexed {
    /// Tokens in source order, ending with `EndOfInput`
    pub tokens: Vec<Token>,
    /// Diagnostics in the order they were found
    pub diagnostics: Vec<Diagnostic>,
}

impl Lexed {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Per-kind counts over all tokens.
    pub fn stats(&self) -> TokenStats {
        TokenStats::from_tokens(&self.tokens)
    }
}

/// Lexes `source` with the default configuration.
pub fn tokenize(source: &str) -> Lexed {
    tokenize_with(source, LexerConfig::default())
}

/// Lexes `source` with `config`.
pub fn tokenize_with(source: &str, config: LexerConfig) -> Lexed {
    let mut handler = Handler::new();
    let tokens = Lexer::with_config(source, config, &mut handler).tokenize();
    let diagnostics = handler.into_diagnostics();
    debug!(
        bytes = source.len(),
        tokens = tokens.len(),
        diagnostics = diagnostics.len(),
        "lexed buffer"
    );
    Lexed {
        tokens,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(lexed: &Lexed) -> Vec<TokenKind> {
        lexed.tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_contract_program() {
        let source = r#"
func compute_sum(int a, int b) -> int
    requires that a >= 0
    ensures that result is a + b
{
    return a + b;
}
"#;
        let lexed = tokenize(source);
        assert!(!lexed.has_errors(), "{:?}", lexed.diagnostics);
        let noise: Vec<_> = lexed
            .tokens
            .iter()
            .filter(|t| t.kind == TokenKind::NoiseWord)
            .map(|t| (t.text.as_str(), t.line))
            .collect();
        assert_eq!(noise, vec![("that", 3), ("that", 4), ("is", 4)]);
        assert_eq!(lexed.tokens[1].kind, TokenKind::IdentifierFunction);
    }

    #[test]
    fn test_struct_program() {
        let lexed = tokenize("struct Point { double x; double y; }");
        assert!(!lexed.has_errors());
        assert_eq!(
            kinds(&lexed),
            vec![
                TokenKind::Keyword,
                TokenKind::IdentifierType,
                TokenKind::Symbol,
                TokenKind::Keyword,
                TokenKind::IdentifierVariable,
                TokenKind::Symbol,
                TokenKind::Keyword,
                TokenKind::IdentifierVariable,
                TokenKind::Symbol,
                TokenKind::Symbol,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_display_program() {
        let lexed = tokenize("display the \"done\";\nread the name;");
        assert!(!lexed.has_errors());
        assert_eq!(lexed.tokens[1].kind, TokenKind::NoiseWord);
        assert_eq!(lexed.tokens[2].kind, TokenKind::StringLiteral);
        assert_eq!(lexed.tokens[2].text, "\"done\"");
        assert_eq!(lexed.tokens[5].kind, TokenKind::NoiseWord);
        assert_eq!(lexed.tokens[5].line, 2);
    }

    #[test]
    fn test_lexed_stats() {
        let lexed = tokenize("int x = 1; int y = 2;");
        let stats = lexed.stats();
        assert_eq!(stats.count(TokenKind::Keyword), 2);
        assert_eq!(stats.count(TokenKind::EndOfInput), 1);
        assert_eq!(stats.total(), lexed.tokens.len());
    }
}
