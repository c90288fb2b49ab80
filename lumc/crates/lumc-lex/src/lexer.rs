//! Main lexer for Lumina source.
//!
//! The `Lexer` drives the [`Scanner`] over a buffer, drops trivia, turns
//! well-formed raw matches into tokens, reports malformed ones, and hands
//! every word to the [`Classifier`].

use lumc_util::Handler;
use tracing::trace;

use crate::classifier::Classifier;
use crate::config::LexerConfig;
use crate::error::ScanError;
use crate::scanner::{compound_operator_kind, single_char_kind, Category, RawMatch, Scanner};
use crate::token::{Token, TokenKind};

/// The main lexer.
///
/// Lexical errors never stop the lexer: each one becomes a diagnostic in
/// the handler plus an [`TokenKind::Invalid`] token carrying the offending
/// text, and scanning resumes right after it.
///
/// # Example
///
/// ```
/// use lumc_util::Handler;
/// use lumc_lex::{Lexer, TokenKind};
///
/// let mut handler = Handler::new();
/// let mut lexer = Lexer::new("int x = 10;", &mut handler);
///
/// assert_eq!(lexer.next_token().kind, TokenKind::Keyword);
/// assert_eq!(lexer.next_token().kind, TokenKind::IdentifierVariable);
/// ```
pub struct Lexer<'a> {
    scanner: Scanner<'a>,
    classifier: Classifier,
    handler: &'a mut Handler,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with the default configuration.
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self::with_config(source, LexerConfig::default(), handler)
    }

    pub fn with_config(source: &'a str, config: LexerConfig, handler: &'a mut Handler) -> Self {
        Self {
            scanner: Scanner::new(source),
            classifier: Classifier::new(config),
            handler,
            finished: false,
        }
    }

    /// Returns the next token.
    ///
    /// Once the input is exhausted this keeps returning
    /// [`TokenKind::EndOfInput`] stamped with the final line.
    pub fn next_token(&mut self) -> Token {
        while let Some(raw) = self.scanner.next() {
            if let Some(token) = self.token_from(raw) {
                return token;
            }
        }
        Token::end_of_input(self.scanner.line())
    }

    /// Lexes the rest of the input, ending with [`TokenKind::EndOfInput`].
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_end();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    fn token_from(&mut self, raw: RawMatch<'a>) -> Option<Token> {
        let kind = match raw.category {
            Category::BlockComment | Category::LineComment | Category::Newline | Category::Whitespace => {
                return None;
            }
            Category::Word => {
                let kind = self.classifier.classify(raw.text, raw.line, self.handler);
                return Some(Token::new(kind, raw.text, raw.line));
            }
            Category::CharLiteral => Ok(TokenKind::CharLiteral),
            Category::StringLiteral => Ok(TokenKind::StringLiteral),
            Category::FloatLiteral => Ok(TokenKind::FloatLiteral),
            Category::IntegerLiteral => Ok(TokenKind::IntegerLiteral),
            Category::CompoundOperator => compound_operator_kind(raw.text)
                .ok_or_else(|| ScanError::UnexpectedChar(raw.text.to_string())),
            Category::SingleChar => single_char_kind(raw.text)
                .ok_or_else(|| ScanError::UnexpectedChar(raw.text.to_string())),
            Category::UnterminatedComment => Err(ScanError::UnterminatedComment),
            Category::UnterminatedString => Err(ScanError::UnterminatedString),
            Category::MultiDotNumber => Err(ScanError::MultiDotNumber(raw.text.to_string())),
            Category::DigitLedIdentifier => {
                Err(ScanError::DigitLedIdentifier(raw.text.to_string()))
            }
            Category::HyphenatedIdentifier => {
                Err(ScanError::HyphenatedIdentifier(raw.text.to_string()))
            }
            Category::EmptyChar => Err(ScanError::EmptyChar),
            Category::MultiCharLiteral => Err(ScanError::MultiCharLiteral(raw.text.to_string())),
            Category::UnterminatedChar => Err(ScanError::UnterminatedChar),
            Category::MalformedOperator => Err(ScanError::malformed_operator(raw.text)),
            Category::IllegalChar => Err(ScanError::IllegalChar(raw.text.to_string())),
            Category::Unexpected => Err(ScanError::UnexpectedChar(raw.text.to_string())),
        };

        self.classifier.reset();
        let kind = kind.unwrap_or_else(|err| {
            self.report_error(&err, raw.line);
            TokenKind::Invalid
        });
        Some(Token::new(kind, raw.text, raw.line))
    }

    fn report_error(&mut self, err: &ScanError, line: u32) {
        trace!(line, code = %err.code(), "rejected lexeme");
        self.handler
            .build_error(line, err.to_string())
            .code(err.code())
            .emit(self.handler);
    }
}

/// Yields every token including the final [`TokenKind::EndOfInput`], then
/// stops.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is_end();
        Some(token)
    }
}
