//! Token definitions for the Lumina lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact source lexeme and the
//! 1-based line where it starts. The kind set is closed; every consumer can
//! match on it exhaustively.

use std::fmt;

/// Kind of a lexical token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// Reserved word such as `func`, `while` or `int`
    Keyword,
    /// `true` or `false`
    BooleanLiteral,
    /// `null`
    ReservedLiteral,
    /// Filler word accepted in a registered slot (`requires that`)
    NoiseWord,
    /// `'a'`, `'\n'`
    CharLiteral,
    /// `"text"`
    StringLiteral,
    /// `3.14`
    FloatLiteral,
    /// `42`
    IntegerLiteral,

    /// `->`
    ArrowOp,
    /// `==`
    EqualOp,
    /// `!=`
    NotEqualOp,
    /// `>=`
    GreaterEqualOp,
    /// `<=`
    LessEqualOp,
    /// `&&`
    LogicalAndOp,
    /// `||`
    LogicalOrOp,
    /// `++`
    IncrementOp,
    /// `--`
    DecrementOp,
    /// `+=`
    AddAssignOp,
    /// `-=`
    SubAssignOp,
    /// `*=`
    MulAssignOp,
    /// `/=`
    DivAssignOp,
    /// `%=`
    ModAssignOp,
    /// `<<`
    ShiftLeftOp,
    /// `>>`
    ShiftRightOp,
    /// `&`
    BitAndOp,
    /// `|`
    BitOrOp,
    /// `^`
    BitXorOp,
    /// `~`
    BitNotOp,

    /// Single-character punctuation or operator: `+ - * / % = ! > < ( ) { } [ ] , ; : .`
    Symbol,

    /// Name declared right after `func`
    IdentifierFunction,
    /// PascalCase type name, declared or referenced
    IdentifierType,
    /// Variable name, declared or referenced
    IdentifierVariable,

    /// Lexeme that failed a lexical rule; a diagnostic explains why
    Invalid,
    /// Terminal token, always last
    EndOfInput,
}

/// Display grouping of token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// Keywords
    Keyword,
    /// Function, type and variable identifiers
    Identifier,
    /// Character, string, numeric, boolean and reserved literals
    Literal,
    /// Accepted noise words
    NoiseWord,
    /// Multi-character and bitwise operators
    Operator,
    /// Single-character punctuation
    Symbol,
    /// Invalid tokens
    Error,
    /// End of input
    End,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 34] = [
        TokenKind::Keyword,
        TokenKind::BooleanLiteral,
        TokenKind::ReservedLiteral,
        TokenKind::NoiseWord,
        TokenKind::CharLiteral,
        TokenKind::StringLiteral,
        TokenKind::FloatLiteral,
        TokenKind::IntegerLiteral,
        TokenKind::ArrowOp,
        TokenKind::EqualOp,
        TokenKind::NotEqualOp,
        TokenKind::GreaterEqualOp,
        TokenKind::LessEqualOp,
        TokenKind::LogicalAndOp,
        TokenKind::LogicalOrOp,
        TokenKind::IncrementOp,
        TokenKind::DecrementOp,
        TokenKind::AddAssignOp,
        TokenKind::SubAssignOp,
        TokenKind::MulAssignOp,
        TokenKind::DivAssignOp,
        TokenKind::ModAssignOp,
        TokenKind::ShiftLeftOp,
        TokenKind::ShiftRightOp,
        TokenKind::BitAndOp,
        TokenKind::BitOrOp,
        TokenKind::BitXorOp,
        TokenKind::BitNotOp,
        TokenKind::Symbol,
        TokenKind::IdentifierFunction,
        TokenKind::IdentifierType,
        TokenKind::IdentifierVariable,
        TokenKind::Invalid,
        TokenKind::EndOfInput,
    ];

    /// Stable name used in token tables and exports.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::BooleanLiteral => "BooleanLiteral",
            TokenKind::ReservedLiteral => "ReservedLiteral",
            TokenKind::NoiseWord => "NoiseWord",
            TokenKind::CharLiteral => "CharLiteral",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::FloatLiteral => "FloatLiteral",
            TokenKind::IntegerLiteral => "IntegerLiteral",
            TokenKind::ArrowOp => "ArrowOp",
            TokenKind::EqualOp => "EqualOp",
            TokenKind::NotEqualOp => "NotEqualOp",
            TokenKind::GreaterEqualOp => "GreaterEqualOp",
            TokenKind::LessEqualOp => "LessEqualOp",
            TokenKind::LogicalAndOp => "LogicalAndOp",
            TokenKind::LogicalOrOp => "LogicalOrOp",
            TokenKind::IncrementOp => "IncrementOp",
            TokenKind::DecrementOp => "DecrementOp",
            TokenKind::AddAssignOp => "AddAssignOp",
            TokenKind::SubAssignOp => "SubAssignOp",
            TokenKind::MulAssignOp => "MulAssignOp",
            TokenKind::DivAssignOp => "DivAssignOp",
            TokenKind::ModAssignOp => "ModAssignOp",
            TokenKind::ShiftLeftOp => "ShiftLeftOp",
            TokenKind::ShiftRightOp => "ShiftRightOp",
            TokenKind::BitAndOp => "BitAndOp",
            TokenKind::BitOrOp => "BitOrOp",
            TokenKind::BitXorOp => "BitXorOp",
            TokenKind::BitNotOp => "BitNotOp",
            TokenKind::Symbol => "Symbol",
            TokenKind::IdentifierFunction => "IdentifierFunction",
            TokenKind::IdentifierType => "IdentifierType",
            TokenKind::IdentifierVariable => "IdentifierVariable",
            TokenKind::Invalid => "Invalid",
            TokenKind::EndOfInput => "EndOfInput",
        }
    }

    /// Display category of this kind.
    pub fn category(self) -> TokenCategory {
        match self {
            TokenKind::Keyword => TokenCategory::Keyword,
            TokenKind::IdentifierFunction
            | TokenKind::IdentifierType
            | TokenKind::IdentifierVariable => TokenCategory::Identifier,
            TokenKind::BooleanLiteral
            | TokenKind::ReservedLiteral
            | TokenKind::CharLiteral
            | TokenKind::StringLiteral
            | TokenKind::FloatLiteral
            | TokenKind::IntegerLiteral => TokenCategory::Literal,
            TokenKind::NoiseWord => TokenCategory::NoiseWord,
            TokenKind::Symbol => TokenCategory::Symbol,
            TokenKind::Invalid => TokenCategory::Error,
            TokenKind::EndOfInput => TokenCategory::End,
            TokenKind::ArrowOp
            | TokenKind::EqualOp
            | TokenKind::NotEqualOp
            | TokenKind::GreaterEqualOp
            | TokenKind::LessEqualOp
            | TokenKind::LogicalAndOp
            | TokenKind::LogicalOrOp
            | TokenKind::IncrementOp
            | TokenKind::DecrementOp
            | TokenKind::AddAssignOp
            | TokenKind::SubAssignOp
            | TokenKind::MulAssignOp
            | TokenKind::DivAssignOp
            | TokenKind::ModAssignOp
            | TokenKind::ShiftLeftOp
            | TokenKind::ShiftRightOp
            | TokenKind::BitAndOp
            | TokenKind::BitOrOp
            | TokenKind::BitXorOp
            | TokenKind::BitNotOp => TokenCategory::Operator,
        }
    }

    /// Returns true for the three identifier variants.
    pub fn is_identifier(self) -> bool {
        self.category() == TokenCategory::Identifier
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A token produced by the lexer
///
/// `text` is the exact source substring. Escapes in literals are kept as
/// written, never decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// What the lexeme was classified as
    pub kind: TokenKind,
    /// The source lexeme
    pub text: String,
    /// 1-based line of the lexeme's first character
    pub line: u32,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    /// The terminal token; its lexeme is empty
    pub fn end_of_input(line: u32) -> Self {
        Self::new(TokenKind::EndOfInput, "", line)
    }

    /// Returns true if this is the terminal token
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {:<3} | {:<18} | {}", self.line, self.kind, self.text)
    }
}
