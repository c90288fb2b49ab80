//! Lexical error kinds.
//!
//! Each variant renders the message carried by its diagnostic and knows the
//! diagnostic code it is reported under.

use lumc_util::DiagnosticCode;
use thiserror::Error;

/// Errors found while matching raw text, before words are classified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("unterminated block comment")]
    UnterminatedComment,

    #[error("malformed number '{0}': a number may contain only one decimal point")]
    MultiDotNumber(String),

    #[error("invalid identifier '{0}': identifiers cannot start with a digit")]
    DigitLedIdentifier(String),

    #[error("invalid identifier '{0}': hyphens are not allowed in identifiers, use underscores")]
    HyphenatedIdentifier(String),

    #[error("empty character literal: a character literal must hold exactly one character")]
    EmptyChar,

    #[error("invalid character literal {0}: a character literal must hold exactly one character")]
    MultiCharLiteral(String),

    #[error("unterminated character literal")]
    UnterminatedChar,

    #[error("invalid operator '{text}': {reason}")]
    MalformedOperator { text: String, reason: &'static str },

    #[error("illegal character '{0}'")]
    IllegalChar(String),

    #[error("unexpected character '{0}'")]
    UnexpectedChar(String),
}

impl ScanError {
    /// Builds the operator error, explaining what was probably meant.
    pub fn malformed_operator(text: &str) -> Self {
        let reason = match text {
            "===" => "did you mean '=='?",
            "=<" => "did you mean '<='?",
            "=>" => "did you mean '>='?",
            "!!" => "double negation is not allowed",
            _ => "'--' cannot be applied to a number literal",
        };
        ScanError::MalformedOperator {
            text: text.to_string(),
            reason,
        }
    }

    /// Diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            ScanError::UnterminatedString => DiagnosticCode::L_UNTERMINATED_STRING,
            ScanError::UnterminatedComment => DiagnosticCode::L_UNTERMINATED_COMMENT,
            ScanError::MultiDotNumber(_) => DiagnosticCode::L_MALFORMED_NUMBER,
            ScanError::DigitLedIdentifier(_) | ScanError::HyphenatedIdentifier(_) => {
                DiagnosticCode::L_MALFORMED_IDENTIFIER
            }
            ScanError::EmptyChar | ScanError::MultiCharLiteral(_) | ScanError::UnterminatedChar => {
                DiagnosticCode::L_MALFORMED_CHAR
            }
            ScanError::MalformedOperator { .. } => DiagnosticCode::L_MALFORMED_OPERATOR,
            ScanError::IllegalChar(_) => DiagnosticCode::L_ILLEGAL_CHAR,
            ScanError::UnexpectedChar(_) => DiagnosticCode::L_UNEXPECTED_CHAR,
        }
    }
}

/// Errors found while classifying a word.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("invalid keyword '{word}', use '{replacement}' instead")]
    RejectedSpelling {
        word: String,
        replacement: &'static str,
    },

    #[error("keywords cannot be used as identifiers: '{word}' cannot follow '{previous}'")]
    KeywordAsIdentifier { word: String, previous: &'static str },

    #[error("noise word '{word}' must follow a keyword that expects it")]
    NoiseWordWithoutKeyword { word: String },

    #[error("noise word '{word}' cannot follow '{previous}', expected '{expected}'")]
    NoiseWordMismatch {
        word: String,
        previous: &'static str,
        expected: &'static str,
    },

    #[error("noise word '{word}' cannot follow '{previous}'")]
    NoiseWordNotExpected { word: String, previous: &'static str },

    #[error("keywords are case-sensitive, did you mean '{keyword}'?")]
    KeywordCase {
        word: String,
        keyword: &'static str,
    },

    #[error("unknown word '{word}', did you mean '{suggestion}'?")]
    KeywordTypo {
        word: String,
        suggestion: &'static str,
    },

    #[error("function name '{0}' must be snake_case (no uppercase letters)")]
    FunctionNameCase(String),

    #[error("type name '{0}' must start with an uppercase letter")]
    TypeNameStart(String),

    #[error("type name '{0}' must be PascalCase (no underscores)")]
    TypeNameUnderscore(String),

    #[error("variable name '{0}' must start with a lowercase letter")]
    VariableNameStart(String),

    #[error("variable name '{0}' must be snake_case (no uppercase letters)")]
    VariableNameCase(String),

    #[error("identifier '{0}' mixes PascalCase and snake_case: type names cannot contain underscores")]
    MixedCaseName(String),
}

impl WordError {
    /// Diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            WordError::RejectedSpelling { .. } => DiagnosticCode::L_REJECTED_KEYWORD,
            WordError::KeywordAsIdentifier { .. } => DiagnosticCode::L_KEYWORD_AS_IDENTIFIER,
            WordError::NoiseWordWithoutKeyword { .. }
            | WordError::NoiseWordMismatch { .. }
            | WordError::NoiseWordNotExpected { .. } => DiagnosticCode::L_MISPLACED_NOISE_WORD,
            WordError::KeywordCase { .. } => DiagnosticCode::L_KEYWORD_CASE,
            WordError::KeywordTypo { .. } => DiagnosticCode::L_KEYWORD_TYPO,
            WordError::FunctionNameCase(_) => DiagnosticCode::L_FUNCTION_NAME,
            WordError::TypeNameStart(_) | WordError::TypeNameUnderscore(_) => {
                DiagnosticCode::L_TYPE_NAME
            }
            WordError::VariableNameStart(_) | WordError::VariableNameCase(_) => {
                DiagnosticCode::L_VARIABLE_NAME
            }
            WordError::MixedCaseName(_) => DiagnosticCode::L_MIXED_CASE_NAME,
        }
    }

    /// The spelling the author most likely meant, if there is one.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            WordError::RejectedSpelling { replacement, .. } => Some(*replacement),
            WordError::NoiseWordMismatch { expected, .. } => Some(*expected),
            WordError::KeywordCase { keyword, .. } => Some(*keyword),
            WordError::KeywordTypo { suggestion, .. } => Some(*suggestion),
            _ => None,
        }
    }
}
