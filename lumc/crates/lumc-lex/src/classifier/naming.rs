//! Naming conventions for user-defined names.
//!
//! | position        | rule                                   |
//! |-----------------|----------------------------------------|
//! | after `func`    | snake_case                             |
//! | after a type    | PascalCase, no underscores             |
//! | after primitive | starts lowercase, no uppercase letters |
//! | elsewhere       | PascalCase is a type, else a variable  |

use crate::error::WordError;
use crate::token::TokenKind;

fn has_uppercase(word: &str) -> bool {
    word.bytes().any(|b| b.is_ascii_uppercase())
}

fn starts_uppercase(word: &str) -> bool {
    word.bytes().next().is_some_and(|b| b.is_ascii_uppercase())
}

fn starts_lowercase(word: &str) -> bool {
    word.bytes().next().is_some_and(|b| b.is_ascii_lowercase())
}

/// A name declared by `func`.
pub fn function_name(word: &str) -> Result<TokenKind, WordError> {
    if has_uppercase(word) {
        return Err(WordError::FunctionNameCase(word.to_string()));
    }
    Ok(TokenKind::IdentifierFunction)
}

/// A name declared by `struct` or `type`.
pub fn type_name(word: &str) -> Result<TokenKind, WordError> {
    if !starts_uppercase(word) {
        return Err(WordError::TypeNameStart(word.to_string()));
    }
    if word.contains('_') {
        return Err(WordError::TypeNameUnderscore(word.to_string()));
    }
    Ok(TokenKind::IdentifierType)
}

/// A name declared by a primitive type keyword.
pub fn variable_name(word: &str) -> Result<TokenKind, WordError> {
    if !starts_lowercase(word) {
        return Err(WordError::VariableNameStart(word.to_string()));
    }
    if has_uppercase(word) {
        return Err(WordError::VariableNameCase(word.to_string()));
    }
    Ok(TokenKind::IdentifierVariable)
}

/// A name used outside a declaration.
pub fn reference(word: &str) -> Result<TokenKind, WordError> {
    match (starts_uppercase(word), word.contains('_')) {
        (true, false) => Ok(TokenKind::IdentifierType),
        (true, true) => Err(WordError::MixedCaseName(word.to_string())),
        (false, _) => Ok(TokenKind::IdentifierVariable),
    }
}
