//! Operator and punctuation matchers.

use crate::token::TokenKind;

/// Operator spellings the language rejects, longest first.
const MALFORMED_OPERATORS: &[&str] = &["===", "=<", "=>", "!!"];

/// Two-character operators and the kinds they produce.
const COMPOUND_OPERATORS: &[(&str, TokenKind)] = &[
    ("->", TokenKind::ArrowOp),
    ("==", TokenKind::EqualOp),
    ("!=", TokenKind::NotEqualOp),
    (">=", TokenKind::GreaterEqualOp),
    ("<=", TokenKind::LessEqualOp),
    ("&&", TokenKind::LogicalAndOp),
    ("||", TokenKind::LogicalOrOp),
    ("++", TokenKind::IncrementOp),
    ("--", TokenKind::DecrementOp),
    ("+=", TokenKind::AddAssignOp),
    ("-=", TokenKind::SubAssignOp),
    ("*=", TokenKind::MulAssignOp),
    ("/=", TokenKind::DivAssignOp),
    ("%=", TokenKind::ModAssignOp),
    ("<<", TokenKind::ShiftLeftOp),
    (">>", TokenKind::ShiftRightOp),
];

/// `===`, `=<`, `=>`, `!!`, or `--` fused to a number (`--5`).
pub fn malformed_operator(s: &str) -> Option<usize> {
    if let Some(op) = MALFORMED_OPERATORS.iter().find(|op| s.starts_with(**op)) {
        return Some(op.len());
    }
    let rest = s.strip_prefix("--")?;
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    (digits > 0).then_some(2 + digits)
}

/// Any entry of the two-character operator table.
pub fn compound_operator(s: &str) -> Option<usize> {
    COMPOUND_OPERATORS
        .iter()
        .find(|(op, _)| s.starts_with(op))
        .map(|(op, _)| op.len())
}

/// One operator or punctuation character.
pub fn single_char(s: &str) -> Option<usize> {
    s.chars()
        .next()
        .and_then(single_char_kind_of)
        .map(|_| 1)
}

/// Kind of a matched two-character operator.
pub fn compound_operator_kind(text: &str) -> Option<TokenKind> {
    COMPOUND_OPERATORS
        .iter()
        .find(|(op, _)| *op == text)
        .map(|&(_, kind)| kind)
}

/// Kind of a matched single-character operator or punctuation mark.
pub fn single_char_kind(text: &str) -> Option<TokenKind> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => single_char_kind_of(c),
        _ => None,
    }
}

fn single_char_kind_of(c: char) -> Option<TokenKind> {
    match c {
        '&' => Some(TokenKind::BitAndOp),
        '|' => Some(TokenKind::BitOrOp),
        '^' => Some(TokenKind::BitXorOp),
        '~' => Some(TokenKind::BitNotOp),
        '+' | '-' | '*' | '/' | '%' | '=' | '!' | '>' | '<' | '(' | ')' | '{' | '}' | '['
        | ']' | ',' | ';' | ':' | '.' => Some(TokenKind::Symbol),
        _ => None,
    }
}
