//! Fixed word tables of the Lumina language.

/// Reserved words, control words first, then primitive types.
pub const KEYWORDS: &[&str] = &[
    "func", "main", "let", "var", "type", "struct", "void", "requires", "ensures", "invariant",
    "old", "result", "if", "else", "switch", "case", "default", "break", "while", "do", "for",
    "return", "display", "read", "int", "char", "bool", "double", "float", "string",
];

/// Keywords that name a primitive type and so introduce a variable.
pub const PRIMITIVE_TYPES: &[&str] = &["int", "char", "bool", "double", "float", "string"];

/// Keywords that open a design-by-contract clause.
pub const CONTRACT_KEYWORDS: &[&str] = &["requires", "ensures", "invariant"];

/// Keyword that introduces a function name.
pub const FUNCTION_INTRODUCER: &str = "func";

/// Keywords that introduce a type name.
pub const TYPE_INTRODUCERS: &[&str] = &["struct", "type"];

/// The one keyword allowed directly after `func`.
pub const ENTRY_POINT: &str = "main";

/// `true` and `false`.
pub const BOOLEAN_LITERALS: &[&str] = &["true", "false"];

/// Literal words other than booleans.
pub const RESERVED_LITERALS: &[&str] = &["null"];

/// Filler words accepted only in registered slots.
pub const NOISE_WORDS: &[&str] = &["that", "the", "is"];

/// Keyword → the noise word allowed right after it.
pub const NOISE_SLOTS: &[(&str, &str)] = &[
    ("requires", "that"),
    ("ensures", "that"),
    ("invariant", "that"),
    ("display", "the"),
    ("read", "the"),
    ("result", "is"),
    ("old", "is"),
];

/// Spellings borrowed from other languages → the Lumina spelling.
pub const REJECTED_SPELLINGS: &[(&str, &str)] = &[
    ("print", "display"),
    ("println", "display"),
    ("input", "read"),
    ("function", "func"),
    ("nil", "null"),
];

fn find(table: &[&'static str], word: &str) -> Option<&'static str> {
    table.iter().copied().find(|entry| *entry == word)
}

/// The static spelling of `word` if it is a keyword.
pub fn keyword(word: &str) -> Option<&'static str> {
    find(KEYWORDS, word)
}

/// Returns true if `word` is a primitive type keyword.
pub fn is_primitive_type(word: &str) -> bool {
    PRIMITIVE_TYPES.contains(&word)
}

/// Returns true if `word` is a contract keyword.
pub fn is_contract_keyword(word: &str) -> bool {
    CONTRACT_KEYWORDS.contains(&word)
}

/// Returns true if `word` introduces a type name.
pub fn is_type_introducer(word: &str) -> bool {
    TYPE_INTRODUCERS.contains(&word)
}

/// Keywords after which a second keyword is an error.
pub fn is_protected_predecessor(word: &str) -> bool {
    word == FUNCTION_INTRODUCER || is_type_introducer(word) || is_primitive_type(word)
}

/// Returns true for `true` and `false`.
pub fn is_boolean_literal(word: &str) -> bool {
    BOOLEAN_LITERALS.contains(&word)
}

/// Returns true for `null`.
pub fn is_reserved_literal(word: &str) -> bool {
    RESERVED_LITERALS.contains(&word)
}

/// Returns true if `word` is a noise word, in any slot.
pub fn is_noise_word(word: &str) -> bool {
    NOISE_WORDS.contains(&word)
}

/// The noise word registered for `keyword`, if any.
pub fn noise_slot(keyword: &str) -> Option<&'static str> {
    NOISE_SLOTS
        .iter()
        .find(|(k, _)| *k == keyword)
        .map(|&(_, noise)| noise)
}

/// The Lumina spelling for a rejected borrowed word.
pub fn rejected_spelling(word: &str) -> Option<&'static str> {
    REJECTED_SPELLINGS
        .iter()
        .find(|(borrowed, _)| *borrowed == word)
        .map(|&(_, replacement)| replacement)
}

/// Every reserved spelling: keywords, reserved literals, then booleans.
/// Typo detection compares against this list in this order.
pub fn reserved_words() -> impl Iterator<Item = &'static str> {
    KEYWORDS
        .iter()
        .chain(RESERVED_LITERALS)
        .chain(BOOLEAN_LITERALS)
        .copied()
}

/// The reserved spelling equal to `word`, if any.
pub fn reserved_word(word: &str) -> Option<&'static str> {
    reserved_words().find(|entry| *entry == word)
}
