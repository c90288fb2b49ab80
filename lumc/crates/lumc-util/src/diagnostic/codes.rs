//! Diagnostic codes for categorizing lexical errors.
//!
//! Every lexical diagnostic carries a [`DiagnosticCode`] naming its category,
//! so a consumer can group, count, or look up errors without parsing the
//! message text.
//!
//! # Examples
//!
//! ```
//! use lumc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::L_UNTERMINATED_STRING;
//! assert_eq!(code.prefix, "L");
//! assert_eq!(code.as_str(), "L0101");
//! ```

/// A unique code identifying a diagnostic category
///
/// Codes follow the format `{prefix}{number}` with the number padded to
/// four digits. Lexical codes use the `L` prefix and are grouped by
/// hundreds: `01xx` literals and comments, `02xx` malformed shapes, `03xx`
/// characters, `04xx` word classification, `05xx` naming rules.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiagnosticCode {
    /// The prefix (`L` for lexical)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use lumc_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("L", 901);
    /// assert_eq!(code.as_str(), "L0901");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the full code string (e.g. `"L0101"`)
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LITERALS AND COMMENTS (L01xx)
    // =========================================================================

    /// L0101: String literal not closed on its line
    pub const L_UNTERMINATED_STRING: Self = Self::new("L", 101);
    /// L0102: Block comment not closed before end of input
    pub const L_UNTERMINATED_COMMENT: Self = Self::new("L", 102);

    // =========================================================================
    // MALFORMED SHAPES (L02xx)
    // =========================================================================

    /// L0201: Number with more than one decimal point
    pub const L_MALFORMED_NUMBER: Self = Self::new("L", 201);
    /// L0202: Identifier that starts with a digit or contains a hyphen
    pub const L_MALFORMED_IDENTIFIER: Self = Self::new("L", 202);
    /// L0203: Character literal with zero or several characters, or unclosed
    pub const L_MALFORMED_CHAR: Self = Self::new("L", 203);
    /// L0204: Operator spelled in a way the language does not accept
    pub const L_MALFORMED_OPERATOR: Self = Self::new("L", 204);

    // =========================================================================
    // CHARACTERS (L03xx)
    // =========================================================================

    /// L0301: Character the language explicitly forbids
    pub const L_ILLEGAL_CHAR: Self = Self::new("L", 301);
    /// L0302: Character no rule recognizes
    pub const L_UNEXPECTED_CHAR: Self = Self::new("L", 302);

    // =========================================================================
    // WORD CLASSIFICATION (L04xx)
    // =========================================================================

    /// L0401: Spelling borrowed from another language
    pub const L_REJECTED_KEYWORD: Self = Self::new("L", 401);
    /// L0402: Keyword written with the wrong letter case
    pub const L_KEYWORD_CASE: Self = Self::new("L", 402);
    /// L0403: Near-miss misspelling of a reserved word
    pub const L_KEYWORD_TYPO: Self = Self::new("L", 403);
    /// L0404: Keyword in a slot that requires a new name
    pub const L_KEYWORD_AS_IDENTIFIER: Self = Self::new("L", 404);
    /// L0405: Noise word outside its registered slot
    pub const L_MISPLACED_NOISE_WORD: Self = Self::new("L", 405);

    // =========================================================================
    // NAMING RULES (L05xx)
    // =========================================================================

    /// L0501: Function name is not snake_case
    pub const L_FUNCTION_NAME: Self = Self::new("L", 501);
    /// L0502: Type name is not PascalCase
    pub const L_TYPE_NAME: Self = Self::new("L", 502);
    /// L0503: Variable name is not snake_case
    pub const L_VARIABLE_NAME: Self = Self::new("L", 503);
    /// L0504: Reference mixes PascalCase and snake_case
    pub const L_MIXED_CASE_NAME: Self = Self::new("L", 504);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
