//! Raw scanner.
//!
//! The scanner splits a buffer into [`RawMatch`]es that cover every byte
//! exactly once. At each position it tries the entries of [`MATCHERS`] in
//! declaration order and takes the first one that matches; the order is
//! what gives comments precedence over operators and malformed shapes
//! precedence over their well-formed counterparts.
//!
//! Each matcher owns one pattern category and returns the byte length of
//! its match at the start of the given slice, or `None`.
//!
//! - `comment` - Block and line comments
//! - `literal` - Character, string and numeric literals, malformed or not
//! - `operator` - Multi- and single-character operators and punctuation
//! - `word` - Words, malformed identifiers and illegal characters

mod comment;
mod literal;
mod operator;
mod word;

pub use operator::{compound_operator_kind, single_char_kind};

use crate::cursor::Cursor;

/// Pattern category of a raw match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `/* ... */`
    BlockComment,
    /// `/*` with no closing `*/`; runs to end of input
    UnterminatedComment,
    /// `// ...` up to, not including, the newline
    LineComment,
    /// `1.2.3`
    MultiDotNumber,
    /// `2fast`
    DigitLedIdentifier,
    /// `my-var`
    HyphenatedIdentifier,
    /// `''`
    EmptyChar,
    /// `'ab'`
    MultiCharLiteral,
    /// `'a` with no closing quote on the line
    UnterminatedChar,
    /// `'a'`, `'\n'`
    CharLiteral,
    /// `"text"`
    StringLiteral,
    /// `"text` with no closing quote on the line
    UnterminatedString,
    /// `3.14`
    FloatLiteral,
    /// `42`
    IntegerLiteral,
    /// `===`, `=<`, `=>`, `!!`, `--5`
    MalformedOperator,
    /// Two-character operator such as `->` or `<=`
    CompoundOperator,
    /// Single-character operator or punctuation
    SingleChar,
    /// `@`, `#`, `$`, `?`, `` ` ``, `\`
    IllegalChar,
    /// Letter or underscore followed by letters, digits or underscores
    Word,
    /// `\n`
    Newline,
    /// Run of spaces, tabs and carriage returns
    Whitespace,
    /// Any other single character
    Unexpected,
}

impl Category {
    /// Comments and whitespace: consumed but never turned into tokens.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Category::BlockComment
                | Category::LineComment
                | Category::Newline
                | Category::Whitespace
        )
    }
}

/// A matcher returns the byte length of its match at the start of the input.
pub type Matcher = fn(&str) -> Option<usize>;

/// Ordered matcher table. Earlier entries win.
pub const MATCHERS: &[(Category, Matcher)] = &[
    (Category::BlockComment, comment::block_comment),
    (Category::UnterminatedComment, comment::unterminated_block_comment),
    (Category::LineComment, comment::line_comment),
    (Category::MultiDotNumber, literal::multi_dot_number),
    (Category::DigitLedIdentifier, word::digit_led_identifier),
    (Category::HyphenatedIdentifier, word::hyphenated_identifier),
    (Category::EmptyChar, literal::empty_char),
    (Category::MultiCharLiteral, literal::multi_char_literal),
    (Category::UnterminatedChar, literal::unterminated_char),
    (Category::CharLiteral, literal::char_literal),
    (Category::StringLiteral, literal::string_literal),
    (Category::UnterminatedString, literal::unterminated_string),
    (Category::FloatLiteral, literal::float_literal),
    (Category::IntegerLiteral, literal::integer_literal),
    (Category::MalformedOperator, operator::malformed_operator),
    (Category::CompoundOperator, operator::compound_operator),
    (Category::SingleChar, operator::single_char),
    (Category::IllegalChar, word::illegal_char),
    (Category::Word, word::word),
    (Category::Newline, newline),
    (Category::Whitespace, whitespace),
    (Category::Unexpected, any_char),
];

/// One scanned span of the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMatch<'a> {
    /// Which pattern matched
    pub category: Category,
    /// The matched source text
    pub text: &'a str,
    /// Line of the first character
    pub line: u32,
}

/// Iterator of raw matches over a source buffer
///
/// ```
/// use lumc_lex::scanner::{Category, Scanner};
///
/// let categories: Vec<_> = Scanner::new("x // hi\n")
///     .map(|m| m.category)
///     .collect();
/// assert_eq!(
///     categories,
///     [Category::Word, Category::Whitespace, Category::LineComment, Category::Newline]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Line the next match will start on; after the last match, the final
    /// line count.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    fn match_at_cursor(&self) -> (Category, usize) {
        let rest = self.cursor.remaining();
        MATCHERS
            .iter()
            .find_map(|&(category, matcher)| {
                matcher(rest)
                    .filter(|&len| len > 0)
                    .map(|len| (category, len))
            })
            .unwrap_or_else(|| (Category::Unexpected, self.cursor.current_char().len_utf8()))
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = RawMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.is_at_end() {
            return None;
        }

        let (category, len) = self.match_at_cursor();
        let start = self.cursor.position();
        let line = self.cursor.line();
        self.cursor.advance_bytes(len);

        Some(RawMatch {
            category,
            text: self.cursor.slice_from(start),
            line,
        })
    }
}

fn newline(s: &str) -> Option<usize> {
    s.starts_with('\n').then_some(1)
}

fn whitespace(s: &str) -> Option<usize> {
    let len = s
        .bytes()
        .take_while(|b| matches!(b, b' ' | b'\t' | b'\r'))
        .count();
    (len > 0).then_some(len)
}

fn any_char(s: &str) -> Option<usize> {
    s.chars().next().map(char::len_utf8)
}
