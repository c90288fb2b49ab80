//! Character cursor for traversing source code.
//!
//! The cursor owns the only piece of state the scanner keeps between
//! matches: the byte position and the running line counter. Every byte the
//! scanner consumes goes through [`Cursor::advance_bytes`], so newlines inside
//! comments are counted the same way as standalone ones.

/// A cursor over a source buffer.
///
/// # Example
///
/// ```
/// use lumc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("/* a\nb */ x");
/// cursor.advance_bytes(9);
/// assert_eq!(cursor.line(), 2);
/// assert_eq!(cursor.remaining(), " x");
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`, on line 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }

    /// Returns the current character, or `'\0'` at end of input.
    ///
    /// ```
    /// use lumc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("é!");
    /// assert_eq!(cursor.current_char(), 'é');
    /// ```
    pub fn current_char(&self) -> char {
        self.remaining().chars().next().unwrap_or('\0')
    }

    /// Advances by `count` bytes, counting every newline passed over.
    ///
    /// The count is clamped to the end of the source. Callers pass match
    /// lengths produced by matchers, which always end on a char boundary.
    #[inline]
    pub fn advance_bytes(&mut self, count: usize) {
        let end = (self.position + count).min(self.source.len());
        let newlines = self.source.as_bytes()[self.position..end]
            .iter()
            .filter(|&&b| b == b'\n')
            .count();
        self.line += newlines as u32;
        self.position = end;
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source from `start` up to the current position.
    ///
    /// ```
    /// use lumc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("while (x)");
    /// let start = cursor.position();
    /// cursor.advance_bytes(5);
    /// assert_eq!(cursor.slice_from(start), "while");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}
