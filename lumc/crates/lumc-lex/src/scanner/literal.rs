//! Literal matchers.
//!
//! Escapes are recognised only so that an escaped quote does not close a
//! literal; the matched text is kept verbatim. Neither strings nor character
//! literals may span lines.

/// Length of a run of ASCII digits at the start of `s`.
fn digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// `\d+\.\d+`, or `None`.
fn decimal(s: &str) -> Option<usize> {
    let int = digits(s);
    if int == 0 || s.as_bytes().get(int) != Some(&b'.') {
        return None;
    }
    let frac = digits(&s[int + 1..]);
    (frac > 0).then_some(int + 1 + frac)
}

/// One unit of literal content: a plain character other than the quote and
/// newline, or a backslash followed by any character except a newline.
fn content_unit(s: &str, quote: char) -> Option<usize> {
    let mut chars = s.chars();
    match chars.next()? {
        '\\' => match chars.next()? {
            '\n' => None,
            escaped => Some(1 + escaped.len_utf8()),
        },
        '\n' => None,
        c if c == quote => None,
        c => Some(c.len_utf8()),
    }
}

/// Consumes content units after an opening quote. Returns the byte length
/// of the content and the number of units.
fn content(s: &str, quote: char) -> (usize, usize) {
    let mut len = 0;
    let mut units = 0;
    while let Some(unit) = content_unit(&s[len..], quote) {
        len += unit;
        units += 1;
    }
    (len, units)
}

/// `\d+(\.\d+){2,}`: a number with more than one decimal point.
pub fn multi_dot_number(s: &str) -> Option<usize> {
    let mut len = decimal(s)?;
    let mut extra_parts = 0;
    while s.as_bytes().get(len) == Some(&b'.') {
        let frac = digits(&s[len + 1..]);
        if frac == 0 {
            break;
        }
        len += 1 + frac;
        extra_parts += 1;
    }
    (extra_parts > 0).then_some(len)
}

/// `''`
pub fn empty_char(s: &str) -> Option<usize> {
    s.starts_with("''").then_some(2)
}

/// A quoted character literal holding two or more characters.
pub fn multi_char_literal(s: &str) -> Option<usize> {
    let body = s.strip_prefix('\'')?;
    let (len, units) = content(body, '\'');
    (units >= 2 && body[len..].starts_with('\'')).then_some(1 + len + 1)
}

/// `'` with no closing quote before the end of the line. Consumes the quote
/// and at most one content unit so the rest of the line is still lexed.
pub fn unterminated_char(s: &str) -> Option<usize> {
    let body = s.strip_prefix('\'')?;
    let (len, _) = content(body, '\'');
    if body[len..].starts_with('\'') {
        return None;
    }
    Some(1 + content_unit(body, '\'').unwrap_or(0))
}

/// `'c'` or `'\c'`: exactly one character.
pub fn char_literal(s: &str) -> Option<usize> {
    let body = s.strip_prefix('\'')?;
    let unit = content_unit(body, '\'')?;
    body[unit..].starts_with('\'').then_some(1 + unit + 1)
}

/// `"..."` closed on the same line.
pub fn string_literal(s: &str) -> Option<usize> {
    let body = s.strip_prefix('"')?;
    let (len, _) = content(body, '"');
    body[len..].starts_with('"').then_some(1 + len + 1)
}

/// `"` with no closing quote on the line. Stops before the newline.
pub fn unterminated_string(s: &str) -> Option<usize> {
    let body = s.strip_prefix('"')?;
    let end = body.find('\n').unwrap_or(body.len());
    Some(1 + end)
}

/// `\d+\.\d+`
pub fn float_literal(s: &str) -> Option<usize> {
    decimal(s)
}

/// `\d+`
pub fn integer_literal(s: &str) -> Option<usize> {
    let len = digits(s);
    (len > 0).then_some(len)
}
