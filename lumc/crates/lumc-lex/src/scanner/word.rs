//! Word matchers.
//!
//! Words are ASCII only: `[A-Za-z_][A-Za-z0-9_]*`. Any other letter falls
//! through to the catch-all.

/// Characters the language forbids outright.
const ILLEGAL_CHARS: &[char] = &['@', '#', '$', '?', '`', '\\'];

fn is_word_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_word_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn word_tail(s: &str) -> usize {
    s.bytes().take_while(|&b| is_word_continue(b)).count()
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn word(s: &str) -> Option<usize> {
    let first = *s.as_bytes().first()?;
    is_word_start(first).then(|| 1 + word_tail(&s[1..]))
}

/// `\d+[A-Za-z_][A-Za-z0-9_]*`: a name that starts with a digit.
pub fn digit_led_identifier(s: &str) -> Option<usize> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    word(&s[digits..]).map(|len| digits + len)
}

/// A word followed by one or more `-word` parts, such as `my-var`.
pub fn hyphenated_identifier(s: &str) -> Option<usize> {
    let mut len = word(s)?;
    let mut parts = 0;
    while s.as_bytes().get(len) == Some(&b'-') {
        match word(&s[len + 1..]) {
            Some(next) => {
                len += 1 + next;
                parts += 1;
            }
            None => break,
        }
    }
    (parts > 0).then_some(len)
}

/// A single explicitly illegal character.
pub fn illegal_char(s: &str) -> Option<usize> {
    s.chars()
        .next()
        .filter(|c| ILLEGAL_CHARS.contains(c))
        .map(char::len_utf8)
}
