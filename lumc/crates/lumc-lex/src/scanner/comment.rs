//! Comment matchers.
//!
//! Block comments do not nest: the first `*/` closes the comment.

/// `/* ... */`, shortest match.
pub fn block_comment(s: &str) -> Option<usize> {
    let body = s.strip_prefix("/*")?;
    body.find("*/").map(|end| 2 + end + 2)
}

/// `/*` that is never closed. Consumes the rest of the input.
pub fn unterminated_block_comment(s: &str) -> Option<usize> {
    s.starts_with("/*").then_some(s.len())
}

/// `//` up to the end of the line.
pub fn line_comment(s: &str) -> Option<usize> {
    if !s.starts_with("//") {
        return None;
    }
    Some(s.find('\n').unwrap_or(s.len()))
}
