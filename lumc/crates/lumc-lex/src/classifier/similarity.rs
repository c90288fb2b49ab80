//! Fuzzy string similarity for typo detection.
//!
//! The score is the Ratcliff/Obershelp "gestalt" ratio: find the longest
//! common block, recurse on the pieces to its left and right, and report
//! `2 * matched / (len(a) + len(b))`. Identical strings score 1.0, strings
//! with nothing in common score 0.0.

/// Longest common block of `a` and `b` as `(start_a, start_b, len)`.
///
/// Ties go to the block that starts earliest in `a`, then earliest in `b`.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut prev = vec![0usize; b.len() + 1];
    let mut cur = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        for (j, cb) in b.iter().enumerate() {
            cur[j + 1] = if ca == cb { prev[j] + 1 } else { 0 };
            let len = cur[j + 1];
            if len > best.2 {
                best = (i + 1 - len, j + 1 - len, len);
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    best
}

fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (i, j, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_chars(&a[..i], &b[..j]) + matching_chars(&a[i + len..], &b[j + len..])
}

/// Similarity ratio of `a` and `b` in `0.0..=1.0`.
///
/// ```
/// use lumc_lex::classifier::similarity::ratio;
///
/// assert_eq!(ratio("while", "while"), 1.0);
/// assert!(ratio("whille", "while") > 0.9);
/// assert_eq!(ratio("abc", "xyz"), 0.0);
/// ```
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

/// The candidate most similar to `word` whose score exceeds `cutoff`.
///
/// Ties keep the candidate that comes first.
pub fn closest<'v>(
    word: &str,
    candidates: impl IntoIterator<Item = &'v str>,
    cutoff: f64,
) -> Option<(&'v str, f64)> {
    candidates
        .into_iter()
        .map(|candidate| (candidate, ratio(word, candidate)))
        .filter(|&(_, score)| score > cutoff)
        .fold(None, |best, (candidate, score)| match best {
            Some((_, best_score)) if best_score >= score => best,
            _ => Some((candidate, score)),
        })
}
