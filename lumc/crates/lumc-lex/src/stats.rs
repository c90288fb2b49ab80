//! Token filters and per-kind statistics.

use std::fmt;
use std::hash::BuildHasherDefault;
use std::str::FromStr;

use indexmap::IndexMap;
use rustc_hash::FxHasher;

use crate::token::{Token, TokenCategory, TokenKind};

/// Selects a subset of a token list for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenFilter {
    /// Every token, including the terminal one
    #[default]
    All,
    /// Only `Invalid` tokens
    Errors,
    Identifiers,
    Keywords,
    Literals,
    Noise,
    Operators,
    Symbols,
}

impl TokenFilter {
    pub const ALL: [TokenFilter; 8] = [
        TokenFilter::All,
        TokenFilter::Errors,
        TokenFilter::Identifiers,
        TokenFilter::Keywords,
        TokenFilter::Literals,
        TokenFilter::Noise,
        TokenFilter::Operators,
        TokenFilter::Symbols,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TokenFilter::All => "all",
            TokenFilter::Errors => "errors",
            TokenFilter::Identifiers => "identifiers",
            TokenFilter::Keywords => "keywords",
            TokenFilter::Literals => "literals",
            TokenFilter::Noise => "noise",
            TokenFilter::Operators => "operators",
            TokenFilter::Symbols => "symbols",
        }
    }

    /// Returns true if `token` passes this filter.
    pub fn matches(self, token: &Token) -> bool {
        let category = token.kind.category();
        match self {
            TokenFilter::All => true,
            TokenFilter::Errors => category == TokenCategory::Error,
            TokenFilter::Identifiers => token.kind.is_identifier(),
            TokenFilter::Keywords => category == TokenCategory::Keyword,
            TokenFilter::Literals => category == TokenCategory::Literal,
            TokenFilter::Noise => category == TokenCategory::NoiseWord,
            TokenFilter::Operators => category == TokenCategory::Operator,
            TokenFilter::Symbols => category == TokenCategory::Symbol,
        }
    }

    /// The tokens of `tokens` that pass this filter, in order.
    pub fn apply<'t>(self, tokens: &'t [Token]) -> impl Iterator<Item = &'t Token> + 't {
        tokens.iter().filter(move |token| self.matches(token))
    }
}

impl fmt::Display for TokenFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenFilter::ALL
            .into_iter()
            .find(|filter| filter.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<_> = TokenFilter::ALL.iter().map(|f| f.as_str()).collect();
                format!("unknown filter '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Token counts per kind.
///
/// ```
/// use lumc_lex::{tokenize, TokenKind, TokenStats};
///
/// let stats = TokenStats::from_tokens(&tokenize("int x = 1;").tokens);
/// assert_eq!(stats.count(TokenKind::Symbol), 2);
/// assert_eq!(stats.total(), 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenStats {
    counts: FxIndexMap<TokenKind, usize>,
}

impl TokenStats {
    /// Counts `tokens`, including the terminal token when present.
    pub fn from_tokens<'t>(tokens: impl IntoIterator<Item = &'t Token>) -> Self {
        let mut counts = FxIndexMap::default();
        for token in tokens {
            *counts.entry(token.kind).or_insert(0) += 1;
        }
        counts.sort_unstable_by(|a, _, b, _| a.as_str().cmp(b.as_str()));
        Self { counts }
    }

    pub fn count(&self, kind: TokenKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Kinds that occurred, ordered by their display name.
    pub fn iter(&self) -> impl Iterator<Item = (TokenKind, usize)> + '_ {
        self.counts.iter().map(|(&kind, &count)| (kind, count))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
