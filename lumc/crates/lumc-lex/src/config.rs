//! Lexer tuning knobs.

use thiserror::Error;

/// Default similarity a word must exceed to be reported as a keyword typo.
pub const DEFAULT_SIMILARITY_CUTOFF: f64 = 0.8;

/// Default minimum length, in characters, of a word checked for typos.
pub const DEFAULT_MIN_TYPO_LENGTH: usize = 3;

/// Invalid [`LexerConfig`] values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("similarity cutoff must be between 0.0 and 1.0, got {0}")]
    SimilarityCutoff(f64),

    #[error("minimum typo length must be at least 1")]
    MinTypoLength,
}

/// Settings for word classification.
///
/// ```
/// use lumc_lex::LexerConfig;
///
/// let config = LexerConfig::new(0.9, 4).unwrap();
/// assert_eq!(config.min_typo_length(), 4);
/// assert!(LexerConfig::new(1.5, 3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexerConfig {
    similarity_cutoff: f64,
    min_typo_length: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            similarity_cutoff: DEFAULT_SIMILARITY_CUTOFF,
            min_typo_length: DEFAULT_MIN_TYPO_LENGTH,
        }
    }
}

impl LexerConfig {
    /// Creates a validated configuration.
    pub fn new(similarity_cutoff: f64, min_typo_length: usize) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&similarity_cutoff) {
            return Err(ConfigError::SimilarityCutoff(similarity_cutoff));
        }
        if min_typo_length == 0 {
            return Err(ConfigError::MinTypoLength);
        }
        Ok(Self {
            similarity_cutoff,
            min_typo_length,
        })
    }

    pub fn similarity_cutoff(&self) -> f64 {
        self.similarity_cutoff
    }

    pub fn min_typo_length(&self) -> usize {
        self.min_typo_length
    }
}
