//! Word classification.
//!
//! Every word the scanner finds is resolved here into a keyword, literal,
//! noise word, identifier kind, or an error. The decision depends on the
//! word itself and on the most recent keyword, which the classifier tracks
//! across calls.
//!
//! Checks run in a fixed order and the first one that applies wins:
//!
//! 1. borrowed spellings (`print`, `input`, ...) are rejected
//! 2. `true` / `false`
//! 3. keywords, unless the previous keyword declares a name here
//! 4. `null`
//! 5. noise words, only in their registered slot
//! 6. reserved words written in the wrong case
//! 7. near misses of reserved words
//! 8. naming rules chosen by the previous keyword

pub mod naming;
pub mod similarity;
pub mod vocabulary;

use lumc_util::Handler;
use tracing::trace;

use crate::config::LexerConfig;
use crate::error::WordError;
use crate::token::TokenKind;

/// Stateful word classifier.
///
/// ```
/// use lumc_lex::{Classifier, TokenKind};
/// use lumc_util::Handler;
///
/// let mut handler = Handler::new();
/// let mut classifier = Classifier::default();
/// assert_eq!(classifier.classify("int", 1, &mut handler), TokenKind::Keyword);
/// assert_eq!(classifier.classify("count", 1, &mut handler), TokenKind::IdentifierVariable);
/// assert!(!handler.has_errors());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: LexerConfig,
    last_keyword: Option<&'static str>,
}

impl Classifier {
    pub fn new(config: LexerConfig) -> Self {
        Self {
            config,
            last_keyword: None,
        }
    }

    /// The most recent keyword still in effect.
    pub fn last_keyword(&self) -> Option<&'static str> {
        self.last_keyword
    }

    /// Forgets the previous keyword. Called for every token that is not a
    /// word, so a declaration context never reaches past punctuation.
    pub fn reset(&mut self) {
        self.last_keyword = None;
    }

    /// Classifies `word`, reporting a rejection to `handler` and returning
    /// [`TokenKind::Invalid`] for it.
    pub fn classify(&mut self, word: &str, line: u32, handler: &mut Handler) -> TokenKind {
        let kind = match self.decide(word) {
            Ok(kind) => kind,
            Err(err) => {
                trace!(word, line, code = %err.code(), "rejected word");
                let mut builder = handler.build_error(line, err.to_string()).code(err.code());
                if let Some(suggestion) = err.suggestion() {
                    builder = builder.suggestion(suggestion);
                }
                builder.emit(handler);
                TokenKind::Invalid
            }
        };

        match kind {
            TokenKind::Keyword => self.last_keyword = vocabulary::keyword(word),
            TokenKind::NoiseWord => {}
            _ => self.last_keyword = None,
        }
        kind
    }

    fn decide(&self, word: &str) -> Result<TokenKind, WordError> {
        if let Some(replacement) = vocabulary::rejected_spelling(word) {
            return Err(WordError::RejectedSpelling {
                word: word.to_string(),
                replacement,
            });
        }
        if vocabulary::is_boolean_literal(word) {
            return Ok(TokenKind::BooleanLiteral);
        }
        if let Some(keyword) = vocabulary::keyword(word) {
            return self.check_keyword(word, keyword).map(|()| TokenKind::Keyword);
        }
        if vocabulary::is_reserved_literal(word) {
            return Ok(TokenKind::ReservedLiteral);
        }
        if vocabulary::is_noise_word(word) {
            return self.check_noise_word(word).map(|()| TokenKind::NoiseWord);
        }
        if let Some(keyword) = vocabulary::reserved_word(&word.to_ascii_lowercase()) {
            return Err(WordError::KeywordCase {
                word: word.to_string(),
                keyword,
            });
        }
        if word.chars().count() >= self.config.min_typo_length() {
            let cutoff = self.config.similarity_cutoff();
            if let Some((suggestion, _)) =
                similarity::closest(word, vocabulary::reserved_words(), cutoff)
            {
                return Err(WordError::KeywordTypo {
                    word: word.to_string(),
                    suggestion,
                });
            }
        }

        match self.last_keyword {
            Some(vocabulary::FUNCTION_INTRODUCER) => naming::function_name(word),
            Some(previous) if vocabulary::is_type_introducer(previous) => naming::type_name(word),
            Some(previous) if vocabulary::is_primitive_type(previous) => {
                naming::variable_name(word)
            }
            _ => naming::reference(word),
        }
    }

    /// A keyword directly after `func`, `struct`, `type`, or a primitive type
    /// is a keyword in a name position. `func main` and contract keywords
    /// after a primitive type are allowed.
    fn check_keyword(&self, word: &str, keyword: &'static str) -> Result<(), WordError> {
        let Some(previous) = self.last_keyword else {
            return Ok(());
        };
        if !vocabulary::is_protected_predecessor(previous) {
            return Ok(());
        }
        let allowed = (previous == vocabulary::FUNCTION_INTRODUCER
            && keyword == vocabulary::ENTRY_POINT)
            || (vocabulary::is_primitive_type(previous) && vocabulary::is_contract_keyword(keyword));
        if allowed {
            Ok(())
        } else {
            Err(WordError::KeywordAsIdentifier {
                word: word.to_string(),
                previous,
            })
        }
    }

    fn check_noise_word(&self, word: &str) -> Result<(), WordError> {
        let Some(previous) = self.last_keyword else {
            return Err(WordError::NoiseWordWithoutKeyword {
                word: word.to_string(),
            });
        };
        match vocabulary::noise_slot(previous) {
            Some(expected) if expected == word => Ok(()),
            Some(expected) => Err(WordError::NoiseWordMismatch {
                word: word.to_string(),
                previous,
                expected,
            }),
            None => Err(WordError::NoiseWordNotExpected {
                word: word.to_string(),
                previous,
            }),
        }
    }
}
