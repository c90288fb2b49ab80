use lumc_lex::scanner::Scanner;
use lumc_lex::{tokenize, TokenKind};
use proptest::prelude::*;

/// Source-like text: words, numbers, operators, quotes and line breaks.
fn lumina_like() -> impl Strategy<Value = String> {
    let pieces = prop_oneof![
        Just("int".to_string()),
        Just("func".to_string()),
        Just("requires".to_string()),
        Just("that".to_string()),
        Just("display".to_string()),
        Just(" ".to_string()),
        Just("\n".to_string()),
        Just("/*".to_string()),
        Just("*/".to_string()),
        Just("//".to_string()),
        Just("\"".to_string()),
        Just("'".to_string()),
        "[a-zA-Z_][a-zA-Z0-9_]{0,8}",
        "[0-9]{1,4}(\\.[0-9]{1,3}){0,2}",
        "[-+*/%=!<>&|^~(){}\\[\\],;:.@#$?`\\\\]{1,3}",
    ];
    prop::collection::vec(pieces, 0..40).prop_map(|parts| parts.concat())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn scanner_covers_every_byte(s in ".*") {
        let rebuilt: String = Scanner::new(&s).map(|m| m.text).collect();
        prop_assert_eq!(rebuilt, s);
    }

    #[test]
    fn ends_with_exactly_one_end_of_input(s in ".*") {
        let lexed = tokenize(&s);
        let ends = lexed.tokens.iter().filter(|t| t.kind == TokenKind::EndOfInput).count();
        prop_assert_eq!(ends, 1);
        prop_assert!(lexed.tokens.last().is_some_and(|t| t.is_end()));
    }

    #[test]
    fn lines_never_decrease(s in lumina_like()) {
        let lexed = tokenize(&s);
        for pair in lexed.tokens.windows(2) {
            prop_assert!(pair[0].line <= pair[1].line, "{:?} then {:?}", pair[0], pair[1]);
        }
        let last_line = lexed.tokens.last().map(|t| t.line).unwrap_or_default();
        prop_assert_eq!(last_line as usize, 1 + s.matches('\n').count());
    }

    #[test]
    fn one_diagnostic_per_invalid_token(s in lumina_like()) {
        let lexed = tokenize(&s);
        let invalid = lexed.tokens.iter().filter(|t| t.kind == TokenKind::Invalid).count();
        prop_assert_eq!(invalid, lexed.diagnostics.len());
        for (token, diagnostic) in lexed
            .tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Invalid)
            .zip(&lexed.diagnostics)
        {
            prop_assert_eq!(token.line, diagnostic.line);
        }
    }

    #[test]
    fn tokens_appear_in_source_order(s in lumina_like()) {
        let lexed = tokenize(&s);
        let mut rest = s.as_str();
        for token in lexed.tokens.iter().filter(|t| !t.is_end()) {
            let at = rest.find(token.text.as_str());
            prop_assert!(at.is_some(), "{:?} not found in {:?}", token.text, rest);
            if let Some(at) = at {
                rest = &rest[at + token.text.len()..];
            }
        }
    }

    #[test]
    fn lexing_is_deterministic(s in lumina_like()) {
        prop_assert_eq!(tokenize(&s), tokenize(&s));
    }
}
