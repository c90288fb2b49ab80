//! Edge case tests for lumc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Token, TokenKind};
    use lumc_util::DiagnosticCode;

    fn lex_all(source: &str) -> Vec<Token> {
        let mut tokens = tokenize(source).tokens;
        tokens.pop();
        tokens
    }

    fn first(source: &str) -> Token {
        lex_all(source).remove(0)
    }

    fn codes(source: &str) -> Vec<DiagnosticCode> {
        tokenize(source).diagnostics.iter().map(|d| d.code).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("int {} = 1;", name));
        assert_eq!(t[1].kind, TokenKind::IdentifierVariable);
        assert_eq!(t[1].text.len(), 10000);
    }

    #[test]
    fn test_edge_comment_beats_division() {
        let t = lex_all("a / b // c / d");
        assert_eq!(t.len(), 3);
        assert_eq!(t[1].kind, TokenKind::Symbol);
    }

    #[test]
    fn test_edge_block_comment_does_not_nest() {
        let t = lex_all("/* a /* b */ c */");
        assert_eq!(t[0].text, "c");
        assert_eq!(t[1].text, "*");
        assert_eq!(t[2].text, "/");
    }

    #[test]
    fn test_edge_block_comment_advances_lines() {
        let t = lex_all("/* one\ntwo\nthree */ x");
        assert_eq!(t[0].line, 3);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = lex_all("int a;\r\nint b;\r\n");
        assert_eq!(t.len(), 6);
        assert_eq!(t[3].line, 2);
        assert!(t.iter().all(|tok| tok.kind != TokenKind::Invalid));
    }

    #[test]
    fn test_edge_escaped_quote_in_string() {
        let t = first(r#""say \"hi\"" x"#);
        assert_eq!(t.kind, TokenKind::StringLiteral);
        assert_eq!(t.text, r#""say \"hi\"""#);
    }

    #[test]
    fn test_edge_string_does_not_span_lines() {
        let lexed = tokenize("\"open\nint x;");
        assert_eq!(lexed.tokens[0].kind, TokenKind::Invalid);
        assert_eq!(lexed.tokens[0].text, "\"open");
        assert_eq!(lexed.tokens[1].kind, TokenKind::Keyword);
        assert_eq!(lexed.tokens[1].line, 2);
        assert_eq!(lexed.diagnostics.len(), 1);
    }

    #[test]
    fn test_edge_char_shapes() {
        assert_eq!(first("'a'").kind, TokenKind::CharLiteral);
        assert_eq!(first("'\\t'").kind, TokenKind::CharLiteral);
        assert_eq!(codes("''"), vec![DiagnosticCode::L_MALFORMED_CHAR]);
        assert_eq!(codes("'ab'"), vec![DiagnosticCode::L_MALFORMED_CHAR]);
        assert_eq!(codes("'a"), vec![DiagnosticCode::L_MALFORMED_CHAR]);
    }

    #[test]
    fn test_edge_unclosed_char_keeps_rest_of_line() {
        let lexed = tokenize("char c = 'a; int y = 1;");
        let shape: Vec<_> = lexed
            .tokens
            .iter()
            .map(|t| (t.kind, t.text.as_str()))
            .collect();
        assert_eq!(
            shape,
            vec![
                (TokenKind::Keyword, "char"),
                (TokenKind::IdentifierVariable, "c"),
                (TokenKind::Symbol, "="),
                (TokenKind::Invalid, "'a"),
                (TokenKind::Symbol, ";"),
                (TokenKind::Keyword, "int"),
                (TokenKind::IdentifierVariable, "y"),
                (TokenKind::Symbol, "="),
                (TokenKind::IntegerLiteral, "1"),
                (TokenKind::Symbol, ";"),
                (TokenKind::EndOfInput, ""),
            ]
        );
        assert_eq!(codes("char c = 'a; int y = 1;"), vec![DiagnosticCode::L_MALFORMED_CHAR]);
    }

    #[test]
    fn test_edge_malformed_operators() {
        for source in ["a === b", "a =< b", "a => b", "!!a", "x = --5"] {
            assert_eq!(
                codes(source),
                vec![DiagnosticCode::L_MALFORMED_OPERATOR],
                "{}",
                source
            );
        }
    }

    #[test]
    fn test_edge_decrement_identifier_is_fine() {
        let t = lex_all("--x");
        assert_eq!(t[0].kind, TokenKind::DecrementOp);
        assert_eq!(t[1].kind, TokenKind::IdentifierVariable);
    }

    #[test]
    fn test_edge_arrow_is_not_hyphenated_name() {
        let t = lex_all("a->b");
        assert_eq!(t[1].kind, TokenKind::ArrowOp);
    }

    #[test]
    fn test_edge_hyphenated_name() {
        let lexed = tokenize("int my-var = 1;");
        assert_eq!(lexed.tokens[1].text, "my-var");
        assert_eq!(lexed.tokens[1].kind, TokenKind::Invalid);
        assert_eq!(
            lexed.diagnostics[0].code,
            DiagnosticCode::L_MALFORMED_IDENTIFIER
        );
    }

    #[test]
    fn test_edge_non_ascii_letter_is_unexpected() {
        let lexed = tokenize("café");
        assert_eq!(lexed.tokens[0].text, "caf");
        assert_eq!(lexed.tokens[1].text, "é");
        assert_eq!(lexed.tokens[1].kind, TokenKind::Invalid);
        assert!(lexed.diagnostics[0].message.contains("unexpected character"));
    }

    #[test]
    fn test_edge_unterminated_comment_line() {
        let lexed = tokenize("int x;\n\n/* never closed\n\n");
        assert_eq!(lexed.diagnostics.len(), 1);
        assert_eq!(lexed.diagnostics[0].line, 3);
        assert_eq!(
            lexed.diagnostics[0].code,
            DiagnosticCode::L_UNTERMINATED_COMMENT
        );
    }

    #[test]
    fn test_edge_illegal_characters() {
        let lexed = tokenize("@ # $ ? ` \\");
        assert_eq!(lexed.diagnostics.len(), 6);
        assert!(lexed
            .diagnostics
            .iter()
            .all(|d| d.code == DiagnosticCode::L_ILLEGAL_CHAR));
    }

    #[test]
    fn test_edge_short_words_skip_typo_check() {
        let t = lex_all("retrun fo");
        assert_eq!(t[0].kind, TokenKind::Invalid);
        assert_eq!(t[1].kind, TokenKind::IdentifierVariable);
    }

    #[test]
    fn test_edge_context_reset_after_literal() {
        let t = lex_all("int 5 Value");
        assert_eq!(t[2].kind, TokenKind::IdentifierType);
    }
}
