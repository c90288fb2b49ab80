//! End-to-end lexing of small Lumina programs.

use lumc_lex::{tokenize, Lexer, TokenKind};
use lumc_util::Handler;

fn shape(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source)
        .tokens
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect()
}

fn tok(kind: TokenKind, text: &str) -> (TokenKind, String) {
    (kind, text.to_string())
}

#[test]
fn declaration_of_a_variable() {
    let lexed = tokenize("int x;");
    assert!(lexed.diagnostics.is_empty());
    assert_eq!(
        shape("int x;"),
        vec![
            tok(TokenKind::Keyword, "int"),
            tok(TokenKind::IdentifierVariable, "x"),
            tok(TokenKind::Symbol, ";"),
            tok(TokenKind::EndOfInput, ""),
        ]
    );
}

#[test]
fn uppercase_variable_is_rejected() {
    let lexed = tokenize("int X;");
    assert_eq!(
        shape("int X;"),
        vec![
            tok(TokenKind::Keyword, "int"),
            tok(TokenKind::Invalid, "X"),
            tok(TokenKind::Symbol, ";"),
            tok(TokenKind::EndOfInput, ""),
        ]
    );
    assert_eq!(lexed.diagnostics.len(), 1);
    assert!(lexed.diagnostics[0].message.contains("lowercase letter"));
}

#[test]
fn func_main_is_the_entry_point() {
    let lexed = tokenize("func main() {}");
    assert!(lexed.diagnostics.is_empty());
    assert_eq!(
        shape("func main() {}"),
        vec![
            tok(TokenKind::Keyword, "func"),
            tok(TokenKind::Keyword, "main"),
            tok(TokenKind::Symbol, "("),
            tok(TokenKind::Symbol, ")"),
            tok(TokenKind::Symbol, "{"),
            tok(TokenKind::Symbol, "}"),
            tok(TokenKind::EndOfInput, ""),
        ]
    );
}

#[test]
fn misspelled_keyword_gets_a_suggestion() {
    let lexed = tokenize("whille (x)");
    assert_eq!(
        shape("whille (x)"),
        vec![
            tok(TokenKind::Invalid, "whille"),
            tok(TokenKind::Symbol, "("),
            tok(TokenKind::IdentifierVariable, "x"),
            tok(TokenKind::Symbol, ")"),
            tok(TokenKind::EndOfInput, ""),
        ]
    );
    assert_eq!(lexed.diagnostics.len(), 1);
    assert!(lexed.diagnostics[0].message.contains("did you mean 'while'"));
    assert_eq!(lexed.diagnostics[0].suggestion.as_deref(), Some("while"));
}

#[test]
fn unterminated_string_at_end_of_input() {
    let lexed = tokenize("\"unterminated");
    assert_eq!(
        shape("\"unterminated"),
        vec![
            tok(TokenKind::Invalid, "\"unterminated"),
            tok(TokenKind::EndOfInput, ""),
        ]
    );
    assert_eq!(lexed.diagnostics.len(), 1);
    assert!(lexed.diagnostics[0]
        .message
        .contains("unterminated string"));
    assert_eq!(
        lexed.diagnostics[0].to_string(),
        "Lexical Error (Line 1): unterminated string literal"
    );
}

#[test]
fn noise_word_after_contract_keyword() {
    let lexed = tokenize("requires that x > 0");
    assert!(lexed.diagnostics.is_empty());
    assert_eq!(
        shape("requires that x > 0"),
        vec![
            tok(TokenKind::Keyword, "requires"),
            tok(TokenKind::NoiseWord, "that"),
            tok(TokenKind::IdentifierVariable, "x"),
            tok(TokenKind::Symbol, ">"),
            tok(TokenKind::IntegerLiteral, "0"),
            tok(TokenKind::EndOfInput, ""),
        ]
    );
}

#[test]
fn noise_word_keeps_the_keyword_for_the_next_word() {
    let mut handler = Handler::new();
    let mut lexer = Lexer::new("int requires that Total", &mut handler);
    let kinds: Vec<_> = (&mut lexer).map(|t| t.kind).collect();
    // `Total` is checked against `requires`, not `int`, so it is a type name.
    assert_eq!(
        kinds,
        vec![
            TokenKind::Keyword,
            TokenKind::Keyword,
            TokenKind::NoiseWord,
            TokenKind::IdentifierType,
            TokenKind::EndOfInput,
        ]
    );
    assert!(!handler.has_errors());
}

#[test]
fn lines_are_stamped_on_first_character() {
    let source = "func compute()\n{\n  string s = \"a\";\n  /* one\n two */ return s;\n}\n";
    let lexed = tokenize(source);
    let lines: Vec<_> = lexed.tokens.iter().map(|t| (t.text.as_str(), t.line)).collect();
    assert!(lines.contains(&("func", 1)));
    assert!(lines.contains(&("{", 2)));
    assert!(lines.contains(&("\"a\"", 3)));
    assert!(lines.contains(&("return", 5)));
    assert_eq!(lexed.tokens.last().map(|t| t.line), Some(7));
}

#[test]
fn errors_do_not_stop_lexing() {
    let source = "int 2x = 1.2.3;\nprint the x;\nString name;\nstruct point {}";
    let lexed = tokenize(source);
    let invalid: Vec<_> = lexed
        .tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Invalid)
        .map(|t| (t.text.as_str(), t.line))
        .collect();
    assert_eq!(
        invalid,
        vec![("2x", 1), ("1.2.3", 1), ("print", 2), ("the", 2), ("String", 3), ("point", 4)]
    );
    assert_eq!(lexed.diagnostics.len(), invalid.len());
    assert!(lexed.tokens.last().is_some_and(|t| t.is_end()));
}

#[test]
fn diagnostics_render_with_line_prefix() {
    let lexed = tokenize("\n\nprint x;");
    assert_eq!(
        lexed.diagnostics[0].to_string(),
        "Lexical Error (Line 3): invalid keyword 'print', use 'display' instead"
    );
}

#[test]
fn context_does_not_carry_across_calls() {
    assert_eq!(shape("int"), vec![tok(TokenKind::Keyword, "int"), tok(TokenKind::EndOfInput, "")]);
    let lexed = tokenize("X");
    assert!(lexed.diagnostics.is_empty());
    assert_eq!(lexed.tokens[0].kind, TokenKind::IdentifierType);

    tokenize("func");
    let lexed = tokenize("Foo");
    assert!(lexed.diagnostics.is_empty());
    assert_eq!(lexed.tokens[0].kind, TokenKind::IdentifierType);
}

#[test]
fn context_does_not_carry_across_lexers_sharing_a_handler() {
    let mut handler = Handler::new();
    let first = Lexer::new("func", &mut handler).tokenize();
    assert_eq!(first[0].kind, TokenKind::Keyword);

    let second = Lexer::new("Foo", &mut handler).tokenize();
    assert_eq!(second[0].kind, TokenKind::IdentifierType);
    assert!(!handler.has_errors());
}
