//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and punctuation
//! - Comments and whitespace
//! - Error cases
//! - The `TokenStream` cursor

use pretty_assertions::assert_eq;
use rstest::rstest;

use super::{
    lexer::{check_source_length, tokenize},
    stream::TokenStream,
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.c".to_string()))
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(kinds("int return"), vec![TokenKind::Int, TokenKind::Return, TokenKind::EOF]);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo baz_123 _underscore integer returns".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    let values: Vec<&str> = tokens.iter().map(|token| token.value.as_str()).collect();
    assert_eq!(values, vec!["foo", "baz_123", "_underscore", "integer", "returns", "EOF"]);
    assert!(tokens[..5].iter().all(|token| token.kind == TokenKind::Identifier));
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("0 42 2147483648".to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "0");
    assert_eq!(tokens[1].value, "42");
    // Range is checked by the parser, not the lexer.
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "2147483648");
}

#[test]
fn test_number_then_identifier() {
    assert_eq!(kinds("12ab"), vec![TokenKind::Number, TokenKind::Identifier, TokenKind::EOF]);
}

#[rstest]
#[case("{", TokenKind::OpenCurly)]
#[case("}", TokenKind::CloseCurly)]
#[case("(", TokenKind::OpenParen)]
#[case(")", TokenKind::CloseParen)]
#[case("=", TokenKind::Assignment)]
#[case(";", TokenKind::Semicolon)]
#[case(",", TokenKind::Comma)]
#[case("+", TokenKind::Plus)]
#[case("-", TokenKind::Dash)]
#[case("/", TokenKind::Slash)]
#[case("*", TokenKind::Star)]
fn test_tokenize_symbols(#[case] source: &str, #[case] expected: TokenKind) {
    assert_eq!(kinds(source), vec![expected, TokenKind::EOF]);
}

#[test]
fn test_comments_and_whitespace_are_skipped() {
    let source = "int // line comment\n/* block\n comment */ x;\n\t";
    assert_eq!(
        kinds(source),
        vec![TokenKind::Int, TokenKind::Identifier, TokenKind::Semicolon, TokenKind::EOF]
    );
}

#[test]
fn test_division_is_not_a_comment() {
    assert_eq!(
        kinds("a / b"),
        vec![TokenKind::Identifier, TokenKind::Slash, TokenKind::Identifier, TokenKind::EOF]
    );
}

#[test]
fn test_spans_are_byte_offsets() {
    let tokens = tokenize("int  foo;".to_string(), Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 8);
    assert_eq!(tokens[2].span.start.0, 8);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
    assert_eq!(tokens[3].span.start.0, 9);
    assert_eq!(tokens[1].span.start.1.as_str(), "test.c");
}

#[test]
fn test_empty_source_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("  // nothing\n"), vec![TokenKind::EOF]);
}

#[rstest]
#[case("int x = 1 % 2;", "%", 10)]
#[case("x & y", "&", 2)]
#[case("#include", "#", 0)]
fn test_unrecognised_character(#[case] source: &str, #[case] token: &str, #[case] offset: u32) {
    let error = tokenize(source.to_string(), Some("test.c".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, offset);
    assert!(error.to_string().contains(token));
}

#[test]
fn test_unterminated_block_comment() {
    let error = tokenize("int f() { return 1; } /* oops".to_string(), Some("test.c".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnterminatedComment");
    assert_eq!(error.get_position().0, 22);
}

#[test]
fn test_closed_comment_after_unclosed_opener() {
    // The lazy match closes the first comment at the first `*/`.
    assert_eq!(kinds("/* a /* b */ x"), vec![TokenKind::Identifier, TokenKind::EOF]);
}

#[test]
fn test_source_length_must_fit_offsets() {
    let file = std::rc::Rc::new("test.c".to_string());

    assert!(check_source_length(u32::MAX as usize, &file).is_ok());

    #[cfg(target_pointer_width = "64")]
    {
        let error = check_source_length(u32::MAX as usize + 1, &file).unwrap_err();
        assert_eq!(error.get_error_name(), "SourceTooLarge");
        assert_eq!(error.get_position().0, 0);
    }
}

#[test]
fn test_describe_token() {
    let tokens = tokenize("x = 7;".to_string(), None).unwrap();

    assert_eq!(tokens[0].describe(), "Identifier (x) @ 0");
    assert_eq!(tokens[1].describe(), "Assignment @ 2");
    assert_eq!(tokens[2].describe(), "Number (7) @ 4");
}

// TOKEN STREAM

fn stream(source: &str) -> TokenStream {
    TokenStream::new(tokenize(source.to_string(), None).unwrap())
}

#[test]
fn test_stream_peek_and_advance() {
    let mut tokens = stream("int x;");

    assert_eq!(tokens.current_kind(), TokenKind::Int);
    assert_eq!(tokens.peek(1).kind, TokenKind::Identifier);
    assert_eq!(tokens.peek(10).kind, TokenKind::EOF);

    assert_eq!(tokens.advance().kind, TokenKind::Int);
    assert_eq!(tokens.current_value(), "x");
    assert_eq!(tokens.position(), 1);
}

#[test]
fn test_stream_never_passes_eof() {
    let mut tokens = stream("x");
    tokens.advance();

    assert!(tokens.is_at_end());
    assert_eq!(tokens.advance().kind, TokenKind::EOF);
    assert_eq!(tokens.position(), 1);
}

#[test]
fn test_stream_restore() {
    let mut tokens = stream("a b c");
    tokens.advance();
    let saved = tokens.position();
    tokens.advance();
    tokens.advance();

    tokens.restore(saved);
    assert_eq!(tokens.current_value(), "b");

    tokens.restore(100);
    assert!(tokens.is_at_end());
}

#[test]
fn test_stream_appends_missing_eof() {
    let mut tokens = tokenize("x".to_string(), None).unwrap();
    tokens.pop();

    let mut stream = TokenStream::new(tokens);
    stream.advance();
    assert!(stream.is_at_end());
    assert_eq!(stream.current().span.start.0, 1);

    assert!(TokenStream::new(Vec::new()).is_at_end());
}

#[test]
fn test_stream_current_number() {
    let mut tokens = stream("17 99999999999 x");

    assert_eq!(tokens.current_number(), Some(Ok(17)));
    tokens.advance();
    assert!(matches!(tokens.current_number(), Some(Err(_))));
    tokens.advance();
    assert_eq!(tokens.current_number(), None);
}
