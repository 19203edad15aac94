//! Token-to-source rendering.

mod common;

use common::roundtrip;
use shell_tokenizer::{Position, Span, Token, TokenKind, format_tokens, tokenize};

#[test]
fn format_empty() {
    assert_eq!(format_tokens(&[]), "");
    roundtrip("");
}

#[test]
fn format_rewraps_quotes() {
    let tokens = roundtrip(r#"echo 'a b' "c d""#);
    assert_eq!(tokens[2].source_text(), "'a b'");
    assert_eq!(tokens[4].source_text(), "\"c d\"");
}

#[test]
fn format_operators() {
    roundtrip("a&&b||c|d<e<<f>g>>h(i)");
}

#[test]
fn format_preserves_whitespace() {
    roundtrip("  ls \t -l\n\n  | wc\r\n");
}

#[test]
fn format_eof_is_empty() {
    let eof = Token::new(TokenKind::Eof, Span::point(Position::default()));
    assert_eq!(eof.source_text(), "");
}

#[test]
fn format_literal_escapes() {
    roundtrip("printf 'a\\nb' \"\\t\"");
}

#[test]
fn format_concatenated_spans_reconstruct_input() {
    let input = "(cat <<EOF) >> log && echo 'done'";
    let rebuilt: String = tokenize(input)
        .expect("tokenize")
        .iter()
        .map(Token::source_text)
        .collect();
    assert_eq!(rebuilt, input);
}
