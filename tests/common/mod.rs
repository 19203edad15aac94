#![allow(dead_code)]

use shell_tokenizer::{Position, Span, Token, TokenKind, format_tokens, tokenize};

/// Tokenize `input` and return only the token kinds.
pub fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input)
        .unwrap_or_else(|e| panic!("failed to tokenize {input:?}: {e}"))
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

pub fn word(s: &str) -> TokenKind {
    TokenKind::Word(s.to_string())
}

pub fn space(s: &str) -> TokenKind {
    TokenKind::Space(s.to_string())
}

pub const fn span(start: (usize, usize), end: (usize, usize)) -> Span {
    Span::new(Position::new(start.0, start.1), Position::new(end.0, end.1))
}

/// Helper: tokenize, render back, assert the input is reproduced.
pub fn roundtrip(input: &str) -> Vec<Token> {
    let tokens = tokenize(input).expect("tokenize failed");
    let output = format_tokens(&tokens);
    assert_eq!(
        output, input,
        "round-trip mismatch:\n--- expected ---\n{input}\n--- got ---\n{output}"
    );
    tokens
}

/// Install a test subscriber so lexer trace events are exercised.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("shell_tokenizer=trace"))
        .with_test_writer()
        .try_init();
}
