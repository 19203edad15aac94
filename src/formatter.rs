//! Renders tokens back into source text.
//!
//! Rendering a successfully tokenized input reproduces it exactly:
//! whitespace runs carry their literal text and quoted words are
//! re-wrapped in the quotes they were read with.

use crate::token::{Token, TokenKind};

/// Format a token sequence back into source text.
#[must_use]
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        write_token(&mut out, token);
    }
    out
}

impl Token {
    /// Source text this token was read from. Empty for `Eof`.
    #[must_use]
    pub fn source_text(&self) -> String {
        let mut out = String::new();
        write_token(&mut out, self);
        out
    }
}

fn write_token(out: &mut String, token: &Token) {
    match &token.kind {
        TokenKind::And => out.push_str("&&"),
        TokenKind::Or => out.push_str("||"),
        TokenKind::Pipe => out.push('|'),
        TokenKind::Less => out.push('<'),
        TokenKind::DoubleLess => out.push_str("<<"),
        TokenKind::Great => out.push('>'),
        TokenKind::DoubleGreat => out.push_str(">>"),
        TokenKind::LParen => out.push('('),
        TokenKind::RParen => out.push(')'),
        TokenKind::Space(text) | TokenKind::Word(text) => out.push_str(text),
        TokenKind::SingleQuoted(text) => {
            out.push('\'');
            out.push_str(text);
            out.push('\'');
        }
        TokenKind::DoubleQuoted(text) => {
            out.push('"');
            out.push_str(text);
            out.push('"');
        }
        TokenKind::Eof => {}
    }
}
