//! Character stream feeding the tokenizer.
//!
//! Every input character is paired with its source position, and the
//! stream ends with a single end-of-input sentinel.

use std::str::Chars;

use crate::token::Position;

/// A character together with the position it was read from.
///
/// `ch` is `None` only for the end-of-input sentinel, whose position is
/// the one immediately past the last input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Located {
    pub ch: Option<char>,
    pub position: Position,
}

/// Iterator over `(char, position)` pairs of a source string.
#[derive(Debug, Clone)]
pub struct CharStream<'a> {
    chars: Chars<'a>,
    position: Position,
    finished: bool,
}

impl<'a> CharStream<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
            position: Position::default(),
            finished: false,
        }
    }
}

impl Iterator for CharStream<'_> {
    type Item = Located;

    fn next(&mut self) -> Option<Located> {
        if self.finished {
            return None;
        }

        let position = self.position;
        let Some(ch) = self.chars.next() else {
            self.finished = true;
            return Some(Located { ch: None, position });
        };

        if ch == '\n' {
            self.position.line += 1;
            self.position.column = 0;
        } else {
            self.position.column += 1;
        }

        Some(Located {
            ch: Some(ch),
            position,
        })
    }
}
