use tracing::{debug, trace};

use crate::stream::{CharStream, Located};
use crate::token::{Position, Span, Token, TokenKind};

const TARGET: &str = "shell_tokenizer::lexer";

/// Error produced during tokenization.
///
/// Tokenization stops at the first error; no partial token list is kept.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    /// A lone `&` followed by anything other than a second `&`.
    ///
    /// The position is that of the character after the `&`, or the
    /// end-of-input position when the `&` is the last character.
    #[error(
        "unrecognized token at line {}, column {}",
        position.line,
        position.column
    )]
    UnrecognizedToken { position: Position },
    /// End of input reached inside a single- or double-quoted string.
    ///
    /// Spans from the opening quote to the last character read.
    #[error(
        "unterminated quoted string at line {}, column {}",
        span.start.line,
        span.start.column
    )]
    UnterminatedString { span: Span },
}

impl TokenizeError {
    /// Source range of the error. Point errors are zero-width.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::UnrecognizedToken { position } => Span::point(*position),
            Self::UnterminatedString { span } => *span,
        }
    }

    /// Line on which the offending input starts.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.span().start.line
    }
}

/// Tokenize a command line into a sequence of tokens ending in `Eof`.
///
/// # Errors
///
/// Returns `TokenizeError` on a lone `&` or an unterminated quoted
/// string.
pub fn tokenize(input: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut lexer = Lexer::default();
    for item in CharStream::new(input) {
        lexer.feed(item).inspect_err(|err| {
            debug!(target: TARGET, error = %err, "tokenize failed");
        })?;
    }
    let tokens = lexer.finish();
    debug!(target: TARGET, count = tokens.len(), "tokenized input");
    Ok(tokens)
}

pub(crate) const fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Characters that end an unquoted word.
pub(crate) const fn is_delimiter(ch: char) -> bool {
    is_whitespace(ch) || matches!(ch, '<' | '>' | '(' | ')' | '&' | '|')
}

/// Automaton state. Partial tokens carry their start position, the
/// position of the last character consumed, and the text read so far.
#[derive(Debug, Default)]
enum State {
    #[default]
    Default,
    PrevLess {
        start: Position,
    },
    PrevGreat {
        start: Position,
    },
    PrevAmp {
        start: Position,
    },
    PrevPipe {
        start: Position,
    },
    Space {
        start: Position,
        end: Position,
        text: String,
    },
    Word {
        start: Position,
        end: Position,
        text: String,
    },
    SingleQuoted {
        start: Position,
        end: Position,
        text: String,
    },
    DoubleQuoted {
        start: Position,
        end: Position,
        text: String,
    },
    /// `Eof` has been emitted.
    Finished,
}

#[derive(Debug, Default)]
struct Lexer {
    tokens: Vec<Token>,
    state: State,
}

impl Lexer {
    fn feed(&mut self, item: Located) -> Result<(), TokenizeError> {
        let state = std::mem::take(&mut self.state);
        self.state = self.step(state, item)?;
        Ok(())
    }

    fn finish(self) -> Vec<Token> {
        match self.state {
            State::Finished => self.tokens,
            other => unreachable!("tokenizer stopped in state {other:?}"),
        }
    }

    fn emit(&mut self, kind: TokenKind, span: Span) {
        trace!(
            target: TARGET,
            kind = ?kind,
            line = span.start.line,
            column = span.start.column,
            "emit token"
        );
        self.tokens.push(Token::new(kind, span));
    }

    fn step(&mut self, state: State, item: Located) -> Result<State, TokenizeError> {
        match state {
            State::Default => Ok(self.dispatch(item)),
            State::PrevLess { start } => {
                Ok(self.close_pair(start, item, '<', TokenKind::Less, TokenKind::DoubleLess))
            }
            State::PrevGreat { start } => {
                Ok(self.close_pair(start, item, '>', TokenKind::Great, TokenKind::DoubleGreat))
            }
            State::PrevPipe { start } => {
                Ok(self.close_pair(start, item, '|', TokenKind::Pipe, TokenKind::Or))
            }
            State::PrevAmp { start } => {
                if item.ch == Some('&') {
                    self.emit(TokenKind::And, Span::new(start, item.position));
                    Ok(State::Default)
                } else {
                    Err(TokenizeError::UnrecognizedToken {
                        position: item.position,
                    })
                }
            }
            State::Space {
                start,
                end,
                mut text,
            } => match item.ch {
                Some(ch) if is_whitespace(ch) => {
                    text.push(ch);
                    Ok(State::Space {
                        start,
                        end: item.position,
                        text,
                    })
                }
                _ => {
                    self.emit(TokenKind::Space(text), Span::new(start, end));
                    Ok(self.dispatch(item))
                }
            },
            State::Word {
                start,
                end,
                mut text,
            } => match item.ch {
                Some(ch) if !is_delimiter(ch) => {
                    text.push(ch);
                    Ok(State::Word {
                        start,
                        end: item.position,
                        text,
                    })
                }
                _ => {
                    self.emit(TokenKind::Word(text), Span::new(start, end));
                    Ok(self.dispatch(item))
                }
            },
            State::SingleQuoted { start, end, text } => self.quoted(start, end, text, item, '\''),
            State::DoubleQuoted { start, end, text } => self.quoted(start, end, text, item, '"'),
            State::Finished => unreachable!("input after end of input"),
        }
    }

    /// The `Default` transition table. Also used to re-dispatch a
    /// character that closed the previous pending token.
    fn dispatch(&mut self, item: Located) -> State {
        let start = item.position;
        let Some(ch) = item.ch else {
            self.emit(TokenKind::Eof, Span::point(start));
            return State::Finished;
        };

        match ch {
            '<' => State::PrevLess { start },
            '>' => State::PrevGreat { start },
            '&' => State::PrevAmp { start },
            '|' => State::PrevPipe { start },
            '(' => {
                self.emit(TokenKind::LParen, Span::point(start));
                State::Default
            }
            ')' => {
                self.emit(TokenKind::RParen, Span::point(start));
                State::Default
            }
            '\'' => State::SingleQuoted {
                start,
                end: start,
                text: String::new(),
            },
            '"' => State::DoubleQuoted {
                start,
                end: start,
                text: String::new(),
            },
            ch if is_whitespace(ch) => State::Space {
                start,
                end: start,
                text: ch.to_string(),
            },
            ch => State::Word {
                start,
                end: start,
                text: ch.to_string(),
            },
        }
    }

    /// Second character of a possible two-character operator.
    fn close_pair(
        &mut self,
        start: Position,
        item: Located,
        second: char,
        single: TokenKind,
        double: TokenKind,
    ) -> State {
        if item.ch == Some(second) {
            self.emit(double, Span::new(start, item.position));
            State::Default
        } else {
            self.emit(single, Span::point(start));
            self.dispatch(item)
        }
    }

    /// Body of a quoted string. The closing quote is consumed here and
    /// never re-dispatched.
    fn quoted(
        &mut self,
        start: Position,
        end: Position,
        mut text: String,
        item: Located,
        quote: char,
    ) -> Result<State, TokenizeError> {
        match item.ch {
            None => Err(TokenizeError::UnterminatedString {
                span: Span::new(start, end),
            }),
            Some(ch) if ch == quote => {
                let kind = if quote == '\'' {
                    TokenKind::SingleQuoted(text)
                } else {
                    TokenKind::DoubleQuoted(text)
                };
                self.emit(kind, Span::new(start, item.position));
                Ok(State::Default)
            }
            Some(ch) => {
                text.push(ch);
                let end = item.position;
                Ok(if quote == '\'' {
                    State::SingleQuoted { start, end, text }
                } else {
                    State::DoubleQuoted { start, end, text }
                })
            }
        }
    }
}
