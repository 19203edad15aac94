//! Tokenizer for a shell-like command language.
//!
//! Converts source text into position-annotated tokens: operators
//! (`&&`, `||`, `|`, `<`, `<<`, `>`, `>>`, parentheses), whitespace
//! runs, unquoted words, single- and double-quoted words, and a final
//! end-of-input token. Quoted bodies are taken literally, without
//! escape processing.
//!
//! # Quick start
//!
//! ```
//! use shell_tokenizer::{TokenKind, tokenize};
//!
//! let tokens = tokenize("ls -al | grep foo").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Word("ls".to_string()));
//! assert_eq!(tokens[4].kind, TokenKind::Pipe);
//! assert!(tokens.last().unwrap().is_eof());
//! ```
//!
//! ## Errors carry source positions
//!
//! ```
//! use shell_tokenizer::{Position, TokenizeError, tokenize};
//!
//! let err = tokenize("a &b").unwrap_err();
//! assert_eq!(
//!     err,
//!     TokenizeError::UnrecognizedToken { position: Position::new(1, 3) }
//! );
//! ```
//!
//! ## Tokens render back to their source
//!
//! ```
//! use shell_tokenizer::{format_tokens, tokenize};
//!
//! let input = "cat < 'in file' >> out";
//! assert_eq!(format_tokens(&tokenize(input).unwrap()), input);
//! ```

#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod builder;
pub mod formatter;
pub mod lexer;
pub mod stream;
pub mod token;

pub use ast::{
    AndOrList, AndOrListNode, Compound, Connector, InputRedirection, ListCommand,
    OutputRedirection, PipeList, Program, Redirections, Simple,
};
pub use formatter::format_tokens;
pub use lexer::{TokenizeError, tokenize};
pub use stream::{CharStream, Located};
pub use token::{Position, Span, Token, TokenKind};
