/// Source location of a single character.
///
/// Lines are 1-based, columns are 0-based and restart at every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

/// Inclusive source range from a token's first to its last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Zero-width span at `pos`.
    #[must_use]
    pub const fn point(pos: Position) -> Self {
        Self::new(pos, pos)
    }
}

/// Token kinds produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// `&&`
    And,
    /// `||`
    Or,
    /// `|`
    Pipe,
    /// `<`
    Less,
    /// `<<`
    DoubleLess,
    /// `>`
    Great,
    /// `>>`
    DoubleGreat,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Maximal run of whitespace.
    Space(String),
    /// Unquoted run of non-delimiter characters.
    Word(String),
    /// Single-quoted body, quotes excluded.
    SingleQuoted(String),
    /// Double-quoted body, quotes excluded.
    DoubleQuoted(String),
    /// End of input. Always the last token.
    Eof,
}

/// A single token with its kind and source range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Literal text carried by words, quoted words and whitespace runs.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Space(s)
            | TokenKind::Word(s)
            | TokenKind::SingleQuoted(s)
            | TokenKind::DoubleQuoted(s) => Some(s.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    #[must_use]
    pub const fn is_space(&self) -> bool {
        matches!(self.kind, TokenKind::Space(_))
    }
}
