//! Shapes of the command tree a parser builds from the token stream.
//!
//! Nothing in this crate parses tokens into these types.

/// A complete command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub list: AndOrList,
}

/// Commands joined by `&&` and `||`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AndOrList {
    pub nodes: Vec<AndOrListNode>,
}

/// One element of an `AndOrList` with the connector that precedes it.
///
/// The connector of the first node is ignored by evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AndOrListNode {
    pub connector: Connector,
    pub command: ListCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// `&&`
    And,
    /// `||`
    Or,
}

/// Command held by an `AndOrListNode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListCommand {
    /// Simple commands joined by `|`.
    Pipeline(PipeList),
    /// Parenthesized list: `( ... )`.
    Compound(Compound),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PipeList {
    pub commands: Vec<Simple>,
}

/// Parenthesized sub-list with its own redirections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Compound {
    pub list: AndOrList,
    pub redirections: Redirections,
}

/// Command name and arguments plus redirections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Simple {
    pub args: Vec<String>,
    pub redirections: Redirections,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Redirections {
    pub stdin: Vec<InputRedirection>,
    pub stdout: Vec<OutputRedirection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputRedirection {
    /// `< file`
    File(String),
    /// `<< marker`
    Heredoc(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputRedirection {
    /// `> file`
    File(String),
    /// `>> file`
    Append(String),
}

impl Redirections {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stdin.is_empty() && self.stdout.is_empty()
    }
}

impl AndOrList {
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl InputRedirection {
    /// File name or heredoc marker.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Self::File(s) | Self::Heredoc(s) => s,
        }
    }
}

impl OutputRedirection {
    /// File name written to.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Self::File(s) | Self::Append(s) => s,
        }
    }
}
