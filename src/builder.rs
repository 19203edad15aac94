use crate::ast::{
    AndOrList, AndOrListNode, Compound, Connector, InputRedirection, ListCommand,
    OutputRedirection, PipeList, Program, Redirections, Simple,
};

impl Program {
    #[must_use]
    pub const fn new(list: AndOrList) -> Self {
        Self { list }
    }
}

impl AndOrList {
    /// Create a list whose first element is `command`.
    #[must_use]
    pub fn new(command: impl Into<ListCommand>) -> Self {
        Self {
            nodes: vec![AndOrListNode {
                connector: Connector::And,
                command: command.into(),
            }],
        }
    }

    /// Append `command` joined by `&&`.
    #[must_use]
    pub fn and(self, command: impl Into<ListCommand>) -> Self {
        self.push(Connector::And, command)
    }

    /// Append `command` joined by `||`.
    #[must_use]
    pub fn or(self, command: impl Into<ListCommand>) -> Self {
        self.push(Connector::Or, command)
    }

    fn push(mut self, connector: Connector, command: impl Into<ListCommand>) -> Self {
        self.nodes.push(AndOrListNode {
            connector,
            command: command.into(),
        });
        self
    }
}

impl PipeList {
    #[must_use]
    pub fn new(command: Simple) -> Self {
        Self {
            commands: vec![command],
        }
    }

    /// Append `command` joined by `|`.
    #[must_use]
    pub fn pipe(mut self, command: Simple) -> Self {
        self.commands.push(command);
        self
    }
}

impl Compound {
    #[must_use]
    pub fn new(list: AndOrList) -> Self {
        Self {
            list,
            redirections: Redirections::default(),
        }
    }

    #[must_use]
    pub fn redirections(mut self, redirections: Redirections) -> Self {
        self.redirections = redirections;
        self
    }
}

impl Simple {
    /// Create a command with `name` as its first argument.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            args: vec![name.to_string()],
            redirections: Redirections::default(),
        }
    }

    #[must_use]
    pub fn arg(mut self, value: &str) -> Self {
        self.args.push(value.to_string());
        self
    }

    #[must_use]
    pub fn args(mut self, values: &[&str]) -> Self {
        self.args.extend(values.iter().map(ToString::to_string));
        self
    }

    /// Add `< file`.
    #[must_use]
    pub fn stdin_from(mut self, file: &str) -> Self {
        self.redirections
            .stdin
            .push(InputRedirection::File(file.to_string()));
        self
    }

    /// Add `<< marker`.
    #[must_use]
    pub fn heredoc(mut self, marker: &str) -> Self {
        self.redirections
            .stdin
            .push(InputRedirection::Heredoc(marker.to_string()));
        self
    }

    /// Add `> file`.
    #[must_use]
    pub fn stdout_to(mut self, file: &str) -> Self {
        self.redirections
            .stdout
            .push(OutputRedirection::File(file.to_string()));
        self
    }

    /// Add `>> file`.
    #[must_use]
    pub fn append_to(mut self, file: &str) -> Self {
        self.redirections
            .stdout
            .push(OutputRedirection::Append(file.to_string()));
        self
    }
}

impl From<PipeList> for ListCommand {
    fn from(pipeline: PipeList) -> Self {
        Self::Pipeline(pipeline)
    }
}

impl From<Simple> for ListCommand {
    fn from(command: Simple) -> Self {
        Self::Pipeline(PipeList::new(command))
    }
}

impl From<Compound> for ListCommand {
    fn from(compound: Compound) -> Self {
        Self::Compound(compound)
    }
}
