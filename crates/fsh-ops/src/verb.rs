//! The fixed verb table.

use std::ops::RangeInclusive;

/// A shell verb: the first token of a command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    Mkdir,
    Touch,
    Ls,
    Rm,
    Cd,
    Cat,
    Cp,
    Mv,
    Pwd,
    Clear,
    Help,
}

impl Verb {
    /// Every verb, in help-text order.
    pub const ALL: [Verb; 11] = [
        Verb::Mkdir,
        Verb::Touch,
        Verb::Ls,
        Verb::Rm,
        Verb::Cd,
        Verb::Cat,
        Verb::Cp,
        Verb::Mv,
        Verb::Pwd,
        Verb::Clear,
        Verb::Help,
    ];

    /// Look up a verb by its exact (case-sensitive) name.
    pub fn from_name(name: &str) -> Option<Verb> {
        Verb::ALL.into_iter().find(|verb| verb.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Verb::Mkdir => "mkdir",
            Verb::Touch => "touch",
            Verb::Ls => "ls",
            Verb::Rm => "rm",
            Verb::Cd => "cd",
            Verb::Cat => "cat",
            Verb::Cp => "cp",
            Verb::Mv => "mv",
            Verb::Pwd => "pwd",
            Verb::Clear => "clear",
            Verb::Help => "help",
        }
    }

    /// Verb plus its argument placeholders, e.g. `cp <source_file> <destination_file>`.
    pub fn synopsis(&self) -> &'static str {
        match self {
            Verb::Mkdir => "mkdir <directory_name>",
            Verb::Touch => "touch <file_name>",
            Verb::Ls => "ls [directory_path]",
            Verb::Rm => "rm <file_or_directory_name>",
            Verb::Cd => "cd <directory_path>",
            Verb::Cat => "cat <file_name>",
            Verb::Cp => "cp <source_file> <destination_file>",
            Verb::Mv => "mv <source_file> <destination_file>",
            Verb::Pwd => "pwd",
            Verb::Clear => "clear",
            Verb::Help => "help",
        }
    }

    /// One-line description for `help`.
    pub fn description(&self) -> &'static str {
        match self {
            Verb::Mkdir => "create a new directory",
            Verb::Touch => "create a new file",
            Verb::Ls => "list files and directories in the current or specified directory",
            Verb::Rm => "remove a file or directory",
            Verb::Cd => "change the current directory",
            Verb::Cat => "display the contents of a file",
            Verb::Cp => "copy a file",
            Verb::Mv => "move a file",
            Verb::Pwd => "display the current directory",
            Verb::Clear => "clear the screen",
            Verb::Help => "show this help",
        }
    }

    /// Accepted number of arguments (verb excluded).
    pub fn arity(&self) -> RangeInclusive<usize> {
        match self {
            Verb::Ls => 0..=1,
            Verb::Cp | Verb::Mv => 2..=2,
            Verb::Mkdir | Verb::Touch | Verb::Rm | Verb::Cd | Verb::Cat => 1..=1,
            Verb::Pwd | Verb::Clear | Verb::Help => 0..=0,
        }
    }

    pub fn accepts(&self, args: usize) -> bool {
        self.arity().contains(&args)
    }

    /// The message reported on an argument-count mismatch.
    pub fn usage(&self) -> String {
        format!("Usage: {}", self.synopsis())
    }
}
