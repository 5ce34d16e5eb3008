//! Command dispatch: tokenize a line, validate it against the verb table,
//! run the operation.
//!
//! The dispatcher never prints or logs. It hands back a [`Reply`] that the
//! front end routes to the session log or the terminal.

use fsh_core::Severity;
use tracing::debug;

use crate::error::FsError;
use crate::ops::{self, DirChange};
use crate::session::Session;
use crate::verb::Verb;

/// The line that ends the session.
pub const EXIT_COMMAND: &str = "exit";

/// Warning reported for `cd ..` at the filesystem root.
pub const AT_ROOT_WARNING: &str = "Already at the root directory.";

// ─────────────────────────────────────────────
// Command
// ─────────────────────────────────────────────

/// One input line split into tokens: verb first, then arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Command {
    tokens: Vec<String>,
}

impl Command {
    /// Split on whitespace. Runs of separators never produce empty tokens.
    pub fn parse(line: &str) -> Self {
        Self {
            tokens: line.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn verb(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    pub fn args(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or_default()
    }
}

// ─────────────────────────────────────────────
// Reply
// ─────────────────────────────────────────────

/// What the front end should do with the outcome of one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Write to the session log at `level`.
    Log { level: Severity, message: String },
    /// Report on stderr without logging (failed `cd`).
    Diagnostic(String),
    /// Print the verb table.
    Help,
    /// Clear the terminal.
    Clear,
    /// Leave the loop.
    Exit,
    /// Nothing to report (blank line, successful `cd`).
    Silent,
}

impl Reply {
    fn info(message: String) -> Self {
        Reply::Log {
            level: Severity::Info,
            message,
        }
    }

    fn error(message: String) -> Self {
        Reply::Log {
            level: Severity::Error,
            message,
        }
    }

    /// Operation boundary: a failure becomes its message, logged like success.
    fn from_result(result: Result<String, FsError>) -> Self {
        match result {
            Ok(message) => Reply::info(message),
            Err(e) => {
                debug!(error = %e, "operation failed");
                Reply::info(e.to_string())
            }
        }
    }
}

/// Whether `line` is the exit command.
pub fn is_exit_command(line: &str) -> bool {
    line.trim() == EXIT_COMMAND
}

// ─────────────────────────────────────────────
// Dispatcher
// ─────────────────────────────────────────────

/// Routes command lines to filesystem operations against one [`Session`].
pub struct Dispatcher {
    session: Session,
}

impl Dispatcher {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Handle one raw input line.
    pub fn dispatch(&mut self, line: &str) -> Reply {
        if is_exit_command(line) {
            return Reply::Exit;
        }
        let command = Command::parse(line);
        if command.is_empty() {
            return Reply::Silent;
        }
        self.execute(&command)
    }

    /// Validate and run a parsed command.
    pub fn execute(&mut self, command: &Command) -> Reply {
        let Some(name) = command.verb() else {
            return Reply::Silent;
        };
        let Some(verb) = Verb::from_name(name) else {
            return Reply::error(format!("Unknown command: {name}"));
        };

        let args = command.args();
        if !verb.accepts(args.len()) {
            return Reply::error(verb.usage());
        }

        debug!(verb = verb.name(), ?args, "dispatching");
        let session = &mut self.session;

        match verb {
            Verb::Mkdir => Reply::from_result(ops::create_directory(session, &args[0])),
            Verb::Touch => Reply::from_result(ops::create_file(session, &args[0])),
            Verb::Ls => Reply::from_result(ops::list_directory(
                session,
                args.first().map(String::as_str),
            )),
            Verb::Rm => Reply::from_result(ops::remove_item(session, &args[0])),
            Verb::Cat => Reply::from_result(ops::read_file(session, &args[0])),
            Verb::Cp => Reply::from_result(ops::copy_file(session, &args[0], &args[1])),
            Verb::Mv => Reply::from_result(ops::move_file(session, &args[0], &args[1])),
            Verb::Pwd => Reply::info(ops::current_dir(session)),
            Verb::Cd => match ops::change_directory(session, &args[0]) {
                Ok(DirChange::Moved(_)) => Reply::Silent,
                Ok(DirChange::AtRoot) => Reply::Log {
                    level: Severity::Warning,
                    message: AT_ROOT_WARNING.to_string(),
                },
                Err(e) => Reply::Diagnostic(e.to_string()),
            },
            Verb::Clear => Reply::Clear,
            Verb::Help => Reply::Help,
        }
    }
}
