//! Interactive REPL.
//!
//! Uses `rustyline` for readline-style editing with persistent history.
//! Each line is dispatched and its [`Reply`] routed to the session log or
//! the terminal.

use std::ops::ControlFlow;

use anyhow::Result;
use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{DefaultEditor, Editor};
use tracing::debug;

use fsh_core::config::ShellConfig;
use fsh_core::utils::get_history_path;
use fsh_core::SessionLog;
use fsh_ops::{Dispatcher, Reply};

use crate::helpers;

/// Run the interactive REPL loop until `exit`, Ctrl-D, or Ctrl-C.
pub fn run(dispatcher: &mut Dispatcher, log: &mut SessionLog, shell: &ShellConfig) -> Result<()> {
    helpers::print_banner();

    let mut editor = create_editor(shell)?;

    loop {
        let prompt = helpers::prompt(&shell.prompt, dispatcher.session().cwd());
        let input = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                log.untagged("End of input");
                break;
            }
            Err(e) => {
                eprintln!("Input error: {e}");
                break;
            }
        };

        if !input.trim().is_empty() {
            let _ = editor.add_history_entry(input.as_str());
        }

        if handle_line(dispatcher, log, &input).is_break() {
            break;
        }
    }

    if shell.history {
        save_history(&mut editor);
    }

    Ok(())
}

/// Run a single command line (the `-c` flag).
pub fn run_once(dispatcher: &mut Dispatcher, log: &mut SessionLog, line: &str) {
    if handle_line(dispatcher, log, line).is_continue() {
        log.untagged("Exiting program");
    }
}

/// Dispatch one line and route its reply.
///
/// Returns `Break` when the line asked to leave the shell.
pub fn handle_line(dispatcher: &mut Dispatcher, log: &mut SessionLog, line: &str) -> ControlFlow<()> {
    let reply = dispatcher.dispatch(line);

    if reply == Reply::Exit {
        log.untagged("Exiting program");
        return ControlFlow::Break(());
    }
    if !line.trim().is_empty() {
        log.untagged(&format!("Command: {line}"));
    }

    match reply {
        Reply::Log { level, message } => log.log(level, &message),
        Reply::Diagnostic(message) => eprintln!("{message}"),
        Reply::Help => helpers::print_help(),
        Reply::Clear => helpers::clear_screen(),
        Reply::Silent | Reply::Exit => {}
    }
    ControlFlow::Continue(())
}

/// Create a rustyline editor, loading history when enabled.
fn create_editor(shell: &ShellConfig) -> Result<Editor<(), DefaultHistory>> {
    let mut editor = DefaultEditor::new()?;
    editor.set_max_history_size(shell.history_size)?;

    if shell.history {
        let history_path = get_history_path();
        if history_path.exists() {
            let _ = editor.load_history(&history_path);
            debug!("loaded REPL history from {}", history_path.display());
        }
    }

    Ok(editor)
}

/// Save history to disk.
fn save_history(editor: &mut Editor<(), DefaultHistory>) {
    let path = get_history_path();
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Err(e) = editor.save_history(&path) {
        debug!("failed to save history: {e}");
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use fsh_ops::Session;

    struct Harness {
        dispatcher: Dispatcher,
        log: SessionLog,
        _tmp: tempfile::TempDir,
    }

    impl Harness {
        fn new() -> Self {
            let tmp = tempfile::tempdir().unwrap();
            let root = tmp.path().canonicalize().unwrap();
            let work = root.join("work");
            std::fs::create_dir(&work).unwrap();
            let log = SessionLog::open(&root.join("log")).unwrap();
            Self {
                dispatcher: Dispatcher::new(Session::detached(work)),
                log,
                _tmp: tmp,
            }
        }

        fn line(&mut self, line: &str) -> ControlFlow<()> {
            handle_line(&mut self.dispatcher, &mut self.log, line)
        }

        fn log_content(&self) -> String {
            std::fs::read_to_string(self.log.path().unwrap()).unwrap()
        }
    }

    #[test]
    fn commands_and_results_are_logged() {
        let mut h = Harness::new();
        assert!(h.line("mkdir demo").is_continue());

        let content = h.log_content();
        let command = content.find("] Command: mkdir demo").unwrap();
        let result = content.find("] Directory created: demo").unwrap();
        assert!(command < result);
    }

    #[test]
    fn command_is_logged_as_typed() {
        let mut h = Harness::new();
        h.line("  touch   spaced.txt");
        assert!(h.log_content().contains("] Command:   touch   spaced.txt\n"));
    }

    #[test]
    fn usage_errors_are_logged() {
        let mut h = Harness::new();
        h.line("cp onlyonearg");
        assert!(h
            .log_content()
            .contains("] Usage: cp <source_file> <destination_file>"));
    }

    #[test]
    fn failed_cd_is_not_logged() {
        let mut h = Harness::new();
        h.line("cd nowhere");
        let content = h.log_content();
        assert!(content.contains("] Command: cd nowhere"));
        assert!(!content.contains("Invalid directory"));
    }

    #[test]
    fn exit_breaks_and_logs() {
        let mut h = Harness::new();
        assert!(h.line("exit").is_break());
        let content = h.log_content();
        assert!(content.contains("] Exiting program"));
        assert!(!content.contains("Command: exit"));
    }

    #[test]
    fn blank_lines_are_ignored() {
        let mut h = Harness::new();
        assert!(h.line("   ").is_continue());
        assert!(!h.log_content().contains("Command:"));
    }

    #[test]
    fn run_once_logs_exit() {
        let mut h = Harness::new();
        run_once(&mut h.dispatcher, &mut h.log, "pwd");
        let content = h.log_content();
        assert!(content.contains("] Command: pwd"));
        assert!(content.contains("] Exiting program"));
    }
}
