//! Shared CLI helpers: banner, prompt, help text, screen clearing.

use std::io::Write;
use std::path::Path;

use colored::Colorize;
use fsh_ops::Verb;

/// ANSI: erase display, cursor to top-left.
const CLEAR_SEQUENCE: &str = "\x1B[2J\x1B[1;1H";

/// Print the banner shown at REPL start.
pub fn print_banner() {
    let version = env!("CARGO_PKG_VERSION");
    println!();
    println!("{}  v{}", "fsh".cyan().bold(), version.dimmed());
    println!(
        "{}",
        "Type \"help\" for commands, or \"exit\" to quit.".dimmed()
    );
    println!();
}

/// Prompt text, e.g. `FileSystem: /home/user> `.
pub fn prompt(label: &str, cwd: &Path) -> String {
    format!("{label}: {}> ", cwd.display())
}

/// `(synopsis, description)` for every verb, then `exit`.
pub fn help_entries() -> Vec<(&'static str, &'static str)> {
    Verb::ALL
        .iter()
        .map(|verb| (verb.synopsis(), verb.description()))
        .chain(std::iter::once(("exit", "exit the program")))
        .collect()
}

/// Print the verb table.
pub fn print_help() {
    println!();
    println!("    {}", "FileSystem commands:".cyan().bold());
    for (synopsis, description) in help_entries() {
        println!("        {} - {}", synopsis.bold(), description);
    }
    println!();
}

/// Clear the terminal screen.
pub fn clear_screen() {
    print!("{CLEAR_SEQUENCE}");
    let _ = std::io::stdout().flush();
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
