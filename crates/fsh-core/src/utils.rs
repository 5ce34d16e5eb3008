//! Utility helpers: data paths, home expansion, timestamp formatting.

use std::path::PathBuf;

use chrono::{DateTime, TimeZone};

/// Timestamp layout shared by log file names and log lines.
///
/// Dashes in the time portion keep the file name valid on every platform.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Get the fsh data directory (e.g. `~/.fsh/`).
pub fn get_data_path() -> PathBuf {
    let home = dirs_next::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".fsh")
}

/// Get the REPL history file (e.g. `~/.fsh/history`).
pub fn get_history_path() -> PathBuf {
    get_data_path().join("history")
}

/// Format a timestamp with [`TIMESTAMP_FORMAT`].
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Expand `~` to the home directory in a path string.
pub fn expand_home(path: &str) -> PathBuf {
    if path == "~" {
        return dirs_next::home_dir().unwrap_or_else(|| PathBuf::from(path));
    }
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs_next::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
