//! Configuration schema.
//!
//! Hierarchy: `Config` → `LogConfig`, `ShellConfig`.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.
//! We use `#[serde(rename_all = "camelCase")]` to handle the conversion.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::utils::expand_home;

// ─────────────────────────────────────────────
// Root Config
// ─────────────────────────────────────────────

/// Root configuration: loaded from `~/.fsh/config.json` + env vars.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub log: LogConfig,
    pub shell: ShellConfig,
}

// ─────────────────────────────────────────────
// Session log
// ─────────────────────────────────────────────

/// Session log settings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LogConfig {
    /// Whether a log file is written at all.
    pub enabled: bool,
    /// Log directory. Relative paths are taken from the start directory.
    pub dir: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: "log".to_string(),
        }
    }
}

impl LogConfig {
    /// Resolve [`LogConfig::dir`] against the directory the process started in.
    pub fn resolve_dir(&self, start_dir: &Path) -> PathBuf {
        let dir = expand_home(&self.dir);
        if dir.is_absolute() {
            dir
        } else {
            start_dir.join(dir)
        }
    }
}

// ─────────────────────────────────────────────
// Shell
// ─────────────────────────────────────────────

/// Interactive shell settings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ShellConfig {
    /// Prompt label shown before the current directory.
    pub prompt: String,
    /// Persist line history between runs.
    pub history: bool,
    /// Maximum number of history entries kept.
    pub history_size: usize,
    /// Move the process working directory along with `cd`.
    pub sync_process_cwd: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "FileSystem".to_string(),
            history: true,
            history_size: 1000,
            sync_process_cwd: true,
        }
    }
}
