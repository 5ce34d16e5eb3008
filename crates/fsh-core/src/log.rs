//! Session log: one append-only file per process start.
//!
//! File layout: `<dir>/<YYYY-MM-DD_HH-MM-SS>.log`
//! - Line 1: `[<ts>] Log started at <ts>`
//! - Line 2+: `[<ts>] <message>`
//!
//! Every record is flushed as soon as it is written. Depending on its
//! [`Severity`] a record is also echoed to stdout or stderr.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::types::Severity;
use crate::utils::format_timestamp;

/// Failure to set up the session log file.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to create log directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Leveled logger writing to the session log file and the console.
pub struct SessionLog {
    /// Open log file, `None` when running console-only.
    file: Option<File>,
    path: Option<PathBuf>,
    clock: Box<dyn Clock>,
}

impl SessionLog {
    /// Open a new log file under `dir`, named after the current time.
    ///
    /// `dir` is created (recursively) if it doesn't exist.
    pub fn open(dir: &Path) -> Result<Self, LogError> {
        Self::open_with_clock(dir, Box::new(SystemClock))
    }

    /// Same as [`SessionLog::open`] with an explicit time source.
    pub fn open_with_clock(dir: &Path, clock: Box<dyn Clock>) -> Result<Self, LogError> {
        std::fs::create_dir_all(dir).map_err(|source| LogError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let started = format_timestamp(&clock.now());
        let path = dir.join(format!("{started}.log"));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LogError::Open {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), "opened session log");

        let mut log = Self {
            file: Some(file),
            path: Some(path),
            clock,
        };
        log.record(&format!("Log started at {started}"));
        Ok(log)
    }

    /// A logger that only echoes to the console.
    pub fn console_only() -> Self {
        Self {
            file: None,
            path: None,
            clock: Box::new(SystemClock),
        }
    }

    /// Path of the log file, if one is open.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write `message` to the log file and echo it according to `level`.
    pub fn log(&mut self, level: Severity, message: &str) {
        self.record(message);
        match level {
            Severity::Error => eprintln!("{message}"),
            Severity::Warning => println!("Warning: {message}"),
            Severity::Info => println!("{message}"),
            Severity::Untagged => {}
        }
    }

    /// Write to the log file only.
    pub fn untagged(&mut self, message: &str) {
        self.log(Severity::Untagged, message);
    }

    /// Append one `[<ts>] <message>` line and flush.
    fn record(&mut self, message: &str) {
        let Some(file) = self.file.as_mut() else {
            return;
        };
        let line = render_line(&format_timestamp(&self.clock.now()), message);
        if let Err(e) = file.write_all(line.as_bytes()).and_then(|_| file.flush()) {
            warn!(error = %e, "failed to write session log");
            eprintln!("Logger error: {e}");
        }
    }
}

impl Drop for SessionLog {
    fn drop(&mut self) {
        if let Some(file) = self.file.as_mut() {
            let _ = file.flush();
        }
    }
}

/// Render a single log line, including the trailing newline.
fn render_line(timestamp: &str, message: &str) -> String {
    format!("[{timestamp}] {message}\n")
}
