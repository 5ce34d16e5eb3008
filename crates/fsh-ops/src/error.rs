//! Filesystem operation errors.
//!
//! The `Display` form of each variant is the exact text the shell reports,
//! so everything on the result path starts with `Error`.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FsError {
    #[error("Error creating file: {name}: {source}")]
    CreateFile { name: String, source: io::Error },

    #[error("Error reading file: {name}: {source}")]
    ReadFile { name: String, source: io::Error },

    #[error("Error creating directory: {name}: {source}")]
    CreateDir { name: String, source: io::Error },

    #[error("Error listing directory: {path}: {source}")]
    ListDir { path: String, source: io::Error },

    #[error("Error removing item: {name}: {source}")]
    Remove { name: String, source: io::Error },

    /// Neither a directory nor a regular file (missing, socket, broken link).
    #[error("Error: invalid item: {name}")]
    InvalidItem { name: String },

    #[error("Error moving file: {src} -> {dest}: {source}")]
    Move {
        src: String,
        dest: String,
        source: io::Error,
    },

    #[error("Error copying file: {src} -> {dest}: {source}")]
    Copy {
        src: String,
        dest: String,
        source: io::Error,
    },

    /// `cd` target is not a directory. Reported directly, not logged.
    #[error("Invalid directory: {target}")]
    NotADirectory { target: String },

    #[error("Error changing directory: {target}: {source}")]
    ChangeDir { target: String, source: io::Error },
}
