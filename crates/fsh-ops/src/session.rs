//! Shell session state: the tracked current directory.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::resolve::{resolve, Resolved};

/// The shell's working directory for the lifetime of the process.
///
/// Only [`crate::ops::change_directory`] moves it.
#[derive(Clone, Debug)]
pub struct Session {
    cwd: PathBuf,
    /// Also move the process working directory on `cd`.
    sync_process_cwd: bool,
}

impl Session {
    /// Start a session at `cwd`, keeping the process directory in sync.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            sync_process_cwd: true,
        }
    }

    /// Start a session at `cwd` that never touches the process directory.
    pub fn detached(cwd: impl Into<PathBuf>) -> Self {
        Self::new(cwd).with_process_sync(false)
    }

    pub fn with_process_sync(mut self, sync: bool) -> Self {
        self.sync_process_cwd = sync;
        self
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn syncs_process_cwd(&self) -> bool {
        self.sync_process_cwd
    }

    /// Resolve a path token against the current directory.
    pub fn resolve(&self, token: &str) -> Resolved {
        resolve(&self.cwd, token)
    }

    /// Resolve a path token, collapsing `..` at the root to the root itself.
    pub fn path_of(&self, token: &str) -> PathBuf {
        self.resolve(token).into_path()
    }

    /// Commit a new current directory.
    pub(crate) fn set_cwd(&mut self, path: PathBuf) -> io::Result<()> {
        if self.sync_process_cwd {
            std::env::set_current_dir(&path)?;
        }
        debug!(from = %self.cwd.display(), to = %path.display(), "changed directory");
        self.cwd = path;
        Ok(())
    }
}
