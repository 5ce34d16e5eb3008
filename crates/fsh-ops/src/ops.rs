//! Filesystem operations.
//!
//! Each verb resolves its path arguments through the [`Session`] and returns
//! `Result<String, FsError>`. The success string is what the shell prints;
//! the dispatcher turns an `Err` into its display string, so no operation
//! ever aborts the loop.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;

use tracing::debug;

use crate::error::FsError;
use crate::resolve::Resolved;
use crate::session::Session;

// ─────────────────────────────────────────────
// Files
// ─────────────────────────────────────────────

/// `touch`: create an empty file, truncating it if it already exists.
pub fn create_file(session: &Session, name: &str) -> Result<String, FsError> {
    let path = session.path_of(name);
    File::create(&path).map_err(|source| FsError::CreateFile {
        name: name.to_string(),
        source,
    })?;
    Ok(format!("File created: {name}"))
}

/// `cat`: return the whole file as text.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_file(session: &Session, name: &str) -> Result<String, FsError> {
    let path = session.path_of(name);
    let bytes = fs::read(&path).map_err(|source| FsError::ReadFile {
        name: name.to_string(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// `cp`: byte-copy `src` to `dest`. Fails if `dest` already exists.
pub fn copy_file(session: &Session, src: &str, dest: &str) -> Result<String, FsError> {
    let err = |source: io::Error| FsError::Copy {
        src: src.to_string(),
        dest: dest.to_string(),
        source,
    };

    let src_path = session.path_of(src);
    let dest_path = session.path_of(dest);

    // The destination must not be touched unless the source is a regular file.
    if !fs::metadata(&src_path).map_err(err)?.is_file() {
        return Err(err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "source is not a regular file",
        )));
    }

    let mut reader = File::open(&src_path).map_err(err)?;
    // `create_new` makes the existence check and the creation one step.
    let mut writer = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&dest_path)
        .map_err(err)?;
    let bytes = match io::copy(&mut reader, &mut writer) {
        Ok(bytes) => bytes,
        Err(e) => {
            drop(writer);
            let _ = fs::remove_file(&dest_path);
            return Err(err(e));
        }
    };

    debug!(src, dest, bytes, "copied file");
    Ok(format!("File copied: {src} -> {dest}"))
}

/// `mv`: rename `src` to `dest`.
pub fn move_file(session: &Session, src: &str, dest: &str) -> Result<String, FsError> {
    fs::rename(session.path_of(src), session.path_of(dest)).map_err(|source| FsError::Move {
        src: src.to_string(),
        dest: dest.to_string(),
        source,
    })?;
    Ok(format!("File moved: {src} -> {dest}"))
}

// ─────────────────────────────────────────────
// Directories
// ─────────────────────────────────────────────

/// `mkdir`: create one directory level. The parent must exist.
pub fn create_directory(session: &Session, name: &str) -> Result<String, FsError> {
    fs::create_dir(session.path_of(name)).map_err(|source| FsError::CreateDir {
        name: name.to_string(),
        source,
    })?;
    Ok(format!("Directory created: {name}"))
}

/// `rm`: remove a directory recursively or a single regular file.
pub fn remove_item(session: &Session, name: &str) -> Result<String, FsError> {
    let path = session.path_of(name);
    let err = |source: io::Error| FsError::Remove {
        name: name.to_string(),
        source,
    };

    if path.is_dir() {
        fs::remove_dir_all(&path).map_err(err)?;
        Ok(format!("Directory removed: {name}"))
    } else if path.is_file() {
        fs::remove_file(&path).map_err(err)?;
        Ok(format!("File removed: {name}"))
    } else {
        Err(FsError::InvalidItem {
            name: name.to_string(),
        })
    }
}

/// Immediate children of a directory, split by kind.
///
/// Each group keeps the order the filesystem returned; nothing is sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing {
    pub dirs: Vec<String>,
    pub files: Vec<String>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.files.is_empty()
    }

    /// Rendered entries, directories first.
    pub fn entries(&self) -> impl Iterator<Item = String> + '_ {
        self.dirs
            .iter()
            .map(|name| format!("Dir: {name}"))
            .chain(self.files.iter().map(|name| format!("File: {name}")))
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for entry in self.entries() {
            writeln!(f, "    {entry}")?;
        }
        Ok(())
    }
}

/// Collect the children of `path` (default: the current directory).
///
/// Entries that are neither directories nor regular files are skipped.
pub fn list_entries(session: &Session, path: Option<&str>) -> Result<Listing, FsError> {
    let (label, dir) = match path {
        Some(token) => (token.to_string(), session.path_of(token)),
        None => (session.cwd().display().to_string(), session.cwd().to_path_buf()),
    };
    let err = |source: io::Error| FsError::ListDir {
        path: label.clone(),
        source,
    };

    let mut listing = Listing::default();
    for entry in fs::read_dir(&dir).map_err(err)? {
        let entry = entry.map_err(err)?;
        let entry_path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if entry_path.is_dir() {
            listing.dirs.push(name);
        } else if entry_path.is_file() {
            listing.files.push(name);
        }
    }
    Ok(listing)
}

/// `ls`: render [`list_entries`] as shell output.
pub fn list_directory(session: &Session, path: Option<&str>) -> Result<String, FsError> {
    list_entries(session, path).map(|listing| listing.to_string())
}

/// Result of a successful `cd`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirChange {
    /// The session now points at this (canonical) directory.
    Moved(PathBuf),
    /// `..` at the filesystem root; nothing changed.
    AtRoot,
}

/// `cd`: move the session (and, if enabled, the process) to `target`.
///
/// The target must be an existing directory; on any failure the session is
/// left untouched.
pub fn change_directory(session: &mut Session, target: &str) -> Result<DirChange, FsError> {
    let path = match session.resolve(target) {
        Resolved::AboveRoot(_) => return Ok(DirChange::AtRoot),
        Resolved::Path(path) => path,
    };

    if !path.is_dir() {
        return Err(FsError::NotADirectory {
            target: target.to_string(),
        });
    }

    let err = |source: io::Error| FsError::ChangeDir {
        target: target.to_string(),
        source,
    };
    let canonical = path.canonicalize().map_err(err)?;
    session.set_cwd(canonical.clone()).map_err(err)?;
    Ok(DirChange::Moved(canonical))
}

/// `pwd`: the session's current directory.
pub fn current_dir(session: &Session) -> String {
    session.cwd().display().to_string()
}
