//! Path resolution against the session's current directory.

use std::path::{Path, PathBuf};

/// Token that moves to the parent of the current directory.
pub const PARENT: &str = "..";

/// Outcome of resolving a path token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved {
    /// An absolute path.
    Path(PathBuf),
    /// `..` was requested at the filesystem root; carries the root unchanged.
    AboveRoot(PathBuf),
}

impl Resolved {
    pub fn into_path(self) -> PathBuf {
        match self {
            Resolved::Path(p) | Resolved::AboveRoot(p) => p,
        }
    }

    pub fn is_above_root(&self) -> bool {
        matches!(self, Resolved::AboveRoot(_))
    }
}

/// Resolve `token` relative to `cwd`.
///
/// - tokens starting at the root are returned unchanged
/// - `..` yields the parent of `cwd`, or [`Resolved::AboveRoot`] at the root
/// - anything else is joined onto `cwd`
///
/// Never fails: an empty token simply joins to `cwd` and any problem
/// surfaces from the filesystem call that follows.
pub fn resolve(cwd: &Path, token: &str) -> Resolved {
    if token == PARENT {
        return match cwd.parent() {
            Some(parent) => Resolved::Path(parent.to_path_buf()),
            None => Resolved::AboveRoot(cwd.to_path_buf()),
        };
    }

    let path = Path::new(token);
    if path.has_root() {
        Resolved::Path(path.to_path_buf())
    } else {
        Resolved::Path(cwd.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn absolute_token_unchanged() {
        assert_eq!(
            resolve(Path::new("/home/user"), "/etc/hosts"),
            Resolved::Path(PathBuf::from("/etc/hosts"))
        );
    }

    #[test]
    fn relative_token_joined() {
        let cwd = std::env::temp_dir();
        assert_eq!(
            resolve(&cwd, "notes.txt"),
            Resolved::Path(cwd.join("notes.txt"))
        );
    }

    #[test]
    fn nested_relative_token_joined() {
        let cwd = std::env::temp_dir();
        assert_eq!(
            resolve(&cwd, "a/b").into_path(),
            cwd.join("a").join("b")
        );
    }

    #[cfg(unix)]
    #[test]
    fn parent_token() {
        assert_eq!(
            resolve(Path::new("/home/user"), ".."),
            Resolved::Path(PathBuf::from("/home"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn parent_of_root_is_flagged() {
        let resolved = resolve(Path::new("/"), "..");
        assert!(resolved.is_above_root());
        assert_eq!(resolved.into_path(), PathBuf::from("/"));
    }

    #[test]
    fn empty_token_passes_through() {
        let cwd = std::env::temp_dir();
        let resolved = resolve(&cwd, "");
        assert!(!resolved.is_above_root());
        assert!(resolved.into_path().starts_with(&cwd));
    }
}
