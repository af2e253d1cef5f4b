//! Path helpers: tilde expansion and absolute resolution.

use std::path::{Path, PathBuf};

/// Expand a leading `~` to the current user's home directory.
///
/// # Examples
///
/// ```
/// use notepub_core::expand_tilde;
///
/// assert_eq!(expand_tilde("docs/now").to_str(), Some("docs/now"));
/// assert!(!expand_tilde("~/Notes").starts_with("~"));
/// ```
pub fn expand_tilde(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Resolve `path` to an absolute path.
///
/// Existing paths are canonicalized (symlinks followed). Paths that do not
/// exist yet are made absolute against the current directory without
/// touching the filesystem. If even that fails the path is returned as is.
pub fn resolve_path(path: &Path) -> PathBuf {
    match std::fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(_) => std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()),
    }
}
