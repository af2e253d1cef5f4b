//! Filesystem side effects behind a small capability trait.
//!
//! The publisher never touches link destinations directly; every directory
//! creation, removal, and symlink goes through a [`Linker`]. [`FsLinker`]
//! performs the operations on the real filesystem, [`MemoryLinker`] records
//! them so materialization can be checked without creating any links.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use notepub_core::{Error, Result};

/// Capability for the filesystem mutations done during materialization.
pub trait Linker {
    /// Create `path` and all missing parents.
    fn create_dir_all(&mut self, path: &Path) -> Result<()>;

    /// Remove whatever entry exists at `path` (file, symlink, or directory).
    ///
    /// Returns `true` if something was removed.
    fn remove_existing(&mut self, path: &Path) -> Result<bool>;

    /// Create a symbolic link at `target` pointing to `source`.
    fn symlink(&mut self, source: &Path, target: &Path) -> Result<()>;

    /// Resolve `path` to an absolute path if it exists.
    fn resolve(&self, path: &Path) -> Option<PathBuf>;
}

// ============================================================================
// FsLinker
// ============================================================================

/// [`Linker`] acting on the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLinker;

impl Linker for FsLinker {
    fn create_dir_all(&mut self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|e| Error::io_with_path(e, path))
    }

    fn remove_existing(&mut self, path: &Path) -> Result<bool> {
        let metadata = match std::fs::symlink_metadata(path) {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(Error::io_with_path(e, path)),
        };

        let removed = if metadata.is_dir() {
            std::fs::remove_dir_all(path)
        } else {
            std::fs::remove_file(path)
        };
        removed.map_err(|e| Error::io_with_path(e, path))?;
        Ok(true)
    }

    fn symlink(&mut self, source: &Path, target: &Path) -> Result<()> {
        create_symlink(source, target).map_err(|e| Error::io_with_path(e, target))
    }

    fn resolve(&self, path: &Path) -> Option<PathBuf> {
        std::fs::canonicalize(path).ok()
    }
}

#[cfg(unix)]
fn create_symlink(source: &Path, target: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(source, target)
}

#[cfg(windows)]
fn create_symlink(source: &Path, target: &Path) -> std::io::Result<()> {
    if source.is_dir() {
        std::os::windows::fs::symlink_dir(source, target)
    } else {
        std::os::windows::fs::symlink_file(source, target)
    }
}

// ============================================================================
// MemoryLinker
// ============================================================================

/// [`Linker`] that records operations in memory.
///
/// Sources must be registered with [`MemoryLinker::with_source`] to resolve.
#[derive(Debug, Clone, Default)]
pub struct MemoryLinker {
    sources: BTreeSet<PathBuf>,
    dirs: BTreeSet<PathBuf>,
    links: BTreeMap<PathBuf, PathBuf>,
    removed: Vec<PathBuf>,
}

impl MemoryLinker {
    /// Create an empty linker with no known sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `path` as an existing source.
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.insert(path.into());
        self
    }

    /// Directories created so far.
    pub fn dirs(&self) -> &BTreeSet<PathBuf> {
        &self.dirs
    }

    /// Current links, keyed by target.
    pub fn links(&self) -> &BTreeMap<PathBuf, PathBuf> {
        &self.links
    }

    /// Paths passed to a removal that dropped something, in order.
    pub fn removed(&self) -> &[PathBuf] {
        &self.removed
    }
}

impl Linker for MemoryLinker {
    fn create_dir_all(&mut self, path: &Path) -> Result<()> {
        self.dirs.insert(path.to_path_buf());
        Ok(())
    }

    fn remove_existing(&mut self, path: &Path) -> Result<bool> {
        // Removes the whole subtree, like `FsLinker` on a directory
        let before = self.links.len() + self.dirs.len();
        self.links.retain(|target, _| !target.starts_with(path));
        self.dirs.retain(|dir| !dir.starts_with(path));
        let existed = self.links.len() + self.dirs.len() != before;
        if existed {
            self.removed.push(path.to_path_buf());
        }
        Ok(existed)
    }

    fn symlink(&mut self, source: &Path, target: &Path) -> Result<()> {
        if self.links.contains_key(target) {
            return Err(Error::io_with_path(
                std::io::Error::from(std::io::ErrorKind::AlreadyExists),
                target,
            ));
        }
        self.links.insert(target.to_path_buf(), source.to_path_buf());
        Ok(())
    }

    fn resolve(&self, path: &Path) -> Option<PathBuf> {
        self.sources.get(path).cloned()
    }
}

// ============================================================================
// Tests
// ============================================================================
