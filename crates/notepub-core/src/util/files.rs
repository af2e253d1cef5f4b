//! Markdown file discovery.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Literal suffix a file name must carry to count as a note.
pub const MARKDOWN_SUFFIX: &str = ".md";

/// Recursively find every markdown file under `root`.
///
/// Matches regular files whose name ends in the literal, case-sensitive
/// suffix `.md`. Entries that cannot be read during the walk are logged and
/// skipped. The result is ordered by the walk (sorted within each
/// directory).
///
/// # Errors
///
/// Returns [`Error::NotFound`] if `root` does not exist, and
/// [`Error::Parse`] if `root` cannot be expressed as a glob pattern.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use notepub_core::find_markdown_files;
///
/// for note in find_markdown_files(Path::new("../Notes"))? {
///     println!("{}", note.display());
/// }
/// # Ok::<(), notepub_core::Error>(())
/// ```
pub fn find_markdown_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(Error::not_found(
            root.to_string_lossy(),
            "notes directory",
        ));
    }

    let root_str = root
        .to_str()
        .ok_or_else(|| Error::parse(format!("Non UTF-8 path: {}", root.display())))?;
    let pattern = format!("{}/**/*{MARKDOWN_SUFFIX}", glob::Pattern::escape(root_str));

    let entries = glob::glob(&pattern)
        .map_err(|e| Error::parse(format!("Invalid glob pattern {pattern}: {e}")))?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(path) => log::debug!("Skipping non-file {}", path.display()),
            Err(e) => log::warn!("Walk error at {}: {}", e.path().display(), e.error()),
        }
    }

    Ok(files)
}
