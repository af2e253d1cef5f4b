//! Publisher configuration.
//!
//! All paths the publisher touches are carried in a [`PublisherConfig`]
//! value handed to [`Publisher::new`](crate::Publisher::new). Relative paths
//! are interpreted against the current directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default notes root, relative to the working directory.
pub const DEFAULT_NOTES_DIR: &str = "../Notes";
/// Default destination for public asset links.
pub const DEFAULT_ASSETS_TARGET: &str = "docs/posts/assets";
/// Default destination for now-post links.
pub const DEFAULT_NOW_TARGET: &str = "docs/now";
/// Name of the assets directory inside the notes root.
pub const ASSETS_SUBDIR: &str = "assets";

/// Locations of the notes root and the two link destinations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublisherConfig {
    /// Directory scanned for `.md` notes; holds the `assets/` subdirectory.
    pub notes_dir: PathBuf,
    /// Directory receiving links to public assets.
    pub assets_target: PathBuf,
    /// Directory receiving links to now posts.
    pub now_target: PathBuf,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            notes_dir: PathBuf::from(DEFAULT_NOTES_DIR),
            assets_target: PathBuf::from(DEFAULT_ASSETS_TARGET),
            now_target: PathBuf::from(DEFAULT_NOW_TARGET),
        }
    }
}

impl PublisherConfig {
    /// Create a configuration with the default paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the notes root.
    pub fn with_notes_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.notes_dir = path.as_ref().to_path_buf();
        self
    }

    /// Set the asset link destination.
    pub fn with_assets_target(mut self, path: impl AsRef<Path>) -> Self {
        self.assets_target = path.as_ref().to_path_buf();
        self
    }

    /// Set the now-post link destination.
    pub fn with_now_target(mut self, path: impl AsRef<Path>) -> Self {
        self.now_target = path.as_ref().to_path_buf();
        self
    }
}
