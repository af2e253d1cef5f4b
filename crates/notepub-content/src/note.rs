//! Note classification.
//!
//! A note is public when its frontmatter says `public: true` (any case), and
//! is a "now" post when its `tags` field contains `now` anywhere. The tag
//! check is a plain substring test, so `tags: unknown` also matches.
//!
//! # Example
//!
//! ```rust
//! use notepub_content::note::NoteMeta;
//!
//! let meta = NoteMeta::from_content("---\npublic: True\ntags: now, writing\ndate: 2024-03-01\n---\n");
//! assert!(meta.is_public());
//! assert!(meta.has_now_tag());
//! assert_eq!(meta.publish_date(), Some("2024-03-01"));
//! ```

use std::path::{Path, PathBuf};

use notepub_core::{Error, Result};

use crate::markdown::{extract_asset_links, parse_frontmatter, Frontmatter};

/// Frontmatter key marking a note public.
pub const PUBLIC_KEY: &str = "public";
/// Frontmatter key holding the note's tags.
pub const TAGS_KEY: &str = "tags";
/// Frontmatter key holding the publish date.
pub const DATE_KEY: &str = "date";
/// Tag substring identifying a "now" post.
pub const NOW_TAG: &str = "now";

/// Classification derived from a note's frontmatter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteMeta {
    frontmatter: Frontmatter,
}

impl NoteMeta {
    /// Parse the frontmatter of `content` once and keep it for lookups.
    pub fn from_content(content: &str) -> Self {
        Self {
            frontmatter: parse_frontmatter(content),
        }
    }

    /// The parsed frontmatter.
    pub fn frontmatter(&self) -> &Frontmatter {
        &self.frontmatter
    }

    /// True iff the lower-cased `public` value is exactly `true`.
    pub fn is_public(&self) -> bool {
        self.frontmatter.get_or_empty(PUBLIC_KEY).to_lowercase() == "true"
    }

    /// True iff the lower-cased `tags` value contains `now`.
    pub fn has_now_tag(&self) -> bool {
        self.frontmatter
            .get_or_empty(TAGS_KEY)
            .to_lowercase()
            .contains(NOW_TAG)
    }

    /// The `date` value, if present and non-empty.
    pub fn publish_date(&self) -> Option<&str> {
        self.frontmatter.get(DATE_KEY).filter(|d| !d.is_empty())
    }
}

/// Check whether `content` is a public note.
pub fn is_public_note(content: &str) -> bool {
    NoteMeta::from_content(content).is_public()
}

/// Check whether `content` carries the now tag.
pub fn has_now_tag(content: &str) -> bool {
    NoteMeta::from_content(content).has_now_tag()
}

/// A note read from disk together with its classification.
#[derive(Debug, Clone)]
pub struct Note {
    path: PathBuf,
    content: String,
    meta: NoteMeta,
}

impl Note {
    /// Read and classify the note at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read or is not valid
    /// UTF-8.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Ok(Self::from_content(path, content))
    }

    /// Build a note from content already in memory.
    pub fn from_content(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let content = content.into();
        let meta = NoteMeta::from_content(&content);
        Self {
            path: path.into(),
            content,
            meta,
        }
    }

    /// Path the note was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw note text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Classification of the note.
    pub fn meta(&self) -> &NoteMeta {
        &self.meta
    }

    /// The note's file name, if it is valid UTF-8.
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }

    /// Asset links found in the note body.
    pub fn asset_links(&self) -> Vec<String> {
        extract_asset_links(&self.content)
    }
}

// ============================================================================
// Tests
// ============================================================================
