//! Frontmatter parsing, forward-link extraction, and note classification.
//!
//! Everything in this crate except [`note::Note::load`] is a pure function
//! over note text.
//!
//! # Modules
//!
//! - [`markdown`]: Frontmatter and inline-link extraction
//!   - [`markdown::frontmatter`]: Restricted `key: value` frontmatter
//!   - [`markdown::links`]: Per-line inline-link matching
//! - [`note`]: Public / now classification
//!
//! # Example
//!
//! ```rust
//! use notepub_content::{extract_asset_links, is_public_note};
//!
//! let content = "---\npublic: true\n---\n\n![chart](assets/chart.png)";
//! assert!(is_public_note(content));
//! assert_eq!(extract_asset_links(content), vec!["assets/chart.png"]);
//! ```

pub mod markdown;
pub mod note;

// Re-export commonly used types
pub use markdown::{
    body_lines, extract_asset_links, extract_link_targets, parse_frontmatter, Frontmatter,
};
pub use note::{has_now_tag, is_public_note, Note, NoteMeta};
