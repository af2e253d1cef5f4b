//! Markdown frontmatter and link extraction.
//!
//! - [`frontmatter`]: `key: value` header between `---` lines
//! - [`links`]: inline `[label](target)` links in the note body

pub mod frontmatter;
pub mod links;

pub use frontmatter::{parse_frontmatter, Frontmatter, DELIMITER};
pub use links::{body_lines, extract_asset_links, extract_link_targets, ASSET_MARKER};
