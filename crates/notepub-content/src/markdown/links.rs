//! Forward-link extraction from note bodies.
//!
//! A forward link is an inline markdown link `[label](target)` found in the
//! body of a note. Matching is a per-line pattern, not a markdown parse: a
//! link split across lines is not detected, and links inside code blocks are
//! matched like any other text.
//!
//! # Example
//!
//! ```rust
//! use notepub_content::markdown::extract_asset_links;
//!
//! let content = "---\npublic: true\n---\n![diagram](assets/flow.png) see [site](https://example.com)";
//! assert_eq!(extract_asset_links(content), vec!["assets/flow.png"]);
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::frontmatter::DELIMITER;

/// Substring a link target must contain to count as an asset link.
pub const ASSET_MARKER: &str = "assets";

#[allow(clippy::expect_used)]
static INLINE_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]\(([^)]*)\)").expect("Invalid inline link regex"));

/// Return the body lines of `content`.
///
/// The body starts after the line where the running count of lines whose
/// trimmed text is `---` reaches two. With fewer than two such lines the
/// whole content is the body. Unlike [`parse_frontmatter`], the content does
/// not have to start with `---` for a block to be skipped.
///
/// [`parse_frontmatter`]: super::frontmatter::parse_frontmatter
pub fn body_lines(content: &str) -> Vec<&str> {
    let lines: Vec<&str> = content.lines().collect();

    let closing = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.trim() == DELIMITER)
        .nth(1)
        .map(|(i, _)| i);

    match closing {
        Some(end_idx) => lines[end_idx + 1..].to_vec(),
        None => lines,
    }
}

/// Extract every inline-link target from the body of `content`.
///
/// Targets are returned in document order with duplicates preserved.
///
/// # Example
///
/// ```rust
/// use notepub_content::markdown::extract_link_targets;
///
/// let body = "[a](one.md) and [b](two.md)\n[a](one.md)";
/// assert_eq!(extract_link_targets(body), vec!["one.md", "two.md", "one.md"]);
/// ```
pub fn extract_link_targets(content: &str) -> Vec<String> {
    body_lines(content)
        .into_iter()
        .flat_map(|line| {
            INLINE_LINK_RE
                .captures_iter(line)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Extract asset links from the body of `content`.
///
/// Keeps only link targets containing the case-sensitive substring
/// `assets`, in document order with duplicates preserved.
pub fn extract_asset_links(content: &str) -> Vec<String> {
    extract_link_targets(content)
        .into_iter()
        .filter(|target| target.contains(ASSET_MARKER))
        .inspect(|target| log::debug!("  Found asset link: {target}"))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
