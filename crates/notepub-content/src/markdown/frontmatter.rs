//! Restricted frontmatter extraction from markdown notes.
//!
//! Frontmatter is a block of `key: value` lines at the very start of a note,
//! delimited by `---`:
//!
//! ```markdown
//! ---
//! title: Reflections
//! public: true
//! tags: now, writing
//! date: 2024-03-01
//! ---
//!
//! The body of the note starts here.
//! ```
//!
//! This is deliberately not a YAML parser. Every line between the delimiters
//! that contains a colon is split on its first colon, and both halves are
//! trimmed. Nested structures, lists, and quoting are not interpreted; the
//! value is whatever text follows the colon.
//!
//! # Usage
//!
//! ```rust
//! use notepub_content::markdown::parse_frontmatter;
//!
//! let content = "---\ntitle: Test\npublic: true\n---\n\nBody";
//! let fm = parse_frontmatter(content);
//!
//! assert!(fm.had_delimiters());
//! assert_eq!(fm.get("title"), Some("Test"));
//! assert_eq!(fm.get("public"), Some("true"));
//! ```

use std::collections::BTreeMap;

/// Line that opens and closes a frontmatter block.
pub const DELIMITER: &str = "---";

/// Parsed frontmatter: trimmed keys mapped to trimmed values.
///
/// Keys are unique; when a key appears more than once the later line wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    fields: BTreeMap<String, String>,
    had_delimiters: bool,
}

impl Frontmatter {
    /// Get the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Get the value stored under `key`, or `""` when absent.
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    /// Check whether both the opening and closing delimiters were found.
    pub fn had_delimiters(&self) -> bool {
        self.had_delimiters
    }

    /// Number of fields parsed.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no fields were parsed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Parse the frontmatter block at the start of `content`.
///
/// # Behavior
///
/// - Content not starting with `---`: empty result.
/// - Opening `---` but no later line whose trimmed text is `---`: empty
///   result, `had_delimiters() == false`.
/// - Otherwise every line strictly between the delimiters that contains a
///   colon is split on the first colon; key and value are trimmed. Lines
///   without a colon are skipped.
///
/// This never fails. Malformed frontmatter yields an empty mapping.
///
/// # Example
///
/// ```rust
/// use notepub_content::markdown::parse_frontmatter;
///
/// let fm = parse_frontmatter("---\nurl: https://example.com\n---\n");
/// assert_eq!(fm.get("url"), Some("https://example.com"));
///
/// let fm = parse_frontmatter("# No frontmatter");
/// assert!(fm.is_empty());
/// ```
pub fn parse_frontmatter(content: &str) -> Frontmatter {
    if !content.starts_with(DELIMITER) {
        return Frontmatter::default();
    }

    let lines: Vec<&str> = content.lines().collect();

    // Closing delimiter is the first line after the opening one
    let Some(end_idx) = lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, line)| line.trim() == DELIMITER)
        .map(|(i, _)| i)
    else {
        log::debug!("Frontmatter opening delimiter found but no closing delimiter");
        return Frontmatter::default();
    };

    let mut fields = BTreeMap::new();
    for line in &lines[1..end_idx] {
        if let Some((key, value)) = line.split_once(':') {
            fields.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    Frontmatter {
        fields,
        had_delimiters: true,
    }
}

// ============================================================================
// Tests
// ============================================================================
