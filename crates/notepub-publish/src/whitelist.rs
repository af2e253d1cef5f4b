//! Public asset whitelist aggregation.
//!
//! The whitelist is the sorted, duplicate-free union of the asset links of
//! every public note. Sorting makes the output independent of the order in
//! which notes were walked.

use std::collections::BTreeSet;

use notepub_content::{extract_asset_links, NoteMeta};

/// Sorted set of asset links referenced by public notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Whitelist {
    assets: BTreeSet<String>,
}

impl Whitelist {
    /// Create an empty whitelist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the links of one note.
    pub fn extend<I>(&mut self, links: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.assets.extend(links);
    }

    /// Number of unique assets.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Check if no assets were collected.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Iterate over the assets in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.assets.iter().map(String::as_str)
    }

    /// Consume the whitelist into a sorted vector.
    pub fn into_sorted(self) -> Vec<String> {
        self.assets.into_iter().collect()
    }
}

/// Build the whitelist from raw note texts.
///
/// Non-public notes are ignored. Never touches the filesystem.
///
/// # Example
///
/// ```
/// use notepub_publish::whitelist::collect_whitelist;
///
/// let notes = [
///     "---\npublic: true\n---\n[b](assets/b.png) [a](assets/a.png)",
///     "---\npublic: false\n---\n[c](assets/c.png)",
/// ];
/// assert_eq!(collect_whitelist(notes), vec!["assets/a.png", "assets/b.png"]);
/// ```
pub fn collect_whitelist<I, S>(contents: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut whitelist = Whitelist::new();
    for content in contents {
        let content = content.as_ref();
        if NoteMeta::from_content(content).is_public() {
            whitelist.extend(extract_asset_links(content));
        }
    }
    whitelist.into_sorted()
}
