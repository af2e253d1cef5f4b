//! Link names and link-path checks.

use std::path::{Component, Path};

/// Check whether `file_name` already starts with a `YYYY-MM-DD` style date.
///
/// The name must start with `19` or `20`, be at least ten characters long,
/// and carry `-` at character positions 4 and 7.
pub fn has_date_prefix(file_name: &str) -> bool {
    let chars: Vec<char> = file_name.chars().take(10).collect();
    (file_name.starts_with("19") || file_name.starts_with("20"))
        && chars.len() >= 10
        && chars[4] == '-'
        && chars[7] == '-'
}

/// Compute the name a now post is linked under.
///
/// Names that already carry a date prefix are kept. Otherwise a non-empty
/// `date` is prepended as `{date}_{file_name}`.
///
/// # Examples
///
/// ```
/// use notepub_publish::naming::now_post_file_name;
///
/// assert_eq!(
///     now_post_file_name("reflections.md", Some("2024-03-01")),
///     "2024-03-01_reflections.md"
/// );
/// assert_eq!(
///     now_post_file_name("2024-03-01-reflections.md", Some("2023-01-01")),
///     "2024-03-01-reflections.md"
/// );
/// assert_eq!(now_post_file_name("reflections.md", None), "reflections.md");
/// ```
pub fn now_post_file_name(file_name: &str, date: Option<&str>) -> String {
    if has_date_prefix(file_name) {
        return file_name.to_string();
    }
    match date {
        Some(date) if !date.is_empty() => format!("{date}_{file_name}"),
        _ => file_name.to_string(),
    }
}

/// Check whether `path` is a non-empty relative path of plain names only.
///
/// Joining such a path onto a directory never leaves that directory.
pub fn is_contained(path: &Path) -> bool {
    let mut components = path.components().peekable();
    components.peek().is_some() && components.all(|c| matches!(c, Component::Normal(_)))
}

/// Check whether `name` is exactly one plain path component.
pub fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(first)), None) if first == name
    )
}
