//! notepub core — shared errors and filesystem utilities.
//!
//! This crate has no internal notepub dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`util`]: Markdown file discovery and path helpers

pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};

pub use util::files::find_markdown_files;
pub use util::paths::{expand_tilde, resolve_path};
