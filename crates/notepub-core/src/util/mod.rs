//! Utility modules for file discovery and path handling.
//!
//! # Modules
//!
//! - [`files`]: Recursive markdown file discovery
//! - [`paths`]: Tilde expansion and absolute path resolution

pub mod files;
pub mod paths;
