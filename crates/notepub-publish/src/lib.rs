//! Selective publishing of markdown notes and their assets.
//!
//! This crate combines the parsing in `notepub-content` with a directory
//! walk and performs the publishing side effects:
//!
//! - [`whitelist`]: union of asset links over all public notes
//! - [`publisher`]: scanning plus asset and now-post linking
//! - [`linker`]: the filesystem capability the publisher mutates through
//! - [`naming`]: link names for now posts
//! - [`report`]: per-run link counts
//! - [`config`]: paths handed to the publisher
//!
//! # Example
//!
//! ```no_run
//! use notepub_publish::{Publisher, PublisherConfig};
//!
//! let publisher = Publisher::new(PublisherConfig::default());
//! for path in publisher.public_note_paths() {
//!     println!("{}", path.display());
//! }
//! ```

pub mod config;
pub mod linker;
pub mod naming;
pub mod publisher;
pub mod report;
pub mod whitelist;

pub use config::PublisherConfig;
pub use linker::{FsLinker, Linker, MemoryLinker};
pub use publisher::Publisher;
pub use report::{LinkReport, SkippedLink};
pub use whitelist::{collect_whitelist, Whitelist};
