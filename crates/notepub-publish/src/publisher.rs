//! Note scanning and link materialization.
//!
//! [`Publisher`] walks the notes root, classifies every note, and drives the
//! two materialization passes through a [`Linker`]:
//!
//! - **Asset linking** mirrors each whitelisted asset from
//!   `notes_dir/assets` into the assets target.
//! - **Now-post linking** links every now post into the now target, prefixed
//!   with its `date` unless its name already starts with one.
//!
//! Every link target stays inside its target directory. Asset paths with
//! `..`, `.`, or an empty remainder are skipped, and a date that would not
//! form a single file name is dropped from the link name.
//!
//! Nothing here is fatal. Unreadable notes, a missing notes root, missing
//! sources, and failed link operations are logged and skipped.
//!
//! # Example
//!
//! ```no_run
//! use notepub_publish::{Publisher, PublisherConfig};
//!
//! let config = PublisherConfig::new().with_notes_dir("~/Notes");
//! let mut publisher = Publisher::new(config);
//!
//! for asset in publisher.collect_public_assets() {
//!     println!("{asset}");
//! }
//! let report = publisher.link_public_assets();
//! println!("linked {report}");
//! ```

use std::path::{Path, PathBuf};

use notepub_content::{extract_asset_links, Note};
use notepub_core::{find_markdown_files, resolve_path};

use crate::config::{PublisherConfig, ASSETS_SUBDIR};
use crate::linker::{FsLinker, Linker};
use crate::naming::{is_contained, is_single_component, now_post_file_name};
use crate::report::LinkReport;
use crate::whitelist::Whitelist;

/// Prefix stripped from whitelist entries before mirroring them.
const ASSETS_PREFIX: &str = "assets/";

/// Scans a notes root and materializes its public parts.
#[derive(Debug)]
pub struct Publisher<L: Linker = FsLinker> {
    notes_dir: PathBuf,
    assets_target: PathBuf,
    now_target: PathBuf,
    linker: L,
}

impl Publisher<FsLinker> {
    /// Create a publisher acting on the real filesystem.
    pub fn new(config: PublisherConfig) -> Self {
        Self::with_linker(config, FsLinker)
    }
}

impl<L: Linker> Publisher<L> {
    /// Create a publisher performing its side effects through `linker`.
    ///
    /// The notes root is resolved to an absolute path here.
    pub fn with_linker(config: PublisherConfig, linker: L) -> Self {
        Self {
            notes_dir: resolve_path(&config.notes_dir),
            assets_target: config.assets_target,
            now_target: config.now_target,
            linker,
        }
    }

    /// Absolute notes root.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Directory holding the source assets.
    pub fn assets_dir(&self) -> PathBuf {
        self.notes_dir.join(ASSETS_SUBDIR)
    }

    /// The linker used for side effects.
    pub fn linker(&self) -> &L {
        &self.linker
    }

    // ------------------------------------------------------------------------
    // Scanning
    // ------------------------------------------------------------------------

    /// Every `.md` file under the notes root.
    ///
    /// A missing root is logged and yields an empty list.
    pub fn note_paths(&self) -> Vec<PathBuf> {
        match find_markdown_files(&self.notes_dir) {
            Ok(paths) => paths,
            Err(e) if e.is_not_found() => {
                log::warn!("Notes directory not found: {}", self.notes_dir.display());
                Vec::new()
            }
            Err(e) => {
                log::warn!("Failed to scan {}: {e}", self.notes_dir.display());
                Vec::new()
            }
        }
    }

    /// Load every readable note under the notes root.
    fn load_notes(&self) -> Vec<Note> {
        self.note_paths()
            .into_iter()
            .filter_map(|path| match Note::load(&path) {
                Ok(note) => Some(note),
                Err(e) => {
                    log::warn!("Error reading {}: {e}", path.display());
                    None
                }
            })
            .collect()
    }

    /// Notes whose frontmatter marks them public.
    pub fn find_public_notes(&self) -> Vec<Note> {
        self.load_notes()
            .into_iter()
            .filter(|n| n.meta().is_public())
            .collect()
    }

    /// Notes carrying the now tag.
    pub fn find_now_notes(&self) -> Vec<Note> {
        self.load_notes()
            .into_iter()
            .filter(|n| n.meta().has_now_tag())
            .collect()
    }

    /// Scan for public notes and log a summary.
    pub fn scan(&self) -> Vec<Note> {
        log::info!("Scanning for public notes in: {}", self.notes_dir.display());
        let public_notes = self.find_public_notes();

        log::info!("Found {} public notes:", public_notes.len());
        for note in &public_notes {
            log::debug!("  - {}", note.path().display());
        }
        public_notes
    }

    /// Absolute paths of all public notes.
    pub fn public_note_paths(&self) -> Vec<PathBuf> {
        log::debug!("Finding public notes for path output...");
        let paths: Vec<PathBuf> = self
            .find_public_notes()
            .iter()
            .map(|n| resolve_path(n.path()))
            .collect();
        log::debug!("Outputting {} public note paths", paths.len());
        paths
    }

    /// Asset links in the body of the note at `file`.
    ///
    /// An unreadable file is logged and yields no links.
    pub fn forward_links(&self, file: &Path) -> Vec<String> {
        log::debug!("Getting forward links from: {}", file.display());
        match Note::load(file) {
            Ok(note) => {
                let links = note.asset_links();
                log::debug!("Outputting {} forward links", links.len());
                links
            }
            Err(e) => {
                log::warn!("Error reading {}: {e}", file.display());
                Vec::new()
            }
        }
    }

    /// Sorted, duplicate-free asset links of all public notes.
    pub fn collect_public_assets(&self) -> Vec<String> {
        let public_notes = self.find_public_notes();
        log::info!(
            "Collecting assets from {} public notes...",
            public_notes.len()
        );

        let mut whitelist = Whitelist::new();
        for note in &public_notes {
            let name = note.file_name().unwrap_or_default();
            log::debug!("Extracting assets from: {name}");
            let links = extract_asset_links(note.content());
            log::info!("  {name}: {} assets", links.len());
            whitelist.extend(links);
        }

        log::debug!("Total unique public assets found: {}", whitelist.len());
        whitelist.into_sorted()
    }

    // ------------------------------------------------------------------------
    // Materialization
    // ------------------------------------------------------------------------

    /// Link every whitelisted asset into the assets target.
    ///
    /// Returns early with an empty report when the target cannot be created
    /// or the source assets directory is missing.
    pub fn link_public_assets(&mut self) -> LinkReport {
        let target_dir = self.assets_target.clone();
        log::debug!("Target directory: {}", target_dir.display());
        if let Err(e) = self.linker.create_dir_all(&target_dir) {
            log::warn!("Cannot create target directory: {e}");
            return LinkReport::default();
        }

        let source_dir = self.assets_dir();
        log::debug!("Source assets directory: {}", source_dir.display());
        if self.linker.resolve(&source_dir).is_none() {
            log::warn!(
                "Source assets directory not found: {}",
                source_dir.display()
            );
            return LinkReport::default();
        }

        let assets = self.collect_public_assets();
        log::info!(
            "Linking {} public assets to {}...",
            assets.len(),
            target_dir.display()
        );

        let mut report = LinkReport::with_total(assets.len());
        for asset in &assets {
            let relative = asset.strip_prefix(ASSETS_PREFIX).unwrap_or(asset);
            if Path::new(relative).is_absolute() {
                log::warn!("Skipping absolute asset path: {asset}");
                report.record_skipped(relative, "absolute asset path");
                continue;
            }
            if !is_contained(Path::new(relative)) {
                log::warn!("Skipping asset path outside the assets directory: {asset}");
                report.record_skipped(relative, "unsafe asset path");
                continue;
            }

            let source = source_dir.join(relative);
            let target = target_dir.join(relative);
            self.link_one(&source, &target, &mut report);
        }

        log::info!("Successfully linked {report} assets");
        report
    }

    /// Link every now post into the now target.
    pub fn link_now_posts(&mut self) -> LinkReport {
        let target_dir = self.now_target.clone();
        log::debug!("Target directory: {}", target_dir.display());
        if let Err(e) = self.linker.create_dir_all(&target_dir) {
            log::warn!("Cannot create target directory: {e}");
            return LinkReport::default();
        }

        let now_posts = self.find_now_notes();
        log::info!("Found {} #now posts", now_posts.len());

        let mut report = LinkReport::with_total(now_posts.len());
        for post in &now_posts {
            let Some(file_name) = post.file_name() else {
                log::warn!("Skipping non UTF-8 file name: {}", post.path().display());
                report.record_skipped(post.path(), "non UTF-8 file name");
                continue;
            };

            let dated_name = now_post_file_name(file_name, post.meta().publish_date());
            let target_name = if is_single_component(&dated_name) {
                dated_name
            } else {
                log::warn!("Date of {file_name} does not form a plain file name: {dated_name}");
                file_name.to_string()
            };
            if target_name == file_name {
                log::debug!("Linking {file_name} under its own name");
            }

            let target = target_dir.join(&target_name);
            if self.link_one(post.path(), &target, &mut report) {
                log::info!("  Linked: {target_name}");
            }
        }

        log::info!(
            "Successfully linked {} #now posts to {}",
            report.linked,
            target_dir.display()
        );
        report
    }

    /// Replace whatever is at `target` with a link to the resolved `source`.
    ///
    /// Returns `true` if the link was created.
    fn link_one(&mut self, source: &Path, target: &Path, report: &mut LinkReport) -> bool {
        log::debug!("  Source: {}", source.display());
        log::debug!("  Target: {}", target.display());

        if let Some(parent) = target.parent() {
            if let Err(e) = self.linker.create_dir_all(parent) {
                log::warn!("Cannot create {}: {e}", parent.display());
                report.record_skipped(source, e.to_string());
                return false;
            }
        }

        if let Err(e) = self.linker.remove_existing(target) {
            log::warn!("Cannot replace {}: {e}", target.display());
            report.record_skipped(source, e.to_string());
            return false;
        }

        let Some(resolved) = self.linker.resolve(source) else {
            log::warn!("Source file not found: {}", source.display());
            report.record_skipped(source, "source not found");
            return false;
        };

        match self.linker.symlink(&resolved, target) {
            Ok(()) => {
                report.record_linked();
                true
            }
            Err(e) => {
                log::warn!("Cannot link {}: {e}", target.display());
                report.record_skipped(source, e.to_string());
                false
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
