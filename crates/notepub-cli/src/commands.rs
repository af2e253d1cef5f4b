//! Action dispatch.
//!
//! Each action writes its data lines to the given writer; diagnostics go
//! through the logger.

use std::io::{self, Write};

use notepub_publish::{Linker, Publisher};

use crate::cli::Action;

/// Run `action` against `publisher`, writing output lines to `out`.
///
/// # Errors
///
/// Only fails when writing to `out` fails.
pub fn execute<L, W>(action: &Action, publisher: &mut Publisher<L>, out: &mut W) -> io::Result<()>
where
    L: Linker,
    W: Write,
{
    match action {
        Action::Scan => {
            publisher.scan();
        }
        Action::ListPublicPosts => {
            for path in publisher.public_note_paths() {
                writeln!(out, "{}", path.display())?;
            }
        }
        Action::GetForwardLinks(file) => {
            for link in publisher.forward_links(file) {
                writeln!(out, "{link}")?;
            }
        }
        Action::ListPublicAssets => {
            let assets = publisher.collect_public_assets();
            log::info!("Found {} unique assets in public notes:", assets.len());
            for asset in assets {
                writeln!(out, "{asset}")?;
            }
        }
        Action::LinkPublicAssets => {
            publisher.link_public_assets();
        }
        Action::LinkNowPosts => {
            publisher.link_now_posts();
        }
    }
    out.flush()
}
