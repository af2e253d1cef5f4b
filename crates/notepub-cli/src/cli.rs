//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Selective note publishing: link public notes and their assets into a site tree.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "notepub", version)]
#[command(about = "Selective note publishing for a static site", long_about = None)]
pub struct Args {
    /// Output absolute paths of public notes (for piping to ln -s)
    #[arg(long)]
    pub list_public_posts: bool,

    /// Output forward (asset) links of a specific note file
    #[arg(long, value_name = "FILE")]
    pub get_forward_links: Option<PathBuf>,

    /// Output all assets referenced by public notes (whitelist)
    #[arg(long)]
    pub list_public_assets: bool,

    /// Create symlinks for public assets in the assets target directory
    #[arg(long)]
    pub link_public_assets: bool,

    /// Create symlinks for #now posts in the now target directory
    #[arg(long)]
    pub link_now_posts: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, env = "NOTEPUB_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Notes directory to scan
    #[arg(long, env = "NOTEPUB_NOTES_DIR", value_name = "DIR")]
    pub notes_dir: Option<PathBuf>,

    /// Directory receiving public asset links
    #[arg(long, env = "NOTEPUB_ASSETS_TARGET", value_name = "DIR")]
    pub assets_target: Option<PathBuf>,

    /// Directory receiving #now post links
    #[arg(long, env = "NOTEPUB_NOW_TARGET", value_name = "DIR")]
    pub now_target: Option<PathBuf>,
}

/// The single action an invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Scan and summarize public notes.
    Scan,
    /// Print absolute paths of public notes.
    ListPublicPosts,
    /// Print asset links of one note.
    GetForwardLinks(PathBuf),
    /// Print the asset whitelist.
    ListPublicAssets,
    /// Link public assets.
    LinkPublicAssets,
    /// Link now posts.
    LinkNowPosts,
}

impl Args {
    /// Pick the action; when several flags are given the first one wins.
    pub fn action(&self) -> Action {
        if self.list_public_posts {
            Action::ListPublicPosts
        } else if let Some(file) = &self.get_forward_links {
            Action::GetForwardLinks(file.clone())
        } else if self.list_public_assets {
            Action::ListPublicAssets
        } else if self.link_public_assets {
            Action::LinkPublicAssets
        } else if self.link_now_posts {
            Action::LinkNowPosts
        } else {
            Action::Scan
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("notepub").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_flags_scans() {
        assert_eq!(parse(&[]).action(), Action::Scan);
        assert_eq!(parse(&["-v"]).action(), Action::Scan);
    }

    #[test]
    fn test_each_action() {
        assert_eq!(
            parse(&["--list-public-posts"]).action(),
            Action::ListPublicPosts
        );
        assert_eq!(
            parse(&["--get-forward-links", "a.md"]).action(),
            Action::GetForwardLinks(PathBuf::from("a.md"))
        );
        assert_eq!(
            parse(&["--list-public-assets"]).action(),
            Action::ListPublicAssets
        );
        assert_eq!(
            parse(&["--link-public-assets"]).action(),
            Action::LinkPublicAssets
        );
        assert_eq!(parse(&["--link-now-posts"]).action(), Action::LinkNowPosts);
    }

    #[test]
    fn test_first_matching_wins() {
        let args = parse(&["--link-now-posts", "--list-public-assets", "--list-public-posts"]);
        assert_eq!(args.action(), Action::ListPublicPosts);

        let args = parse(&["--link-public-assets", "--get-forward-links", "x.md"]);
        assert_eq!(args.action(), Action::GetForwardLinks(PathBuf::from("x.md")));
    }

    #[test]
    fn test_get_forward_links_requires_file() {
        assert!(Args::try_parse_from(["notepub", "--get-forward-links"]).is_err());
    }

    #[test]
    fn test_path_options() {
        let args = parse(&[
            "--notes-dir",
            "/notes",
            "--assets-target",
            "/site/a",
            "--now-target",
            "/site/n",
            "-c",
            "/etc/notepub.toml",
        ]);
        assert_eq!(args.notes_dir, Some(PathBuf::from("/notes")));
        assert_eq!(args.assets_target, Some(PathBuf::from("/site/a")));
        assert_eq!(args.now_target, Some(PathBuf::from("/site/n")));
        assert_eq!(args.config, Some(PathBuf::from("/etc/notepub.toml")));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
