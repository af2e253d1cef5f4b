//! Common fixtures for notepub integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// A notes directory and a site directory, both temporary.
///
/// The binary runs with the site directory as its working directory and an
/// isolated home so no user config file is picked up.
pub struct Workspace {
    /// Holds notes, site, and home directories.
    pub root: TempDir,
}

impl Workspace {
    /// Create an empty workspace with `notes/`, `site/`, and `home/`.
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        for dir in ["notes", "site", "home"] {
            std::fs::create_dir_all(root.path().join(dir)).unwrap();
        }
        Self { root }
    }

    /// The notes directory, canonicalized.
    pub fn notes(&self) -> PathBuf {
        std::fs::canonicalize(self.root.path().join("notes")).unwrap()
    }

    /// The site directory the binary runs in.
    pub fn site(&self) -> PathBuf {
        self.root.path().join("site")
    }

    /// Write a file relative to the notes directory.
    pub fn write_note(&self, name: &str, content: &str) -> PathBuf {
        let path = self.notes().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Run the binary with `args` plus `--notes-dir` pointing at the notes.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command()
            .arg("--notes-dir")
            .arg(self.notes())
            .args(args)
            .output()
            .unwrap()
    }

    /// A bare command with the isolated environment applied.
    pub fn command(&self) -> Command {
        let home = self.root.path().join("home");
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_notepub"));
        cmd.current_dir(self.site())
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env_remove("RUST_LOG")
            .env_remove("NOTEPUB_CONFIG")
            .env_remove("NOTEPUB_NOTES_DIR")
            .env_remove("NOTEPUB_ASSETS_TARGET")
            .env_remove("NOTEPUB_NOW_TARGET");
        cmd
    }
}

/// Stdout of a successful run, split into lines.
pub fn stdout_lines(output: &Output) -> Vec<String> {
    assert!(
        output.status.success(),
        "notepub failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

/// Target of the symlink at `path`.
pub fn link_target(path: &Path) -> PathBuf {
    std::fs::read_link(path).unwrap()
}
