//! Output of the listing actions.

use crate::common::{stdout_lines, Workspace};

fn scenario() -> Workspace {
    let ws = Workspace::new();
    ws.write_note("a.md", "---\npublic: true\n---\n\n[x](assets/x.png)\n");
    ws.write_note("b.md", "---\ntitle: private\n---\n\n[y](assets/y.png)\n");
    ws
}

#[test]
fn test_list_public_posts_only_public() {
    let ws = scenario();
    let lines = stdout_lines(&ws.run(&["--list-public-posts"]));
    assert_eq!(lines, vec![ws.notes().join("a.md").display().to_string()]);
}

#[test]
fn test_list_public_assets_whitelist() {
    let ws = scenario();
    let lines = stdout_lines(&ws.run(&["--list-public-assets"]));
    assert_eq!(lines, vec!["assets/x.png"]);
}

#[test]
fn test_list_public_assets_sorted_and_deduplicated() {
    let ws = Workspace::new();
    ws.write_note(
        "one.md",
        "---\npublic: true\n---\n[a](assets/a.png)\n[a again](assets/a.png)\n",
    );
    ws.write_note("deep/two.md", "---\npublic: true\n---\n[b](assets/b.png)\n");

    let first = stdout_lines(&ws.run(&["--list-public-assets"]));
    let second = stdout_lines(&ws.run(&["--list-public-assets"]));
    assert_eq!(first, vec!["assets/a.png", "assets/b.png"]);
    assert_eq!(first, second);
}

#[test]
fn test_get_forward_links() {
    let ws = scenario();
    let note = ws.write_note(
        "links.md",
        "---\ntitle: l\n---\n[img](assets/a.png) and [site](https://example.com)\n[img](assets/a.png)\n",
    );
    let lines = stdout_lines(&ws.run(&["--get-forward-links", note.to_str().unwrap()]));
    assert_eq!(lines, vec!["assets/a.png", "assets/a.png"]);
}

#[test]
fn test_get_forward_links_missing_file() {
    let ws = scenario();
    let output = ws.run(&["--get-forward-links", "does-not-exist.md"]);
    assert!(stdout_lines(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does-not-exist.md"));
}

#[test]
fn test_scan_writes_only_diagnostics() {
    let ws = scenario();
    let output = ws.run(&[]);
    assert!(stdout_lines(&output).is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Found 1 public notes"));
}

#[test]
fn test_verbose_lists_notes_on_stderr() {
    let ws = scenario();
    let output = ws.run(&["-v"]);
    assert!(stdout_lines(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("a.md"));
}

#[test]
fn test_missing_notes_dir_is_not_fatal() {
    let ws = Workspace::new();
    let output = ws
        .command()
        .args(["--notes-dir", "nowhere", "--list-public-assets"])
        .output()
        .unwrap();
    assert!(stdout_lines(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Notes directory not found"));
}

#[test]
fn test_config_file_sets_notes_dir() {
    let ws = scenario();
    let config = ws.root.path().join("notepub.toml");
    std::fs::write(
        &config,
        format!("[paths]\nnotes_dir = \"{}\"\n", ws.notes().display()),
    )
    .unwrap();

    let output = ws
        .command()
        .arg("--config")
        .arg(&config)
        .arg("--list-public-assets")
        .output()
        .unwrap();
    assert_eq!(stdout_lines(&output), vec!["assets/x.png"]);
}

#[cfg(target_os = "linux")]
#[test]
fn test_default_config_file_is_read() {
    let ws = scenario();
    let config_dir = ws.root.path().join("home/.config/notepub");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        format!("[paths]\nnotes_dir = \"{}\"\n", ws.notes().display()),
    )
    .unwrap();

    let output = ws.command().arg("--list-public-posts").output().unwrap();
    assert_eq!(
        stdout_lines(&output),
        vec![ws.notes().join("a.md").display().to_string()]
    );
}

#[test]
fn test_missing_explicit_config_fails() {
    let ws = scenario();
    let output = ws
        .command()
        .args(["--config", "absent.toml", "--list-public-posts"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
