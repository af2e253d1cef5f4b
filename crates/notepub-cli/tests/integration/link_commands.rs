//! Symlink materialization through the binary.

#![cfg(unix)]

use crate::common::{link_target, stdout_lines, Workspace};

#[test]
fn test_link_public_assets() {
    let ws = Workspace::new();
    ws.write_note(
        "post.md",
        "---\npublic: true\n---\n[x](assets/x.png)\n[d](assets/img/d.png)\n[gone](assets/gone.png)\n",
    );
    ws.write_note("private.md", "---\npublic: no\n---\n[s](assets/s.png)\n");
    let x = ws.write_note("assets/x.png", "x");
    let d = ws.write_note("assets/img/d.png", "d");
    ws.write_note("assets/s.png", "s");

    let output = ws.run(&["--link-public-assets"]);
    assert!(stdout_lines(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Successfully linked 2/3 assets"));

    let target = ws.site().join("docs/posts/assets");
    assert_eq!(link_target(&target.join("x.png")), x);
    assert_eq!(link_target(&target.join("img/d.png")), d);
    assert!(std::fs::symlink_metadata(target.join("gone.png")).is_err());
    assert!(std::fs::symlink_metadata(target.join("s.png")).is_err());
}

#[test]
fn test_link_public_assets_idempotent() {
    let ws = Workspace::new();
    ws.write_note("post.md", "---\npublic: true\n---\n[x](assets/x.png)\n");
    let x = ws.write_note("assets/x.png", "x");

    let first = ws.run(&["--link-public-assets"]);
    let second = ws.run(&["--link-public-assets"]);
    assert!(first.status.success());
    assert!(second.status.success());
    assert!(String::from_utf8_lossy(&second.stderr).contains("1/1"));

    let target = ws.site().join("docs/posts/assets/x.png");
    assert_eq!(link_target(&target), x);
    assert_eq!(std::fs::read_to_string(target).unwrap(), "x");
}

#[test]
fn test_link_public_assets_without_assets_dir() {
    let ws = Workspace::new();
    ws.write_note("post.md", "---\npublic: true\n---\n[x](assets/x.png)\n");

    let output = ws.run(&["--link-public-assets"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Source assets directory not found"));
    // The target root exists even though nothing was linked
    assert!(ws.site().join("docs/posts/assets").is_dir());
}

#[test]
fn test_link_now_posts() {
    let ws = Workspace::new();
    let undated = ws.write_note(
        "reflections.md",
        "---\ntags: now, writing\ndate: 2024-03-01\n---\nbody\n",
    );
    let dated = ws.write_note(
        "journal/2024-03-01-reflections.md",
        "---\ntags: now\n---\nbody\n",
    );
    ws.write_note("later.md", "---\ntags: later\ndate: 2024-01-01\n---\n");

    let output = ws.run(&["--link-now-posts"]);
    assert!(stdout_lines(&output).is_empty());

    let now = ws.site().join("docs/now");
    assert_eq!(link_target(&now.join("2024-03-01_reflections.md")), undated);
    assert_eq!(link_target(&now.join("2024-03-01-reflections.md")), dated);
    assert_eq!(std::fs::read_dir(&now).unwrap().count(), 2);
}

#[test]
fn test_link_now_posts_custom_target() {
    let ws = Workspace::new();
    let post = ws.write_note("status.md", "---\ntags: NOW\n---\n");

    let output = ws.run(&["--link-now-posts", "--now-target", "public/now"]);
    assert!(output.status.success());
    assert_eq!(link_target(&ws.site().join("public/now/status.md")), post);
}
