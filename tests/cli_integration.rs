//! CLI Integration Tests
//!
//! These tests verify that the CLI commands work correctly end-to-end.
//! They test the actual binary behavior, not just the library.
//!
//! Run with:
//! ```bash
//! cargo test --test cli_integration
//! ```

use std::fs;
use std::process::Command;
use tempfile::tempdir;

// b"hello world"
const HELLO_B64: &str = "aGVsbG8gd29ybGQ=";

/// Run imgvault against `root` and return (stdout, stderr, success)
fn run_imgvault(args: &[&str], root: &str) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_imgvault"))
        .args(["-r", root, "-f", "json"])
        .args(args)
        .output()
        .expect("Failed to execute imgvault");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

// ============================================================================
// Store Tests
// ============================================================================

#[test]
fn test_cli_store_file_copies_into_root() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("uploads");
    let source = dir.path().join("photo.png");
    fs::write(&source, b"not really a png").unwrap();

    let (stdout, _stderr, success) = run_imgvault(
        &["store", source.to_str().unwrap(), "--id", "avatar"],
        root.to_str().unwrap(),
    );

    assert!(success, "store should succeed");
    assert!(stdout.contains("\"status\":\"ok\""), "should return ok status");
    assert!(
        stdout.contains("\"url\":\"/uploads/avatar.png\""),
        "url should preserve the source extension, got: {}",
        stdout
    );
    assert_eq!(
        fs::read(root.join("avatar.png")).unwrap(),
        b"not really a png"
    );
}

#[test]
fn test_cli_store_inline_payload_writes_jpg() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("uploads");
    let payload = format!("data:image/png;base64,{HELLO_B64}");

    let (stdout, _stderr, success) =
        run_imgvault(&["store", &payload, "--id", "inline"], root.to_str().unwrap());

    assert!(success, "store should succeed");
    assert!(
        stdout.contains("\"url\":\"/uploads/inline.jpg\""),
        "inline payloads always store as .jpg, got: {}",
        stdout
    );
    assert_eq!(fs::read(root.join("inline.jpg")).unwrap(), b"hello world");
}

#[test]
fn test_cli_store_derives_id_when_omitted() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("uploads");
    let payload = format!("data:image/png;base64,{HELLO_B64}");

    let (stdout, _stderr, success) = run_imgvault(&["store", &payload], root.to_str().unwrap());

    assert!(success, "store should succeed");
    assert!(
        stdout.contains("\"id\":\"image_"),
        "derived ids are time-based, got: {}",
        stdout
    );
}

#[test]
fn test_cli_store_malformed_payload_fails() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("uploads");

    let (_stdout, stderr, success) = run_imgvault(
        &["store", "data:image/png;notbase64,xyz"],
        root.to_str().unwrap(),
    );

    assert!(!success, "malformed payload should fail");
    assert!(
        stderr.contains("invalid inline image encoding"),
        "error should name the encoding failure, got: {}",
        stderr
    );
    // Nothing was written
    assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
}

// ============================================================================
// Remove Tests
// ============================================================================

#[test]
fn test_cli_rm_deletes_stored_blob() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("uploads");
    let payload = format!("data:image/png;base64,{HELLO_B64}");

    run_imgvault(&["store", &payload, "--id", "gone"], root.to_str().unwrap());
    assert!(root.join("gone.jpg").exists());

    let (stdout, _stderr, success) = run_imgvault(&["rm", "gone"], root.to_str().unwrap());

    assert!(success, "rm should succeed");
    assert!(stdout.contains("\"result\":\"ok\""), "should return ok result");
    assert!(!root.join("gone.jpg").exists());
}

#[test]
fn test_cli_rm_missing_id_is_ok() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("uploads");

    let (stdout, _stderr, success) = run_imgvault(&["rm", "nonexistent"], root.to_str().unwrap());

    assert!(success, "rm of a missing id should still succeed");
    assert!(stdout.contains("\"result\":\"ok\""), "should return ok result");
}

#[test]
fn test_cli_rm_exact_skips_prefix_collisions() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("uploads");
    let payload = format!("data:image/png;base64,{HELLO_B64}");

    run_imgvault(&["store", &payload, "--id", "user1"], root.to_str().unwrap());
    run_imgvault(
        &["store", &payload, "--id", "user10"],
        root.to_str().unwrap(),
    );

    let (_stdout, _stderr, success) =
        run_imgvault(&["rm", "user1", "--exact"], root.to_str().unwrap());

    assert!(success, "rm --exact should succeed");
    assert!(!root.join("user1.jpg").exists(), "exact target deleted");
    assert!(root.join("user10.jpg").exists(), "longer id untouched");
}

// ============================================================================
// Listing Tests
// ============================================================================

#[test]
fn test_cli_ls_lists_stored_files() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("uploads");
    let payload = format!("data:image/png;base64,{HELLO_B64}");

    run_imgvault(&["store", &payload, "--id", "one"], root.to_str().unwrap());
    run_imgvault(&["store", &payload, "--id", "two"], root.to_str().unwrap());

    let (stdout, _stderr, success) = run_imgvault(&["ls"], root.to_str().unwrap());

    assert!(success, "ls should succeed");
    assert!(stdout.contains("\"count\":2"), "should count both blobs");
    assert!(stdout.contains("one.jpg"), "should list one.jpg");
    assert!(stdout.contains("two.jpg"), "should list two.jpg");
}

#[test]
fn test_cli_status_reports_root_and_count() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("uploads");

    let (stdout, _stderr, success) = run_imgvault(&["status"], root.to_str().unwrap());

    assert!(success, "status should succeed");
    assert!(stdout.contains("\"blobs\":0"), "fresh root holds no blobs");
    assert!(root.exists(), "status bootstraps the root directory");
}
