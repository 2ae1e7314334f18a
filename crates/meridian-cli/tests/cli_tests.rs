use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn meridian_cmd() -> Command {
    let mut cmd = Command::cargo_bin("meridian").expect("Failed to find meridian binary");
    cmd.arg("--no-color");
    cmd
}

/// A base URL nothing listens on.
const UNREACHABLE: &str = "http://127.0.0.1:9/api";

#[test]
fn test_cli_help_lists_commands() {
    meridian_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("state"));
}

#[test]
fn test_cli_show_rejects_invalid_zone() {
    for zone in ["UTC", "Europe/", "../etc/passwd"] {
        meridian_cmd()
            .args(["--base-url", UNREACHABLE, "show", zone])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid argument for 'zone'"));
    }
}

#[test]
fn test_cli_rejects_bad_base_url() {
    meridian_cmd()
        .args(["--base-url", "ftp://example.com/api", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize explorer"));
}

#[test]
fn test_cli_list_unreachable_service() {
    meridian_cmd()
        .args(["--base-url", UNREACHABLE, "ls"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error: "))
        .stderr(predicate::str::contains("Failed to load the zone list"));
}

#[test]
fn test_cli_state_show_without_snapshot() {
    let temp_dir = create_cli_test_environment();
    let snapshot_path = temp_dir.path().join("state.json");

    meridian_cmd()
        .args([
            "--snapshot-file",
            snapshot_path.to_str().unwrap(),
            "state",
            "show",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No snapshot saved at"));
}

#[test]
fn test_cli_failed_list_is_saved_and_purged() {
    let temp_dir = create_cli_test_environment();
    let snapshot_path = temp_dir.path().join("nested").join("state.json");
    let snapshot_arg = snapshot_path.to_str().unwrap();

    meridian_cmd()
        .args([
            "--base-url",
            UNREACHABLE,
            "--snapshot",
            "--snapshot-file",
            snapshot_arg,
            "list",
        ])
        .assert()
        .failure();
    assert!(snapshot_path.exists());

    meridian_cmd()
        .args(["--snapshot-file", snapshot_arg, "state", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Snapshot"))
        .stdout(predicate::str::contains("**Zone list:** error"))
        .stdout(predicate::str::contains("**Zone detail:** idle"));

    meridian_cmd()
        .args(["--snapshot-file", snapshot_arg, "state", "purge"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Deleted snapshot"));
    assert!(!snapshot_path.exists());

    meridian_cmd()
        .args(["--snapshot-file", snapshot_arg, "state", "rm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No snapshot saved at"));
}

#[test]
fn test_cli_state_show_rejects_corrupt_snapshot() {
    let temp_dir = create_cli_test_environment();
    let snapshot_path = temp_dir.path().join("state.json");
    std::fs::write(&snapshot_path, "{ not json").unwrap();

    meridian_cmd()
        .args([
            "--snapshot-file",
            snapshot_path.to_str().unwrap(),
            "state",
            "show",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read the snapshot"));
}
