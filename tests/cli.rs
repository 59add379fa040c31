//! End-to-end checks of the datacheck binary: exit status, stdout and stderr.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const SHA1_EMPTY: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";

/// Data directory whose hash list records `empty.txt` as zero bytes
fn setup_data_dir(content: &[u8]) -> TempDir {
    let dir = TempDir::new().unwrap();
    let group = dir.path().join("group-01");
    std::fs::create_dir_all(&group).unwrap();
    std::fs::write(
        group.join("hash_list.txt"),
        format!("{} empty.txt\n", SHA1_EMPTY),
    )
    .unwrap();
    std::fs::write(dir.path().join("empty.txt"), content).unwrap();
    dir
}

fn datacheck() -> Command {
    let mut cmd = Command::cargo_bin("datacheck").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_success_is_silent() {
    let dir = setup_data_dir(b"");

    datacheck()
        .arg(dir.path())
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    let dir = setup_data_dir(b"");

    datacheck()
        .arg(dir.path())
        .arg("-vv")
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("empty.txt"));
}

#[test]
fn test_mismatch_exits_one() {
    let dir = setup_data_dir(b"a");

    datacheck()
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: Hash does not match"))
        .stderr(predicate::str::contains("empty.txt"))
        .stderr(predicate::str::contains("WARN").not());
}

#[test]
fn test_missing_argument_exits_one() {
    datacheck()
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with(
            "Error: Please give data directory on command line",
        ));
}

#[test]
fn test_missing_manifest_exits_one() {
    let dir = TempDir::new().unwrap();

    datacheck()
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: I/O error at"))
        .stderr(predicate::str::contains("hash_list.txt"));
}

#[test]
fn test_missing_data_directory_exits_one() {
    datacheck()
        .arg(Path::new("/nonexistent/datacheck/data"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: I/O error at"));
}
