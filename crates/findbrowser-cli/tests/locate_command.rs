use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_findbrowser_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("findbrowser")
}

#[test]
fn test_help_describes_the_lookup() {
    let mut cmd = Command::new(get_findbrowser_bin());
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Locate installed browser executables on Windows",
        ))
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::new(get_findbrowser_bin());
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("findbrowser"));
}

#[test]
fn test_rejects_unknown_arguments() {
    // No positional arguments or configuration options are supported.
    let mut cmd = Command::new(get_findbrowser_bin());
    cmd.arg("chrome");

    cmd.assert().failure();
}

#[cfg(not(windows))]
#[test]
fn test_fails_cleanly_off_windows() {
    let mut cmd = Command::new(get_findbrowser_bin());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("only supports Windows"));
}

#[cfg(windows)]
#[test]
fn test_prints_one_line_per_browser() {
    // Live lookup; whatever is installed, the output contract is two lines,
    // Edge first, each either a path or the not-found marker.
    let mut cmd = Command::new(get_findbrowser_bin());

    let assert = cmd.assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert_eq!(stdout.lines().count(), 2);
    for line in stdout.lines() {
        assert!(line == "not found" || line.ends_with(".exe"));
    }
}

#[cfg(windows)]
#[test]
fn test_json_output_has_fixed_keys() {
    let mut cmd = Command::new(get_findbrowser_bin());
    cmd.arg("--json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"chrome\""))
        .stdout(predicate::str::contains("\"msedge\""));
}
