//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::str::contains;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("ghseal") || out.contains("Usage"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("ghseal"));
}

#[test]
fn test_missing_repo() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("GITHUB_TOKEN", TOKEN)
        .args(["set", "API_KEY", "--value", "v"])
        .output()
        .unwrap();
    assert_exit_one(&output);
    assert_stderr_contains(&output, "missing required setting: repo");
    assert_stdout_contains(&output, "--repo OWNER/REPO");
}

#[test]
fn test_missing_secret_name() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("GITHUB_TOKEN", TOKEN)
        .args(["set", "--repo", REPO, "--value", "v"])
        .output()
        .unwrap();
    assert_exit_one(&output);
    assert_stderr_contains(&output, "secret name");
}

#[test]
fn test_malformed_repo() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("GITHUB_TOKEN", TOKEN)
        .args(["set", "API_KEY", "--value", "v", "--repo", "no-slash"])
        .output()
        .unwrap();
    assert_exit_one(&output);
    assert_stderr_contains(&output, "expected OWNER/REPO");
}

#[test]
fn test_broken_config_file() {
    let t = Test::with_config("repo = [\n");

    let output = t
        .cmd()
        .env("GITHUB_TOKEN", TOKEN)
        .args(["set", "API_KEY", "--value", "v"])
        .output()
        .unwrap();
    assert_exit_one(&output);
    assert_stderr_contains(&output, "failed to parse config file");
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_ghseal") || out.contains("complete"));
}

#[test]
fn test_completions_invalid_shell() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(contains("invalid value"));
}
