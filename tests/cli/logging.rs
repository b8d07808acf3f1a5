//! Logging and verbosity tests.

use crate::support::*;
use mockito::Server;

#[test]
fn test_default_no_debug_output() {
    let t = Test::new();
    let mut server = Server::new();
    let (_secret, key) = repo_keypair();
    let _fetch = mock_public_key(&mut server, &key);

    let output = t.public_key(&server.url(), false);
    assert_success(&output);

    let err = stderr(&output);
    assert!(
        !err.contains("DEBUG") && !err.contains("TRACE"),
        "default mode should not show debug/trace output: {}",
        err
    );
}

#[test]
fn test_verbose_flag_shows_debug_output() {
    let t = Test::new();
    let mut server = Server::new();
    let (_secret, key) = repo_keypair();
    let _fetch = mock_public_key(&mut server, &key);

    let output = t
        .cmd()
        .env("GITHUB_TOKEN", TOKEN)
        .args(["--verbose", "public-key", "--repo", REPO, "--api-url", server.url().as_str()])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "DEBUG");
    assert_stderr_contains(&output, "fetching public key");
    assert_output_excludes(&output, &format!("Bearer {}", TOKEN));
}

#[test]
fn test_log_env_var() {
    let t = Test::new();
    let mut server = Server::new();
    let (_secret, key) = repo_keypair();
    let _fetch = mock_public_key(&mut server, &key);

    let output = t
        .cmd()
        .env("GITHUB_TOKEN", TOKEN)
        .env("GHSEAL_LOG", "ghseal=debug")
        .args(["public-key", "--repo", REPO, "--api-url", server.url().as_str()])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "public key fetched");
}
