//! Tests for `ghseal public-key`.

use crate::support::*;
use mockito::Server;

#[test]
fn test_public_key_plain() {
    let t = Test::new();
    let mut server = Server::new();
    let (_secret, key) = repo_keypair();
    let fetch = mock_public_key(&mut server, &key);

    let output = t.public_key(&server.url(), false);
    assert_success(&output);
    assert_stdout_contains(&output, KEY_ID);
    assert_stdout_contains(&output, &key);

    fetch.assert();
}

#[test]
fn test_public_key_json() {
    let t = Test::new();
    let mut server = Server::new();
    let (_secret, key) = repo_keypair();
    let _fetch = mock_public_key(&mut server, &key);

    let output = t.public_key(&server.url(), true);
    assert_success(&output);

    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(parsed["key_id"], KEY_ID);
    assert_eq!(parsed["key"], key.as_str());
}

#[test]
fn test_public_key_unauthorized() {
    let t = Test::new();
    let mut server = Server::new();
    let _fetch = server
        .mock("GET", PUBLIC_KEY_PATH)
        .with_status(401)
        .with_body(r#"{"message":"Bad credentials"}"#)
        .create();

    let output = t.public_key(&server.url(), false);
    assert_exit_one(&output);
    assert_stderr_contains(&output, "HTTP 401");
    assert_stdout_contains(&output, "check that the token is valid");
}
