//! Test fixtures and mock API helpers.

use crypto_box::aead::OsRng;
use crypto_box::SecretKey;
use ghseal::core::cipher::encode_public_key;
use mockito::{Matcher, Mock, ServerGuard};

/// Token used by tests that set GITHUB_TOKEN.
pub const TOKEN: &str = "tok_abc";

/// Repository all mocks are registered for.
pub const REPO: &str = "octo/hello";

/// Key id returned by the mock public-key endpoint.
pub const KEY_ID: &str = "1234";

pub const PUBLIC_KEY_PATH: &str = "/repos/octo/hello/actions/secrets/public-key";

/// Path of the upsert endpoint for `name`.
pub fn secret_path(name: &str) -> String {
    format!("/repos/octo/hello/actions/secrets/{}", name)
}

/// A fresh repository key pair; the secret half plays GitHub's role.
pub fn repo_keypair() -> (SecretKey, String) {
    let secret = SecretKey::generate(&mut OsRng);
    let encoded = encode_public_key(&secret.public_key());
    (secret, encoded)
}

/// Mock a successful public-key response, expected exactly once.
pub fn mock_public_key(server: &mut ServerGuard, encoded_key: &str) -> Mock {
    server
        .mock("GET", PUBLIC_KEY_PATH)
        .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
        .match_header("x-github-api-version", "2022-11-28")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(r#"{{"key_id":"{}","key":"{}"}}"#, KEY_ID, encoded_key))
        .expect(1)
        .create()
}

/// Mock the upsert endpoint for `name` with `status`, expected `hits` times.
pub fn mock_put_secret(server: &mut ServerGuard, name: &str, status: usize, hits: usize) -> Mock {
    server
        .mock("PUT", secret_path(name).as_str())
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(serde_json::json!({ "key_id": KEY_ID })),
            Matcher::Regex(r#""encrypted_value":"[A-Za-z0-9+/]+=*""#.to_string()),
        ]))
        .with_status(status)
        .expect(hits)
        .create()
}

/// Mock every endpoint the CLI could call and expect none of them to be hit.
pub fn forbid_any_call(server: &mut ServerGuard) -> Vec<Mock> {
    ["GET", "PUT"]
        .into_iter()
        .map(|method| {
            server
                .mock(method, Matcher::Any)
                .with_status(500)
                .expect(0)
                .create()
        })
        .collect()
}

/// Assert every mock in `mocks` was hit as expected.
pub fn assert_all(mocks: &[Mock]) {
    for mock in mocks {
        mock.assert();
    }
}
