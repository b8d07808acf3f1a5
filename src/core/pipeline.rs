//! The publish pipeline.
//!
//! ```text
//! Start → TokenResolved → KeyFetched → Sealed → Published → Done
//! ```
//!
//! Any failing step returns its error immediately; nothing is retried and
//! later steps never run.

use std::fmt;

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::core::cipher;
use crate::core::config::Settings;
use crate::core::domain::{EncryptedSecret, PublicKeyMaterial, SecretRecord, Target};
use crate::core::github::{GitHubClient, Upsert};
use crate::core::token::{AccessToken, TokenPrompt, TokenSource};
use crate::error::Result;

/// Remote operations the pipeline needs.
pub trait SecretsApi {
    /// Fetch the repository public key.
    fn public_key(&self, target: &Target) -> Result<PublicKeyMaterial>;

    /// Create or overwrite a secret.
    fn put_secret(&self, target: &Target, name: &str, secret: &EncryptedSecret)
        -> Result<Upsert>;
}

impl SecretsApi for GitHubClient {
    fn public_key(&self, target: &Target) -> Result<PublicKeyMaterial> {
        GitHubClient::public_key(self, target)
    }

    fn put_secret(
        &self,
        target: &Target,
        name: &str,
        secret: &EncryptedSecret,
    ) -> Result<Upsert> {
        GitHubClient::put_secret(self, target, name, secret)
    }
}

/// Pipeline progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    TokenResolved,
    KeyFetched,
    Sealed,
    Published,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::TokenResolved => "token-resolved",
            Self::KeyFetched => "key-fetched",
            Self::Sealed => "sealed",
            Self::Published => "published",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub target: Target,
    pub name: String,
    pub key_id: String,
    pub upsert: Upsert,
}

struct Progress<F: FnMut(Stage)> {
    stage: Stage,
    observer: F,
}

impl<F: FnMut(Stage)> Progress<F> {
    fn advance(&mut self, next: Stage) {
        debug!(from = %self.stage, to = %next, "stage");
        self.stage = next;
        (self.observer)(next);
    }
}

/// Resolve the token, read the value, fetch the key, seal, and publish.
///
/// `value` is only called once the token has resolved, so an interactive
/// run asks for the token first. `connect` builds the API client after
/// that, so a missing token or empty value fails before any client
/// exists. `observer` is called on every stage transition.
pub fn publish<P, V, A, C, F>(
    settings: &Settings,
    name: &str,
    source: TokenSource,
    prompt: &mut P,
    value: V,
    connect: C,
    observer: F,
) -> Result<Report>
where
    P: TokenPrompt,
    V: FnOnce() -> Result<Zeroizing<String>>,
    A: SecretsApi,
    C: FnOnce(&Settings, AccessToken) -> Result<A>,
    F: FnMut(Stage),
{
    let mut progress = Progress {
        stage: Stage::Start,
        observer,
    };
    let target = &settings.target;

    let token = source.resolve(prompt)?;
    let record = SecretRecord::new(name, value()?)?;
    let api = connect(settings, token)?;
    progress.advance(Stage::TokenResolved);

    let material = api.public_key(target)?;
    progress.advance(Stage::KeyFetched);

    let sealed = EncryptedSecret {
        encrypted_value: cipher::seal(&material.key, record.value())?,
        key_id: material.key_id,
    };
    progress.advance(Stage::Sealed);

    let upsert = api.put_secret(target, record.name(), &sealed)?;
    progress.advance(Stage::Published);

    info!(repo = %target, secret = record.name(), ?upsert, "secret published");
    progress.advance(Stage::Done);

    Ok(Report {
        target: target.clone(),
        name: record.name().to_string(),
        key_id: sealed.key_id,
        upsert,
    })
}
