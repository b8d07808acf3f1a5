//! Public key command.
//!
//! Fetches and prints the key GitHub uses to seal secrets for a repository.

use crate::cli::{output, prompt};
use crate::core::config::{Config, Overrides};
use crate::core::constants::TOKEN_ENV;
use crate::core::github::GitHubClient;
use crate::core::token::TokenSource;
use crate::error::{Error, Result};

/// Show the repository public key.
pub fn execute(overrides: Overrides, json: bool) -> Result<()> {
    let settings = Config::load()?.apply(overrides).settings()?;

    let token = TokenSource::detect(TOKEN_ENV).resolve(&mut prompt::TerminalPrompt)?;
    let client = GitHubClient::new(&settings, token)?;
    let material = client.public_key(&settings.target)?;

    if json {
        let rendered =
            serde_json::to_string_pretty(&material).map_err(|e| Error::Other(e.to_string()))?;
        output::data(&rendered);
        return Ok(());
    }

    output::section(&format!("Public key for {}", settings.target));
    output::kv("key_id", &material.key_id);
    output::kv("key   ", &material.key);

    Ok(())
}
