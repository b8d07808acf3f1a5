//! Configuration management.
//!
//! Settings are layered: command-line flags (and their environment
//! variables) override `.ghseal.toml`, which overrides built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::core::domain::Target;
use crate::core::types::SecretName;
use crate::error::{ConfigError, Result};

/// Contents of `.ghseal.toml`. Every field is optional.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Target repository as `OWNER/REPO`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    /// REST API base URL (GitHub Enterprise Server or a test double)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Per-request timeout; absent means requests may block indefinitely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// The secret to publish
    #[serde(default)]
    pub secret: SecretConfig,
}

/// `[secret]` section. The value is wiped on drop.
#[derive(Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecretConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<SecretName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Zeroizing<String>>,
}

impl std::fmt::Debug for SecretConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretConfig")
            .field("name", &self.name)
            .field("value", &self.value.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Values supplied on the command line.
#[derive(Debug, Default)]
pub struct Overrides {
    pub repo: Option<String>,
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub secret_name: Option<SecretName>,
    pub secret_value: Option<String>,
}

/// Resolved connection settings passed into the pipeline.
#[derive(Debug, Clone)]
pub struct Settings {
    pub target: Target,
    pub api_url: String,
    pub timeout: Option<Duration>,
}

impl Config {
    /// Path to the configuration file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load `.ghseal.toml` from the current directory, or an empty config
    /// if there is none.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse` if the file
    /// exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            debug!(path = %path.display(), "no config file");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        debug!(
            repo = config.repo.as_deref().unwrap_or("-"),
            secret = config.secret.name.as_deref().unwrap_or("-"),
            "config loaded"
        );

        Ok(config)
    }

    /// Apply command-line values on top of the file.
    pub fn apply(mut self, overrides: Overrides) -> Self {
        if overrides.repo.is_some() {
            self.repo = overrides.repo;
        }
        if overrides.api_url.is_some() {
            self.api_url = overrides.api_url;
        }
        if overrides.timeout_secs.is_some() {
            self.timeout_secs = overrides.timeout_secs;
        }
        if overrides.secret_name.is_some() {
            self.secret.name = overrides.secret_name;
        }
        if let Some(value) = overrides.secret_value {
            self.secret.value = Some(Zeroizing::new(value));
        }
        self
    }

    /// Resolve connection settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` when no repository is configured,
    /// `ConfigError::InvalidValue` for a bad URL or zero timeout, and
    /// `ValidationError::InvalidRepo` for a malformed `OWNER/REPO`.
    pub fn settings(&self) -> Result<Settings> {
        let repo = self
            .repo
            .as_deref()
            .ok_or(ConfigError::MissingField { field: "repo" })?;
        let target: Target = repo.parse()?;

        let api_url = self
            .api_url
            .as_deref()
            .unwrap_or(constants::DEFAULT_API_URL)
            .trim()
            .trim_end_matches('/')
            .to_string();
        if !api_url.starts_with("https://") && !api_url.starts_with("http://") {
            return Err(ConfigError::InvalidValue {
                field: "api_url",
                reason: format!("expected an http(s) URL, got '{}'", api_url),
            }
            .into());
        }

        let timeout = match self.timeout_secs {
            Some(0) => {
                return Err(ConfigError::InvalidValue {
                    field: "timeout_secs",
                    reason: "must be greater than zero".to_string(),
                }
                .into())
            }
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        Ok(Settings {
            target,
            api_url,
            timeout,
        })
    }

    /// Name of the secret to publish.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` if no name is configured.
    pub fn secret_name(&self) -> Result<&str> {
        self.secret
            .name
            .as_deref()
            .ok_or_else(|| ConfigError::MissingField { field: "secret name" }.into())
    }

    /// Take the configured plaintext value, if any.
    pub fn take_secret_value(&mut self) -> Option<Zeroizing<String>> {
        self.secret.value.take()
    }
}
