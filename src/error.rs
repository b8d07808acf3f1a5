//! Error types for ghseal.
//!
//! Every error is fatal: the binary prints it once and exits with status 1.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dependency(#[from] DependencyError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("{0}")]
    Other(String),
}

/// Missing or malformed required input.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no token provided")]
    NoToken,

    #[error("missing required setting: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[source] toml::de::Error),
}

/// A runtime capability the pipeline needs is not usable.
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("sealed-box encryption unavailable: {0}")]
    SealingUnavailable(String),
}

/// GitHub REST API failures.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response from {endpoint}: {reason}")]
    InvalidResponse {
        endpoint: &'static str,
        reason: String,
    },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Sealing and key handling failures.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),
}

/// Rejected user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("secret name cannot be empty")]
    EmptyName,

    #[error("invalid secret name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("secret value for {0} cannot be empty")]
    EmptyValue(String),

    #[error("invalid repository '{repo}': {reason}")]
    InvalidRepo { repo: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
