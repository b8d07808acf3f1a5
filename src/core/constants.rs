//! Constants used throughout ghseal.
//!
//! Centralizes magic strings and configuration values.

/// Configuration file name (.ghseal.toml).
pub const CONFIG_FILE: &str = ".ghseal.toml";

/// Environment variable holding the GitHub access token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "GHSEAL_LOG";

/// Default GitHub REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Media type requested from the REST API.
pub const ACCEPT: &str = "application/vnd.github+json";

/// Header pinning the REST API version (lowercase, as `HeaderName` requires).
pub const API_VERSION_HEADER: &str = "x-github-api-version";

/// REST API version sent with every request.
pub const API_VERSION: &str = "2022-11-28";

/// User agent (GitHub rejects requests without one).
pub const USER_AGENT: &str = concat!("ghseal/", env!("CARGO_PKG_VERSION"));

/// Page for creating a personal access token.
pub const TOKEN_SETTINGS_URL: &str = "https://github.com/settings/tokens/new";

/// Prefix reserved by GitHub for its own secrets.
pub const RESERVED_PREFIX: &str = "GITHUB_";
