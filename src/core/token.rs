//! Access token resolution.
//!
//! The token comes from `GITHUB_TOKEN` when set, otherwise from an
//! interactive prompt. The choice is made once, up front.

use std::fmt;

use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{ConfigError, Result};

/// A GitHub access token. Wiped on drop, never printed.
#[derive(Clone)]
pub struct AccessToken(Zeroizing<String>);

impl AccessToken {
    /// Wrap a raw token, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoToken` if nothing is left after trimming.
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::NoToken.into());
        }
        Ok(Self(Zeroizing::new(trimmed.to_string())))
    }

    /// The raw token, for the `Authorization` header only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Interactive fallback used when the environment has no token.
pub trait TokenPrompt {
    /// Show setup guidance and read one line of input.
    fn ask(&mut self) -> Result<String>;
}

/// Where the token will come from.
#[derive(Debug)]
pub enum TokenSource {
    /// Present in the environment.
    FromEnvironment(AccessToken),
    /// Must be asked for.
    FromInteractivePrompt,
}

impl TokenSource {
    /// Select the source by inspecting environment variable `var`.
    ///
    /// An unset or blank variable selects the interactive prompt.
    pub fn detect(var: &str) -> Self {
        Self::from_value(std::env::var(var).ok())
    }

    /// Select the source from an already-read environment value.
    pub fn from_value(value: Option<String>) -> Self {
        match value.as_deref().map(AccessToken::new) {
            Some(Ok(token)) => Self::FromEnvironment(token),
            _ => Self::FromInteractivePrompt,
        }
    }

    /// Produce the token, prompting if needed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoToken` if the prompt yields an empty value,
    /// or the prompt's own error if reading input fails.
    pub fn resolve<P: TokenPrompt>(self, prompt: &mut P) -> Result<AccessToken> {
        match self {
            Self::FromEnvironment(token) => {
                debug!("using token from environment");
                Ok(token)
            }
            Self::FromInteractivePrompt => {
                debug!("prompting for token");
                let input = Zeroizing::new(prompt.ask()?);
                AccessToken::new(&input)
            }
        }
    }
}
