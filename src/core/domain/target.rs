//! Repository coordinates.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result, ValidationError};

/// A repository addressed as `owner/repo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    owner: String,
    repo: String,
}

impl Target {
    /// Create a target, validating both parts.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidRepo` if either part is empty or
    /// contains characters GitHub does not allow in owner/repository names.
    pub fn new(owner: &str, repo: &str) -> Result<Self> {
        let slug = format!("{}/{}", owner, repo);
        for (part, label) in [(owner, "owner"), (repo, "repository name")] {
            if part.is_empty() {
                return Err(invalid(&slug, format!("{} is empty", label)));
            }
            if let Some(ch) = part
                .chars()
                .find(|c| !c.is_ascii_alphanumeric() && !matches!(c, '-' | '_' | '.'))
            {
                return Err(invalid(&slug, format!("invalid character '{}' in {}", ch, label)));
            }
        }
        if repo == "." || repo == ".." {
            return Err(invalid(&slug, "repository name is reserved".to_string()));
        }

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// Repository owner (user or organization).
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Web UI page for managing Actions secrets by hand.
    pub fn secrets_settings_url(&self) -> String {
        format!(
            "https://github.com/{}/{}/settings/secrets/actions",
            self.owner, self.repo
        )
    }

    /// Web UI page for deployment environments.
    pub fn environments_settings_url(&self) -> String {
        format!("https://github.com/{}/{}/settings/environments", self.owner, self.repo)
    }
}

fn invalid(slug: &str, reason: String) -> Error {
    ValidationError::InvalidRepo {
        repo: slug.to_string(),
        reason,
    }
    .into()
}

impl FromStr for Target {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.split_once('/') {
            Some((owner, repo)) if !repo.contains('/') => Self::new(owner, repo),
            Some(_) => Err(invalid(s, "expected OWNER/REPO, found extra '/'".to_string())),
            None => Err(invalid(s, "expected OWNER/REPO".to_string())),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
