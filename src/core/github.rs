//! GitHub REST API client for repository Actions secrets.
//!
//! Two endpoints are used:
//! - `GET  /repos/{owner}/{repo}/actions/secrets/public-key`
//! - `PUT  /repos/{owner}/{repo}/actions/secrets/{secret_name}`
//!
//! Requests are blocking and never retried.

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header;
use tracing::debug;

use crate::core::config::Settings;
use crate::core::constants;
use crate::core::domain::{EncryptedSecret, PublicKeyMaterial, Target};
use crate::core::token::AccessToken;
use crate::error::{ApiError, Result};

const PUBLIC_KEY_ENDPOINT: &str = "public-key";
const SECRET_ENDPOINT: &str = "secret";

/// Outcome of an upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// The secret did not exist (201).
    Created,
    /// An existing secret was overwritten (any other 2xx, normally 204).
    Updated,
}

/// Authenticated client for one API base URL.
pub struct GitHubClient {
    base_url: String,
    token: AccessToken,
    http: Client,
}

impl GitHubClient {
    /// Build a client from resolved settings.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the HTTP client cannot be built.
    pub fn new(settings: &Settings, token: AccessToken) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static(constants::ACCEPT),
        );
        headers.insert(
            constants::API_VERSION_HEADER,
            header::HeaderValue::from_static(constants::API_VERSION),
        );

        let http = Client::builder()
            .user_agent(constants::USER_AGENT)
            .default_headers(headers)
            .timeout(settings.timeout)
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self {
            base_url: settings.api_url.clone(),
            token,
            http,
        })
    }

    /// Fetch the repository's current secret-encryption public key.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` on a non-2xx response and
    /// `ApiError::InvalidResponse` if `key` or `key_id` is missing.
    pub fn public_key(&self, target: &Target) -> Result<PublicKeyMaterial> {
        let url = format!(
            "{}/repos/{}/{}/actions/secrets/public-key",
            self.base_url,
            target.owner(),
            target.repo()
        );
        debug!(%url, "fetching public key");

        let response = self.send(self.http.get(&url))?;
        let material: PublicKeyMaterial =
            response.json().map_err(|e| ApiError::InvalidResponse {
                endpoint: PUBLIC_KEY_ENDPOINT,
                reason: e.to_string(),
            })?;

        debug!(key_id = %material.key_id, "public key fetched");
        Ok(material)
    }

    /// Create or overwrite secret `name`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` on a non-2xx response.
    pub fn put_secret(
        &self,
        target: &Target,
        name: &str,
        secret: &EncryptedSecret,
    ) -> Result<Upsert> {
        let url = format!(
            "{}/repos/{}/{}/actions/secrets/{}",
            self.base_url,
            target.owner(),
            target.repo(),
            name
        );
        debug!(%url, key_id = %secret.key_id, "publishing secret");

        let response = self.send(self.http.put(&url).json(secret))?;
        let upsert = if response.status() == reqwest::StatusCode::CREATED {
            Upsert::Created
        } else {
            Upsert::Updated
        };

        debug!(endpoint = SECRET_ENDPOINT, ?upsert, "secret published");
        Ok(upsert)
    }

    /// Send an authenticated request, turning non-2xx into `ApiError::Status`.
    fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request
            .bearer_auth(self.token.expose())
            .send()
            .map_err(ApiError::Transport)?;

        let status = response.status();
        debug!(status = status.as_u16(), "response");

        if !status.is_success() {
            let body = response.text().unwrap_or_else(|e| {
                debug!(error = %e, "could not read error body");
                format!("<unreadable body: {}>", e)
            });
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        Ok(response)
    }
}
