//! No-IP update requests.

use crate::error::Result;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://dynupdate.no-ip.com";

/// No-IP account credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Create credentials from already-resolved values.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Create credentials from raw CLI values, resolving `$VAR` references
    /// against the environment so passwords can stay out of shell history.
    pub fn from_args(username: &str, password: &str) -> Self {
        Self::new(resolve_env(username), resolve_env(password))
    }

    /// Compute the HTTP Basic `Authorization` header value for these
    /// credentials: `Basic <base64("username:password")>`.
    pub fn basic_auth_value(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", BASE64.encode(raw.as_bytes()))
    }
}

/// Resolve environment variable references (values starting with $).
fn resolve_env(value: &str) -> String {
    if let Some(var_name) = value.strip_prefix('$') {
        std::env::var(var_name).unwrap_or_else(|_| {
            tracing::warn!("Environment variable {} not set", var_name);
            value.to_string()
        })
    } else {
        value.to_string()
    }
}

/// Classification of the provider's response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeKind {
    /// The record now points at the submitted IP (`good`).
    Updated,
    /// The record already pointed at the submitted IP (`nochg`).
    Unchanged,
    /// The body matched no known status code.
    Unrecognized,
}

impl OutcomeKind {
    /// Classify a response body by its status-code prefix.
    ///
    /// No-IP appends diagnostics after the code (`good 203.0.113.7`), so
    /// matching is on the prefix only, never full equality.
    pub fn classify(body: &str) -> Self {
        if body.starts_with("good") {
            OutcomeKind::Updated
        } else if body.starts_with("nochg") {
            OutcomeKind::Unchanged
        } else {
            OutcomeKind::Unrecognized
        }
    }
}

/// Result of one update request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOutcome {
    /// How the response body was classified.
    pub kind: OutcomeKind,
    /// HTTP status returned by the update endpoint.
    pub status: u16,
    /// Response body, verbatim.
    pub body: String,
    /// Timestamp of the update.
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Client for the No-IP dynamic update endpoint.
pub struct UpdateClient {
    client: reqwest::Client,
    base_url: String,
}

impl UpdateClient {
    /// Create a client against the live update endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Create with custom base URL (for testing).
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Build the update URL for a hostname/IP pair.
    ///
    /// Values are interpolated as-is, with no percent-encoding; see the
    /// crate-level docs for the reserved-character limitation.
    pub fn update_url(&self, hostname: &str, ip: &str) -> String {
        format!(
            "{}/nic/update?hostname={}&myip={}",
            self.base_url, hostname, ip
        )
    }

    /// Submit one update request and classify the response.
    ///
    /// The body is classified regardless of HTTP status; No-IP reports
    /// application-level failures such as `badauth` with a 200. Errors are
    /// returned only for transport failures.
    pub async fn submit(
        &self,
        credentials: &Credentials,
        hostname: &str,
        ip: &str,
    ) -> Result<UpdateOutcome> {
        let url = self.update_url(hostname, ip);

        tracing::debug!("Sending update for {} to {}", hostname, self.base_url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", credentials.basic_auth_value())
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        let kind = OutcomeKind::classify(&body);
        match kind {
            OutcomeKind::Unrecognized => {
                tracing::warn!("Unrecognized update response (HTTP {}): {:?}", status, body);
            }
            _ => {
                tracing::debug!("Update response (HTTP {}): {:?}", status, body);
            }
        }

        Ok(UpdateOutcome {
            kind,
            status,
            body,
            timestamp: chrono::Utc::now(),
        })
    }
}

impl Default for UpdateClient {
    fn default() -> Self {
        Self::new()
    }
}
