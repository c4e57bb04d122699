//! Public IP discovery.

use crate::error::{Result, UpdateError};
use serde::Deserialize;

const DEFAULT_ENDPOINT: &str = "https://api.ipify.org/?format=json";

/// Queries a discovery service for the caller's current public IPv4 address.
pub struct PublicIpResolver {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct DiscoveryBody {
    ip: String,
}

impl PublicIpResolver {
    /// Create a resolver against the default discovery service.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT.to_string())
    }

    /// Create a resolver against a custom endpoint (for testing).
    pub fn with_endpoint(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Fetch the current public IP as reported by the discovery service.
    ///
    /// The service's `ip` field is returned verbatim. The value is not
    /// parsed or normalized; a malformed address string passes through
    /// unchanged to the update request.
    pub async fn resolve(&self) -> Result<String> {
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpdateError::Network(format!(
                "HTTP {} from {}",
                status, self.endpoint
            )));
        }

        let text = response.text().await?;
        let body: DiscoveryBody = serde_json::from_str(&text)?;

        tracing::debug!("Discovered public IP {} via {}", body.ip, self.endpoint);
        Ok(body.ip)
    }
}

impl Default for PublicIpResolver {
    fn default() -> Self {
        Self::new()
    }
}
