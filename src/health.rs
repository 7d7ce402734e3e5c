//! Backend health probe

use reqwest::Client;
use serde::Deserialize;

use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::Fetch;

/// Health report of the StyleSync backend.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,

    #[serde(default)]
    pub service: Option<String>,

    /// AI modules the backend reports as loaded
    #[serde(default)]
    pub ai_modules: Vec<String>,

    #[serde(default)]
    pub database: Option<String>,

    #[serde(default)]
    pub version: Option<String>,
}

/// Client for the health endpoint
pub struct HealthClient {
    base_url: String,
    options: ClientOptions,
    client: Client,
}

impl HealthClient {
    /// Create a new HealthClient
    pub(crate) fn new(base_url: &str, options: ClientOptions, client: Client) -> Self {
        Self {
            base_url: base_url.to_string(),
            options,
            client,
        }
    }

    /// Probe the backend and return its health report.
    pub async fn check(&self) -> Result<HealthStatus, Error> {
        let url = format!("{}{}/health", self.base_url, self.options.api_prefix);

        Fetch::get(&self.client, &url)
            .timeout(self.options.request_timeout)
            .execute::<HealthStatus>()
            .await
    }
}
