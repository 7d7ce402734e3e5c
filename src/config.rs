//! Configuration options for the StyleSync client

use std::time::Duration;

/// Configuration options for the StyleSync client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Per-request timeout; `None` leaves the transport's own default in place
    pub request_timeout: Option<Duration>,

    /// Path prefix every endpoint is mounted under
    pub api_prefix: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            request_timeout: None,
            api_prefix: "/api/v1".to_string(),
        }
    }
}

impl ClientOptions {
    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set the API path prefix
    pub fn with_api_prefix(mut self, value: &str) -> Self {
        self.api_prefix = value.to_string();
        self
    }
}
