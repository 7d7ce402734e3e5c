//! StyleSync Rust Client Library
//!
//! A Rust client for the StyleSync AI fashion API, covering wardrobe image
//! uploads, item listing, outfit recommendations, user management, and the
//! client-side catalog logic (category formatting, formality tiers, list
//! filtering).

pub mod catalog;
pub mod clothing;
pub mod config;
pub mod error;
pub mod fetch;
pub mod health;
pub mod recommendations;
pub mod users;

use reqwest::Client;

use crate::clothing::ClothingClient;
use crate::config::ClientOptions;
use crate::health::HealthClient;
use crate::recommendations::RecommendationsClient;
use crate::users::UsersClient;

/// The main entry point for the StyleSync Rust client
pub struct StyleSync {
    /// Base URL of the StyleSync backend
    pub base_url: String,
    /// HTTP client used for requests
    pub http_client: Client,
    /// Client options
    pub options: ClientOptions,
}

impl StyleSync {
    /// Create a new StyleSync client
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the StyleSync backend
    ///
    /// # Example
    ///
    /// ```
    /// use stylesync_rust::StyleSync;
    ///
    /// let client = StyleSync::new("http://localhost:8000");
    /// ```
    pub fn new(base_url: &str) -> Self {
        Self::new_with_options(base_url, ClientOptions::default())
    }

    /// Create a new StyleSync client with custom options
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use stylesync_rust::{config::ClientOptions, StyleSync};
    ///
    /// let options = ClientOptions::default()
    ///     .with_request_timeout(Some(Duration::from_secs(30)));
    /// let client = StyleSync::new_with_options("http://localhost:8000", options);
    /// ```
    pub fn new_with_options(base_url: &str, options: ClientOptions) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client: Client::new(),
            options,
        }
    }

    /// Get a client for wardrobe operations (image upload, item listing)
    ///
    /// # Example
    ///
    /// ```
    /// use stylesync_rust::StyleSync;
    ///
    /// let client = StyleSync::new("http://localhost:8000");
    /// let wardrobe = client.clothing();
    /// ```
    pub fn clothing(&self) -> ClothingClient {
        ClothingClient::new(&self.base_url, self.options.clone(), self.http_client.clone())
    }

    /// Get a client for outfit recommendation requests
    ///
    /// # Example
    ///
    /// ```
    /// use stylesync_rust::StyleSync;
    ///
    /// let client = StyleSync::new("http://localhost:8000");
    /// let recommendations = client.recommendations();
    /// ```
    pub fn recommendations(&self) -> RecommendationsClient {
        RecommendationsClient::new(&self.base_url, self.options.clone(), self.http_client.clone())
    }

    /// Get a client for user management
    ///
    /// # Example
    ///
    /// ```
    /// use stylesync_rust::StyleSync;
    ///
    /// let client = StyleSync::new("http://localhost:8000");
    /// let users = client.users();
    /// ```
    pub fn users(&self) -> UsersClient {
        UsersClient::new(&self.base_url, self.options.clone(), self.http_client.clone())
    }

    /// Get a client for the backend health probe
    ///
    /// # Example
    ///
    /// ```
    /// use stylesync_rust::StyleSync;
    ///
    /// let client = StyleSync::new("http://localhost:8000");
    /// let health = client.health();
    /// ```
    pub fn health(&self) -> HealthClient {
        HealthClient::new(&self.base_url, self.options.clone(), self.http_client.clone())
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::catalog::{CategoryFilter, FormalityTier, WardrobeView};
    pub use crate::config::ClientOptions;
    pub use crate::error::Error;
    pub use crate::StyleSync;
}
