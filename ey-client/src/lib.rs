//! Engine Yard Cloud HTTP Client
//!
//! A type-safe HTTP client for the Engine Yard Cloud API.
//!
//! All Cloud state lives server-side; this client is a thin, stateless wrapper
//! that authenticates with an API token and deserializes JSON responses into
//! `ey-core` domain types.
//!
//! # Example
//!
//! ```no_run
//! use ey_client::CloudClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ey_client::ClientError> {
//!     let client = CloudClient::new("https://cloud.engineyard.com", "token");
//!
//!     for env in client.list_environments().await? {
//!         println!("{}", env.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;

mod actions;
mod apps;
mod environments;
mod logs;
mod recipes;

// Re-export commonly used types
pub use error::{ClientError, Result};

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

/// Header carrying the Cloud API token
const TOKEN_HEADER: &str = "X-EY-Cloud-Token";

/// HTTP client for the Engine Yard Cloud API
///
/// Provides methods for the API endpoints the CLI uses, organized into
/// logical groups:
/// - App lookup (by name, by repository)
/// - Environment listing
/// - Environment actions (deploy, rebuild, rollback, maintenance)
/// - Logs and recipes
#[derive(Debug, Clone)]
pub struct CloudClient {
    /// Base URL of the Cloud API (e.g. "https://cloud.engineyard.com")
    base_url: String,
    /// API token sent with every request
    token: String,
    /// HTTP client instance
    client: Client,
}

impl CloudClient {
    /// Create a new Cloud API client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the Cloud API
    /// * `token` - The account's API token
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client: Client::new(),
        }
    }

    /// Create a new Cloud API client with a custom HTTP client
    ///
    /// This allows configuring timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, token: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the base URL of the Cloud API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a request to an API path, with the token header attached
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "cloud api request");
        self.client
            .request(method, &url)
            .header(TOKEN_HEADER, &self.token)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the request
    /// failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response that returns no content
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}
