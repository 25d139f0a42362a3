//! Patchplan HTTP Client
//!
//! A type-safe client for the patch server's REST API, covering the handful
//! of endpoints the scheduler consumes: organizations, job templates, hosts,
//! per-host errata and job invocations.
//!
//! Every request authenticates with HTTP basic auth. TLS certificate
//! verification is disabled; the servers this tool targets run self-signed
//! certificates.
//!
//! # Example
//!
//! ```no_run
//! use patchplan_client::SatelliteClient;
//!
//! #[tokio::main]
//! async fn main() -> patchplan_client::Result<()> {
//!     let client = SatelliteClient::new("https://sat6.example.com/", "admin", "changeme")?;
//!
//!     let organizations = client.list_organizations().await?;
//!     println!("{} organization(s)", organizations.len());
//!     Ok(())
//! }
//! ```

pub mod error;
mod hosts;
mod jobs;
mod organizations;
mod templates;

// Re-export commonly used types
pub use error::{ClientError, Result};

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use patchplan_core::dto::page::Paginated;

/// HTTP client for the patch server API
///
/// One instance serves a whole run. It carries the credentials and the
/// TLS-lenient connection pool; every method is a single request/response
/// pair with no retries.
#[derive(Debug, Clone)]
pub struct SatelliteClient {
    /// Base URL of the server (e.g., "https://sat6.example.com")
    base_url: String,
    /// Basic-auth username
    username: String,
    /// Basic-auth password
    password: String,
    /// HTTP client instance
    client: Client,
}

impl SatelliteClient {
    /// Create a new client for the given server and credentials
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the server (e.g., "https://sat6.example.com/")
    /// * `username` - Basic-auth username, sent on every request
    /// * `password` - Basic-auth password
    ///
    /// # Example
    /// ```
    /// use patchplan_client::SatelliteClient;
    ///
    /// let client = SatelliteClient::new("https://sat6.example.com/", "admin", "changeme").unwrap();
    /// assert_eq!(client.base_url(), "https://sat6.example.com");
    /// ```
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .build()?;
        Ok(Self::with_client(base_url, username, password, client))
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows configuring timeouts, proxies, stricter TLS, etc.
    ///
    /// # Example
    /// ```
    /// use patchplan_client::SatelliteClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = SatelliteClient::with_client(
    ///     "https://sat6.example.com",
    ///     "admin",
    ///     "changeme",
    ///     http_client,
    /// );
    /// ```
    pub fn with_client(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.into(),
            password: password.into(),
            client,
        }
    }

    /// Get the base URL of the server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Generic Verbs
    // =============================================================================

    /// Authenticated GET returning decoded JSON
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(ClientError::transport)?;

        self.handle_response(response).await
    }

    /// Authenticated GET carrying a JSON body
    ///
    /// The server reads search and pagination parameters from GET bodies.
    pub async fn get_with<Q: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        params: &Q,
    ) -> Result<T> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(params)
            .send()
            .await
            .map_err(ClientError::transport)?;

        self.handle_response(response).await
    }

    /// Authenticated POST with a JSON body
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(body)
            .send()
            .await
            .map_err(ClientError::transport)?;

        self.handle_response(response).await
    }

    /// Authenticated PUT with a JSON body
    ///
    /// # Example
    /// ```no_run
    /// # use patchplan_client::SatelliteClient;
    /// # use serde_json::{Value, json};
    /// # async fn example() -> patchplan_client::Result<()> {
    /// # let client = SatelliteClient::new("https://sat6.example.com/", "admin", "changeme")?;
    /// let updated: Value = client
    ///     .put("api/hosts/42", &json!({"host": {"comment": "patched"}}))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        debug!("PUT {}", url);
        let response = self
            .client
            .put(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(body)
            .send()
            .await
            .map_err(ClientError::transport)?;

        self.handle_response(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
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

    /// Unwrap a list envelope, warning when the server capped the page
    fn page_results<T>(&self, path: &str, page: Paginated<T>) -> Vec<T> {
        if let Some(missing) = page.truncated_by() {
            warn!(
                "{} returned a capped page, {} matching record(s) were not included",
                path, missing
            );
        }
        page.results
    }
}
