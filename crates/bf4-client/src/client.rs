//! HTTP client for the Börse Frankfurt JSON API.

use std::time::Duration;

use bf4_types::{Bf4Error, Mic};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// API root served by Börse Frankfurt.
pub const DEFAULT_BASE_URL: &str = "https://api.boerse-frankfurt.de/v1";

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root URL. Overridable so tests can point at a local mock server.
    pub base_url: String,
    /// Market identifier sent with venue-scoped history queries.
    pub mic: Mic,
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout (separate from request timeout).
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
    /// Page size for bid/ask history requests.
    pub bid_ask_page_size: u64,
    /// Page size for time/sales requests.
    pub times_sales_page_size: u64,
    /// Page size for price history and dividend requests.
    pub history_page_size: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            mic: Mic::default(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("bf4/{}", env!("CARGO_PKG_VERSION")),
            // Observed server-side caps for the two chunked endpoints
            bid_ask_page_size: 1_000,
            times_sales_page_size: 10_000,
            history_page_size: 50,
        }
    }
}

/// API client with connection pooling and the shared request path every
/// endpoint delegates to.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Creates a new API client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            // Keep connections alive for reuse across sequential page requests
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issues one GET against a named `/data` operation and decodes the
    /// JSON body.
    ///
    /// # Errors
    ///
    /// Transport failures map to [`Bf4Error::Http`], non-success statuses
    /// to [`Bf4Error::Status`]. No retry is attempted.
    pub async fn data_request<T: DeserializeOwned>(
        &self,
        operation: &str,
        params: &[(&str, String)],
    ) -> Result<T, Bf4Error> {
        let url = format!("{}/data/{}", self.config.base_url, operation);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(params)
            .send()
            .await
            .map_err(|e| Bf4Error::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Bf4Error::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Bf4Error::Http(e.to_string()))
    }
}
