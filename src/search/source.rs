//! News-search provider client
//!
//! [`NewsSource`] is the seam between the orchestrator and the external
//! provider. [`SerpApiClient`] implements it against SerpAPI's Google News
//! endpoint with:
//! - Client-side rate limiting with governor
//! - Per-call transport timeout
//! - Lenient decoding of `news_results` (missing fields become empty strings)
//!
//! There is no retry: a failed call is reported once and the orchestrator
//! decides whether it is fatal.

use async_trait::async_trait;
use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use reqwest::Client;
use serde::Deserialize;
use std::num::NonZeroU32;
use std::time::Duration;

use crate::config::{Config, DEFAULT_SERP_URL};
use crate::models::NewsItem;
use crate::utils::error::FetchError;

/// A keyed news search returning one page of raw items
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Run `query` and return the provider's raw items
    async fn search(&self, query: &str) -> Result<Vec<NewsItem>, FetchError>;
}

/// Response body of the provider
#[derive(Debug, Default, Deserialize)]
struct SerpResponse {
    #[serde(default)]
    news_results: Vec<NewsItem>,

    #[serde(default)]
    error: Option<String>,
}

/// SerpAPI Google News client
pub struct SerpApiClient {
    /// HTTP client with configured timeout and compression
    client: Client,

    /// Rate limiter to control request frequency
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,

    /// Search endpoint
    base_url: String,

    /// Provider credential
    api_key: String,

    /// Results requested per call
    page_size: usize,
}

impl SerpApiClient {
    /// Create a client against the public endpoint
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn new(api_key: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_config(api_key, DEFAULT_SERP_URL, 5, Duration::from_secs(30))
    }

    /// Create a client with a custom endpoint, rate and timeout
    ///
    /// # Arguments
    ///
    /// * `api_key` - Provider credential
    /// * `base_url` - Search endpoint (a mock server in tests)
    /// * `requests_per_second` - Maximum number of requests per second
    /// * `timeout` - Per-call transport timeout
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` for an unparseable endpoint and
    /// `FetchError::Http` if the HTTP client cannot be created
    pub fn with_config(
        api_key: impl Into<String>,
        base_url: &str,
        requests_per_second: u32,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        url::Url::parse(base_url).map_err(|e| FetchError::InvalidUrl(format!("{base_url}: {e}")))?;

        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .user_agent(format!("hypecycle/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        let rate = NonZeroU32::new(requests_per_second).unwrap_or(NonZeroU32::MIN);
        let rate_limiter = RateLimiter::direct(Quota::per_second(rate));

        Ok(Self {
            client,
            rate_limiter,
            base_url: base_url.to_string(),
            api_key: api_key.into(),
            page_size: 100,
        })
    }

    /// Create a client from loaded configuration
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Api` when no credential is configured
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let api_key = config
            .search
            .api_key
            .clone()
            .ok_or_else(|| FetchError::Api("missing API key".to_string()))?;

        let mut client = Self::with_config(
            api_key,
            &config.search.base_url,
            config.search.rate_limit,
            config.request_timeout(),
        )?;
        client.page_size = config.retrieval.page_size;
        Ok(client)
    }

    /// Query parameters for one news search
    fn params<'a>(&'a self, query: &'a str, page_size: &'a str) -> [(&'static str, &'a str); 9] {
        [
            ("api_key", self.api_key.as_str()),
            ("tbm", "nws"),
            ("num", page_size),
            ("safe", "off"),
            ("gl", "us"),
            ("hl", "en"),
            ("filter", "0"),
            ("q", query),
            ("start", "0"),
        ]
    }

    fn decode(body: &str) -> Result<Vec<NewsItem>, FetchError> {
        let response: SerpResponse =
            serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

        if let Some(error) = response.error {
            // An exhausted search is reported as an error with no results
            if error.contains("hasn't returned any results") {
                return Ok(Vec::new());
            }
            return Err(FetchError::Api(error));
        }

        Ok(response.news_results)
    }
}

#[async_trait]
impl NewsSource for SerpApiClient {
    async fn search(&self, query: &str) -> Result<Vec<NewsItem>, FetchError> {
        self.rate_limiter.until_ready().await;

        let page_size = self.page_size.to_string();
        tracing::debug!(query = %query, "Calling news search provider");

        let response = self
            .client
            .get(&self.base_url)
            .query(&self.params(query, &page_size))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::ServerError(status.as_u16()));
        }

        let body = response.text().await.map_err(transport_error)?;
        Self::decode(&body)
    }
}

/// The client timeout covers the body too, so reads map the same way as sends
fn transport_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Http(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        assert!(SerpApiClient::new("key").is_ok());
        assert!(SerpApiClient::with_config("key", "http://localhost:8080", 10, Duration::from_secs(5)).is_ok());
    }

    #[test]
    fn test_invalid_base_url() {
        let result = SerpApiClient::with_config("key", "not a url", 10, Duration::from_secs(5));
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }

    #[test]
    fn test_from_config_requires_key() {
        let config = Config::default();
        assert!(matches!(
            SerpApiClient::from_config(&config),
            Err(FetchError::Api(_))
        ));
    }

    #[test]
    fn test_params_carry_query_and_key() {
        let client = SerpApiClient::new("secret").unwrap();
        let params = client.params("lidar after:2013-01-01", "100");
        assert!(params.contains(&("api_key", "secret")));
        assert!(params.contains(&("q", "lidar after:2013-01-01")));
        assert!(params.contains(&("tbm", "nws")));
        assert!(params.contains(&("num", "100")));
    }

    #[test]
    fn test_decode_results() {
        let body = r#"{"news_results": [{"title": "A", "link": "https://x.com/a"}, {}]}"#;
        let items = SerpApiClient::decode(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "A");
        assert!(items[1].title.is_empty());
    }

    #[test]
    fn test_decode_missing_results_is_empty() {
        assert!(SerpApiClient::decode("{}").unwrap().is_empty());
    }

    #[test]
    fn test_decode_provider_error() {
        let body = r#"{"error": "Invalid API key."}"#;
        assert!(matches!(SerpApiClient::decode(body), Err(FetchError::Api(_))));

        let body = r#"{"error": "Google hasn't returned any results for this query."}"#;
        assert!(SerpApiClient::decode(body).unwrap().is_empty());
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(SerpApiClient::decode("<html>"), Err(FetchError::Decode(_))));
    }
}
