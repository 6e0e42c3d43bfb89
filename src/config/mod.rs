//! Configuration management for hypecycle
//!
//! This module handles loading and validating configuration from environment
//! variables and TOML files. The provider credential is read once at startup
//! and never mutated afterwards.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default news-search endpoint
pub const DEFAULT_SERP_URL: &str = "https://serpapi.com/search";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// News provider configuration
    #[serde(default)]
    pub search: SearchConfig,

    /// Call budgets and range partitioning
    #[serde(default)]
    pub retrieval: RetrievalTunables,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// News provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Provider API key
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Search endpoint URL
    pub base_url: String,

    /// Per-call transport timeout in seconds
    pub request_timeout_secs: u64,

    /// Rate limit (requests per second)
    pub rate_limit: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_SERP_URL.to_string(),
            request_timeout_secs: 30,
            rate_limit: 5,
        }
    }
}

/// Empirically chosen retrieval constants
///
/// These values have no documented derivation; they are kept as named
/// tunables so behavior stays identical across deployments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalTunables {
    /// Years covered before the current year
    pub lookback_years: i32,

    /// Result count requested per call
    pub page_size: usize,

    /// Exploratory count that triggers sub-range retrieval
    pub full_page: usize,

    /// Exploratory count that selects the dense range size
    pub dense_page: usize,

    /// Call budget for simple queries (exploration included)
    pub simple_call_budget: u32,

    /// Call budget for complex queries
    pub complex_call_budget: u32,

    /// Maximum number of sub-ranges for simple queries
    pub max_sub_ranges: usize,

    /// Range width in years when coverage is dense
    pub dense_range_years: i32,

    /// Range width in years otherwise
    pub sparse_range_years: i32,

    /// Fixed pause between successive calls in milliseconds
    pub call_delay_ms: u64,
}

impl Default for RetrievalTunables {
    fn default() -> Self {
        Self {
            lookback_years: 12,
            page_size: 100,
            full_page: 100,
            dense_page: 200,
            simple_call_budget: 10,
            complex_call_budget: 6,
            max_sub_ranges: 6,
            dense_range_years: 2,
            sparse_range_years: 3,
            call_delay_ms: 100,
        }
    }
}

impl RetrievalTunables {
    /// Pause inserted between successive calls
    #[must_use]
    pub fn call_delay(&self) -> Duration {
        Duration::from_millis(self.call_delay_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let api_key = std::env::var("SERP_API_KEY")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let base_url = std::env::var("HYPECYCLE_SERP_URL")
            .unwrap_or_else(|_| defaults.search.base_url.clone());

        let request_timeout_secs = std::env::var("HYPECYCLE_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults.search.request_timeout_secs);

        let rate_limit = std::env::var("HYPECYCLE_RATE_LIMIT")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(defaults.search.rate_limit);

        let call_delay_ms = std::env::var("HYPECYCLE_CALL_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults.retrieval.call_delay_ms);

        let level =
            std::env::var("HYPECYCLE_LOG_LEVEL").unwrap_or_else(|_| defaults.logging.level.clone());
        let format = std::env::var("HYPECYCLE_LOG_FORMAT")
            .unwrap_or_else(|_| defaults.logging.format.clone());

        Ok(Self {
            search: SearchConfig {
                api_key,
                base_url,
                request_timeout_secs,
                rate_limit,
            },
            retrieval: RetrievalTunables {
                call_delay_ms,
                ..defaults.retrieval
            },
            logging: LoggingConfig { level, format },
        })
    }

    /// Load configuration from a file
    ///
    /// A credential absent from the file is taken from `SERP_API_KEY`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        if config.search.api_key.is_none() {
            config.search.api_key = std::env::var("SERP_API_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty());
        }

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.search.rate_limit == 0 {
            anyhow::bail!("rate_limit must be greater than 0");
        }

        if self.search.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than 0");
        }

        let r = &self.retrieval;
        if r.lookback_years < 1 {
            anyhow::bail!("lookback_years must be at least 1");
        }
        if r.simple_call_budget == 0 || r.complex_call_budget == 0 {
            anyhow::bail!("call budgets must be greater than 0");
        }
        if r.dense_range_years < 1 || r.sparse_range_years < 1 {
            anyhow::bail!("range widths must be at least 1 year");
        }
        if r.dense_page < r.full_page {
            anyhow::bail!("dense_page must not be smaller than full_page");
        }

        Ok(())
    }

    /// Whether a non-blank provider credential is configured
    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.search
            .api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.search.request_timeout_secs)
    }
}
