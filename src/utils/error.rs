//! Error types for the news-search transport
//!
//! Extraction heuristics never fail, so transport is the only domain that
//! needs its own error type.

use thiserror::Error;

/// Errors that can occur while calling the news-search provider
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx status code
    #[error("Server error: {0}")]
    ServerError(u16),

    /// Request timeout
    #[error("Request timeout")]
    Timeout,

    /// Provider answered but reported an error in the body
    #[error("Provider error: {0}")]
    Api(String),

    /// Body could not be decoded as the expected JSON
    #[error("Decoding error: {0}")]
    Decode(String),

    /// Invalid endpoint URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Whether retrying the same call could plausibly succeed
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Http(_) | Self::Timeout => true,
            Self::ServerError(status) => matches!(status, 429 | 500 | 502 | 503 | 504),
            Self::Api(_) | Self::Decode(_) | Self::InvalidUrl(_) => false,
        }
    }
}
