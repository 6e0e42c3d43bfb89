//! Unified error handling for the hypecycle crate
//!
//! This module provides a unified error type that covers the failure taxonomy
//! of an analysis request: configuration, input validation, transport and
//! data insufficiency.
//!
//! # Architecture
//!
//! - [`HypeCycleErrorTrait`] - Common interface implemented by all error types
//! - [`ErrorCategory`] - Classification of errors for handling strategies
//! - [`Error`] - Unified error enum wrapping domain-specific errors
//!
//! # Usage
//!
//! ```rust,ignore
//! use hypecycle::error::{Error, HypeCycleErrorTrait};
//!
//! fn handle_error(err: Error) {
//!     if err.is_recoverable() {
//!         println!("Retry later: {}", err.user_message());
//!     } else {
//!         eprintln!("Refine the request: {}", err.user_message());
//!     }
//! }
//! ```

use thiserror::Error;

pub use crate::utils::error::FetchError;

/// Common trait for all hypecycle error types
pub trait HypeCycleErrorTrait: std::error::Error {
    /// Check if this error is recoverable (the same request may succeed later)
    fn is_recoverable(&self) -> bool;

    /// Message suitable for showing to the caller
    fn user_message(&self) -> String;

    /// Get the error category for handling strategies
    fn category(&self) -> ErrorCategory;
}

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Missing credential or invalid settings
    Config,
    /// Unusable caller input
    Validation,
    /// Transport failures talking to the news provider
    Network,
    /// Not enough coverage to determine a phase
    DataInsufficiency,
}

/// Unified error type for the hypecycle crate
#[derive(Error, Debug)]
pub enum Error {
    /// No provider credential configured
    #[error("News search API key is not configured")]
    MissingCredential,

    /// Every supplied search term was blank
    #[error("At least one non-empty search term is required")]
    NoSearchTerms,

    /// The news search itself failed
    #[error("Search failed: {0}")]
    Search(#[from] FetchError),

    /// Nothing survived filtering and deduplication
    #[error("No results found")]
    NoResults,

    /// Too few results to classify a phase
    #[error("Cannot analyze: {found} results found, at least {required} are needed")]
    InsufficientData { found: usize, required: usize },
}

impl HypeCycleErrorTrait for Error {
    fn is_recoverable(&self) -> bool {
        match self {
            Self::Search(e) => e.is_recoverable(),
            Self::MissingCredential
            | Self::NoSearchTerms
            | Self::NoResults
            | Self::InsufficientData { .. } => false,
        }
    }

    fn user_message(&self) -> String {
        match self {
            Self::MissingCredential => {
                "Set SERP_API_KEY before running an analysis".to_string()
            }
            Self::NoSearchTerms => "Provide at least one non-empty search term".to_string(),
            Self::Search(e) => format!("Search failed ({e}); retry or simplify the query"),
            Self::NoResults => "No news coverage found; try broader search terms".to_string(),
            Self::InsufficientData { found, .. } => {
                format!("Only {found} results found; broaden the query to analyze the cycle")
            }
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingCredential => ErrorCategory::Config,
            Self::NoSearchTerms => ErrorCategory::Validation,
            Self::Search(_) => ErrorCategory::Network,
            Self::NoResults | Self::InsufficientData { .. } => ErrorCategory::DataInsufficiency,
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
