//! hypecycle - Hype-cycle phase inference from news coverage
//!
//! Mines historical news coverage for a technology and places it on the
//! hype curve, from the innovation trigger to the plateau of productivity.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and retrieval tunables
//! - [`signals`] - Year, country, keyword and sentiment heuristics
//! - [`search`] - Query building, complexity classification and budgeted retrieval
//! - [`analytics`] - Yearly aggregation, inflection points and phase classification
//! - [`pipeline`] - End-to-end analysis facade
//! - [`models`] - Core data structures and types
//! - [`metrics`] - Prometheus counters
//! - [`utils`] - Common utilities and helpers
//!
//! # Example
//!
//! ```no_run
//! use hypecycle::config::Config;
//! use hypecycle::models::SearchTerm;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let terms = vec![SearchTerm::new("solid-state battery").exact()];
//!     let report = hypecycle::pipeline::analyze(&config, &terms, None).await?;
//!     println!("{} ({:.2})", report.phase, report.confidence);
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod search;
pub mod signals;
pub mod utils;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::analytics::{HypeCycleAnalysis, HypeCycleAnalyzer};
    pub use crate::config::Config;
    pub use crate::error::{Error, ErrorCategory, HypeCycleErrorTrait, Result};
    pub use crate::models::{EnrichedResult, HypePhase, NewsItem, PhaseVerdict, SearchOperator, SearchTerm};
    pub use crate::pipeline::{HypeCyclePipeline, HypeCycleReport};
    pub use crate::search::{NewsSource, SearchOrchestrator, SerpApiClient};
    pub use crate::signals::SignalExtractor;
}

// Direct re-exports for convenience
pub use models::{EnrichedResult, HypePhase, NewsItem, SearchTerm};
