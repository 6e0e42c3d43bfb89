//! News retrieval
//!
//! - [`query`] - Query strings and date filters
//! - [`complexity`] - Simple/complex strategy selection
//! - [`source`] - Provider client behind the [`NewsSource`] trait
//! - [`filter`] - Validity predicate for raw items
//! - [`dedup`] - Link/title deduplication
//! - [`orchestrator`] - Budgeted retrieval tying the above together

pub mod complexity;
pub mod dedup;
pub mod filter;
pub mod orchestrator;
pub mod query;
pub mod source;

pub use complexity::{classify, ComplexityLevel, QueryComplexity};
pub use dedup::deduplicate;
pub use orchestrator::{SearchOrchestrator, SearchOutcome};
pub use query::QueryBuilder;
pub use source::{NewsSource, SerpApiClient};
