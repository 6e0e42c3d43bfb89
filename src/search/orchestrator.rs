//! Budgeted, complexity-adaptive news retrieval
//!
//! # Strategies
//!
//! ```text
//!   SIMPLE                                   COMPLEX
//!   ┌───────────────────────────┐            ┌────────┬────────┬──────────┐
//!   │ exploratory: whole window │            │ part 1 │ part 2 │  part 3  │
//!   └─────────────┬─────────────┘            └────────┴────────┴──────────┘
//!         full page? ──no──▶ done              3 calls, budget 6
//!                 │ yes
//!   ┌────┬────┬────┬────┬────┬────┐
//!   │ r1 │ r2 │ r3 │ .. │    │ r6 │  2-year ranges if dense, else 3-year
//!   └────┴────┴────┴────┴────┴────┘  stop once the budget (10) is spent
//! ```
//!
//! Calls are issued one at a time with a fixed pause in between. The call
//! counter and the accumulator are owned by a single [`Retrieval`] value for
//! the duration of one search, so the budget check and the call are never
//! interleaved with another call.
//!
//! Only the first call of a search is fatal on failure; later sub-range
//! failures are logged and contribute no results.

use tracing::{debug, info, warn};

use super::complexity::{classify, ComplexityLevel, QueryComplexity};
use super::dedup::deduplicate;
use super::filter;
use super::query::QueryBuilder;
use super::source::NewsSource;
use crate::config::RetrievalTunables;
use crate::metrics;
use crate::models::{EnrichedResult, NewsItem, SearchTerm};
use crate::signals::SignalExtractor;
use crate::utils::error::FetchError;

/// Number of pre-partitioned ranges for complex queries
pub const COMPLEX_PARTITIONS: i32 = 3;

/// Inclusive range of calendar years
pub type YearRange = (i32, i32);

/// Outcome of one search
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Deduplicated, enriched results
    pub results: Vec<EnrichedResult>,

    /// Complexity classification that chose the strategy
    pub complexity: QueryComplexity,

    /// External calls issued (failed ones included)
    pub api_calls: u32,

    /// Raw items returned by the provider
    pub raw_count: usize,

    /// Items that passed the validity filter
    pub valid_count: usize,

    /// Sub-range calls that failed and were skipped
    pub failed_ranges: usize,
}

/// Per-search mutable state: call counter and accumulator
struct Retrieval {
    strategy: ComplexityLevel,
    calls: u32,
    budget: u32,
    accumulated: Vec<EnrichedResult>,
    raw_count: usize,
    valid_count: usize,
    failed_ranges: usize,
}

impl Retrieval {
    fn new(strategy: ComplexityLevel, budget: u32) -> Self {
        Self {
            strategy,
            calls: 0,
            budget,
            accumulated: Vec::new(),
            raw_count: 0,
            valid_count: 0,
            failed_ranges: 0,
        }
    }

    fn exhausted(&self) -> bool {
        self.calls >= self.budget
    }
}

/// Split `start..=end` into consecutive ranges of `width` years
///
/// At most `max_ranges` are produced; years past the last range stay
/// uncovered.
pub fn partition_window(start: i32, end: i32, width: i32, max_ranges: usize) -> Vec<YearRange> {
    let width = width.max(1);
    let mut ranges = Vec::new();
    let mut current = start;

    while current <= end && ranges.len() < max_ranges {
        let range_end = (current + width - 1).min(end);
        ranges.push((current, range_end));
        current = range_end + 1;
    }

    ranges
}

/// Split `start..=end` into [`COMPLEX_PARTITIONS`] ranges; the last absorbs the remainder
pub fn complex_partitions(start: i32, end: i32) -> Vec<YearRange> {
    let span = end - start + 1;
    let width = (span / COMPLEX_PARTITIONS).max(1);

    (0..COMPLEX_PARTITIONS)
        .map(|i| {
            let range_start = start + i * width;
            let range_end = if i == COMPLEX_PARTITIONS - 1 {
                end
            } else {
                (range_start + width - 1).min(end)
            };
            (range_start, range_end)
        })
        .filter(|(s, e)| s <= e)
        .collect()
}

/// Issues bounded, time-ranged searches and enriches what comes back
pub struct SearchOrchestrator<S> {
    source: S,
    tunables: RetrievalTunables,
    extractor: SignalExtractor,
}

impl<S: NewsSource> SearchOrchestrator<S> {
    /// Create an orchestrator over `source` using the system clock
    pub fn new(source: S, tunables: RetrievalTunables) -> Self {
        Self {
            source,
            tunables,
            extractor: SignalExtractor::default(),
        }
    }

    /// Use a specific extractor (and therefore reference year)
    #[must_use]
    pub fn with_extractor(mut self, extractor: SignalExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// The underlying news source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Look-back window `(current_year - lookback, current_year)`
    pub fn window(&self) -> YearRange {
        let current = self.extractor.current_year();
        (current - self.tunables.lookback_years, current)
    }

    /// Retrieve, filter, enrich and deduplicate coverage for `query`
    ///
    /// # Errors
    ///
    /// Returns the transport error of the first call; later failures are
    /// swallowed.
    pub async fn search(
        &self,
        query: &str,
        search_terms: &[SearchTerm],
    ) -> Result<SearchOutcome, FetchError> {
        let clean_query = QueryBuilder::strip_date_filters(query);
        let complexity = classify(&clean_query);

        info!(
            level = %complexity.level,
            score = complexity.score,
            reason = %complexity.reason,
            "Query complexity"
        );

        let mut run = match complexity.level {
            ComplexityLevel::Simple => {
                let mut run = Retrieval::new(ComplexityLevel::Simple, self.tunables.simple_call_budget);
                self.simple_strategy(&clean_query, search_terms, &mut run).await?;
                run
            }
            ComplexityLevel::Complex => {
                let mut run = Retrieval::new(ComplexityLevel::Complex, self.tunables.complex_call_budget);
                self.complex_strategy(&clean_query, search_terms, &mut run).await?;
                run
            }
        };

        let accumulated = std::mem::take(&mut run.accumulated);
        let results = deduplicate(accumulated);

        metrics::record_results("raw", run.raw_count);
        metrics::record_results("valid", run.valid_count);
        metrics::record_results("unique", results.len());

        info!(
            api_calls = run.calls,
            raw = run.raw_count,
            valid = run.valid_count,
            unique = results.len(),
            failed_ranges = run.failed_ranges,
            "Search complete"
        );

        Ok(SearchOutcome {
            results,
            complexity,
            api_calls: run.calls,
            raw_count: run.raw_count,
            valid_count: run.valid_count,
            failed_ranges: run.failed_ranges,
        })
    }

    /// Exploratory call over the whole window, then sub-ranges if it came back full
    async fn simple_strategy(
        &self,
        query: &str,
        search_terms: &[SearchTerm],
        run: &mut Retrieval,
    ) -> Result<(), FetchError> {
        let (start, end) = self.window();

        let items = self.call(run, query, (start, end)).await?;
        let exploratory_count = items.len();
        self.absorb(run, items, search_terms);

        if exploratory_count < self.tunables.full_page || run.exhausted() {
            debug!(exploratory_count, "Exploratory page sufficient, no sub-ranges");
            return Ok(());
        }

        let width = if exploratory_count >= self.tunables.dense_page {
            self.tunables.dense_range_years
        } else {
            self.tunables.sparse_range_years
        };
        let ranges = partition_window(start, end, width, self.tunables.max_sub_ranges);

        debug!(exploratory_count, width, ranges = ranges.len(), "Subdividing window");

        for range in ranges {
            if run.exhausted() {
                debug!(calls = run.calls, "Call budget exhausted");
                break;
            }
            self.call_range(run, query, range, search_terms).await;
        }

        Ok(())
    }

    /// Three pre-partitioned calls without exploration
    async fn complex_strategy(
        &self,
        query: &str,
        search_terms: &[SearchTerm],
        run: &mut Retrieval,
    ) -> Result<(), FetchError> {
        let (start, end) = self.window();

        for (i, range) in complex_partitions(start, end).into_iter().enumerate() {
            if run.exhausted() {
                debug!(calls = run.calls, "Call budget exhausted");
                break;
            }

            if i == 0 {
                let items = self.call(run, query, range).await?;
                self.absorb(run, items, search_terms);
            } else {
                self.call_range(run, query, range, search_terms).await;
            }
        }

        Ok(())
    }

    /// Sub-range call whose failure only costs coverage
    async fn call_range(
        &self,
        run: &mut Retrieval,
        query: &str,
        range: YearRange,
        search_terms: &[SearchTerm],
    ) {
        match self.call(run, query, range).await {
            Ok(items) => self.absorb(run, items, search_terms),
            Err(e) => {
                warn!(start = range.0, end = range.1, error = %e, "Range search failed, skipping");
                run.failed_ranges += 1;
                metrics::record_range_failure();
            }
        }
    }

    /// One external call, counted against the budget whether or not it succeeds
    async fn call(
        &self,
        run: &mut Retrieval,
        query: &str,
        (start, end): YearRange,
    ) -> Result<Vec<NewsItem>, FetchError> {
        if run.calls > 0 {
            tokio::time::sleep(self.tunables.call_delay()).await;
        }

        run.calls += 1;
        metrics::record_api_call(run.strategy.as_str());

        let ranged = QueryBuilder::with_year_range(query, start, end);
        debug!(call = run.calls, start, end, "Searching range");

        self.source.search(&ranged).await
    }

    fn absorb(&self, run: &mut Retrieval, items: Vec<NewsItem>, search_terms: &[SearchTerm]) {
        run.raw_count += items.len();

        for item in items {
            if let Err(reason) = filter::check(&item) {
                debug!(link = %item.link, ?reason, "Rejected item");
                continue;
            }
            run.valid_count += 1;
            run.accumulated.push(self.extractor.enrich(&item, search_terms));
        }
    }
}
