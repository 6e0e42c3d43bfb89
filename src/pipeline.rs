//! End-to-end analysis: search terms in, hype-cycle report out

use serde::Serialize;
use tracing::{info, instrument};

use crate::analytics::{ChartData, CoverageMetrics, HypeCycleAnalyzer, MIN_RESULTS_FOR_ANALYSIS};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{EnrichedResult, HypePhase, InflectionPoints, SearchTerm, YearlyStat};
use crate::search::{NewsSource, QueryBuilder, QueryComplexity, SearchOrchestrator, SerpApiClient};
use crate::signals::SignalExtractor;

/// Everything produced for one set of search terms
#[derive(Debug, Clone, Serialize)]
pub struct HypeCycleReport {
    pub query: String,
    pub complexity: QueryComplexity,
    pub api_calls: u32,
    pub phase: HypePhase,
    pub confidence: f64,
    pub total_mentions: usize,
    pub insights: Vec<String>,
    pub chart_data: ChartData,
    pub yearly_stats: Vec<YearlyStat>,
    pub inflection_points: InflectionPoints,
    pub metrics: CoverageMetrics,
    pub news_results: Vec<EnrichedResult>,
}

/// Retrieval plus analysis over one news source
pub struct HypeCyclePipeline<S> {
    orchestrator: SearchOrchestrator<S>,
    analyzer: HypeCycleAnalyzer,
}

impl HypeCyclePipeline<SerpApiClient> {
    /// Build a pipeline against the configured provider
    ///
    /// # Errors
    ///
    /// `Error::MissingCredential` when no API key is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        if !config.has_credential() {
            return Err(Error::MissingCredential);
        }

        let client = SerpApiClient::from_config(config)?;
        Ok(Self::new(client, config))
    }
}

impl<S: NewsSource> HypeCyclePipeline<S> {
    pub fn new(source: S, config: &Config) -> Self {
        Self {
            orchestrator: SearchOrchestrator::new(source, config.retrieval.clone()),
            analyzer: HypeCycleAnalyzer::default(),
        }
    }

    /// Pin "now" for both year extraction and recency rules
    #[must_use]
    pub fn with_current_year(self, year: i32) -> Self {
        Self {
            orchestrator: self.orchestrator.with_extractor(SignalExtractor::new(year)),
            analyzer: HypeCycleAnalyzer::new(year),
        }
    }

    /// Search, analyze and render a report
    ///
    /// # Errors
    ///
    /// - `Error::NoSearchTerms` when every term is blank
    /// - `Error::Search` when the first provider call fails
    /// - `Error::NoResults` when nothing survives filtering
    /// - `Error::InsufficientData` when too few results remain to analyze
    #[instrument(skip_all, fields(terms = search_terms.len()))]
    pub async fn analyze(&self, search_terms: &[SearchTerm], min_year: Option<i32>) -> Result<HypeCycleReport> {
        let terms: Vec<SearchTerm> = search_terms.iter().filter(|t| !t.is_blank()).cloned().collect();
        if terms.is_empty() {
            return Err(Error::NoSearchTerms);
        }

        let query = QueryBuilder::build_query(&terms, min_year);
        info!(query = %query, "Searching");

        let outcome = self.orchestrator.search(&query, &terms).await?;
        if outcome.results.is_empty() {
            return Err(Error::NoResults);
        }

        let analysis = self
            .analyzer
            .analyze(&outcome.results)
            .ok_or(Error::InsufficientData {
                found: outcome.results.len(),
                required: MIN_RESULTS_FOR_ANALYSIS,
            })?;

        Ok(HypeCycleReport {
            query,
            complexity: outcome.complexity,
            api_calls: outcome.api_calls,
            phase: analysis.phase,
            confidence: analysis.confidence,
            total_mentions: analysis.metrics.total_mentions,
            insights: analysis.insights(),
            chart_data: analysis.chart_data(),
            yearly_stats: analysis.yearly_stats,
            inflection_points: analysis.inflection_points,
            metrics: analysis.metrics,
            news_results: outcome.results,
        })
    }
}

/// Analyze `search_terms` with the provider described by `config`
///
/// # Errors
///
/// See [`HypeCyclePipeline::from_config`] and [`HypeCyclePipeline::analyze`].
pub async fn analyze(config: &Config, search_terms: &[SearchTerm], min_year: Option<i32>) -> Result<HypeCycleReport> {
    HypeCyclePipeline::from_config(config)?
        .analyze(search_terms, min_year)
        .await
}
