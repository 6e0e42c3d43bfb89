//! Hype-cycle inference over enriched coverage
//!
//! Pipeline: [`yearly`] aggregation → [`inflection`] point detection →
//! [`phase`] classification. [`insights`] and [`chart`] render the result.
//!
//! # Example
//!
//! ```
//! use hypecycle::analytics::HypeCycleAnalyzer;
//!
//! let analyzer = HypeCycleAnalyzer::new(2024);
//! assert!(analyzer.analyze(&[]).is_none());
//! ```

pub mod chart;
pub mod inflection;
pub mod insights;
pub mod phase;
pub mod yearly;

pub use chart::{phase_position, ChartData, PhasePosition};
pub use inflection::detect_inflection_points;
pub use insights::generate_insights;
pub use phase::{classify_phase, PhaseContext};
pub use yearly::yearly_stats;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::metrics;
use crate::models::{EnrichedResult, HypePhase, InflectionPoints, YearlyStat};
use crate::signals::current_year;

/// Smallest result set worth analyzing
pub const MIN_RESULTS_FOR_ANALYSIS: usize = 3;

/// Volume and tone summary of the analyzed coverage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageMetrics {
    pub total_mentions: usize,
    pub years_analyzed: usize,
    pub peak_mentions: usize,
    pub avg_sentiment: f64,
}

/// Phase verdict with the aggregates it was derived from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HypeCycleAnalysis {
    pub phase: HypePhase,
    pub confidence: f64,
    pub yearly_stats: Vec<YearlyStat>,
    pub inflection_points: InflectionPoints,
    pub metrics: CoverageMetrics,
}

impl HypeCycleAnalysis {
    /// Bullet statements for this analysis
    pub fn insights(&self) -> Vec<String> {
        generate_insights(
            self.phase,
            self.confidence,
            self.metrics.total_mentions,
            self.metrics.avg_sentiment,
        )
    }

    /// Series for drawing the curve
    pub fn chart_data(&self) -> ChartData {
        ChartData::build(
            &self.yearly_stats,
            self.phase,
            self.metrics.total_mentions,
            self.inflection_points,
        )
    }
}

/// Aggregates results by year and places them on the hype curve
#[derive(Debug, Clone, Copy)]
pub struct HypeCycleAnalyzer {
    current_year: i32,
}

impl Default for HypeCycleAnalyzer {
    fn default() -> Self {
        Self::new(current_year())
    }
}

impl HypeCycleAnalyzer {
    /// Create an analyzer measuring recency against `current_year`
    pub fn new(current_year: i32) -> Self {
        Self { current_year }
    }

    /// Analyze enriched results
    ///
    /// Returns `None` when fewer than [`MIN_RESULTS_FOR_ANALYSIS`] results
    /// are given.
    pub fn analyze(&self, results: &[EnrichedResult]) -> Option<HypeCycleAnalysis> {
        if results.len() < MIN_RESULTS_FOR_ANALYSIS {
            debug!(count = results.len(), "Too few results to analyze");
            return None;
        }

        let stats = yearly_stats(results);
        let points = detect_inflection_points(&stats);
        let verdict = classify_phase(&PhaseContext {
            stats: &stats,
            points: &points,
            current_year: self.current_year,
        });

        let metrics = CoverageMetrics {
            total_mentions: results.len(),
            years_analyzed: stats.len(),
            peak_mentions: stats.iter().map(|s| s.mention_count).max().unwrap_or(0),
            avg_sentiment: results.iter().map(|r| r.sentiment).sum::<f64>() / results.len() as f64,
        };

        metrics::record_phase(verdict.phase.as_str());
        info!(
            phase = %verdict.phase,
            confidence = verdict.confidence,
            years = metrics.years_analyzed,
            mentions = metrics.total_mentions,
            "Hype cycle analyzed"
        );

        Some(HypeCycleAnalysis {
            phase: verdict.phase,
            confidence: verdict.confidence,
            yearly_stats: stats,
            inflection_points: points,
            metrics,
        })
    }
}
