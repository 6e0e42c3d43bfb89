//! Prometheus metrics for hype-cycle analysis
//!
//! This module tracks:
//! - External search calls per retrieval strategy
//! - Swallowed sub-range failures
//! - Results at each stage (raw, valid, unique)
//! - Phase verdicts
//!
//! # Usage
//!
//! Call `init_metrics()` at application startup to register all metrics.
//! If initialization fails, metrics operations become no-ops.

use prometheus::{register_counter, register_counter_vec, Counter, CounterVec, Encoder, TextEncoder};
use std::sync::OnceLock;

// ============================================================================
// Metrics Storage
// ============================================================================

/// Container for all analysis metrics
struct AnalysisMetrics {
    api_calls: CounterVec,
    range_failures: Counter,
    results: CounterVec,
    phase_verdicts: CounterVec,
}

/// Global storage for analysis metrics
static ANALYSIS_METRICS: OnceLock<AnalysisMetrics> = OnceLock::new();

/// Flag to track if initialization was attempted
static METRICS_INIT_ATTEMPTED: OnceLock<bool> = OnceLock::new();

// ============================================================================
// Initialization
// ============================================================================

/// Initialize all Prometheus metrics
///
/// This function should be called once at application startup.
///
/// # Returns
///
/// `Ok(())` if all metrics were registered successfully (or initialization
/// was already attempted), `Err` with description if registration failed.
pub fn init_metrics() -> Result<(), Box<dyn std::error::Error>> {
    if METRICS_INIT_ATTEMPTED.get().is_some() {
        return Ok(());
    }
    METRICS_INIT_ATTEMPTED.set(true).ok();

    let metrics = AnalysisMetrics {
        api_calls: register_counter_vec!(
            "hypecycle_api_calls_total",
            "Total news search calls issued, by retrieval strategy",
            &["strategy"]
        )?,
        range_failures: register_counter!(
            "hypecycle_range_failures_total",
            "Total sub-range calls that failed and were skipped"
        )?,
        results: register_counter_vec!(
            "hypecycle_results_total",
            "Total results by pipeline stage (raw, valid, unique)",
            &["stage"]
        )?,
        phase_verdicts: register_counter_vec!(
            "hypecycle_phase_verdicts_total",
            "Total phase classifications by phase",
            &["phase"]
        )?,
    };

    ANALYSIS_METRICS
        .set(metrics)
        .map_err(|_| "Analysis metrics already initialized")?;

    tracing::info!("Prometheus metrics initialized successfully");
    Ok(())
}

/// Check if metrics have been initialized
pub fn metrics_initialized() -> bool {
    ANALYSIS_METRICS.get().is_some()
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, Box<dyn std::error::Error>> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Record one external search call
pub fn record_api_call(strategy: &str) {
    if let Some(m) = ANALYSIS_METRICS.get() {
        m.api_calls.with_label_values(&[strategy]).inc();
    }
}

/// Record a skipped sub-range failure
pub fn record_range_failure() {
    if let Some(m) = ANALYSIS_METRICS.get() {
        m.range_failures.inc();
    }
}

/// Record results reaching a pipeline stage
pub fn record_results(stage: &str, count: usize) {
    let Some(m) = ANALYSIS_METRICS.get() else {
        return;
    };

    if count > 0 {
        m.results.with_label_values(&[stage]).inc_by(count as f64);
    }
}

/// Record a phase verdict
pub fn record_phase(phase: &str) {
    if let Some(m) = ANALYSIS_METRICS.get() {
        m.phase_verdicts.with_label_values(&[phase]).inc();
    }
}

// ============================================================================
// Tests
// ============================================================================
