//! End-to-end pipeline integration tests
//!
//! Tests the complete workflow:
//! 1. Search terms → provider query
//! 2. Strategy selection and budgeted retrieval (mocked provider)
//! 3. Filtering, enrichment and deduplication
//! 4. Yearly aggregation and phase classification
//! 5. Report rendering

use hypecycle::models::HypePhase;
use hypecycle::pipeline::HypeCyclePipeline;
use hypecycle::search::{ComplexityLevel, SerpApiClient};
use serde_json::Value;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use super::fixtures::{
    complex_terms, simple_terms, CURRENT_YEAR, FULL_PAGE_SHAPE, RISING_SHAPE, TROUGH_SHAPE,
};
use crate::common::{items_for_years, news_page, test_config};

async fn mount_page(mock_server: &MockServer, items: Vec<Value>, times: Option<u64>) {
    let mock = Mock::given(method("GET")).respond_with(ResponseTemplate::new(200).set_body_json(news_page(items)));
    let mock = match times {
        Some(n) => mock.up_to_n_times(n),
        None => mock,
    };
    mock.mount(mock_server).await;
}

fn pipeline(mock_server: &MockServer) -> HypeCyclePipeline<SerpApiClient> {
    HypeCyclePipeline::from_config(&test_config(&mock_server.uri()))
        .unwrap()
        .with_current_year(CURRENT_YEAR)
}

/// `q` parameter of every request received, in order
async fn sent_queries(mock_server: &MockServer) -> Vec<String> {
    mock_server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(query_of)
        .collect()
}

fn query_of(request: &Request) -> String {
    request
        .url
        .query_pairs()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}

// ============================================================================
// Complete Pipeline Tests
// ============================================================================

#[tokio::test]
async fn test_pipeline_trough_analysis() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, items_for_years("lidar", TROUGH_SHAPE), None).await;

    let report = pipeline(&mock_server).analyze(&simple_terms(), None).await.unwrap();

    assert_eq!(report.query, "lidar");
    assert_eq!(report.complexity.level, ComplexityLevel::Simple);
    assert_eq!(report.api_calls, 1);

    assert_eq!(report.phase, HypePhase::TroughOfDisillusionment);
    assert_eq!(report.confidence, 0.85);
    assert_eq!(report.total_mentions, 56);
    assert_eq!(report.news_results.len(), 56);
    assert_eq!(report.metrics.years_analyzed, 5);
    assert_eq!(report.metrics.peak_mentions, 25);

    let points = report.inflection_points;
    assert_eq!(points.innovation_trigger.unwrap().year, 2019);
    assert_eq!(points.peak.unwrap().year, 2021);
    assert_eq!(points.trough.unwrap().year, 2023);

    assert_eq!(report.insights.len(), 6);
    assert_eq!(report.chart_data.yearly_mentions[&2021], 25);
    assert_eq!(report.chart_data.phase_position.x, 55.0);
}

#[tokio::test]
async fn test_pipeline_rising_technology() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, items_for_years("lidar", RISING_SHAPE), None).await;

    let report = pipeline(&mock_server).analyze(&simple_terms(), None).await.unwrap();

    assert_eq!(report.phase, HypePhase::InnovationTrigger);
    assert_eq!(report.confidence, 0.85);
}

#[tokio::test]
async fn test_enrichment_uses_provider_dates() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, items_for_years("lidar", &[(2017, 3)]), None).await;

    let report = pipeline(&mock_server).analyze(&simple_terms(), None).await.unwrap();

    for result in &report.news_results {
        assert_eq!(result.year, 2017);
        assert_eq!(result.source, "Example Wire");
        assert!(!result.keywords.iter().any(|k| k == "lidar"));
    }
}

// ============================================================================
// Retrieval Strategy Tests
// ============================================================================

#[tokio::test]
async fn test_full_page_subdivides_into_three_year_ranges() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, items_for_years("explore", FULL_PAGE_SHAPE), Some(1)).await;
    mount_page(&mock_server, items_for_years("range", &[(2013, 1)]), None).await;

    let report = pipeline(&mock_server).analyze(&simple_terms(), None).await.unwrap();

    let queries = sent_queries(&mock_server).await;
    assert_eq!(queries.len(), 6);
    assert_eq!(report.api_calls, 6);
    assert_eq!(queries[0], "lidar after:2012-01-01 before:2024-12-31");
    assert_eq!(queries[1], "lidar after:2012-01-01 before:2014-12-31");
    assert_eq!(queries[5], "lidar after:2024-01-01 before:2024-12-31");

    // Every sub-range returned the same item
    assert_eq!(report.news_results.len(), 101);
}

#[tokio::test]
async fn test_dense_page_subdivides_into_two_year_ranges() {
    let mock_server = MockServer::start().await;
    let mut dense = items_for_years("explore-a", FULL_PAGE_SHAPE);
    dense.extend(items_for_years("explore-b", FULL_PAGE_SHAPE));
    mount_page(&mock_server, dense, Some(1)).await;
    mount_page(&mock_server, Vec::new(), None).await;

    let report = pipeline(&mock_server).analyze(&simple_terms(), None).await.unwrap();

    let queries = sent_queries(&mock_server).await;
    // Exploration plus the six-range cap
    assert_eq!(queries.len(), 7);
    assert_eq!(queries[1], "lidar after:2012-01-01 before:2013-12-31");
    assert_eq!(queries[6], "lidar after:2022-01-01 before:2023-12-31");
    assert_eq!(report.news_results.len(), 200);
}

#[tokio::test]
async fn test_complex_query_issues_three_calls() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, items_for_years("quantum", &[(2020, 3)]), None).await;

    let report = pipeline(&mock_server).analyze(&complex_terms(), None).await.unwrap();

    assert_eq!(report.query, "\"quantum computing\" AND blockchain OR fusion");
    assert_eq!(report.complexity.level, ComplexityLevel::Complex);
    assert_eq!(report.api_calls, 3);

    let queries = sent_queries(&mock_server).await;
    assert_eq!(
        queries,
        vec![
            "\"quantum computing\" AND blockchain OR fusion after:2012-01-01 before:2015-12-31",
            "\"quantum computing\" AND blockchain OR fusion after:2016-01-01 before:2019-12-31",
            "\"quantum computing\" AND blockchain OR fusion after:2020-01-01 before:2024-12-31",
        ]
    );

    // Identical pages collapse to three results in a single year
    assert_eq!(report.news_results.len(), 3);
    assert_eq!(report.phase, HypePhase::TroughOfDisillusionment);
    assert_eq!(report.confidence, 0.7);
}

#[tokio::test]
async fn test_min_year_has_no_retrieval_effect() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, items_for_years("lidar", TROUGH_SHAPE), None).await;

    let report = pipeline(&mock_server)
        .analyze(&simple_terms(), Some(2018))
        .await
        .unwrap();

    assert_eq!(report.query, "lidar after:2018");
    let queries = sent_queries(&mock_server).await;
    assert_eq!(queries[0], "lidar after:2012-01-01 before:2024-12-31");
}

// ============================================================================
// Report Rendering Tests
// ============================================================================

#[tokio::test]
async fn test_report_serializes_to_json() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, items_for_years("lidar", TROUGH_SHAPE), None).await;

    let report = pipeline(&mock_server).analyze(&simple_terms(), None).await.unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["phase"], "Trough of Disillusionment");
    assert_eq!(json["complexity"]["level"], "SIMPLE");
    assert_eq!(json["chart_data"]["yearly_mentions"]["2021"], 25);
    assert_eq!(json["inflection_points"]["peak"]["year"], 2021);
    assert_eq!(json["news_results"].as_array().unwrap().len(), 56);
}
