//! Error scenario integration tests
//!
//! Tests various failure modes and error handling:
//! 1. Missing credential and blank input
//! 2. First-call transport failures (fatal)
//! 3. Sub-range failures (skipped)
//! 4. Empty and insufficient coverage
//! 5. Filtering of unusable items

use hypecycle::error::{Error, ErrorCategory, HypeCycleErrorTrait};
use hypecycle::models::SearchTerm;
use hypecycle::pipeline::{self, HypeCyclePipeline};
use hypecycle::utils::error::FetchError;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::fixtures::{complex_terms, simple_terms, CURRENT_YEAR, FULL_PAGE_SHAPE, INVALID_KEY_BODY};
use crate::common::{items_for_years, news_item, news_page, test_config};

async fn analyze(mock_server: &MockServer, terms: &[SearchTerm]) -> hypecycle::error::Result<pipeline::HypeCycleReport> {
    HypeCyclePipeline::from_config(&test_config(&mock_server.uri()))?
        .with_current_year(CURRENT_YEAR)
        .analyze(terms, None)
        .await
}

async fn request_count(mock_server: &MockServer) -> usize {
    mock_server.received_requests().await.map_or(0, |r| r.len())
}

// ============================================================================
// Input Validation Tests
// ============================================================================

#[tokio::test]
async fn test_missing_credential() {
    let mock_server = MockServer::start().await;

    let mut config = test_config(&mock_server.uri());
    config.search.api_key = None;

    let err = pipeline::analyze(&config, &simple_terms(), None).await.unwrap_err();

    assert!(matches!(err, Error::MissingCredential));
    assert_eq!(err.category(), ErrorCategory::Config);
    assert_eq!(request_count(&mock_server).await, 0);
}

#[tokio::test]
async fn test_blank_search_terms() {
    let mock_server = MockServer::start().await;

    let err = analyze(&mock_server, &[SearchTerm::new(""), SearchTerm::new("   ")])
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NoSearchTerms));
    assert_eq!(err.category(), ErrorCategory::Validation);
    assert_eq!(request_count(&mock_server).await, 0);
}

// ============================================================================
// Transport Failure Tests
// ============================================================================

#[tokio::test]
async fn test_first_call_server_error_is_fatal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let err = analyze(&mock_server, &simple_terms()).await.unwrap_err();

    assert!(matches!(err, Error::Search(FetchError::ServerError(500))));
    assert_eq!(err.category(), ErrorCategory::Network);
    assert!(err.is_recoverable());
    assert_eq!(request_count(&mock_server).await, 1);
}

#[tokio::test]
async fn test_invalid_key_body_is_fatal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(INVALID_KEY_BODY))
        .mount(&mock_server)
        .await;

    let err = analyze(&mock_server, &simple_terms()).await.unwrap_err();

    assert!(matches!(err, Error::Search(FetchError::Api(_))));
    assert!(!err.is_recoverable());
}

#[tokio::test]
async fn test_first_call_timeout_is_fatal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(news_page(Vec::new()))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let mut config = test_config(&mock_server.uri());
    config.search.request_timeout_secs = 1;

    let err = pipeline::analyze(&config, &simple_terms(), None).await.unwrap_err();
    assert!(matches!(err, Error::Search(FetchError::Timeout)), "got: {err:?}");
}

#[tokio::test]
async fn test_complex_first_call_failure_is_fatal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let err = analyze(&mock_server, &complex_terms()).await.unwrap_err();

    assert!(matches!(err, Error::Search(FetchError::ServerError(503))));
    assert_eq!(request_count(&mock_server).await, 1);
}

// ============================================================================
// Partial Failure Tests
// ============================================================================

#[tokio::test]
async fn test_sub_range_failure_is_skipped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(news_page(items_for_years("explore", FULL_PAGE_SHAPE))))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(news_page(Vec::new())))
        .mount(&mock_server)
        .await;

    let report = analyze(&mock_server, &simple_terms()).await.unwrap();

    assert_eq!(report.api_calls, 6);
    assert_eq!(request_count(&mock_server).await, 6);
    assert_eq!(report.news_results.len(), 100);
}

#[tokio::test]
async fn test_complex_later_failures_are_skipped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(news_page(items_for_years("first", &[(2014, 4)]))))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let report = analyze(&mock_server, &complex_terms()).await.unwrap();

    assert_eq!(report.api_calls, 3);
    assert_eq!(request_count(&mock_server).await, 3);
    assert_eq!(report.news_results.len(), 4);
}

// ============================================================================
// Coverage Tests
// ============================================================================

#[tokio::test]
async fn test_no_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(news_page(Vec::new())))
        .mount(&mock_server)
        .await;

    let err = analyze(&mock_server, &simple_terms()).await.unwrap_err();

    assert!(matches!(err, Error::NoResults));
    assert_eq!(err.category(), ErrorCategory::DataInsufficiency);
}

#[tokio::test]
async fn test_unusable_items_yield_no_results() {
    let mock_server = MockServer::start().await;

    let items = vec![
        json!({"title": "Short", "link": "https://news.example.com/1", "snippet": "Too short to use.", "date": "2021-01-01"}),
        json!({"title": "", "link": "https://news.example.com/2", "snippet": crate::common::LONG_SNIPPET}),
        json!({"title": "Social", "link": "https://www.facebook.com/post/3", "snippet": crate::common::LONG_SNIPPET}),
    ];

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(news_page(items)))
        .mount(&mock_server)
        .await;

    let err = analyze(&mock_server, &simple_terms()).await.unwrap_err();
    assert!(matches!(err, Error::NoResults));
}

#[tokio::test]
async fn test_insufficient_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(news_page(vec![
            news_item("lidar", 0, 2022),
            news_item("lidar", 1, 2023),
        ])))
        .mount(&mock_server)
        .await;

    let err = analyze(&mock_server, &simple_terms()).await.unwrap_err();

    assert!(matches!(
        err,
        Error::InsufficientData {
            found: 2,
            required: 3
        }
    ));
    assert_eq!(
        err.to_string(),
        "Cannot analyze: 2 results found, at least 3 are needed"
    );
}

#[tokio::test]
async fn test_duplicates_do_not_count_towards_analysis() {
    let mock_server = MockServer::start().await;

    let original = news_item("lidar", 0, 2022);
    let mut same_title = news_item("mirror", 9, 2022);
    same_title["title"] = original["title"].clone();
    let mut same_link = news_item("copy", 5, 2023);
    same_link["link"] = original["link"].clone();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(news_page(vec![
            original,
            same_title,
            same_link,
            news_item("lidar", 1, 2023),
        ])))
        .mount(&mock_server)
        .await;

    let err = analyze(&mock_server, &simple_terms()).await.unwrap_err();
    assert!(matches!(err, Error::InsufficientData { found: 2, .. }));
}
