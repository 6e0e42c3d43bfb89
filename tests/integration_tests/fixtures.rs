//! Test fixtures for integration tests
//!
//! Canned coverage shapes and search terms

use hypecycle::models::{SearchOperator, SearchTerm};

/// Reference year for every pipeline in these tests
pub const CURRENT_YEAR: i32 = 2024;

/// Rise, peak in 2021, collapse in 2023 (56 items, under a full page)
pub const TROUGH_SHAPE: &[(i32, usize)] = &[(2019, 2), (2020, 3), (2021, 25), (2022, 22), (2023, 4)];

/// Steady growth through the current year
pub const RISING_SHAPE: &[(i32, usize)] = &[(2023, 6), (2024, 14)];

/// Exactly one full page (100 items)
pub const FULL_PAGE_SHAPE: &[(i32, usize)] = &[(2016, 20), (2018, 30), (2020, 30), (2022, 20)];

/// A single plain term
pub fn simple_terms() -> Vec<SearchTerm> {
    vec![SearchTerm::new("lidar")]
}

/// `"quantum computing" AND blockchain OR fusion`
pub fn complex_terms() -> Vec<SearchTerm> {
    vec![
        SearchTerm::new("quantum computing").exact(),
        SearchTerm::new("blockchain").with_operator(SearchOperator::Or),
        SearchTerm::new("fusion"),
    ]
}

/// Provider error body for an invalid credential
pub const INVALID_KEY_BODY: &str = r#"{"error": "Invalid API key. Your API key should be here: https://serpapi.com/manage-api-key"}"#;
