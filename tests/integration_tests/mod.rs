//! Integration tests module
//!
//! This module provides end-to-end tests for the hypecycle pipeline,
//! including:
//! - Search term → query → budgeted retrieval → analysis → report
//! - Strategy selection and call budgets observed at the provider
//! - Error handling and partial-failure scenarios

pub mod error_scenarios;
pub mod fixtures;
pub mod pipeline_test;
