//! Query-string construction and date-filter handling

use regex::Regex;
use std::sync::OnceLock;

use crate::models::SearchTerm;
use crate::utils::normalize_whitespace;

/// Builds provider query strings from caller search terms
pub struct QueryBuilder;

impl QueryBuilder {
    /// Join search terms into a boolean query
    ///
    /// Blank terms are skipped. Exact-match terms are quoted unless already
    /// quoted. Each term's operator follows it, except for the last non-blank
    /// term, so a trailing blank term never leaves a dangling operator.
    /// `min_year` adds an `after:` filter.
    pub fn build_query(terms: &[SearchTerm], min_year: Option<i32>) -> String {
        let usable: Vec<&SearchTerm> = terms.iter().filter(|t| !t.is_blank()).collect();
        if usable.is_empty() {
            return String::new();
        }

        // Position among usable terms, not the raw input
        let last = usable.len() - 1;
        let mut parts: Vec<String> = usable
            .iter()
            .enumerate()
            .map(|(i, term)| {
                let value = term.value.trim();
                let value = if term.exact_match && !is_quoted(value) {
                    format!("\"{value}\"")
                } else {
                    value.to_string()
                };

                if i == last {
                    value
                } else {
                    format!("{value} {}", term.operator)
                }
            })
            .collect();

        if let Some(year) = min_year {
            parts.push(format!("after:{year}"));
        }

        parts.join(" ")
    }

    /// Remove `after:`/`before:` filters (`YYYY` or `YYYY-MM-DD`)
    pub fn strip_date_filters(query: &str) -> String {
        static DATE_FILTER: OnceLock<Regex> = OnceLock::new();
        let re = DATE_FILTER.get_or_init(|| {
            Regex::new(r"\s*(?:after|before):\d{4}(?:-\d{2}-\d{2})?\s*")
                .expect("Invalid regex pattern")
        });

        normalize_whitespace(&re.replace_all(query, " "))
    }

    /// Restrict `query` to whole calendar years `start..=end`
    pub fn with_year_range(query: &str, start: i32, end: i32) -> String {
        format!("{query} after:{start}-01-01 before:{end}-12-31")
    }
}

fn is_quoted(value: &str) -> bool {
    value.len() >= 2 && value.starts_with('"') && value.ends_with('"')
}
