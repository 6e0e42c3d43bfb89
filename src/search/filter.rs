//! Validity predicate applied to every raw provider item

use crate::models::NewsItem;
use crate::utils::extract_domain;

/// Shortest snippet (in characters) worth analyzing
pub const MIN_SNIPPET_CHARS: usize = 50;

/// Social and pin-board hosts whose snippets are not news coverage
pub const BLOCKED_DOMAINS: &[&str] = &["pinterest", "facebook", "twitter", "instagram"];

/// Why an item was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    MissingField,
    ShortSnippet,
    BlockedDomain,
}

/// Check an item, returning the first reason to reject it
pub fn check(item: &NewsItem) -> Result<(), Rejection> {
    if item.title.trim().is_empty() || item.link.trim().is_empty() || item.snippet.is_empty() {
        return Err(Rejection::MissingField);
    }

    if item.snippet.chars().count() < MIN_SNIPPET_CHARS {
        return Err(Rejection::ShortSnippet);
    }

    if is_blocked(&item.link) {
        return Err(Rejection::BlockedDomain);
    }

    Ok(())
}

/// Whether an item should be enriched and kept
pub fn is_valid(item: &NewsItem) -> bool {
    check(item).is_ok()
}

/// Match the link's host against [`BLOCKED_DOMAINS`]
///
/// Unparseable links are matched on the whole lower-cased string.
fn is_blocked(link: &str) -> bool {
    let haystack = extract_domain(link).unwrap_or_else(|_| link.to_lowercase());
    BLOCKED_DOMAINS.iter().any(|domain| haystack.contains(domain))
}
