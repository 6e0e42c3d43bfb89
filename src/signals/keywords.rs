//! Keyword extraction excluding the query's own vocabulary

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use super::lexicon::STOP_WORDS;
use crate::models::SearchTerm;

/// Maximum number of keywords kept per result
pub const MAX_KEYWORDS: usize = 5;

fn tokenize(text: &str) -> Vec<String> {
    static NON_WORD: OnceLock<Regex> = OnceLock::new();
    let re = NON_WORD.get_or_init(|| Regex::new(r"[^\w\s]").expect("Invalid regex pattern"));

    re.replace_all(&text.to_lowercase(), " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn stop_words() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

fn is_year_shaped(token: &str) -> bool {
    token.len() == 4 && token.chars().all(|c| c.is_ascii_digit())
}

/// Lower-cased tokens of every search term
pub fn search_vocabulary(search_terms: &[SearchTerm]) -> HashSet<String> {
    search_terms
        .iter()
        .flat_map(|term| tokenize(&term.value))
        .collect()
}

/// Extract up to [`MAX_KEYWORDS`] keywords in text order
///
/// A token survives when it is purely alphabetic, longer than three
/// characters, not a stop word, not part of the search vocabulary and not
/// shaped like a year. Repeated tokens are kept.
pub fn extract_keywords(text: &str, search_terms: &[SearchTerm]) -> Vec<String> {
    let excluded = search_vocabulary(search_terms);
    let stop = stop_words();

    tokenize(text)
        .into_iter()
        .filter(|token| {
            token.chars().count() > 3
                && token.chars().all(char::is_alphabetic)
                && !is_year_shaped(token)
                && !stop.contains(token.as_str())
                && !excluded.contains(token)
        })
        .take(MAX_KEYWORDS)
        .collect()
}
