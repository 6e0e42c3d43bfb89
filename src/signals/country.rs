//! Country detection by alias lookup

use super::lexicon::COUNTRIES;

/// Return the first country whose alias occurs in `text`
///
/// Matching is a case-insensitive substring test. Entries are tried in table
/// order, so overlapping aliases resolve by position rather than specificity.
pub fn extract_country(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    COUNTRIES
        .iter()
        .find(|(_, aliases)| aliases.iter().any(|alias| lowered.contains(alias)))
        .map(|(country, _)| *country)
}
