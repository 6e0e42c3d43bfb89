//! Text-signal extraction
//!
//! Pure heuristics turning free text into structured signals:
//! - [`year`] - publication year from text or provider date strings
//! - [`country`] - first country mentioned, by table order
//! - [`keywords`] - salient tokens outside the query vocabulary
//! - [`sentiment`] - lexicon-based polarity in [-1, 1]
//!
//! None of these fail: malformed input yields a safe default (current year,
//! no country, no keywords, neutral sentiment) so one bad item never aborts a
//! batch.

pub mod country;
pub mod keywords;
pub mod lexicon;
pub mod sentiment;
pub mod year;

pub use country::extract_country;
pub use keywords::{extract_keywords, MAX_KEYWORDS};
pub use sentiment::calculate_sentiment;
pub use year::{current_year, extract_year, extract_year_at, year_from_date};

use crate::models::{EnrichedResult, NewsItem, SearchTerm};

/// Stateless enricher bound to a reference year
#[derive(Debug, Clone, Copy)]
pub struct SignalExtractor {
    current_year: i32,
}

impl Default for SignalExtractor {
    fn default() -> Self {
        Self::new(current_year())
    }
}

impl SignalExtractor {
    /// Create an extractor that treats `current_year` as "now"
    #[must_use]
    pub fn new(current_year: i32) -> Self {
        Self { current_year }
    }

    /// Reference year used for validation and fallbacks
    #[must_use]
    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Derive the publication year of a raw item
    ///
    /// The provider's date string is preferred; the text heuristic over
    /// title, snippet and date is the fallback.
    pub fn year_of(&self, item: &NewsItem) -> i32 {
        year_from_date(&item.date, self.current_year).unwrap_or_else(|| {
            let text = format!("{} {} {}", item.title, item.snippet, item.date);
            extract_year_at(&text, self.current_year)
        })
    }

    /// Build an [`EnrichedResult`] from a raw item
    pub fn enrich(&self, item: &NewsItem, search_terms: &[SearchTerm]) -> EnrichedResult {
        let text = item.text();

        EnrichedResult {
            title: item.title.clone(),
            link: item.link.clone(),
            snippet: item.snippet.clone(),
            source: item.source.clone(),
            date: item.date.clone(),
            year: self.year_of(item),
            sentiment: calculate_sentiment(&text),
            country: extract_country(&text).map(str::to_string),
            keywords: extract_keywords(&text, search_terms),
        }
    }
}
