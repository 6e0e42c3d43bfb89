//! Publication-year extraction from free text and provider date strings

use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;
use std::sync::OnceLock;

/// Earliest year accepted as a publication year
pub const MIN_VALID_YEAR: i32 = 1970;

/// Latest year ever reported, regardless of the clock
pub const MAX_SUPPORTED_YEAR: i32 = 2025;

/// Current calendar year from the system clock (UTC)
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Upper bound for valid years given the current year
#[must_use]
pub fn max_valid_year(current_year: i32) -> i32 {
    current_year.min(MAX_SUPPORTED_YEAR)
}

fn is_valid_year(year: i32, current_year: i32) -> bool {
    (MIN_VALID_YEAR..=max_valid_year(current_year)).contains(&year)
}

/// Provider dates are trusted up to the clock, without the text cap
fn is_valid_date_year(year: i32, current_year: i32) -> bool {
    (MIN_VALID_YEAR..=current_year).contains(&year)
}

fn size_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\d+\s*(?:kb|mb|gb|kib|mib|gib|bytes?)").expect("Invalid regex pattern")
    })
}

/// Explicit publication markers, then day-first dates
fn dated_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        const MONTH: &str = r"(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?";
        [
            r"published.*?in\s*(20\d{2})".to_string(),
            r"publication\s*date:?\s*(20\d{2})".to_string(),
            r"©\s*(20\d{2})".to_string(),
            format!(r"\d{{1,2}}\s*{MONTH}\s*(20\d{{2}})"),
        ]
        .iter()
        .map(|p| Regex::new(p).expect("Invalid regex pattern"))
        .collect()
    })
}

fn bare_year_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(19[7-9]\d|20[0-2]\d)\b").expect("Invalid regex pattern"))
}

/// Extract the publication year mentioned in `text`
///
/// See [`extract_year_at`].
pub fn extract_year(text: &str) -> i32 {
    extract_year_at(text, current_year())
}

/// Extract the publication year mentioned in `text` relative to `current_year`
///
/// Search order:
/// 1. explicit markers ("published ... in 2021", "publication date: 2021", "© 2021")
///    and day-first dates ("5 March 2021"); the first valid match wins
/// 2. any bare year token in 1970-2029; the most recent valid one wins
///
/// Falls back to `min(current_year, 2025)` when nothing matches. Size tokens
/// such as "2048kb" are removed first so they are never read as years.
pub fn extract_year_at(text: &str, current_year: i32) -> i32 {
    let lowered = text.to_lowercase();
    let cleaned = size_token_re().replace_all(&lowered, "");

    for pattern in dated_patterns() {
        for caps in pattern.captures_iter(&cleaned) {
            if let Some(year) = caps.get(1).and_then(|m| m.as_str().parse::<i32>().ok()) {
                if is_valid_year(year, current_year) {
                    return year;
                }
            }
        }
    }

    bare_year_re()
        .captures_iter(&cleaned)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<i32>().ok())
        .filter(|&year| is_valid_year(year, current_year))
        .max()
        .unwrap_or_else(|| max_valid_year(current_year))
}

/// Parse the year out of a provider date string
///
/// Accepts `YYYY-MM-DD`, ISO timestamps, `MM/DD/YYYY[, time]`, `Mon D, YYYY`,
/// `Month D, YYYY`, a bare `YYYY`, or any embedded 19xx/20xx token. Valid
/// years run from 1970 to `current_year`. Returns `None` for relative dates
/// ("3 days ago") and out-of-range years.
pub fn year_from_date(date: &str, current_year: i32) -> Option<i32> {
    static EMBEDDED: OnceLock<Regex> = OnceLock::new();

    let date = date.trim();
    if date.is_empty() {
        return None;
    }

    let head = date.split('T').next().unwrap_or(date);
    let candidates = [
        (head, "%Y-%m-%d"),
        (date.split(',').next().unwrap_or(date), "%m/%d/%Y"),
        (date, "%b %d, %Y"),
        (date, "%B %d, %Y"),
    ];

    let parsed = candidates
        .iter()
        .find_map(|(s, fmt)| NaiveDate::parse_from_str(s.trim(), fmt).ok())
        .map(|d| d.year())
        .or_else(|| {
            if date.len() == 4 && date.chars().all(|c| c.is_ascii_digit()) {
                date.parse().ok()
            } else {
                None
            }
        })
        .or_else(|| {
            let re = EMBEDDED
                .get_or_init(|| Regex::new(r"20\d{2}|19\d{2}").expect("Invalid regex pattern"));
            re.find(date).and_then(|m| m.as_str().parse().ok())
        })?;

    is_valid_date_year(parsed, current_year).then_some(parsed)
}
