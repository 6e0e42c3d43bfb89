//! Lexicon-based sentiment score
//!
//! This is a coarse approximation, not an NLP model: it checks which words of
//! two fixed lexicons occur anywhere in the text and normalizes by length. It
//! makes no claim of linguistic accuracy (negation, sarcasm and context are
//! ignored, and "drop" also matches inside "dropbox").

use super::lexicon::{NEGATIVE_WORDS, POSITIVE_WORDS};

/// Score `text` in [-1, 1]
///
/// Each lexicon word present (case-insensitive substring) counts once.
/// The score is `(positive - negative) / max(word_count / 10, 1)`, clamped.
/// Empty text scores 0.
pub fn calculate_sentiment(text: &str) -> f64 {
    let word_count = text.split_whitespace().count();
    if word_count == 0 {
        return 0.0;
    }

    let lowered = text.to_lowercase();
    let hits = |lexicon: &[&str]| lexicon.iter().filter(|w| lowered.contains(*w)).count();
    let positive = hits(POSITIVE_WORDS) as f64;
    let negative = hits(NEGATIVE_WORDS) as f64;

    let scale = (word_count as f64 / 10.0).max(1.0);
    ((positive - negative) / scale).clamp(-1.0, 1.0)
}
