//! Query complexity estimation
//!
//! A heuristic cost estimate, not a parser: malformed or ambiguous queries
//! never error, they simply score low. The level selects the retrieval
//! strategy of the orchestrator.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Operator tokens; each contributes at most once
const BOOLEAN_OPERATORS: &[&str] = &["AND", "OR", "NOT", "&", "|", "-"];

/// Score added per operator type present
const OPERATOR_WEIGHT: u32 = 2;

/// Scores above this are complex
const SIMPLE_MAX_SCORE: u32 = 2;

/// Retrieval strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComplexityLevel {
    Simple,
    Complex,
}

impl ComplexityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Complex => "complex",
        }
    }
}

impl std::fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification outcome with the score and a readable reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryComplexity {
    pub level: ComplexityLevel,
    pub score: u32,
    pub reason: String,
}

fn quoted_phrase_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""[^"]+""#).expect("Invalid regex pattern"))
}

/// Score `query` and classify it as simple or complex
///
/// - +2 for each operator type found anywhere in the upper-cased query
///   (substring test, so "OR" also fires on "WORLD")
/// - + the number of quoted phrases, when there is more than one
/// - + (words longer than 2 chars outside quotes - 2), when that count exceeds 2
pub fn classify(query: &str) -> QueryComplexity {
    let mut score = 0;
    let mut factors: Vec<String> = Vec::new();

    let upper = query.to_uppercase();
    for operator in BOOLEAN_OPERATORS {
        if upper.contains(operator) {
            score += OPERATOR_WEIGHT;
            factors.push(format!("operator {operator}"));
        }
    }

    let quoted = quoted_phrase_re().find_iter(query).count() as u32;
    if quoted > 1 {
        score += quoted;
        factors.push(format!("{quoted} exact phrases"));
    }

    let unquoted = quoted_phrase_re().replace_all(query, "");
    let word_count = unquoted
        .split_whitespace()
        .filter(|w| w.chars().count() > 2)
        .count() as u32;
    if word_count > 2 {
        score += word_count - 2;
        factors.push(format!("{word_count} separate words"));
    }

    let summary = |n: usize| factors.iter().take(n).cloned().collect::<Vec<_>>().join(", ");
    let (level, reason) = if score == 0 {
        (ComplexityLevel::Simple, "single term, no operators".to_string())
    } else if score <= SIMPLE_MAX_SCORE {
        (ComplexityLevel::Simple, format!("low complexity: {}", summary(2)))
    } else {
        (ComplexityLevel::Complex, format!("high complexity: {}", summary(3)))
    };

    QueryComplexity {
        level,
        score,
        reason,
    }
}
