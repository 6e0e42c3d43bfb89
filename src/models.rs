// Core data structures for hype-cycle analysis

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Boolean operator joining a search term to the next one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum SearchOperator {
    #[default]
    And,
    Or,
    Not,
}

impl SearchOperator {
    /// Get the query-string token for this operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
        }
    }

    /// Parse an operator name, case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" => Some(Self::Not),
            _ => None,
        }
    }
}

impl std::fmt::Display for SearchOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single caller-supplied search term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTerm {
    pub value: String,
    #[serde(default)]
    pub operator: SearchOperator,
    #[serde(default)]
    pub exact_match: bool,
}

impl SearchTerm {
    /// Create a term joined with `AND`
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            operator: SearchOperator::And,
            exact_match: false,
        }
    }

    /// Set the joining operator
    pub fn with_operator(mut self, operator: SearchOperator) -> Self {
        self.operator = operator;
        self
    }

    /// Require an exact phrase match
    pub fn exact(mut self) -> Self {
        self.exact_match = true;
        self
    }

    /// Whether the term has any non-whitespace content
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Parses `value` or `OP:value` (e.g. `OR:fusion`).
impl FromStr for SearchTerm {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((prefix, rest)) = s.split_once(':') {
            if let Some(operator) = SearchOperator::parse(prefix) {
                return Ok(Self::new(rest).with_operator(operator));
            }
        }
        Ok(Self::new(s))
    }
}

/// Raw record from the news-search provider
///
/// Every field tolerates absence and is treated as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub link: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub snippet: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub source: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
}

impl NewsItem {
    /// Title and snippet joined for signal extraction
    pub fn text(&self) -> String {
        format!("{} {}", self.title, self.snippet)
    }
}

/// Accepts a string, `null`, a number, or an object carrying a `name`.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        serde_json::Value::Object(map) => map
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string(),
        other => other.to_string(),
    })
}

/// News item augmented with derived signals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
    pub source: String,
    pub date: String,
    pub year: i32,
    /// Heuristic score in [-1, 1]
    pub sentiment: f64,
    pub country: Option<String>,
    /// At most five keywords in text order
    pub keywords: Vec<String>,
}

/// Aggregate of one calendar year's coverage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyStat {
    pub year: i32,
    pub mention_count: usize,
    pub sentiment_mean: f64,
    pub sentiment_std: f64,
    /// Relative delta against the previous year; absent for the first year
    pub mention_change: Option<f64>,
    pub sentiment_change: Option<f64>,
}

/// A structurally significant year on the curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InflectionPoint {
    pub year: i32,
    pub mentions: usize,
    pub sentiment: f64,
}

impl From<&YearlyStat> for InflectionPoint {
    fn from(stat: &YearlyStat) -> Self {
        Self {
            year: stat.year,
            mentions: stat.mention_count,
            sentiment: stat.sentiment_mean,
        }
    }
}

/// Trigger, peak and trough years; any may be absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InflectionPoints {
    pub innovation_trigger: Option<InflectionPoint>,
    pub peak: Option<InflectionPoint>,
    pub trough: Option<InflectionPoint>,
}

/// The six named positions on the hype curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HypePhase {
    #[serde(rename = "Pre-Innovation Trigger")]
    PreInnovationTrigger,
    #[serde(rename = "Innovation Trigger")]
    InnovationTrigger,
    #[serde(rename = "Peak of Inflated Expectations")]
    PeakOfInflatedExpectations,
    #[serde(rename = "Trough of Disillusionment")]
    TroughOfDisillusionment,
    #[serde(rename = "Slope of Enlightenment")]
    SlopeOfEnlightenment,
    #[serde(rename = "Plateau of Productivity")]
    PlateauOfProductivity,
}

impl HypePhase {
    /// Display name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PreInnovationTrigger => "Pre-Innovation Trigger",
            Self::InnovationTrigger => "Innovation Trigger",
            Self::PeakOfInflatedExpectations => "Peak of Inflated Expectations",
            Self::TroughOfDisillusionment => "Trough of Disillusionment",
            Self::SlopeOfEnlightenment => "Slope of Enlightenment",
            Self::PlateauOfProductivity => "Plateau of Productivity",
        }
    }

    /// Parse a display name
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|phase| phase.as_str() == s.trim())
    }

    /// All phases in curve order
    pub fn all() -> Vec<Self> {
        vec![
            Self::PreInnovationTrigger,
            Self::InnovationTrigger,
            Self::PeakOfInflatedExpectations,
            Self::TroughOfDisillusionment,
            Self::SlopeOfEnlightenment,
            Self::PlateauOfProductivity,
        ]
    }
}

impl std::fmt::Display for HypePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classified phase with a confidence in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseVerdict {
    pub phase: HypePhase,
    pub confidence: f64,
}

impl PhaseVerdict {
    pub fn new(phase: HypePhase, confidence: f64) -> Self {
        Self { phase, confidence }
    }
}
