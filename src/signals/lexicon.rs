//! Static lookup tables used by the text-signal heuristics
//!
//! Table order is significant: country aliases overlap (a "u.s." article
//! mentioning "uk" resolves to USA, "ukraine" matches the UK alias "uk") and
//! the first matching entry wins.

/// Country name to lower-case aliases, matched as substrings in order
pub const COUNTRIES: &[(&str, &[&str])] = &[
    ("USA", &["united states", "usa", "u.s.", "america"]),
    ("UK", &["united kingdom", "uk", "britain", "england"]),
    ("China", &["china", "chinese"]),
    ("Japan", &["japan", "japanese"]),
    ("Germany", &["germany", "german"]),
    ("France", &["france", "french"]),
    ("Spain", &["spain", "spanish"]),
    ("Italy", &["italy", "italian"]),
    ("India", &["india", "indian"]),
    ("Brazil", &["brazil", "brazilian"]),
    ("Canada", &["canada", "canadian"]),
    ("Australia", &["australia", "australian"]),
    ("South Korea", &["south korea", "korea"]),
    ("Russia", &["russia", "russian"]),
    ("Netherlands", &["netherlands", "dutch"]),
    ("Sweden", &["sweden", "swedish"]),
    ("Switzerland", &["switzerland", "swiss"]),
    ("Singapore", &["singapore"]),
    ("Israel", &["israel", "israeli"]),
    ("Norway", &["norway", "norwegian"]),
    ("Denmark", &["denmark", "danish"]),
    ("Finland", &["finland", "finnish"]),
    ("Belgium", &["belgium", "belgian"]),
    ("Austria", &["austria", "austrian"]),
    ("Ireland", &["ireland", "irish"]),
    ("Portugal", &["portugal", "portuguese"]),
    ("Greece", &["greece", "greek"]),
    ("Poland", &["poland", "polish"]),
    ("Turkey", &["turkey", "turkish"]),
    ("Mexico", &["mexico", "mexican"]),
    ("Argentina", &["argentina"]),
    ("Chile", &["chile"]),
    ("Colombia", &["colombia"]),
    ("Egypt", &["egypt"]),
    ("Nigeria", &["nigeria"]),
    ("South Africa", &["south africa"]),
];

/// Words counted as positive coverage
pub const POSITIVE_WORDS: &[&str] = &[
    "breakthrough",
    "innovative",
    "revolutionary",
    "success",
    "leading",
    "advanced",
    "improved",
    "better",
    "growth",
    "increase",
    "promising",
    "potential",
    "opportunity",
    "advantage",
    "benefit",
    "progress",
    "development",
    "achievement",
    "excellent",
    "outstanding",
    "superior",
];

/// Words counted as negative coverage
pub const NEGATIVE_WORDS: &[&str] = &[
    "decline",
    "failure",
    "problem",
    "issue",
    "challenge",
    "difficult",
    "decrease",
    "drop",
    "fall",
    "crisis",
    "concern",
    "risk",
    "threat",
    "limitation",
    "obstacle",
    "setback",
    "disappointment",
    "weak",
    "poor",
    "negative",
    "loss",
    "reduce",
    "cut",
    "eliminate",
];

/// Common English words never reported as keywords
pub const STOP_WORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we", "say",
    "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their", "what", "so",
    "up", "out", "if", "about", "who", "get", "which", "go", "me", "when", "make", "can", "like",
    "time", "no", "just", "him", "know", "take", "people", "into", "year", "your", "good", "some",
    "could", "them", "see", "other", "than", "then", "now", "look", "only", "come", "its", "over",
    "think", "also", "back", "after", "use", "two", "how", "our", "work", "first", "well", "way",
    "even", "new", "want", "because", "any", "these", "give", "day", "most", "us", "was", "is",
    "are", "were", "been", "based", "using", "since", "more", "has", "such", "may", "very", "both",
    "each", "between", "under", "same", "through", "until",
];
