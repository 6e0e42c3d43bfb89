//! Common test utilities

use hypecycle::config::Config;
use serde_json::{json, Value};

/// Snippet long enough to pass the validity filter
pub const LONG_SNIPPET: &str =
    "Analysts expect the technology to reshape the industry as pilots expand into production.";

/// Provider record dated `year`, unique by `tag` and `index`
pub fn news_item(tag: &str, index: usize, year: i32) -> Value {
    json!({
        "title": format!("{tag} story {index} from {year}"),
        "link": format!("https://news.example.com/{tag}/{year}/{index}"),
        "snippet": LONG_SNIPPET,
        "source": { "name": "Example Wire" },
        "date": format!("{year}-03-15"),
    })
}

/// Records spread over years, `count` per year
pub fn items_for_years(tag: &str, counts: &[(i32, usize)]) -> Vec<Value> {
    counts
        .iter()
        .flat_map(|&(year, count)| (0..count).map(move |i| news_item(tag, i, year)))
        .collect()
}

/// Provider response body
pub fn news_page(items: Vec<Value>) -> Value {
    json!({ "news_results": items })
}

/// Configuration pointing at a mock provider with no pacing
pub fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.search.api_key = Some("test-key".to_string());
    config.search.base_url = base_url.to_string();
    config.search.rate_limit = 100;
    config.search.request_timeout_secs = 5;
    config.retrieval.call_delay_ms = 0;
    config
}
