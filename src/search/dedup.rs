//! Result deduplication by link and by normalized title

use std::collections::HashSet;

use crate::models::EnrichedResult;

/// Drop results whose link or case-folded, trimmed title was already seen
///
/// First occurrence wins. Links and titles are tracked in independent sets,
/// so two items sharing only a title (or only a link) collapse to one.
pub fn deduplicate(results: Vec<EnrichedResult>) -> Vec<EnrichedResult> {
    let mut seen_links: HashSet<String> = HashSet::new();
    let mut seen_titles: HashSet<String> = HashSet::new();

    results
        .into_iter()
        .filter(|result| {
            let title = result.title.trim().to_lowercase();
            if seen_links.contains(&result.link) || seen_titles.contains(&title) {
                return false;
            }
            seen_links.insert(result.link.clone());
            seen_titles.insert(title);
            true
        })
        .collect()
}
