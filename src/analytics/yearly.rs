//! Per-year aggregation of enriched results

use statrs::statistics::Statistics;
use std::collections::BTreeMap;

use crate::models::{EnrichedResult, YearlyStat};

/// Group results by year into ascending [`YearlyStat`]s
///
/// Sentiment spread is the sample standard deviation, 0 for single-item
/// years. Changes are measured against the previous *present* year, not the
/// previous calendar year.
pub fn yearly_stats(results: &[EnrichedResult]) -> Vec<YearlyStat> {
    let mut by_year: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
    for result in results {
        by_year.entry(result.year).or_default().push(result.sentiment);
    }

    let mut stats: Vec<YearlyStat> = by_year
        .into_iter()
        .map(|(year, sentiments)| {
            let sentiment_std = if sentiments.len() < 2 {
                0.0
            } else {
                sentiments.iter().std_dev()
            };

            YearlyStat {
                year,
                mention_count: sentiments.len(),
                sentiment_mean: sentiments.iter().mean(),
                sentiment_std,
                mention_change: None,
                sentiment_change: None,
            }
        })
        .collect();

    for i in 1..stats.len() {
        let (previous, current) = (&stats[i - 1], &stats[i]);
        let mention_change = relative_change(previous.mention_count, current.mention_count);
        let sentiment_change = current.sentiment_mean - previous.sentiment_mean;

        stats[i].mention_change = Some(mention_change);
        stats[i].sentiment_change = Some(sentiment_change);
    }

    stats
}

/// `(current - previous) / previous`, or 0 when there is no baseline
fn relative_change(previous: usize, current: usize) -> f64 {
    if previous == 0 {
        return 0.0;
    }
    (current as f64 - previous as f64) / previous as f64
}
