//! Trigger, peak and trough detection over yearly aggregates

use crate::models::{InflectionPoint, InflectionPoints, YearlyStat};

/// Share of the mean yearly volume that marks the innovation trigger
pub const TRIGGER_THRESHOLD_RATIO: f64 = 0.1;

/// Locate the inflection points of an ascending yearly series
///
/// - trigger: first year whose volume reaches 10% of the mean
/// - peak: first year with the maximum volume
/// - trough: minimum-volume year strictly after the peak (first on ties)
pub fn detect_inflection_points(stats: &[YearlyStat]) -> InflectionPoints {
    if stats.is_empty() {
        return InflectionPoints::default();
    }

    let total: usize = stats.iter().map(|s| s.mention_count).sum();
    let threshold = total as f64 / stats.len() as f64 * TRIGGER_THRESHOLD_RATIO;

    let innovation_trigger = stats
        .iter()
        .find(|s| s.mention_count as f64 >= threshold)
        .map(InflectionPoint::from);

    // max_by_key keeps the last maximum, so fold to keep the first
    let peak = stats
        .iter()
        .fold(None::<&YearlyStat>, |best, stat| match best {
            Some(b) if b.mention_count >= stat.mention_count => Some(b),
            _ => Some(stat),
        });

    let trough = peak.and_then(|peak| {
        stats
            .iter()
            .filter(|s| s.year > peak.year)
            .min_by_key(|s| s.mention_count)
            .map(InflectionPoint::from)
    });

    InflectionPoints {
        innovation_trigger,
        peak: peak.map(InflectionPoint::from),
        trough,
    }
}
