//! Progress math over the award catalog

use super::catalog::AwardCatalog;

/// First threshold strictly greater than `depth`, or `None` once every award is earned
pub fn next_threshold(depth: u64, catalog: &AwardCatalog) -> Option<u64> {
    let awards = catalog.all();
    let idx = awards.partition_point(|a| a.threshold <= depth);
    awards.get(idx).map(|a| a.threshold)
}

/// Greatest threshold less than or equal to `depth`, or 0 when none exists
pub fn previous_threshold(depth: u64, catalog: &AwardCatalog) -> u64 {
    let awards = catalog.all();
    let idx = awards.partition_point(|a| a.threshold <= depth);
    if idx == 0 { 0 } else { awards[idx - 1].threshold }
}

/// Fraction of the way from the previous threshold to `next`, in [0, 1].
///
/// Returns 1.0 when there is no next threshold (terminal state).
pub fn progress_fraction(depth: u64, next: Option<u64>, catalog: &AwardCatalog) -> f32 {
    let Some(next) = next else {
        return 1.0;
    };
    let previous = previous_threshold(depth, catalog);
    let span = next.saturating_sub(previous).max(1);
    let delta = depth.saturating_sub(previous).min(span);
    (delta as f64 / span as f64) as f32
}

/// Number of awards whose threshold is at or below `depth`
pub fn earned_count(depth: u64, catalog: &AwardCatalog) -> usize {
    catalog.all().partition_point(|a| a.threshold <= depth)
}
