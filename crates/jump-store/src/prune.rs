//! Removal of stale, excluded, and low-weight entries.

use jump_core::models::PruneReport;

use crate::fs::DirCheck;
use crate::weights::{self, WeightMap};

/// Prune `weights` in place.
///
/// 1. Drop every path failing `dir_check` or containing an exclude pattern.
///    Always runs.
/// 2. If `max_entries > 0`, drop the lowest-weight entries (oldest first on
///    ties) until at most `max_entries` remain.
pub fn prune(
    weights: &mut WeightMap,
    max_entries: usize,
    exclude_patterns: &[String],
    dir_check: DirCheck,
) -> PruneReport {
    let mut report = PruneReport::default();

    let mut paths: Vec<String> = weights.keys().cloned().collect();
    paths.sort();
    for path in paths {
        if !dir_check(&path) {
            tracing::debug!(path = %path, "removing invalid entry");
            weights.remove(&path);
            report.invalid.push(path);
            continue;
        }
        if let Some(pattern) = matching_pattern(&path, exclude_patterns) {
            tracing::debug!(path = %path, pattern, "removing path matching exclude pattern");
            weights.remove(&path);
            report.excluded.push(path);
        }
    }

    if max_entries == 0 {
        return report;
    }
    let delete_count = weights.len().saturating_sub(max_entries);
    if delete_count > 0 {
        for entry in weights::sorted_ascending(weights).into_iter().take(delete_count) {
            weights.remove(&entry.path);
            report.overflow.push(entry.path);
        }
        tracing::debug!(removed = delete_count, max_entries, "trimmed low-weight entries");
    }

    report
}

fn matching_pattern<'p>(path: &str, patterns: &'p [String]) -> Option<&'p str> {
    patterns
        .iter()
        .map(String::as_str)
        .find(|pattern| !pattern.is_empty() && path.contains(pattern))
}
