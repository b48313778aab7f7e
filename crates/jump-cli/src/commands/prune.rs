//! `jump prune`: drop stale, excluded, and low-weight entries.

use jump_core::models::PruneReport;
use jump_core::traits::FrecencyIndex;

pub fn run<I: FrecencyIndex>(
    index: &mut I,
    max_entries: usize,
    exclude_patterns: &[String],
) -> PruneReport {
    let report = index.prune(max_entries, exclude_patterns);
    tracing::info!(
        invalid = report.invalid.len(),
        excluded = report.excluded.len(),
        overflow = report.overflow.len(),
        "pruned database"
    );
    report
}
