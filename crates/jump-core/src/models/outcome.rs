use serde::Serialize;

use super::Entry;

/// Result of a ranked search.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchOutcome {
    /// Valid directories, best first. `weight` holds the match score.
    pub results: Vec<Entry>,
    /// Paths that failed the directory check and were dropped from the store.
    pub removed: Vec<String>,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// The top-ranked result, if any.
    pub fn best(&self) -> Option<&Entry> {
        self.results.first()
    }
}

/// What a prune run removed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PruneReport {
    /// Paths that no longer exist or are not directories.
    pub invalid: Vec<String>,
    /// Paths matching an exclude pattern.
    pub excluded: Vec<String>,
    /// Lowest-weight paths dropped to respect the entry limit.
    pub overflow: Vec<String>,
}

impl PruneReport {
    pub fn total_removed(&self) -> usize {
        self.invalid.len() + self.excluded.len() + self.overflow.len()
    }
}
