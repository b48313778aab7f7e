use crate::errors::StoreError;
use crate::models::{PruneReport, SearchOutcome};

/// Operations the CLI needs from a directory index.
///
/// Single-writer: implementations hold no locks and assume one owner.
pub trait FrecencyIndex {
    /// Apply a signed weight delta to `path`.
    fn adjust_weight(&mut self, path: &str, delta: f64);

    /// Drop `path` unconditionally.
    fn remove(&mut self, path: &str);

    /// Rank stored paths against the query fragments and return up to `count`
    /// valid directories. Invalid candidates are removed as a side effect.
    fn search(&mut self, fragments: &[String], count: usize) -> SearchOutcome;

    /// Remove invalid and excluded paths, then trim to `max_entries`
    /// (`0` disables the size limit).
    fn prune(&mut self, max_entries: usize, exclude_patterns: &[String]) -> PruneReport;

    /// Persist pending changes. A clean index is a no-op.
    fn save(&mut self) -> Result<(), StoreError>;

    /// Whether unsaved changes exist.
    fn dirty(&self) -> bool;
}
