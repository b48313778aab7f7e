//! The weight store: in-memory map, dirty bit, and snapshot handle.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use jump_core::errors::StoreError;
use jump_core::models::{Entry, Options, PruneReport, SearchOutcome, Weight};
use jump_core::traits::FrecencyIndex;

use crate::dump::{self, DumpOpts, DumpOutput};
use crate::fs::{self, DirCheck};
use crate::policy;
use crate::prune;
use crate::search::{self, Searcher};
use crate::snapshot::SnapshotFile;
use crate::weights::{self, WeightMap};

/// Frecency index backed by a snapshot file.
///
/// Owned by one process for its lifetime; nothing here is synchronized.
pub struct WeightStore {
    weights: WeightMap,
    options: Options,
    dirty: bool,
    snapshot: SnapshotFile,
    dir_check: DirCheck,
}

impl WeightStore {
    /// Open the store at `path`.
    ///
    /// A missing snapshot gives an empty store; an unreadable or corrupt one
    /// is logged and also gives an empty store.
    pub fn open(path: impl Into<PathBuf>, options: Options) -> Self {
        let snapshot = SnapshotFile::new(path);
        let weights = snapshot.load_or_empty();
        tracing::debug!(
            path = %snapshot.path().display(),
            entries = weights.len(),
            "opened weight store"
        );
        Self {
            weights,
            options,
            dirty: false,
            snapshot,
            dir_check: fs::is_directory,
        }
    }

    /// Replace the on-disk directory check (tests use a pure predicate).
    pub fn with_dir_check(mut self, dir_check: DirCheck) -> Self {
        self.dir_check = dir_check;
        self
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn snapshot(&self) -> &SnapshotFile {
        &self.snapshot
    }

    pub fn get(&self, path: &str) -> Option<Weight> {
        self.weights.get(path).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Read-only access to the underlying map.
    pub fn weights(&self) -> &WeightMap {
        &self.weights
    }

    /// All entries, highest weight first.
    pub fn entries(&self) -> Vec<Entry> {
        weights::sorted_descending(&self.weights)
    }

    pub fn dirty(&self) -> bool {
        self.dirty
    }

    /// Apply `delta` to `path` per [`policy::apply`], stamping the current time.
    pub fn adjust_weight(&mut self, path: &str, delta: f64) {
        self.adjust_weight_at(path, delta, Utc::now());
    }

    /// [`adjust_weight`](Self::adjust_weight) with an explicit timestamp.
    pub fn adjust_weight_at(&mut self, path: &str, delta: f64, now: DateTime<Utc>) {
        self.dirty = true;
        let current = self.weights.get(path).map_or(0.0, |w| w.value);
        match policy::apply(current, delta) {
            Some(value) => {
                self.weights.insert(path.to_string(), Weight::at(value, now));
            }
            None => {
                tracing::debug!(path, "weight dropped to zero, removing");
                self.weights.remove(path);
            }
        }
    }

    pub fn remove(&mut self, path: &str) {
        self.dirty = true;
        self.weights.remove(path);
    }

    /// Swap in a new set of entries wholesale.
    ///
    /// Entries without a positive finite weight are skipped. Later
    /// duplicates win.
    pub fn replace(&mut self, entries: Vec<Entry>) {
        let mut map = WeightMap::default();
        for entry in entries {
            if weights::is_storable(entry.weight) {
                let weight = entry.to_weight();
                map.insert(entry.path, weight);
            } else {
                tracing::warn!(path = %entry.path, weight = entry.weight, "skipping entry with non-positive weight");
            }
        }
        self.weights = map;
        self.dirty = true;
    }

    /// Rank stored paths for the query and return up to `count` directories.
    ///
    /// Candidates that fail the directory check are removed from the store.
    pub fn search<S: AsRef<str>>(&mut self, fragments: &[S], count: usize) -> SearchOutcome {
        self.search_at(fragments, count, Utc::now())
    }

    /// [`search`](Self::search) with an explicit clock for recency decay.
    pub fn search_at<S: AsRef<str>>(
        &mut self,
        fragments: &[S],
        count: usize,
        now: DateTime<Utc>,
    ) -> SearchOutcome {
        let needle = search::join_fragments(fragments);
        if needle.is_empty() || self.weights.is_empty() {
            return SearchOutcome::default();
        }

        let (results, removed) = {
            let mut searcher = Searcher::new(&self.weights, self.options, now);
            searcher.score_all(&needle);
            searcher.best(count, self.dir_check)
        };

        for path in &removed {
            tracing::warn!(path = %path, "removing bad path");
            self.remove(path);
        }

        SearchOutcome { results, removed }
    }

    /// Remove invalid and excluded paths, then keep at most `max_entries`
    /// (`0` means no limit).
    pub fn prune(&mut self, max_entries: usize, exclude_patterns: &[String]) -> PruneReport {
        let report = prune::prune(
            &mut self.weights,
            max_entries,
            exclude_patterns,
            self.dir_check,
        );
        if report.total_removed() > 0 {
            self.dirty = true;
        }
        report
    }

    /// Write the snapshot if there are unsaved changes.
    ///
    /// The dirty bit is cleared only on success.
    pub fn save(&mut self) -> Result<(), StoreError> {
        if !self.dirty {
            tracing::debug!("store not dirty, skipping save");
            return Ok(());
        }
        self.snapshot.save(&self.weights)?;
        self.dirty = false;
        Ok(())
    }

    /// Serializable listing, highest weight first.
    pub fn dump(&self, opts: &DumpOpts) -> DumpOutput {
        dump::dump(self.entries(), opts)
    }
}

impl FrecencyIndex for WeightStore {
    fn adjust_weight(&mut self, path: &str, delta: f64) {
        WeightStore::adjust_weight(self, path, delta);
    }

    fn remove(&mut self, path: &str) {
        WeightStore::remove(self, path);
    }

    fn search(&mut self, fragments: &[String], count: usize) -> SearchOutcome {
        WeightStore::search(self, fragments, count)
    }

    fn prune(&mut self, max_entries: usize, exclude_patterns: &[String]) -> PruneReport {
        WeightStore::prune(self, max_entries, exclude_patterns)
    }

    fn save(&mut self) -> Result<(), StoreError> {
        WeightStore::save(self)
    }

    fn dirty(&self) -> bool {
        WeightStore::dirty(self)
    }
}
