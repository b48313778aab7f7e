//! Prune configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_ENTRIES;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PruneConfig {
    /// Entries kept after pruning; 0 disables the limit. Default: 1000.
    pub max_entries: Option<usize>,
}

impl PruneConfig {
    pub fn effective_max_entries(&self) -> usize {
        self.max_entries.unwrap_or(DEFAULT_MAX_ENTRIES)
    }
}
