//! Search configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SEARCH_COUNT, DEFAULT_TIME_MATCHING};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchConfig {
    /// Apply recency decay when ranking. Default: true.
    pub time_matching: Option<bool>,
    /// Number of results printed by `search`. Default: 1.
    pub count: Option<usize>,
}

impl SearchConfig {
    pub fn effective_time_matching(&self) -> bool {
        self.time_matching.unwrap_or(DEFAULT_TIME_MATCHING)
    }

    pub fn effective_count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_SEARCH_COUNT)
    }
}
