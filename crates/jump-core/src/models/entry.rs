use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Weight;

/// Flat view of one stored path, used for sorting, listing, and import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub path: String,
    pub weight: f64,
    #[serde(rename = "time")]
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    pub fn new(path: impl Into<String>, weight: Weight) -> Self {
        Self {
            path: path.into(),
            weight: weight.value,
            updated_at: weight.updated_at,
        }
    }

    /// The `(value, updated_at)` pair this entry was built from.
    pub fn to_weight(&self) -> Weight {
        Weight::at(self.weight, self.updated_at)
    }

    /// Highest weight first; equal weights put the most recently updated first.
    ///
    /// Path is the last key so the order never depends on map iteration.
    pub fn cmp_descending(a: &Entry, b: &Entry) -> Ordering {
        b.weight
            .total_cmp(&a.weight)
            .then_with(|| b.updated_at.cmp(&a.updated_at))
            .then_with(|| a.path.cmp(&b.path))
    }

    /// Lowest weight first; equal weights put the oldest update first.
    pub fn cmp_ascending(a: &Entry, b: &Entry) -> Ordering {
        a.weight
            .total_cmp(&b.weight)
            .then_with(|| a.updated_at.cmp(&b.updated_at))
            .then_with(|| a.path.cmp(&b.path))
    }
}
