use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A relevance value together with the time it was last changed.
///
/// Entries held by a store always carry `value > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub value: f64,
    pub updated_at: DateTime<Utc>,
}

impl Weight {
    /// Create a weight stamped with the current time.
    pub fn new(value: f64) -> Self {
        Self::at(value, Utc::now())
    }

    /// Create a weight with an explicit timestamp.
    pub fn at(value: f64, updated_at: DateTime<Utc>) -> Self {
        Self { value, updated_at }
    }

    /// Whole seconds elapsed between the last update and `now`, never negative.
    pub fn seconds_since_update(&self, now: DateTime<Utc>) -> f64 {
        (now - self.updated_at).num_seconds().max(0) as f64
    }
}
