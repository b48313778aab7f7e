//! Update configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_UPDATE_WEIGHT;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UpdateConfig {
    /// Delta applied on each visit; may be negative. Default: 15.
    pub weight: Option<f64>,
}

impl UpdateConfig {
    pub fn effective_weight(&self) -> f64 {
        self.weight.unwrap_or(DEFAULT_UPDATE_WEIGHT)
    }
}
