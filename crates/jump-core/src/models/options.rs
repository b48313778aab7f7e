use serde::{Deserialize, Serialize};

/// Store behavior switches, fixed when the store is constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Log every scored candidate. No effect on results.
    pub debug: bool,
    /// Divide fresh scores by `ln(1 + seconds since update)`.
    pub time_matching: bool,
}
