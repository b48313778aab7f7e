//! Shared data types for the directory index.

pub mod entry;
pub mod options;
pub mod outcome;
pub mod weight;

pub use entry::Entry;
pub use options::Options;
pub use outcome::{PruneReport, SearchOutcome};
pub use weight::Weight;
