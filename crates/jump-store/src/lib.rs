//! # jump-store
//!
//! Frecency weight store for directory paths.
//!
//! - `policy`: sub-additive increase, linear decrease.
//! - `search`: three ordered match passes with compounding multipliers.
//! - `prune`: validity, exclude, and size-limit removal.
//! - `snapshot`: atomic write-temp-then-rename persistence, lenient load.

pub mod dump;
pub mod fs;
pub mod import;
pub mod policy;
pub mod prune;
pub mod search;
pub mod snapshot;
pub mod store;
pub mod weights;

pub use dump::{DumpOpts, DumpOutput};
pub use fs::DirCheck;
pub use search::Searcher;
pub use snapshot::SnapshotFile;
pub use store::WeightStore;
pub use weights::WeightMap;
