//! # jump-core
//!
//! Foundation crate for the jump directory index.
//! Defines shared types, the index trait, errors, config, paths, and tracing setup.
//! The store and CLI crates depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod paths;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::JumpConfig;
pub use errors::{ConfigError, ImportError, JumpError, StoreError};
pub use models::{Entry, Options, PruneReport, SearchOutcome, Weight};
pub use traits::FrecencyIndex;
