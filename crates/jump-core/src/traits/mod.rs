//! Capability traits implemented by index backends.

pub mod frecency_index;

pub use frecency_index::FrecencyIndex;
