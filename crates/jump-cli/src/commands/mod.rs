//! Subcommand implementations.

pub mod dump;
pub mod import;
pub mod prune;
pub mod search;
pub mod update;
pub mod vars;
