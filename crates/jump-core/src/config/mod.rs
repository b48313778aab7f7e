//! Configuration system for jump.
//! TOML-based, 3-layer resolution: CLI > env > config file > defaults.

pub mod jump_config;
pub mod prune_config;
pub mod search_config;
pub mod update_config;

pub use jump_config::{CliOverrides, JumpConfig};
pub use prune_config::PruneConfig;
pub use search_config::SearchConfig;
pub use update_config::UpdateConfig;
