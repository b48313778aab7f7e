//! Error handling for jump.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod import_error;
pub mod jump_error;
pub mod store_error;

pub use config_error::ConfigError;
pub use error_code::JumpErrorCode;
pub use import_error::ImportError;
pub use jump_error::JumpError;
pub use store_error::StoreError;
