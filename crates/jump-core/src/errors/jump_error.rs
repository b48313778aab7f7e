//! Top-level error aggregating the subsystem errors.

use super::error_code::{self, JumpErrorCode};
use super::{ConfigError, ImportError, StoreError};

/// Errors surfaced by a subcommand run.
#[derive(Debug, thiserror::Error)]
pub enum JumpError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl JumpErrorCode for JumpError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Store(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Import(e) => e.error_code(),
            Self::InvalidArgument(_) => error_code::INVALID_ARGUMENT,
            Self::Output(_) => error_code::OUTPUT_ERROR,
        }
    }
}
