//! Snapshot persistence errors.

use super::error_code::{self, JumpErrorCode};

/// Errors raised while reading or writing the weight snapshot.
///
/// Only the write-side variants reach the caller of `save`; the
/// read-side variants are logged and recovered from by the lenient loader.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to create directory {path}: {message}")]
    CreateDir { path: String, message: String },

    #[error("failed to create temporary file in {dir}: {message}")]
    TempFile { dir: String, message: String },

    #[error("failed to encode snapshot: {message}")]
    Encode { message: String },

    #[error("failed to write {path}: {message}")]
    Write { path: String, message: String },

    #[error("failed to rename {from} to {to}: {message}")]
    Rename {
        from: String,
        to: String,
        message: String,
    },

    #[error("failed to read snapshot {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to decode snapshot {path}: {message}")]
    Decode { path: String, message: String },
}

impl JumpErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Decode { .. } => error_code::SNAPSHOT_CORRUPT,
            _ => error_code::STORE_IO,
        }
    }
}
