//! Legacy database import errors.

use super::error_code::{self, JumpErrorCode};

/// Errors that abort an import. Malformed lines are not errors; they are skipped.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("legacy database not found: {path}")]
    NotFound { path: String },

    #[error("failed to read legacy database {path}: {message}")]
    Read { path: String, message: String },
}

impl JumpErrorCode for ImportError {
    fn error_code(&self) -> &'static str {
        error_code::IMPORT_ERROR
    }
}
