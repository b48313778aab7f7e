//! JumpErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to provide a structured
/// error code string alongside its human-readable message.
pub trait JumpErrorCode {
    /// Returns the error code string (e.g., "STORE_IO").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const STORE_IO: &str = "STORE_IO";
pub const SNAPSHOT_CORRUPT: &str = "SNAPSHOT_CORRUPT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const IMPORT_ERROR: &str = "IMPORT_ERROR";
pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const OUTPUT_ERROR: &str = "OUTPUT_ERROR";
