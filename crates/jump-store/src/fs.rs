//! On-disk validity check for stored paths.

use std::path::Path;

/// Predicate deciding whether a stored path is still a usable directory.
pub type DirCheck = fn(&str) -> bool;

/// Stat `path` and require a directory. Failures are logged at debug level;
/// callers that remove the entry report it themselves.
pub fn is_directory(path: &str) -> bool {
    match std::fs::metadata(Path::new(path)) {
        Ok(meta) if meta.is_dir() => true,
        Ok(_) => {
            tracing::debug!(path, "path is not a directory");
            false
        }
        Err(e) => {
            tracing::debug!(path, error = %e, "failed to stat path");
            false
        }
    }
}
