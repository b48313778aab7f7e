//! `jump update`: record a visit to one or more directories.

use std::path::PathBuf;

use jump_core::errors::JumpError;
use jump_core::traits::FrecencyIndex;
use jump_store::DirCheck;

/// Apply `weight` to each directory, defaulting to the current directory.
///
/// Paths that are not directories or contain an exclude pattern are skipped.
/// Returns the number of paths updated.
pub fn run<I: FrecencyIndex>(
    index: &mut I,
    dirs: &[String],
    weight: f64,
    exclude_patterns: &[String],
    dir_check: DirCheck,
) -> Result<usize, JumpError> {
    if weight == 0.0 {
        return Err(JumpError::InvalidArgument(
            "ignoring update command for 0 weight".to_string(),
        ));
    }

    let targets: Vec<PathBuf> = if dirs.is_empty() {
        let cwd = std::env::current_dir().map_err(|e| {
            JumpError::InvalidArgument(format!(
                "no argument supplied and failed to read current directory: {e}"
            ))
        })?;
        vec![cwd]
    } else {
        dirs.iter().map(PathBuf::from).collect()
    };

    let mut updated = 0;
    for target in targets {
        let absolute = match std::path::absolute(&target) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(path = %target.display(), error = %e, "failed to resolve path");
                continue;
            }
        };
        let Some(path) = absolute.to_str() else {
            tracing::warn!(path = %absolute.display(), "skipping non-UTF-8 path");
            continue;
        };
        if !dir_check(path) {
            continue;
        }
        if let Some(pattern) = exclude_patterns
            .iter()
            .find(|p| !p.is_empty() && path.contains(p.as_str()))
        {
            tracing::debug!(path, pattern = %pattern, "skipping excluded path");
            continue;
        }
        index.adjust_weight(path, weight);
        updated += 1;
    }
    Ok(updated)
}
