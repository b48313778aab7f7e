//! Legacy autojump database import.
//!
//! Each line is `<weight><space or tab><path>`. Malformed lines are skipped
//! with a warning; only read failures abort.

use std::io::BufRead;
use std::path::Path;

use chrono::Utc;

use jump_core::errors::ImportError;
use jump_core::models::{Entry, Weight};

/// Parse legacy lines. Every entry is stamped with the current time.
///
/// Lines are read as raw bytes; a line that is not valid UTF-8 is skipped
/// like any other malformed line.
pub fn parse_legacy<R: BufRead>(reader: R, source: &str) -> Result<Vec<Entry>, ImportError> {
    let now = Utc::now();
    let mut entries = Vec::new();
    for (index, raw) in reader.split(b'\n').enumerate() {
        let raw = raw.map_err(|e| ImportError::Read {
            path: source.to_string(),
            message: e.to_string(),
        })?;
        let raw = raw.strip_suffix(b"\r").unwrap_or(&raw);
        let line = match std::str::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(line = index + 1, error = %e, "skipping line that is not valid UTF-8");
                continue;
            }
        };
        let Some(sep) = line.find(|c: char| c == ' ' || c == '\t') else {
            tracing::warn!(line = %line, "failed to split line");
            continue;
        };
        let (raw_weight, rest) = line.split_at(sep);
        let weight = match raw_weight.parse::<f64>() {
            Ok(weight) => weight,
            Err(_) => {
                tracing::warn!(line = %line, "failed to parse weight as a number");
                continue;
            }
        };
        let path = rest.trim();
        if path.is_empty() {
            tracing::warn!(line = %line, "line has no path");
            continue;
        }
        entries.push(Entry::new(path, Weight::at(weight, now)));
    }
    Ok(entries)
}

/// Open and parse a legacy database file.
pub fn load_legacy_file(path: &Path) -> Result<Vec<Entry>, ImportError> {
    let file = std::fs::File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ImportError::NotFound {
                path: path.display().to_string(),
            }
        } else {
            ImportError::Read {
                path: path.display().to_string(),
                message: e.to_string(),
            }
        }
    })?;
    let entries = parse_legacy(std::io::BufReader::new(file), &path.display().to_string())?;
    tracing::info!(path = %path.display(), entries = entries.len(), "parsed legacy database");
    Ok(entries)
}
