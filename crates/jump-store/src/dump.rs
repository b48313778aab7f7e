//! Human- and JSON-readable listings of the store.

use std::io::Write;

use serde::Serialize;

use jump_core::models::Entry;
use jump_core::paths;

/// Listing options.
#[derive(Debug, Clone, Default)]
pub struct DumpOpts {
    /// Abbreviate the home directory as `~`.
    pub short: bool,
}

/// JSON shape printed by `jump dump`.
#[derive(Debug, Clone, Serialize)]
pub struct DumpOutput {
    pub format: &'static str,
    pub weights: Vec<Entry>,
}

/// Build a listing from entries already sorted highest weight first.
pub fn dump(mut entries: Vec<Entry>, opts: &DumpOpts) -> DumpOutput {
    if opts.short {
        match paths::home_dir() {
            Some(home) => {
                for entry in &mut entries {
                    entry.path = paths::shorten_path(&home, &entry.path);
                }
            }
            None => tracing::error!("failed to look up home directory"),
        }
    }
    DumpOutput {
        format: "json",
        weights: entries,
    }
}

/// Write one aligned line per entry: weight, update time, path.
pub fn write_table<W: Write>(entries: &[Entry], mut out: W) -> std::io::Result<()> {
    for entry in entries {
        let time = entry.updated_at.format("%Y-%m-%d %H:%M UTC").to_string();
        writeln!(out, "{:<12.6} {:<25} {}", entry.weight, time, entry.path)?;
    }
    Ok(())
}
