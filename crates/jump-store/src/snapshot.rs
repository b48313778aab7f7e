//! Snapshot persistence.
//!
//! The snapshot is a versioned JSON document keyed by path:
//!
//! ```json
//! {"version":1,"weights":{"/home/me/src":{"value":15.0,"updated_at":"2024-01-01T00:00:00Z"}}}
//! ```
//!
//! Saves write a temporary file next to the destination and rename it over
//! the destination, so readers never observe a partial file.

use std::collections::BTreeMap;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use jump_core::constants::SNAPSHOT_VERSION;
use jump_core::errors::StoreError;
use jump_core::models::Weight;

use crate::weights::{self, WeightMap};

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    weights: BTreeMap<&'a str, &'a Weight>,
}

#[derive(Deserialize)]
struct SnapshotOwned {
    version: u32,
    #[serde(default)]
    weights: BTreeMap<String, Weight>,
}

/// Location of a snapshot on disk.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot. A missing file is an empty map, not an error.
    pub fn load(&self) -> Result<WeightMap, StoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "snapshot not found");
                return Ok(WeightMap::default());
            }
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.display().to_string(),
                    message: e.to_string(),
                })
            }
        };
        decode(&bytes).map_err(|message| StoreError::Decode {
            path: self.path.display().to_string(),
            message,
        })
    }

    /// Read the snapshot, logging any failure and falling back to an empty map.
    pub fn load_or_empty(&self) -> WeightMap {
        match self.load() {
            Ok(weights) => weights,
            Err(e) => {
                tracing::error!(error = %e, "failed to load snapshot, starting empty");
                WeightMap::default()
            }
        }
    }

    /// Atomically replace the snapshot with `weights`.
    ///
    /// The temporary file is removed if any step fails.
    pub fn save(&self, weights: &WeightMap) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        ensure_directory(dir)?;

        let mut temp = tempfile::Builder::new()
            .prefix(".jump.")
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|e| StoreError::TempFile {
                dir: dir.display().to_string(),
                message: e.to_string(),
            })?;
        let temp_path = temp.path().display().to_string();

        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            encode(weights, &mut writer)?;
            writer.flush().map_err(|e| StoreError::Write {
                path: temp_path.clone(),
                message: e.to_string(),
            })?;
        }
        temp.as_file().sync_all().map_err(|e| StoreError::Write {
            path: temp_path.clone(),
            message: e.to_string(),
        })?;

        temp.persist(&self.path).map_err(|e| StoreError::Rename {
            from: temp_path,
            to: self.path.display().to_string(),
            message: e.error.to_string(),
        })?;

        tracing::debug!(path = %self.path.display(), entries = weights.len(), "snapshot saved");
        Ok(())
    }
}

/// Serialize `weights` with keys in sorted order.
pub fn encode<W: Write>(weights: &WeightMap, writer: W) -> Result<(), StoreError> {
    let snapshot = SnapshotRef {
        version: SNAPSHOT_VERSION,
        weights: weights.iter().map(|(p, w)| (p.as_str(), w)).collect(),
    };
    serde_json::to_writer(writer, &snapshot).map_err(|e| StoreError::Encode {
        message: e.to_string(),
    })
}

/// Parse snapshot bytes. Blank input is an empty map.
///
/// Entries whose value is not a positive finite number are skipped.
pub fn decode(bytes: &[u8]) -> Result<WeightMap, String> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(WeightMap::default());
    }
    let snapshot: SnapshotOwned = serde_json::from_slice(bytes).map_err(|e| e.to_string())?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(format!("unsupported snapshot version {}", snapshot.version));
    }
    let mut map = WeightMap::default();
    for (path, weight) in snapshot.weights {
        if weights::is_storable(weight.value) {
            map.insert(path, weight);
        } else {
            tracing::warn!(path = %path, value = weight.value, "skipping non-positive snapshot entry");
        }
    }
    Ok(map)
}

/// Create `dir` (and parents) if missing, owner-only on unix.
fn ensure_directory(dir: &Path) -> Result<(), StoreError> {
    if dir.is_dir() {
        return Ok(());
    }
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder.create(dir).map_err(|e| StoreError::CreateDir {
        path: dir.display().to_string(),
        message: e.to_string(),
    })
}
