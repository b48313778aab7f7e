//! `jump import`: replace the database with a legacy autojump file.

use std::path::Path;

use jump_core::errors::JumpError;
use jump_store::{import, WeightStore};

/// Returns the number of entries kept after import.
pub fn run(store: &mut WeightStore, path: &Path) -> Result<usize, JumpError> {
    let entries = import::load_legacy_file(path)?;
    store.replace(entries);
    Ok(store.len())
}
