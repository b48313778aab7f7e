//! `jump dump`: print the database, highest weight first.

use std::io::Write;

use jump_core::errors::JumpError;
use jump_store::dump::{self, DumpOpts};
use jump_store::WeightStore;

pub fn run<W: Write>(
    store: &WeightStore,
    short_paths: bool,
    table: bool,
    out: &mut W,
) -> Result<(), JumpError> {
    let output = store.dump(&DumpOpts { short: short_paths });
    if table {
        dump::write_table(&output.weights, &mut *out)?;
    } else {
        serde_json::to_writer_pretty(&mut *out, &output).map_err(std::io::Error::from)?;
        writeln!(out)?;
    }
    Ok(())
}
