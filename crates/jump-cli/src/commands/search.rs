//! `jump search`: print the best matches for a query.

use std::io::Write;

use jump_core::errors::JumpError;
use jump_core::traits::FrecencyIndex;

pub fn run<I: FrecencyIndex, W: Write>(
    index: &mut I,
    fragments: &[String],
    count: usize,
    verbose: bool,
    out: &mut W,
) -> Result<(), JumpError> {
    let outcome = index.search(fragments, count);
    for entry in &outcome.results {
        if verbose {
            writeln!(out, "{:10.4}  {}", entry.weight, entry.path)?;
        } else {
            writeln!(out, "{}", entry.path)?;
        }
    }
    Ok(())
}
