//! # jump-cli
//!
//! Argument parsing and subcommand dispatch for the `jump` binary.

pub mod app;
pub mod cli;
pub mod commands;

use std::io::Write;

pub use app::App;
pub use cli::{Cli, Command};

/// Resolve the run context, execute the subcommand, and save if dirty.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let mut app = App::from_cli(cli)?;
    app.execute(&cli.command, out)?;
    app.finish()
}
