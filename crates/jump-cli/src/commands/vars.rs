//! `jump vars`: print resolved paths and config.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use jump_core::errors::JumpError;

use crate::app::App;

#[derive(Serialize)]
struct ConfigDisplay<'a> {
    paths: BTreeMap<&'static str, String>,
    #[serde(rename = "excludePatterns")]
    exclude_patterns: &'a [String],
}

pub fn run<W: Write>(app: &App, out: &mut W) -> Result<(), JumpError> {
    let mut paths = BTreeMap::new();
    paths.insert("config", app.config_path().display().to_string());
    paths.insert("database", app.database_path().display().to_string());
    let display = ConfigDisplay {
        paths,
        exclude_patterns: &app.config().exclude_patterns,
    };
    serde_json::to_writer_pretty(&mut *out, &display).map_err(std::io::Error::from)?;
    writeln!(out)?;
    Ok(())
}
