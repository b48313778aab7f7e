//! Resolved run context: config, paths, and the open store.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;

use jump_core::errors::{ConfigError, JumpError};
use jump_core::models::Options;
use jump_core::{paths, JumpConfig};
use jump_store::{fs, WeightStore};

use crate::cli::{Cli, Command};
use crate::commands;

/// Everything a subcommand needs, built once per process.
pub struct App {
    config: JumpConfig,
    config_path: PathBuf,
    database_path: PathBuf,
    store: WeightStore,
}

impl App {
    /// Resolve config and open the store from parsed flags.
    ///
    /// An unreadable or unparsable config file falls back to defaults;
    /// invalid values are returned as errors.
    pub fn from_cli(cli: &Cli) -> Result<Self, JumpError> {
        let config_path = cli.config.clone().unwrap_or_else(paths::config_path);
        let database_path = cli.database.clone().unwrap_or_else(paths::database_path);
        let overrides = cli.overrides();

        let config = match JumpConfig::load(&config_path, Some(&overrides)) {
            Ok(config) => config,
            Err(e @ ConfigError::ValidationFailed { .. }) => return Err(e.into()),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring config file");
                JumpConfig::from_layers(JumpConfig::default(), Some(&overrides))?
            }
        };

        let options = Options {
            debug: cli.debug,
            time_matching: config.search.effective_time_matching(),
        };
        Ok(Self::new(config, config_path, database_path, options))
    }

    pub fn new(
        config: JumpConfig,
        config_path: PathBuf,
        database_path: PathBuf,
        options: Options,
    ) -> Self {
        let store = WeightStore::open(&database_path, options);
        Self {
            config,
            config_path,
            database_path,
            store,
        }
    }

    pub fn config(&self) -> &JumpConfig {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    pub fn store(&self) -> &WeightStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut WeightStore {
        &mut self.store
    }

    /// Dispatch one subcommand, writing its output to `out`.
    pub fn execute<W: Write>(&mut self, command: &Command, out: &mut W) -> Result<(), JumpError> {
        match command {
            Command::Update { dirs, .. } => {
                commands::update::run(
                    &mut self.store,
                    dirs,
                    self.config.update.effective_weight(),
                    &self.config.exclude_patterns,
                    fs::is_directory,
                )?;
            }
            Command::Search {
                fragments, verbose, ..
            } => {
                commands::search::run(
                    &mut self.store,
                    fragments,
                    self.config.search.effective_count(),
                    *verbose,
                    out,
                )?;
            }
            Command::Prune { .. } => {
                commands::prune::run(
                    &mut self.store,
                    self.config.prune.effective_max_entries(),
                    &self.config.exclude_patterns,
                );
            }
            Command::Dump { short_paths, table } => {
                commands::dump::run(&self.store, *short_paths, *table, out)?;
            }
            Command::Import { path } => {
                let path = path.clone().unwrap_or_else(paths::autojump_database_path);
                commands::import::run(&mut self.store, &path)?;
            }
            Command::Vars => {
                commands::vars::run(self, out)?;
            }
        }
        Ok(())
    }

    /// Save the store if anything changed.
    pub fn finish(mut self) -> anyhow::Result<()> {
        self.store
            .save()
            .with_context(|| format!("failed to save database {}", self.database_path.display()))
    }
}
