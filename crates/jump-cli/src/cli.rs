//! Command-line definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use jump_core::config::CliOverrides;

#[derive(Debug, Parser)]
#[command(name = "jump")]
#[command(about = "Jump is a shell autojumper", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Database file
    #[arg(short = 'D', long, global = true)]
    pub database: Option<PathBuf>,

    /// Enable debug mode (debug logging and per-candidate scores)
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Enable recency decay in searches
    #[arg(long, global = true, overrides_with = "no_time_matching")]
    pub time_matching: bool,

    /// Disable recency decay in searches
    #[arg(long, global = true, overrides_with = "time_matching")]
    pub no_time_matching: bool,

    /// The log level
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Update database weights
    Update {
        /// Directories to update (default: current directory)
        dirs: Vec<String>,

        /// Weight to adjust by (may be negative)
        #[arg(short, long, allow_negative_numbers = true)]
        weight: Option<f64>,
    },

    /// Search the database for matches
    Search {
        /// Query fragments, joined as path segments
        fragments: Vec<String>,

        /// Number of results
        #[arg(short = 'n', long = "num-results")]
        count: Option<usize>,

        /// Show scores alongside paths
        #[arg(short, long)]
        verbose: bool,
    },

    /// Prune invalid entries from the database
    Prune {
        /// Number of database entries to keep (0 keeps all valid entries)
        #[arg(short = 'n', long = "num-database-entries")]
        max_entries: Option<usize>,
    },

    /// Dump database contents
    Dump {
        /// Abbreviate the home directory as ~
        #[arg(long)]
        short_paths: bool,

        /// Print an aligned table instead of JSON
        #[arg(long)]
        table: bool,
    },

    /// Import an autojump database
    Import {
        /// Legacy database file (default: the autojump cache location)
        path: Option<PathBuf>,
    },

    /// Print paths and config variables
    Vars,
}

impl Cli {
    /// `--debug` forces debug logging regardless of `--log-level`.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.log_level
        }
    }

    /// `Some` only when one of the time-matching switches was given; the
    /// last one wins.
    pub fn time_matching(&self) -> Option<bool> {
        if self.time_matching {
            Some(true)
        } else if self.no_time_matching {
            Some(false)
        } else {
            None
        }
    }

    /// Config layer built from flags.
    pub fn overrides(&self) -> CliOverrides {
        let mut overrides = CliOverrides {
            time_matching: self.time_matching(),
            ..Default::default()
        };
        match &self.command {
            Command::Update { weight, .. } => overrides.update_weight = *weight,
            Command::Search { count, .. } => overrides.search_count = *count,
            Command::Prune { max_entries } => overrides.max_entries = *max_entries,
            _ => {}
        }
        overrides
    }
}
