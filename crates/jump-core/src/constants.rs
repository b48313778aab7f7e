//! Shared constants for the jump directory index.

/// jump version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name used for the XDG config and cache subdirectories.
pub const APP_NAME: &str = "jump";

/// File name of the weight snapshot inside the cache directory.
pub const DATABASE_FILE: &str = "db.json";

/// File name of the user config inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Default weight deposited by `update`.
pub const DEFAULT_UPDATE_WEIGHT: f64 = 15.0;

/// Default number of entries kept by `prune`.
pub const DEFAULT_MAX_ENTRIES: usize = 1000;

/// Default number of results returned by `search`.
pub const DEFAULT_SEARCH_COUNT: usize = 1;

/// Recency decay is enabled unless configured otherwise.
pub const DEFAULT_TIME_MATCHING: bool = true;

/// Legacy autojump cache subdirectory and file name.
pub const AUTOJUMP_VENDOR: &str = "autojump";
pub const AUTOJUMP_DB_FILE: &str = "autojump.txt";

/// Directory used when neither XDG variables nor `HOME` are available.
pub const FALLBACK_DIR: &str = "/tmp";
