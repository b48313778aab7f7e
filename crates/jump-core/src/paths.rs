//! XDG-style locations for the snapshot, config, and legacy database.

use std::path::{Path, PathBuf};

use crate::constants::{
    APP_NAME, AUTOJUMP_DB_FILE, AUTOJUMP_VENDOR, CONFIG_FILE, DATABASE_FILE, FALLBACK_DIR,
};

/// Default snapshot location: `$XDG_CACHE_HOME/jump/db.json`.
pub fn database_path() -> PathBuf {
    cache_dir().join(APP_NAME).join(DATABASE_FILE)
}

/// Default config location: `$XDG_CONFIG_HOME/jump/config.toml`.
pub fn config_path() -> PathBuf {
    config_dir().join(APP_NAME).join(CONFIG_FILE)
}

/// Default legacy database location: `$XDG_CACHE_HOME/autojump/autojump.txt`.
pub fn autojump_database_path() -> PathBuf {
    cache_dir().join(AUTOJUMP_VENDOR).join(AUTOJUMP_DB_FILE)
}

/// `$XDG_CACHE_HOME`, else `~/.cache`, else `/tmp`.
pub fn cache_dir() -> PathBuf {
    xdg_dir("XDG_CACHE_HOME", ".cache")
}

/// `$XDG_CONFIG_HOME`, else `~/.config`, else `/tmp`.
pub fn config_dir() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", ".config")
}

fn xdg_dir(var: &str, home_relative: &str) -> PathBuf {
    std::env::var_os(var)
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .or_else(|| home_dir().map(|h| h.join(home_relative)))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DIR))
}

/// Cross-platform home directory resolution.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

/// Abbreviate a leading `home` prefix as `~`.
///
/// Only whole components match, so `/home/bob` never shortens `/home/bobby`.
pub fn shorten_path(home: &Path, path: &str) -> String {
    match Path::new(path).strip_prefix(home) {
        Ok(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Ok(rest) => format!("~/{}", rest.display()),
        Err(_) => path.to_string(),
    }
}
