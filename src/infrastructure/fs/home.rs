//! Home and config directory resolution with test isolation support.
//!
//! On Windows, `dirs::home_dir()` uses the system API rather than
//! environment variables, so setting `HOME` in tests has no effect there.
//! `CRONBOOK_TEST_HOME` overrides the home directory for every
//! Cronbook-internal path.

use std::path::PathBuf;

/// Environment variable for test isolation of the home directory.
pub const CRONBOOK_TEST_HOME_VAR: &str = "CRONBOOK_TEST_HOME";

/// Home directory for Cronbook-internal paths (`~` expansion, config).
pub fn cronbook_home_dir() -> Option<PathBuf> {
    std::env::var(CRONBOOK_TEST_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// Base directory for `cronbook/config.toml`.
///
/// `XDG_CONFIG_HOME` wins, then `<home>/.config`.
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with(|key| std::env::var(key).ok(), cronbook_home_dir())
}

fn config_dir_with(
    get_env: impl Fn(&str) -> Option<String>,
    home: Option<PathBuf>,
) -> Option<PathBuf> {
    get_env("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| home.map(|h| h.join(".config")))
}
