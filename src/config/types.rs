//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CronbookResult;
use crate::infrastructure::crontab::DEFAULT_CRONTAB_COMMAND;

use super::loader::{self, ConfigWarning};

/// Which crontab to manage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrontabConfig {
    /// Binary used to reach the system crontab, optionally with arguments
    #[serde(default = "default_command")]
    pub command: String,

    /// Manage this user's crontab (`crontab -u <user>`)
    #[serde(default)]
    pub user: Option<String>,

    /// Manage a plain file instead of the system crontab
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for CrontabConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            user: None,
            file: None,
        }
    }
}

fn default_command() -> String {
    DEFAULT_CRONTAB_COMMAND.to_string()
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!(
                "unknown color mode '{}' (expected auto, always or never)",
                other
            )),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub crontab: CrontabConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CronbookResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CronbookResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the user config (if any) and apply environment overrides.
    pub fn load_or_default() -> CronbookResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default()
    }

    /// Apply environment variable overrides (CRONBOOK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
