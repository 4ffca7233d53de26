//! Configuration module for Cronbook
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CRONBOOK_*)
//! 3. User config (`$CRONBOOK_CONFIG`, else `~/.config/cronbook/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{config_path, ConfigWarning, CONFIG_ENV_VAR};
pub use types::{ColorMode, Config, CrontabConfig, OutputConfig};
