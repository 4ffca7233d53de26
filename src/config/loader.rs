//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{CronbookError, CronbookResult};
use crate::infrastructure::fs::config_dir;

use super::types::{ColorMode, Config};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "CRONBOOK_CONFIG";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CronbookResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> CronbookResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CronbookError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Where the user config lives.
///
/// `$CRONBOOK_CONFIG` wins, then `<config dir>/cronbook/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_path_with(|key| std::env::var(key).ok(), config_dir())
}

fn config_path_with(
    get_env: impl Fn(&str) -> Option<String>,
    config_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    get_env(CONFIG_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| config_dir.map(|d| d.join("cronbook").join("config.toml")))
}

/// Load the user config, or defaults when there is none, then apply
/// environment overrides.
///
/// A file named by `$CRONBOOK_CONFIG` must exist; the default location may
/// be absent.
pub fn load_or_default() -> CronbookResult<(Config, Vec<ConfigWarning>)> {
    let explicit = std::env::var(CONFIG_ENV_VAR).is_ok_and(|v| !v.is_empty());
    let (config, warnings) = match config_path() {
        Some(path) if path.exists() => {
            debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        Some(path) if explicit => {
            return Err(CronbookError::Config {
                file: path,
                message: format!("file named by {} does not exist", CONFIG_ENV_VAR),
            });
        }
        _ => (Config::default(), Vec::new()),
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (CRONBOOK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // CRONBOOK_CRONTAB_COMMAND
    if let Some(command) = get_env("CRONBOOK_CRONTAB_COMMAND").filter(|v| !v.trim().is_empty()) {
        config.crontab.command = command;
    }

    // CRONBOOK_CRONTAB_USER
    if let Some(user) = get_env("CRONBOOK_CRONTAB_USER").filter(|v| !v.is_empty()) {
        config.crontab.user = Some(user);
    }

    // CRONBOOK_FILE
    if let Some(file) = get_env("CRONBOOK_FILE").filter(|v| !v.is_empty()) {
        config.crontab.file = Some(PathBuf::from(file));
    }

    // CRONBOOK_COLOR
    if let Some(color) = get_env("CRONBOOK_COLOR") {
        match color.parse::<ColorMode>() {
            Ok(mode) => config.output.color = mode,
            Err(message) => warn!("ignoring CRONBOOK_COLOR: {}", message),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["crontab", "command", "user", "file", "output", "color"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
