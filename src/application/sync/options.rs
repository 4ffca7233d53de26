//! Sync options

use crate::domain::entities::{EnvVar, Environment, CRON_TZ, MAILFROM, MAILTO, PATH, SHELL};
use crate::error::{CronbookError, CronbookResult};

/// Options for merging a fragment into the crontab
#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    /// Rename the (single) job taken from the fragment
    pub title: Option<String>,
    /// Only take these jobs from the fragment (empty = all)
    pub only: Vec<String>,
    /// Replace jobs whose title already exists
    pub overwrite: bool,
    /// Compute the new crontab without writing it
    pub dry_run: bool,
}

impl AddOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn with_only(mut self, only: Vec<String>) -> Self {
        self.only = only;
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Options for entering a single-line job
#[derive(Debug, Clone, Default)]
pub struct EnterOptions {
    pub mailto: Option<String>,
    pub mailfrom: Option<String>,
    pub path: Option<String>,
    pub shell: Option<String>,
    pub cron_tz: Option<String>,
    /// Additional `NAME=VALUE` assignments, written after the well-known ones
    pub env: Vec<(String, String)>,
    pub overwrite: bool,
    pub dry_run: bool,
}

impl EnterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((name.into(), value.into()));
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Build the job environment.
    ///
    /// Order is MAILTO, MAILFROM, PATH, SHELL, CRON_TZ, then `env` as given.
    /// Values are quoted when cron would otherwise mangle them.
    pub fn environment(&self) -> CronbookResult<Environment> {
        let well_known: [(&str, &Option<String>); 5] = [
            (MAILTO, &self.mailto),
            (MAILFROM, &self.mailfrom),
            (PATH, &self.path),
            (SHELL, &self.shell),
            (CRON_TZ, &self.cron_tz),
        ];
        let mut environment = Environment::new();
        let assignments = well_known
            .into_iter()
            .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
            .chain(self.env.iter().map(|(n, v)| (n.as_str(), v.as_str())));
        for (name, value) in assignments {
            let var = EnvVar::quoted(name, value).map_err(CronbookError::InvalidRequest)?;
            environment.push(var).map_err(CronbookError::InvalidRequest)?;
        }
        Ok(environment)
    }
}

/// Options for removing jobs
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveOptions {
    /// Skip titles that are not in the crontab instead of failing
    pub ignore_missing: bool,
    pub dry_run: bool,
}

impl RemoveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ignore_missing(mut self, ignore_missing: bool) -> Self {
        self.ignore_missing = ignore_missing;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Parse a `NAME=VALUE` command-line argument.
pub fn parse_env_pair(arg: &str) -> Result<(String, String), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", arg))?;
    if name.is_empty() {
        return Err(format!("missing variable name in '{}'", arg));
    }
    Ok((name.to_string(), value.to_string()))
}
