//! Command handlers
//!
//! Each handler builds a `Session` (config, crontab store, UI context), runs
//! one use case and renders its result.

mod add;
mod clear;
mod enter;
mod remove;
mod save;
mod show;

pub use add::cmd_add;
pub use clear::cmd_clear;
pub use enter::cmd_enter;
pub use remove::cmd_remove;
pub use save::cmd_save;
pub use show::{cmd_jobs, cmd_list, cmd_view};

use anyhow::Result;
use tracing::debug;

use cronbook::config::ConfigWarning;
use cronbook::infrastructure::fs::expand_home;
use cronbook::{Config, CronbookError, CrontabStore, CrontabSync, FileCrontab, SystemCrontab};

use crate::cli::Cli;
use crate::ui::context::UiContext;
use crate::ui::error::with_parse_source;
use crate::ui::text::{ColoredText, Icon};

/// Everything a command needs to talk to the crontab and the user
pub struct Session {
    pub ui: UiContext,
    pub sync: CrontabSync<Box<dyn CrontabStore>>,
}

impl Session {
    pub fn new(cli: &Cli) -> Result<Self> {
        let (config, warnings) = Config::load_or_default()?;
        let ui = UiContext::new(cli.json, cli.color, &config);
        print_config_warnings(&warnings, &ui);

        let store = build_store(cli, &config);
        debug!(target = %store.describe(), "using crontab");
        Ok(Self {
            ui,
            sync: CrontabSync::new(store),
        })
    }

    /// Turn a library error into one that carries the crontab text when it
    /// is a parse error.
    pub fn crontab_error(&self, err: CronbookError) -> anyhow::Error {
        let store = self.sync.store();
        with_parse_source(err, store.describe(), || store.read().ok())
    }
}

/// CLI flags beat the config file: `--file`, then `--user`, then
/// `crontab.file`, then the system crontab of `crontab.user`.
fn build_store(cli: &Cli, config: &Config) -> Box<dyn CrontabStore> {
    if let Some(file) = &cli.file {
        return Box::new(FileCrontab::new(expand_home(file)));
    }
    if cli.user.is_none() {
        if let Some(file) = &config.crontab.file {
            return Box::new(FileCrontab::new(expand_home(file)));
        }
    }
    let store = SystemCrontab::new(&config.crontab.command);
    match cli.user.as_ref().or(config.crontab.user.as_ref()) {
        Some(user) => Box::new(store.with_user(user.as_str())),
        None => Box::new(store),
    }
}

fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for warning in warnings {
        if ui.json {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "warning",
                "message": warning.to_string(),
            }));
        } else {
            eprintln!(
                "{} {}",
                Icon::Warning.colored(ui.color, ui.unicode),
                ColoredText::warning(warning.to_string()).render(ui.color)
            );
        }
    }
}
