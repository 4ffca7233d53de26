//! Cronbook CLI - titled jobs inside a single crontab
//!
//! Usage: cronbook [OPTIONS] <COMMAND>
//!
//! Commands:
//!   add     Add the jobs of a crontab fragment file
//!   enter   Enter a single-line job directly
//!   remove  Remove jobs by title
//!   clear   Remove everything from the crontab
//!   save    Save the crontab to a file
//!   view    Show one job
//!   list    Show all jobs
//!   jobs    List job titles

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cronbook::application::{AddOptions, EnterOptions, RemoveOptions};

use crate::cli::{Cli, Commands};
use crate::commands::Session;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        ui::error::print_error(&err, cli.json, cli.color);
        std::process::exit(ui::error::exit_code(&err));
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn run(cli: &Cli) -> Result<()> {
    let session = Session::new(cli)?;

    match &cli.command {
        Commands::Add {
            fragment,
            title,
            only,
            overwrite,
            dry_run,
        } => {
            let options = AddOptions::new()
                .with_title(title.clone())
                .with_only(only.clone())
                .with_overwrite(*overwrite)
                .with_dry_run(dry_run.dry_run);
            commands::cmd_add(&session, fragment, &options)
        }
        Commands::Enter {
            title,
            schedule,
            mailto,
            mailfrom,
            path,
            shell,
            cron_tz,
            env,
            overwrite,
            dry_run,
        } => {
            let options = EnterOptions {
                mailto: mailto.clone(),
                mailfrom: mailfrom.clone(),
                path: path.clone(),
                shell: shell.clone(),
                cron_tz: cron_tz.clone(),
                env: env.clone(),
                overwrite: *overwrite,
                dry_run: dry_run.dry_run,
            };
            commands::cmd_enter(&session, title, schedule, &options)
        }
        Commands::Remove {
            titles,
            ignore_missing,
            dry_run,
        } => {
            let options = RemoveOptions::new()
                .with_ignore_missing(*ignore_missing)
                .with_dry_run(dry_run.dry_run);
            commands::cmd_remove(&session, titles, &options)
        }
        Commands::Clear { dry_run } => commands::cmd_clear(&session, dry_run.dry_run),
        Commands::Save { path } => commands::cmd_save(&session, path),
        Commands::View { title, full } => commands::cmd_view(&session, title, *full),
        Commands::List { full } => commands::cmd_list(&session, *full),
        Commands::Jobs => commands::cmd_jobs(&session),
    }
}
