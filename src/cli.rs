use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Cronbook - manage titled jobs inside a single crontab
#[derive(Parser, Debug)]
#[command(name = "cronbook")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Jobs are stored in the crontab as blocks that start with a '# [title]' header."
)]
pub struct Cli {
    /// Manage this file instead of the system crontab
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Manage another user's crontab (crontab -u USER)
    #[arg(short, long, global = true, value_name = "USER", conflicts_with = "file")]
    pub user: Option<String>,

    /// Output format for scripts (one JSON object per line)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct DryRunArg {
    /// Show the resulting change as a diff without writing the crontab
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add the jobs of a crontab fragment file
    Add {
        /// Fragment file with one or more '# [title]' blocks
        fragment: PathBuf,

        /// Store the job under this title (single-job fragments only)
        #[arg(short, long)]
        title: Option<String>,

        /// Only add the job with this title (can be given multiple times)
        #[arg(long = "only", value_name = "TITLE")]
        only: Vec<String>,

        /// Replace jobs that already exist
        #[arg(short, long)]
        overwrite: bool,

        #[command(flatten)]
        dry_run: DryRunArg,
    },

    /// Enter a single-line job directly
    Enter {
        /// Job title
        title: String,

        /// Cron line: five schedule fields (or an @keyword) and the command
        schedule: String,

        /// Where cron mails the job output (empty string disables mail)
        #[arg(long)]
        mailto: Option<String>,

        /// Sender address of cron mails
        #[arg(long)]
        mailfrom: Option<String>,

        /// PATH for the job
        #[arg(long)]
        path: Option<String>,

        /// Shell used to run the job
        #[arg(long)]
        shell: Option<String>,

        /// Time zone the schedule is evaluated in
        #[arg(long = "cron-tz", value_name = "TZ")]
        cron_tz: Option<String>,

        /// Extra environment assignment (can be given multiple times)
        #[arg(
            short,
            long = "env",
            value_name = "NAME=VALUE",
            value_parser = cronbook::application::parse_env_pair
        )]
        env: Vec<(String, String)>,

        /// Replace the job if it already exists
        #[arg(short, long)]
        overwrite: bool,

        #[command(flatten)]
        dry_run: DryRunArg,
    },

    /// Remove jobs by title
    #[command(alias = "rm")]
    Remove {
        /// Titles of the jobs to remove
        #[arg(required = true)]
        titles: Vec<String>,

        /// Do not fail on titles that are not in the crontab
        #[arg(short, long)]
        ignore_missing: bool,

        #[command(flatten)]
        dry_run: DryRunArg,
    },

    /// Remove everything from the crontab
    Clear {
        #[command(flatten)]
        dry_run: DryRunArg,
    },

    /// Save the crontab to a file
    Save {
        /// Destination file
        path: PathBuf,
    },

    /// Show one job
    View {
        /// Job title
        title: String,

        /// Show the whole block (header and environment)
        #[arg(long)]
        full: bool,
    },

    /// Show all jobs
    List {
        /// Show whole blocks (including environment)
        #[arg(long)]
        full: bool,
    },

    /// List job titles
    Jobs,
}
