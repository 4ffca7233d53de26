//! Crontab Sync Use Case
//!
//! Every mutating operation is one transaction against a `CrontabStore`:
//! read the current text, parse it, apply exactly one mutation, serialize,
//! and write the full replacement back. Nothing is written unless every
//! step succeeded.

mod options;
mod report;
mod use_case;

pub use options::{parse_env_pair, AddOptions, EnterOptions, RemoveOptions};
pub use report::{Change, SaveReport, SyncReport};
pub use use_case::CrontabSync;
