//! Domain Entities
//!
//! - `Document` - A whole titled crontab, jobs and verbatim lines in order
//! - `Job` - A titled block with environment and schedule entries
//! - `ScheduleEntry` - One cron line
//! - `Environment` - Ordered `NAME=VALUE` assignments of a job

mod document;
mod environment;
mod job;
mod schedule;

pub use document::{build_entered_job, AddOutcome, Document, Entry};
pub use environment::{EnvVar, Environment, CRON_TZ, MAILFROM, MAILTO, PATH, SHELL};
pub use job::{validate_title, Job};
pub use schedule::{ScheduleEntry, Timing, FIELD_COUNT, FIELD_NAMES};
